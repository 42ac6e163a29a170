use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::engine::{Color, Piece};
use crate::core::utils::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            GameStatus::InProgress => "UNFINISHED",
            GameStatus::WhiteWon => "WHITE_WON",
            GameStatus::BlackWon => "BLACK_WON",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a square identifier")]
pub struct SquareParseError(pub String);

/** Why a move request was turned down. None of these mutate the game. */
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    #[error("game is over ({0})")]
    GameOver(GameStatus),
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("{piece} on {square} can't move, it is {turn}'s turn")]
    NotYourTurn {
        piece: Piece,
        square: Square,
        turn: Color,
    },
    #[error("{0} is both start and destination")]
    NullMove(Square),
    #[error("{own} already stands on {square}")]
    OwnPieceAtDestination { own: Piece, square: Square },
    #[error("{piece} can't go from {from} to {to}")]
    IllegalMove { piece: Piece, from: Square, to: Square },
}

/** Accepted move, as kept in the game history. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.captured {
            Some(target) => write!(f, "{} {}x{} ({target})", self.piece, self.from, self.to),
            None => write!(f, "{} {}-{}", self.piece, self.from, self.to),
        }
    }
}
