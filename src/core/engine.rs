use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::definitions::GameStatus;
use crate::core::utils::{
    between, compact_pos, delta, is_in_diagonal_line, is_in_straight_line, is_valid_coord, Square,
};

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /** Rank step of this side's pawns. */
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /** Rank index pawns start on; double steps are only allowed from here. */
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /** How many of this type each side starts with. */
    pub fn initial_count(self) -> u8 {
        match self {
            PieceType::Pawn => 8,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook => 2,
            PieceType::Queen | PieceType::King => 1,
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Piece {
        Piece { color, kind }
    }

    /// Geometric legality of moving this piece from `from` to `to`.
    ///
    /// Sliding pieces need every square strictly between the two to be empty.
    /// Whose turn it is and who stands on `to` are left to the caller, except
    /// for pawns, whose move shape depends on the destination being occupied.
    pub fn can_move(&self, from: Square, to: Square, board: &Board) -> bool {
        match self.kind {
            PieceType::Pawn => self.pawn_can_move(from, to, board),
            PieceType::Knight => matches!(delta(from, to), (1, 2) | (2, 1)),
            PieceType::Bishop => is_in_diagonal_line(from, to) && board.is_path_clear(from, to),
            PieceType::Rook => is_in_straight_line(from, to) && board.is_path_clear(from, to),
            PieceType::Queen => {
                (is_in_straight_line(from, to) || is_in_diagonal_line(from, to))
                    && board.is_path_clear(from, to)
            }
            PieceType::King => matches!(delta(from, to), (0, 1) | (1, 0) | (1, 1)),
        }
    }

    fn pawn_can_move(&self, from: Square, to: Square, board: &Board) -> bool {
        let advance = (to.rank() as i8 - from.rank() as i8) * self.color.forward();
        match (from.file().abs_diff(to.file()), advance) {
            (0, 1) => board.get(to).is_none(),
            (0, 2) => {
                from.rank() == self.color.pawn_rank()
                    && board.is_path_clear(from, to)
                    && board.get(to).is_none()
            }
            (1, 1) => board.get(to).is_some_and(|target| target.color != self.color),
            _ => false,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/** Variation of 0x88 board, cells outside the 8x8 area stay empty. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    arr: [Option<Piece>; 128],
}

impl Board {
    pub fn empty() -> Board {
        Board { arr: [None; 128] }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.arr[square.index()]
    }

    /** Puts `piece` on `square`, returning whatever stood there. */
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.arr[square.index()].replace(piece)
    }

    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.arr[square.index()].take()
    }

    /// Moves the piece on `from` to `to` and returns the previous occupant of
    /// `to`. Legality must have been checked already.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.clear(from);
        assert!(piece.is_some(), "That's a bug! Moving from empty {from}");
        let target = self.arr[to.index()];
        self.arr[to.index()] = piece;
        target
    }

    /** True when no square strictly between two aligned squares is occupied. */
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        between(from, to).is_some_and(|mut cells| cells.all(|cell| self.get(cell).is_none()))
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn count(&self, color: Color, kind: PieceType) -> usize {
        self.iter_pieces()
            .filter(|(_, piece)| piece.color == color && piece.kind == kind)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                let back = compact_pos(color.back_rank(), file);
                let pawns = compact_pos(color.pawn_rank(), file);
                debug_assert!(is_valid_coord(back) && is_valid_coord(pawns));
                board.arr[back as usize] = Some(Piece::new(kind, color));
                board.arr[pawns as usize] = Some(Piece::new(PieceType::Pawn, color));
            }
        }
        board
    }
}

/// Pieces of each type a side still has on the board. Entries only go down,
/// one capture at a time. A type only decides the game if the side started
/// with at least one of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    white: [u8; 6],
    black: [u8; 6],
    started: [[u8; 6]; 2],
}

impl Tallies {
    /** Counts taken from whatever stands on `board`. */
    pub fn from_board(board: &Board) -> Tallies {
        let counts = |color| PieceType::ALL.map(|kind| board.count(color, kind) as u8);
        let (white, black) = (counts(Color::White), counts(Color::Black));
        Tallies {
            white,
            black,
            started: [white, black],
        }
    }

    pub fn remaining(&self, color: Color, kind: PieceType) -> u8 {
        self.counts(color)[kind.index()]
    }

    fn counts(&self, color: Color) -> &[u8; 6] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn counts_mut(&mut self, color: Color) -> &mut [u8; 6] {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn record_capture(&mut self, piece: Piece) {
        let count = &mut self.counts_mut(piece.color)[piece.kind.index()];
        assert!(*count > 0, "That's a bug! Captured a {piece} with none left");
        *count -= 1;
    }

    /** First piece type `color` has lost entirely, if any. */
    pub fn exhausted(&self, color: Color) -> Option<PieceType> {
        let started = &self.started[color as usize];
        PieceType::ALL
            .into_iter()
            .find(|kind| started[kind.index()] > 0 && self.remaining(color, *kind) == 0)
    }

    /// White's counts are scanned first and Black's second, so if both sides
    /// somehow ran out of a type at once the result is `WhiteWon`.
    pub fn evaluate(&self) -> GameStatus {
        let mut status = GameStatus::InProgress;
        if self.exhausted(Color::White).is_some() {
            status = GameStatus::BlackWon;
        }
        if self.exhausted(Color::Black).is_some() {
            status = GameStatus::WhiteWon;
        }
        status
    }
}

impl Default for Tallies {
    fn default() -> Self {
        let counts = PieceType::ALL.map(PieceType::initial_count);
        Tallies {
            white: counts,
            black: counts,
            started: [counts, counts],
        }
    }
}
