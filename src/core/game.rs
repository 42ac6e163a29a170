use log::{debug, info, trace};

use crate::core::definitions::{GameStatus, MoveError, MoveRecord};
use crate::core::engine::{Board, Color, Piece, Tallies};
use crate::core::utils::Square;

/// A single match. Board, tallies, turn and status change only through
/// [`Game::try_move`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    tallies: Tallies,
    current_player: Color,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Game {
        Game::with_position(Board::default(), Color::White)
    }

    /// Starts from an arbitrary position. Tallies are counted from the board,
    /// so only piece types present at the start can decide the game.
    pub fn with_position(board: Board, player: Color) -> Game {
        let tallies = Tallies::from_board(&board);
        let status = tallies.evaluate();
        Game {
            board,
            tallies,
            current_player: player,
            status,
            history: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tallies(&self) -> &Tallies {
        &self.tallies
    }

    pub fn piece_at(&self, square: &str) -> Option<Piece> {
        Square::resolve(square).and_then(|square| self.board.get(square))
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /** Boolean form of [`Game::try_move`]. */
    pub fn make_move(&mut self, start: &str, end: &str) -> bool {
        match self.try_move(start, end) {
            Ok(_) => true,
            Err(err) => {
                trace!("Rejected {start} -> {end}: {err}");
                false
            }
        }
    }

    /// Validates and plays a move. A rejected move leaves the game untouched.
    pub fn try_move(&mut self, start: &str, end: &str) -> Result<MoveRecord, MoveError> {
        let from: Square = start.parse()?;
        let to: Square = end.parse()?;
        let piece = self.validate(from, to)?;
        Ok(self.execute(piece, from, to))
    }

    fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver(self.status));
        }
        let piece = self.board.get(from).ok_or(MoveError::EmptySource(from))?;
        if piece.color != self.current_player {
            return Err(MoveError::NotYourTurn {
                piece,
                square: from,
                turn: self.current_player,
            });
        }
        if from == to {
            return Err(MoveError::NullMove(from));
        }
        if let Some(own) = self.board.get(to).filter(|target| target.color == piece.color) {
            return Err(MoveError::OwnPieceAtDestination { own, square: to });
        }
        if !piece.can_move(from, to, &self.board) {
            return Err(MoveError::IllegalMove { piece, from, to });
        }
        Ok(piece)
    }

    fn execute(&mut self, piece: Piece, from: Square, to: Square) -> MoveRecord {
        let captured = self.board.get(to);
        if let Some(target) = captured {
            self.tallies.record_capture(target);
            debug!(
                "{piece} takes {target} on {to}, {} left",
                self.tallies.remaining(target.color, target.kind)
            );
        }
        self.board.relocate(from, to);

        self.status = self.tallies.evaluate();
        if let Some(winner) = self.status.winner() {
            info!("{winner} wins after {} moves ({})", self.history.len() + 1, self.status);
        }
        self.current_player = self.current_player.opposite();

        let record = MoveRecord {
            piece,
            from,
            to,
            captured,
        };
        debug!("Played {record}");
        self.history.push(record);
        record
    }

    /** Move history in postcard encoding, for shipping to a remote peer. */
    pub fn encode_history(&self) -> postcard::Result<Vec<u8>> {
        postcard::to_allocvec(&self.history)
    }

    pub fn decode_history(bytes: &[u8]) -> postcard::Result<Vec<MoveRecord>> {
        postcard::from_bytes(bytes)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
