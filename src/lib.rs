pub mod core;

// module re-exports
pub use self::core::definitions::{GameStatus, MoveError, MoveRecord, SquareParseError};
pub use self::core::engine::{Board, Color, Piece, PieceType, Tallies};
pub use self::core::game::Game;
pub use self::core::utils::Square;
