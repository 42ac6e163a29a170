use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::definitions::SquareParseError;

/** Board square in 0x88 encoding: high nibble is the rank, low nibble the file. */
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(compact_pos(rank, file)))
        } else {
            None
        }
    }

    /// Resolves an identifier such as `"e4"`; anything other than the 64
    /// lowercase file/rank pairs yields `None`.
    pub fn resolve(identifier: &str) -> Option<Square> {
        identifier.parse().ok()
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 & 0x0f
    }

    #[inline]
    pub fn rank(self) -> u8 {
        (self.0 & 0xf0) >> 4
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /** All 64 squares, a1 first, rank by rank. */
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square(compact_pos(rank, file))))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square(compact_pos(rank - b'1', file - b'a')))
            }
            _ => Err(SquareParseError(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if is_valid_coord(value) {
            Ok(Square(value))
        } else {
            Err(SquareParseError(format!("0x{value:02x}")))
        }
    }
}

impl From<Square> for u8 {
    fn from(value: Square) -> Self {
        value.0
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({self})")
    }
}

#[derive(Debug)]
pub struct BetweenIterator {
    current: u8,
    target: u8,
    step: u8,
}

impl Iterator for BetweenIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.wrapping_add(self.step);
        if self.current == self.target || !is_valid_coord(self.current) {
            None
        } else {
            Some(Square(self.current))
        }
    }
}

/// Unit step from `from` toward `to`, or `None` when the squares do not share
/// a file, rank or diagonal.
pub fn direction(from: Square, to: Square) -> Option<u8> {
    if !is_in_straight_line(from, to) && !is_in_diagonal_line(from, to) {
        return None;
    }
    let file_step = (to.file() as i8 - from.file() as i8).signum();
    let rank_step = (to.rank() as i8 - from.rank() as i8).signum();
    Some((rank_step * 0x10 + file_step) as u8)
}

/// Squares strictly between two aligned squares, walked from `from` toward `to`.
pub fn between(from: Square, to: Square) -> Option<BetweenIterator> {
    direction(from, to).map(|step| BetweenIterator {
        current: from.0,
        target: to.0,
        step,
    })
}

/** Absolute (file, rank) difference. */
#[inline]
pub fn delta(a: Square, b: Square) -> (u8, u8) {
    (a.file().abs_diff(b.file()), a.rank().abs_diff(b.rank()))
}

pub fn is_in_straight_line(a: Square, b: Square) -> bool {
    a != b && (a.file() == b.file() || a.rank() == b.rank())
}

pub fn is_in_diagonal_line(a: Square, b: Square) -> bool {
    let (file_diff, rank_diff) = delta(a, b);
    file_diff != 0 && file_diff == rank_diff
}

#[inline]
pub fn is_valid_coord(coord: u8) -> bool {
    coord & 0x88 == 0x00
}

#[inline]
pub fn compact_pos(rank: u8, file: u8) -> u8 {
    rank << 4 | file
}
