//! Code for working with [`Position`]s on the Reversi board.

use crate::bitboard::Bitboard;
use crate::error::MoveError;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

const COLUMNS: &str = "ABCDEFGH";
const ROWS: &str = "12345678";

/// A cell on the board, stored as a row-major index: `row * 8 + col`.
/// "A1" is index 0, "H1" is 7 and "H8" is 63.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Position(u8);

/// A set of positions on the board, which can be iterated to retrieve them
/// in index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct PositionList(Bitboard);

impl Position {
    /// Convert from a row-major index, failing outside `0..64`.
    #[inline]
    pub fn from_index(index: u8) -> Result<Self, MoveError> {
        if (index as usize) < NUM_SPACES {
            Ok(Self(index))
        } else {
            Err(MoveError::InvalidPosition)
        }
    }

    /// Convert into a row-major index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Convert from zero-based row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(MoveError::InvalidPosition);
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// Get the zero-based `(row, col)` coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Iterate over all 64 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SPACES as u8).map(Position)
    }

    /// The one-hot [`Bitboard`] for this position.
    #[inline]
    pub(crate) fn to_bitboard(self) -> Bitboard {
        Bitboard::from(1u64 << self.0)
    }
}

/// Convert this [`Position`] into string notation ("E3").
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMNS.chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = ROWS.chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Position`] from two-character notation: a column letter
/// `A`..`H` followed by a row digit `1`..`8`.
impl std::str::FromStr for Position {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[col @ b'A'..=b'H', row @ b'1'..=b'8'] => {
                Self::from_coords((row - b'1') as usize, (col - b'A') as usize)
            }
            _ => Err(MoveError::InvalidPosition),
        }
    }
}

impl PositionList {
    /// Returns whether `pos` is in this list.
    pub fn contains(self, pos: Position) -> bool {
        !(pos.to_bitboard() & self.0).is_empty()
    }

    /// Returns whether the list holds no positions.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, pos: Position) {
        self.0 |= pos.to_bitboard();
    }
}

impl ExactSizeIterator for PositionList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for PositionList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let index = bitboard.trailing_zeros() as u8;
        self.0 ^= Bitboard::from(1u64 << index);

        Some(Position(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn position_from_index() {
        assert_eq!(Position::from_index(0), Ok(Position(0)));
        assert_eq!(Position::from_index(63), Ok(Position(63)));
        assert_eq!(Position::from_index(64), Err(MoveError::InvalidPosition));
        assert_eq!(Position::from_index(255), Err(MoveError::InvalidPosition));
    }

    #[test]
    fn position_from_coords() {
        assert_eq!(Position::from_coords(0, 0), Ok(Position(0)));
        assert_eq!(Position::from_coords(3, 4), Ok(Position(28)));
        assert_eq!(Position::from_coords(7, 7), Ok(Position(63)));
        assert_eq!(Position::from_coords(0, 8), Err(MoveError::InvalidPosition));
        assert_eq!(Position::from_coords(8, 0), Err(MoveError::InvalidPosition));
    }

    #[test]
    fn position_to_coords() {
        assert_eq!(Position(0).to_coords(), (0, 0));
        assert_eq!(Position(7).to_coords(), (0, 7));
        assert_eq!(Position(56).to_coords(), (7, 0));
        assert_eq!(Position(36).to_coords(), (4, 4));
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(Position(0)));
        assert_eq!(Position::from_str("H1"), Ok(Position(7)));
        assert_eq!(Position::from_str("E3"), Ok(Position(20)));
        assert_eq!(Position::from_str("H8"), Ok(Position(63)));
    }

    #[test]
    fn position_from_str_fail() {
        for bad in &["", "A", "A12", "AA", "A9", "A0", "I5", "e3", " E3", "3E", "É3"] {
            assert_eq!(
                Position::from_str(bad),
                Err(MoveError::InvalidPosition),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position(0).to_string(), "A1");
        assert_eq!(Position(63).to_string(), "H8");
        assert_eq!(Position::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn position_list_iterates_in_index_order() {
        let mut list = PositionList::default();
        list.insert(Position(44));
        list.insert(Position(19));
        list.insert(Position(26));

        assert_eq!(list.len(), 3);
        assert!(list.contains(Position(26)));
        assert!(!list.contains(Position(27)));
        assert_eq!(list.to_string(), "[D3, C4, E6]");
        assert_eq!(
            list.collect::<Vec<_>>(),
            vec![Position(19), Position(26), Position(44)]
        );
    }
}
