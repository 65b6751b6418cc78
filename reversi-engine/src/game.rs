//! Sides, cell contents and game results.

use crate::error::MoveError;
use std::convert::TryFrom;
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Green,
    Red,
}

impl Default for Side {
    /// Gets the starting side (green).
    fn default() -> Self {
        Self::Green
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Green => Side::Red,
            Side::Red => Side::Green,
        }
    }
}

impl Side {
    /// The letter used for this side's discs in the board grid.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Side::Green => 'G',
            Side::Red => 'R',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Green => "green",
            Side::Red => "red",
        })
    }
}

impl TryFrom<Cell> for Side {
    type Error = MoveError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.side().ok_or(MoveError::InvalidSide)
    }
}

/// Decode the numeric cell encoding: 1 is green, 2 is red. Anything else,
/// including 0 (empty), is not a side.
impl TryFrom<u8> for Side {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Side::try_from(Cell::try_from(value)?)
    }
}

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Green,
    Red,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// The side owning this cell, if any.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Green => Some(Side::Green),
            Cell::Red => Some(Side::Red),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character shown in the board grid.
    #[inline]
    pub fn marker(self) -> char {
        self.side().map_or(' ', Side::marker)
    }

    pub(crate) fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ' ' => Some(Cell::Empty),
            'G' => Some(Cell::Green),
            'R' => Some(Cell::Red),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Green => Cell::Green,
            Side::Red => Cell::Red,
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Green => 1,
            Cell::Red => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Green),
            2 => Ok(Cell::Red),
            _ => Err(MoveError::InvalidSide),
        }
    }
}

/// Disc counts for both sides.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Tally {
    pub green: u8,
    pub red: u8,
}

impl Tally {
    /// The count for one side.
    #[inline]
    pub fn of(self, side: Side) -> u8 {
        match side {
            Side::Green => self.green,
            Side::Red => self.red,
        }
    }

    /// The side with more discs, or `None` on equal counts.
    pub fn leader(self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.green.cmp(&self.red) {
            Ordering::Greater => Some(Side::Green),
            Ordering::Less => Some(Side::Red),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "green {}:{} red", self.green, self.red)
    }
}

/// How a finished game was decided.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verdict {
    Winner(Side),
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner(side) => write!(f, "{} wins", side),
            Verdict::Draw => f.write_str("draw"),
        }
    }
}

/// The state of a game, derived from the board on demand.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// At least one side still has a legal move.
    StillPlaying,
    /// Neither side can move.
    Finished { verdict: Verdict, tally: Tally },
}

impl Outcome {
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Outcome::Finished { .. })
    }

    /// The winning side of a finished game; `None` while playing or on a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Finished {
                verdict: Verdict::Winner(side),
                ..
            } => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::StillPlaying => f.write_str("still playing"),
            Outcome::Finished { verdict, tally } => write!(f, "{} ({})", verdict, tally),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_not() {
        assert_eq!(!Side::Green, Side::Red);
        assert_eq!(!Side::Red, Side::Green);
        assert_eq!(Side::default(), Side::Green);
    }

    #[test]
    fn side_from_cell() {
        assert_eq!(Side::try_from(Cell::Green), Ok(Side::Green));
        assert_eq!(Side::try_from(Cell::Red), Ok(Side::Red));
        assert_eq!(Side::try_from(Cell::Empty), Err(MoveError::InvalidSide));
    }

    #[test]
    fn side_from_u8() {
        assert_eq!(Side::try_from(1u8), Ok(Side::Green));
        assert_eq!(Side::try_from(2u8), Ok(Side::Red));
        assert_eq!(Side::try_from(0u8), Err(MoveError::InvalidSide));
        assert_eq!(Side::try_from(3u8), Err(MoveError::InvalidSide));
    }

    #[test]
    fn cell_markers() {
        assert_eq!(Cell::Empty.marker(), ' ');
        assert_eq!(Cell::Green.marker(), 'G');
        assert_eq!(Cell::from(Side::Red).marker(), 'R');
        assert_eq!(Cell::from_marker('G'), Some(Cell::Green));
        assert_eq!(Cell::from_marker('x'), None);
    }

    #[test]
    fn tally_leader() {
        assert_eq!(Tally { green: 40, red: 24 }.leader(), Some(Side::Green));
        assert_eq!(Tally { green: 1, red: 63 }.leader(), Some(Side::Red));
        assert_eq!(Tally { green: 32, red: 32 }.leader(), None);
    }

    #[test]
    fn outcome_display() {
        let outcome = Outcome::Finished {
            verdict: Verdict::Winner(Side::Red),
            tally: Tally { green: 20, red: 44 },
        };
        assert_eq!(outcome.to_string(), "red wins (green 20:44 red)");
        assert_eq!(outcome.winner(), Some(Side::Red));
        assert!(!Outcome::StillPlaying.is_finished());
    }
}
