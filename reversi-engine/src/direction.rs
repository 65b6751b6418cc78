//! The eight scan directions used when checking and applying moves.

use crate::position::Position;
use crate::EDGE_LENGTH;
use std::fmt;

/// A compass direction on the board. North is towards row 1, east towards
/// column H.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(row, col)` scan vector.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The neighbouring position one step away, or `None` past the edge.
    #[inline]
    pub fn step(self, from: Position) -> Option<Position> {
        let (d_row, d_col) = self.delta();
        let row = from.row() as isize + d_row as isize;
        let col = from.col() as isize + d_col as isize;
        let edge = EDGE_LENGTH as isize;

        if row < 0 || row >= edge || col < 0 || col >= edge {
            return None;
        }
        Position::from_coords(row as usize, col as usize).ok()
    }

    /// Walk outward from `from`, excluding `from` itself, until the edge.
    pub fn ray(self, from: Position) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(from), move |&pos| self.step(pos))
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Gets the opposite direction.
    fn neg(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        })
    }
}
