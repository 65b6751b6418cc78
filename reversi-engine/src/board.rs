//! The board state and the move rules that act on it.
//!
//! A [`Board`] is a plain value: every operation takes it explicitly and the
//! only mutator is [`Board::apply`], which either applies a move completely
//! or leaves the board untouched.

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::error::MoveError;
use crate::game::{Cell, Outcome, Side, Tally, Verdict};
use crate::position::{Position, PositionList};
use crate::utils::{self, GRID_HEADER};
use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt;

/// A fixed 8x8 grid of cells, indexed row-major from "A1".
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
}

/// A contiguous run of opponent discs bracketed by a move.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Run {
    pub direction: Direction,
    /// Number of opponent discs in the run; always at least 1.
    pub length: u8,
}

/// The capturing runs of a legal move, at most one per direction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Captures {
    runs: ArrayVec<[Run; 8]>,
}

impl Captures {
    /// Iterate over the capturing runs in clockwise order from north.
    pub fn runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.runs.iter()
    }

    /// Iterate over the capturing directions.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.runs.iter().map(|run| run.direction)
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.directions().any(|d| d == direction)
    }

    /// Total number of opponent discs that would be flipped.
    pub fn flipped(&self) -> u8 {
        self.runs.iter().map(|run| run.length).sum()
    }

    /// Number of cells the move changes: the placed disc plus all flips.
    pub fn changed(&self) -> u8 {
        1 + self.flipped()
    }
}

impl Default for Board {
    /// Gets the standard opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: green on D4 and E5, red on E4 and D5.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SPACES];
        cells[27] = Cell::Green;
        cells[28] = Cell::Red;
        cells[35] = Cell::Red;
        cells[36] = Cell::Green;
        Self { cells }
    }

    /// Build a board from arbitrary cell contents.
    pub fn from_cells(cells: [Cell; NUM_SPACES]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; NUM_SPACES] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index() as usize]
    }

    /// Get a mask of the positions holding `side`'s discs.
    pub fn mask(&self, side: Side) -> Bitboard {
        let own = Cell::from(side);
        let bits = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == own)
            .fold(0u64, |bits, (index, _)| bits | 1 << index);
        Bitboard::from(bits)
    }

    /// Get a mask of the empty positions.
    pub fn empty_mask(&self) -> Bitboard {
        !(self.mask(Side::Green) | self.mask(Side::Red))
    }

    #[inline]
    pub fn count(&self, side: Side) -> u8 {
        self.mask(side).count_occupied()
    }

    #[inline]
    pub fn count_empty(&self) -> u8 {
        self.empty_mask().count_occupied()
    }

    /// Count the discs of both sides.
    pub fn tally(&self) -> Tally {
        Tally {
            green: self.count(Side::Green),
            red: self.count(Side::Red),
        }
    }

    /// Length of the opponent run `side` would capture from `from` along
    /// `direction`, or 0 if the run is empty or is ended by the edge or an
    /// empty cell instead of one of `side`'s discs.
    fn capture_run(&self, side: Side, from: Position, direction: Direction) -> u8 {
        let own = Cell::from(side);
        let opponent = Cell::from(!side);
        let mut length = 0;

        for pos in direction.ray(from) {
            match self.cell(pos) {
                cell if cell == opponent => length += 1,
                cell if cell == own => return length,
                _ => return 0,
            }
        }
        0
    }

    /// Check whether `side` may play at `pos`, returning the runs it would
    /// capture. Does not modify the board.
    pub fn is_legal(&self, side: Side, pos: Position) -> Result<Captures, MoveError> {
        if !self.cell(pos).is_empty() {
            return Err(MoveError::CellOccupied);
        }

        let mut captures = Captures::default();
        for &direction in Direction::ALL.iter() {
            let length = self.capture_run(side, pos, direction);
            if length > 0 {
                captures.runs.push(Run { direction, length });
            }
        }

        if captures.runs.is_empty() {
            return Err(MoveError::NoCaptureAvailable);
        }
        Ok(captures)
    }

    /// Play `side` at `pos`, flipping every captured run. Returns the number
    /// of cells changed, counting the placed disc. On error the board is
    /// left unchanged.
    pub fn apply(&mut self, side: Side, pos: Position) -> Result<u8, MoveError> {
        let captures = self.is_legal(side, pos)?;
        let own = Cell::from(side);

        self.cells[pos.index() as usize] = own;
        for run in captures.runs() {
            for flipped in run.direction.ray(pos).take(run.length as usize) {
                self.cells[flipped.index() as usize] = own;
            }
        }

        Ok(captures.changed())
    }

    /// Play a move given as untrusted input: a cell value for the side and
    /// text notation for the position ("E3"). The side is checked first, then
    /// the position, then legality.
    pub fn step(&mut self, cell: Cell, position: &str) -> Result<u8, MoveError> {
        let side = Side::try_from(cell)?;
        let pos: Position = position.parse()?;
        self.apply(side, pos)
    }

    /// Returns whether `side` has any legal move.
    pub fn has_legal_move(&self, side: Side) -> bool {
        Position::all().any(|pos| self.is_legal(side, pos).is_ok())
    }

    /// Get the list of legal moves for `side`.
    pub fn legal_moves(&self, side: Side) -> PositionList {
        let mut moves = PositionList::default();
        for pos in Position::all().filter(|&pos| self.is_legal(side, pos).is_ok()) {
            moves.insert(pos);
        }
        moves
    }

    /// The game is over once neither side can move; the side with more discs
    /// wins.
    pub fn outcome(&self) -> Outcome {
        if self.has_legal_move(Side::Green) || self.has_legal_move(Side::Red) {
            return Outcome::StillPlaying;
        }

        let tally = self.tally();
        let verdict = match tally.leader() {
            Some(side) => Verdict::Winner(side),
            None => Verdict::Draw,
        };
        Outcome::Finished { verdict, tally }
    }

    /// The canonical text grid, as used by test fixtures.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.marker()), f)
    }
}

#[derive(Debug, PartialEq, Error, Display)]
pub enum ParseBoardError {
    MissingHeader,
    BadHeader,
    MissingRow,
    BadRowLabel,
    RowTooLong,
    BadCell,
    TrailingInput,
}

/// Parse the canonical grid produced by [`Board::render`]. Trailing
/// whitespace on a line may be omitted, and leading blank lines are ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim_end).skip_while(|line| line.is_empty());

        match lines.next() {
            None => return Err(ParseBoardError::MissingHeader),
            Some(header) if header != GRID_HEADER => return Err(ParseBoardError::BadHeader),
            Some(_) => {}
        }

        let mut cells = [Cell::Empty; NUM_SPACES];
        for (row, row_cells) in cells.chunks_mut(EDGE_LENGTH).enumerate() {
            let line = lines.next().ok_or(ParseBoardError::MissingRow)?;
            let mut chars = line.chars();

            let label = chars.next().and_then(|c| c.to_digit(10));
            if label != Some(row as u32 + 1) {
                return Err(ParseBoardError::BadRowLabel);
            }

            let slots: Vec<char> = chars.collect();
            if slots.len() > 2 * EDGE_LENGTH {
                return Err(ParseBoardError::RowTooLong);
            }

            for (col, cell) in row_cells.iter_mut().enumerate() {
                let pad = slots.get(2 * col).copied().unwrap_or(' ');
                let marker = slots.get(2 * col + 1).copied().unwrap_or(' ');
                if pad != ' ' {
                    return Err(ParseBoardError::BadCell);
                }
                *cell = Cell::from_marker(marker).ok_or(ParseBoardError::BadCell)?;
            }
        }

        if lines.any(|line| !line.is_empty()) {
            return Err(ParseBoardError::TrailingInput);
        }
        Ok(Self::from_cells(cells))
    }
}
