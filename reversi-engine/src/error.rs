//! Errors returned when a move is rejected.

use derive_more::{Display, Error};

/// Why the engine rejected a move. A rejected move never changes the board.
#[derive(Clone, Copy, Debug, Display, Eq, Error, Hash, PartialEq)]
pub enum MoveError {
    /// The side is empty or outside the two playing sides.
    #[display(fmt = "only green and red can move")]
    InvalidSide,
    /// The coordinate or index does not name one of the 64 cells.
    #[display(fmt = "position must be from A1 to H8")]
    InvalidPosition,
    #[display(fmt = "cell is not empty")]
    CellOccupied,
    /// No direction from the target brackets an opponent run.
    #[display(fmt = "move captures no discs")]
    NoCaptureAvailable,
}
