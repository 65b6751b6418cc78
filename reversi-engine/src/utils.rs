//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Header line of the canonical grid.
pub(crate) const GRID_HEADER: &str = "\\ A B C D E F G H";

/// Format 64 characters into the canonical grid: a header of column letters,
/// then one line per row holding its 1-based number and a two-character slot
/// (" " + marker) per column. `piece_iter` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "{}", GRID_HEADER)?;

    for row in 0..EDGE_LENGTH {
        write!(f, "{}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
