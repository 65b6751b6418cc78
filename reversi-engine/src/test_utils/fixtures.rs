use crate::{Board, Cell, Position};

/// Build a board from the opening position with some cells overridden.
/// `description` is a comma-separated list of `Position:Cell` pairs, e.g.
/// `"D2:Green,E2:Red,D4:Empty"`. An empty description gives the opening.
///
/// Panics on malformed descriptions.
pub fn board_from(description: &str) -> Board {
    let mut cells = *Board::new().cells();

    for entry in description.split(',').filter(|entry| !entry.is_empty()) {
        let mut parts = entry.split(':');
        let pos: Position = parts
            .next()
            .and_then(|pos| pos.parse().ok())
            .unwrap_or_else(|| panic!("bad position in {:?}", entry));
        let cell = match parts.next() {
            Some("Green") => Cell::Green,
            Some("Red") => Cell::Red,
            Some("Empty") => Cell::Empty,
            _ => panic!("bad cell in {:?}", entry),
        };
        cells[pos.index() as usize] = cell;
    }

    Board::from_cells(cells)
}

#[test]
fn board_from_overrides_opening() {
    let board = board_from("D2:Green,E4:Empty");
    assert_eq!(board.cell("D2".parse().unwrap()), Cell::Green);
    assert_eq!(board.cell("E4".parse().unwrap()), Cell::Empty);
    assert_eq!(board.cell("D4".parse().unwrap()), Cell::Green);
    assert_eq!(board_from(""), Board::new());
}
