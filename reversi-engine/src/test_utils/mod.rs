//! Utilities used for testing and benchmarking.

mod fixtures;
pub use fixtures::board_from;

mod perft;
pub use perft::run_perft;
