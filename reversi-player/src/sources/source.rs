use reversi_engine::{Board, MoveError, Outcome, Side};

/// Anything that can pick moves for one side of a game: a person at a
/// terminal, a fixed policy, or a learned one.
pub trait MoveSource {
    /// Propose a move for `side` in text notation ("E3"). Only called when
    /// `side` has a legal move. Returning `None` abandons the game.
    fn propose(&mut self, board: &Board, side: Side) -> Option<String>;

    /// The last proposal was rejected; `propose` will be called again.
    fn reject(&mut self, _error: MoveError) {}

    /// The game has finished and this source played `side`.
    fn notify(&mut self, _outcome: Outcome, _side: Side) {}
}
