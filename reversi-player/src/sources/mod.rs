//! Move sources pick the moves for one side of a game.

mod interactive;
mod policy;
mod source;

pub use interactive::InteractiveSource;
pub use policy::{GreedyPolicy, Policy, PolicySource, UniformPolicy};
pub use source::MoveSource;

use crate::config::SourceKind;

/// Build the move source for `kind`. Policy sources are seeded with `seed`;
/// a human source reads from the terminal.
pub fn build(kind: SourceKind, seed: u64) -> Box<dyn MoveSource> {
    match kind {
        SourceKind::Human => Box::new(InteractiveSource::stdio()),
        SourceKind::Random => Box::new(PolicySource::new(UniformPolicy, seed)),
        SourceKind::Greedy => Box::new(PolicySource::new(GreedyPolicy, seed)),
    }
}
