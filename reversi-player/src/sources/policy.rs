//! [`MoveSource`]s that pick moves with a fixed [`Policy`].

use super::MoveSource;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use reversi_engine::{Board, Position, Side};

/// A rule for choosing among the legal moves of a position.
pub trait Policy {
    /// Pick a legal move for `side`, or `None` if it has none.
    fn choose<R: Rng + ?Sized>(&self, board: &Board, side: Side, rng: &mut R) -> Option<Position>;
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl Policy for UniformPolicy {
    fn choose<R: Rng + ?Sized>(&self, board: &Board, side: Side, rng: &mut R) -> Option<Position> {
        board
            .legal_moves(side)
            .collect_vec()
            .choose(rng)
            .copied()
    }
}

/// Picks the move that flips the most discs, breaking ties at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn choose<R: Rng + ?Sized>(&self, board: &Board, side: Side, rng: &mut R) -> Option<Position> {
        let scored = board
            .legal_moves(side)
            .filter_map(|pos| {
                let captures = board.is_legal(side, pos).ok()?;
                Some((pos, captures.flipped()))
            })
            .collect_vec();

        let best = scored.iter().map(|&(_, flipped)| flipped).max()?;
        scored
            .into_iter()
            .filter(|&(_, flipped)| flipped == best)
            .map(|(pos, _)| pos)
            .collect_vec()
            .choose(rng)
            .copied()
    }
}

/// A [`MoveSource`] driven by a [`Policy`] and its own seeded RNG.
pub struct PolicySource<P> {
    policy: P,
    rng: StdRng,
}

impl<P: Policy> PolicySource<P> {
    pub fn new(policy: P, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<P: Policy> MoveSource for PolicySource<P> {
    fn propose(&mut self, board: &Board, side: Side) -> Option<String> {
        let pos = self.policy.choose(board, side, &mut self.rng)?;
        log::trace!("{} policy picks {}", side, pos);
        Some(pos.to_string())
    }
}
