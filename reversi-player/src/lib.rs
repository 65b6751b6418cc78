//! `reversi-player` plays games on top of `reversi-engine`.
//!
//! The engine only judges moves; this crate decides who makes them. A
//! [`Match`](controller::Match) alternates turns between two
//! [`MoveSource`](sources::MoveSource)s, handles passes and rejected
//! proposals, and reports the result. [`selfplay`] runs many such games in
//! parallel.

pub mod config;
pub mod controller;
pub mod error;
pub mod selfplay;
pub mod sources;

pub use config::{MatchConfig, SourceKind};
pub use controller::{GameRecord, Match, Turn};
pub use error::{ConfigError, MatchError, SelfPlayError};
pub use selfplay::{play_game, run_self_play, SelfPlaySummary};
