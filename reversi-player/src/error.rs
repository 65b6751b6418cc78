//! Error types for configuration, single games and self-play runs.

use derive_more::{Display, Error};
use reversi_engine::{MoveError, Side};

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", path, source)]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(#[error(source)] toml::de::Error),

    #[display(fmt = "config validation error: {}", _0)]
    Validation(#[error(not(source))] String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err)
    }
}

/// Errors that end a game before the board reaches a terminal state.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MatchError {
    #[display(fmt = "{} abandoned the game", _0)]
    Abandoned(#[error(not(source))] Side),

    #[display(fmt = "{} proposed {} illegal moves in a row (last: {})", side, attempts, source)]
    TooManyRejections {
        side: Side,
        attempts: u32,
        source: MoveError,
    },
}

/// Errors that can occur during a parallel self-play run.
#[derive(Debug, Display, Error)]
pub enum SelfPlayError {
    #[display(fmt = "interactive sources cannot take part in self-play")]
    InteractiveSource,

    #[display(fmt = "failed to start worker threads: {}", _0)]
    ThreadPool(#[error(source)] rayon::ThreadPoolBuildError),

    #[display(fmt = "game {} failed: {}", index, source)]
    Game { index: usize, source: MatchError },
}
