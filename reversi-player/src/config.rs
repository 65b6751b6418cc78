use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which kind of move source plays a side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Moves typed on the terminal.
    Human,
    /// A uniformly random legal move.
    Random,
    /// The legal move that flips the most discs.
    Greedy,
}

/// Match settings, loadable from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: usize,
    /// Base seed for the policy sources; random when unset.
    pub seed: Option<u64>,
    /// Worker threads for self-play; 0 lets rayon decide.
    pub threads: usize,
    /// Illegal proposals allowed in a row before a game is aborted.
    pub max_rejections: u32,
    pub green: SourceKind,
    pub red: SourceKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            games: 1,
            seed: None,
            threads: 0,
            max_rejections: 16,
            green: SourceKind::Random,
            red: SourceKind::Random,
        }
    }
}

impl MatchConfig {
    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate that all values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation(
                "games must be at least 1".to_string(),
            ));
        }
        if self.max_rejections == 0 {
            return Err(ConfigError::Validation(
                "max_rejections must be at least 1".to_string(),
            ));
        }
        if self.games > 1 && self.has_human() {
            return Err(ConfigError::Validation(
                "human players can only play a single game".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns whether either side is played from the terminal.
    pub fn has_human(&self) -> bool {
        self.green == SourceKind::Human || self.red == SourceKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = MatchConfig::parse(
            r#"
            games = 10
            seed = 7
            green = "greedy"
            "#,
        )
        .unwrap();
        assert_eq!(config.games, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.green, SourceKind::Greedy);
        assert_eq!(config.red, SourceKind::Random);
        assert_eq!(config.max_rejections, 16);
    }

    #[test]
    fn test_parse_rejects_unknown_source() {
        let err = MatchConfig::parse(r#"red = "neural""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validation_errors() {
        let err = MatchConfig::parse("games = 0").unwrap_err();
        assert_eq!(err.to_string(), "config validation error: games must be at least 1");

        let err = MatchConfig::parse("max_rejections = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = MatchConfig::parse("games = 2\ngreen = \"human\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: human players can only play a single game"
        );
        assert!(MatchConfig::parse("games = 1\ngreen = \"human\"").is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("definitely/not/here/reversi.toml");
        assert!(matches!(
            MatchConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(MatchConfig::load_or_default(path).unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("reversi-config-{}.toml", std::process::id()));
        std::fs::write(&path, "games = 3\nthreads = 2\n").unwrap();
        let config = MatchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.threads, 2);
    }
}
