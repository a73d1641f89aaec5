//! Configuration
//!
//! Dataset location and matching policies, read from the environment.
//! Command-line flags override these values.

use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::data::roster::{Roster, RosterError};

/// Environment variable naming an alternate dataset file.
pub const ENV_DATA: &str = "ROSTER_DATA";
/// Environment variable selecting the role match policy.
pub const ENV_ROLE_MATCH: &str = "ROSTER_ROLE_MATCH";
/// Environment variable selecting the trophy match policy.
pub const ENV_TROPHY_MATCH: &str = "ROSTER_TROPHY_MATCH";

/// How a selected role is compared to a player's role descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleMatch {
    /// Raw descriptor contains the selection anywhere.
    #[default]
    Substring,
    /// Selection equals one of the `/`-separated roles.
    Token,
}

/// How achievement text is recognized as a trophy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrophyMatch {
    /// `won` anywhere in the text, any case.
    #[default]
    Substring,
    /// `won` as a standalone word, any case.
    Word,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Policy name not recognized.
    #[error("unknown {policy} policy: {value}")]
    UnknownPolicy {
        /// Which policy was being parsed
        policy: &'static str,
        /// Rejected value
        value: String,
    },
    /// An environment variable held a bad value.
    #[error("{key}: {reason}")]
    Env {
        /// Variable name
        key: &'static str,
        /// Underlying parse failure
        reason: Box<ConfigError>,
    },
}

impl ConfigError {
    fn env(key: &'static str, reason: ConfigError) -> Self {
        ConfigError::Env { key, reason: Box::new(reason) }
    }
}

impl FromStr for RoleMatch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(RoleMatch::Substring),
            "token" => Ok(RoleMatch::Token),
            _ => Err(ConfigError::UnknownPolicy { policy: "role match", value: s.to_string() }),
        }
    }
}

impl FromStr for TrophyMatch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(TrophyMatch::Substring),
            "word" => Ok(TrophyMatch::Word),
            _ => Err(ConfigError::UnknownPolicy { policy: "trophy match", value: s.to_string() }),
        }
    }
}

/// Runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterConfig {
    /// Dataset file. `None` uses the embedded dataset.
    pub data_path: Option<PathBuf>,
    /// Role filter policy.
    pub role_match: RoleMatch,
    /// Trophy counter policy.
    pub trophy_match: TrophyMatch,
}

impl RosterConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(ENV_DATA)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let role_match = match lookup(ENV_ROLE_MATCH) {
            Some(v) => v.parse::<RoleMatch>().map_err(|e| ConfigError::env(ENV_ROLE_MATCH, e))?,
            None => RoleMatch::default(),
        };
        let trophy_match = match lookup(ENV_TROPHY_MATCH) {
            Some(v) => v.parse::<TrophyMatch>().map_err(|e| ConfigError::env(ENV_TROPHY_MATCH, e))?,
            None => TrophyMatch::default(),
        };

        let config = Self { data_path, role_match, trophy_match };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Load the configured dataset.
    pub fn load_roster(&self) -> Result<Roster, RosterError> {
        match &self.data_path {
            Some(path) => Roster::from_path(path),
            None => Roster::embedded(),
        }
    }
}
