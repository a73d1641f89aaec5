//! Roster Dataset
//!
//! The complete, immutable list of players. Loaded once from JSON, either the
//! dataset compiled into the binary or a file on disk.

use std::collections::BTreeSet;
use std::path::Path;
use serde::Serialize;
use tracing::{debug, info};

use crate::data::player::{Player, PlayerId};

/// Dataset shipped with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/players.json");

/// Dataset loading errors.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Dataset file could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid player JSON.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("Duplicate player id: {0}")]
    DuplicateId(PlayerId),
}

/// Immutable player collection in source order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = BTreeSet::new();
        for player in &players {
            if !seen.insert(&player.id) {
                return Err(RosterError::DuplicateId(player.id.clone()));
            }
        }
        Ok(Self { players })
    }

    /// Parse a JSON array of players.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        Self::new(players)
    }

    /// Load a JSON dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&json)?;
        info!("Loaded {} players from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Load the dataset compiled into the crate.
    pub fn embedded() -> Result<Self, RosterError> {
        let roster = Self::from_json(EMBEDDED_DATASET)?;
        debug!("Loaded {} players from embedded dataset", roster.len());
        Ok(roster)
    }

    /// Players in source order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when the roster has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
