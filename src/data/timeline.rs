//! Career Timeline
//!
//! Timeline entries as they appear in the dataset. Games and tiers carry a
//! handful of well-known values; anything else is kept verbatim.

use std::fmt;
use serde::{Serialize, Deserialize};

// =============================================================================
// GAME
// =============================================================================

/// Title a timeline entry belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Game {
    /// Counter-Strike: Global Offensive, the legacy title
    CsGo,
    /// Valorant, the target title
    Valorant,
    /// Any other title string
    Other(String),
}

impl Game {
    /// Identifier as written in the dataset.
    pub fn as_str(&self) -> &str {
        match self {
            Game::CsGo => "CS:GO",
            Game::Valorant => "Valorant",
            Game::Other(name) => name,
        }
    }
}

impl From<String> for Game {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CS:GO" => Game::CsGo,
            "Valorant" => Game::Valorant,
            _ => Game::Other(s),
        }
    }
}

impl From<&str> for Game {
    fn from(s: &str) -> Self {
        Game::from(s.to_string())
    }
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        match game {
            Game::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// TIER
// =============================================================================

/// Significance of the event behind a timeline entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    /// Valve-sponsored Counter-Strike Major
    Major,
    /// Riot international event (Masters, LOCK//IN, ...)
    International,
    /// Valorant Champions
    Champions,
    /// Any other tier string ("Regional", "Qualifier", ...)
    Other(String),
}

impl Tier {
    /// Tier label as written in the dataset.
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Major => "Major",
            Tier::International => "International",
            Tier::Champions => "Champions",
            Tier::Other(name) => name,
        }
    }

    /// International or Champions.
    #[inline]
    pub fn is_international(&self) -> bool {
        matches!(self, Tier::International | Tier::Champions)
    }
}

impl From<String> for Tier {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Major" => Tier::Major,
            "International" => Tier::International,
            "Champions" => Tier::Champions,
            _ => Tier::Other(s),
        }
    }
}

impl From<&str> for Tier {
    fn from(s: &str) -> Self {
        Tier::from(s.to_string())
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// TIMELINE ENTRY
// =============================================================================

/// One line of a player's career history.
///
/// Entries are not guaranteed to be in chronological order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Season year
    pub year: u16,
    /// Title played
    pub game: Game,
    /// Team at the time
    pub team: String,
    /// Free-text result ("Won IEM Katowice", "Top 8", ...)
    pub achievement: String,
    /// Event significance
    pub tier: Tier,
}

impl TimelineEntry {
    /// Create a new entry.
    pub fn new(
        year: u16,
        game: impl Into<Game>,
        team: impl Into<String>,
        achievement: impl Into<String>,
        tier: impl Into<Tier>,
    ) -> Self {
        Self {
            year,
            game: game.into(),
            team: team.into(),
            achievement: achievement.into(),
            tier: tier.into(),
        }
    }
}
