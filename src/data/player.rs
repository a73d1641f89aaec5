//! Player Records
//!
//! Read-only player data. Field names follow the JSON dataset (camelCase).

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::data::timeline::TimelineEntry;

// =============================================================================
// PLAYER ID
// =============================================================================

/// Unique player identifier (dataset slug, e.g. `"tenz"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// REGION
// =============================================================================

/// Competitive region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    /// North America
    #[serde(rename = "North America")]
    NorthAmerica,
    /// Europe, Middle East and Africa
    #[serde(rename = "EMEA")]
    Emea,
}

impl Region {
    /// Every region, in display order.
    pub const ALL: [Region; 2] = [Region::NorthAmerica, Region::Emea];

    /// Display label, identical to the serialized value.
    pub fn label(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Emea => "EMEA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a region label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    /// Accepts the exact labels plus the short forms `na` and `emea`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north america" | "na" => Ok(Region::NorthAmerica),
            "emea" => Ok(Region::Emea),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}

// =============================================================================
// SOCIALS
// =============================================================================

/// External profile links. Any of them may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    /// Twitter / X profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Twitch channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch: Option<String>,
    /// Liquipedia page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquipedia: Option<String>,
}

impl Socials {
    /// Present links as `(label, url)` pairs in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", self.twitter.as_deref()),
            ("Twitch", self.twitch.as_deref()),
            ("Liquipedia", self.liquipedia.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

// =============================================================================
// PLAYER
// =============================================================================

/// A single roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique id
    pub id: PlayerId,
    /// Display handle
    pub alias: String,
    /// Full name
    pub name: String,
    /// Country of origin
    pub country: String,
    /// Competitive region
    pub region: Region,
    /// Current organization
    pub current_team: String,
    /// One-line summary
    pub headline: String,
    /// Role descriptor, possibly several roles joined by `/`
    pub valorant_role: String,
    /// Valorant career highlights
    #[serde(default)]
    pub valorant_highlights: Vec<String>,
    /// Counter-Strike career highlights
    #[serde(default)]
    pub cs_highlights: Vec<String>,
    /// Thematic tags, in source order
    #[serde(default)]
    pub tags: Vec<String>,
    /// External links
    #[serde(default)]
    pub socials: Socials,
    /// Career history, not necessarily sorted
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Player {
    /// Individual roles from the descriptor: split on `/`, trimmed, empties dropped.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.valorant_role
            .split('/')
            .map(str::trim)
            .filter(|role| !role.is_empty())
    }

    /// Exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Fields covered by free-text search, in fixed order.
    pub fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.alias.as_str(),
            self.name.as_str(),
            self.country.as_str(),
            self.current_team.as_str(),
            self.valorant_role.as_str(),
        ]
        .into_iter()
        .chain(self.valorant_highlights.iter().map(String::as_str))
        .chain(self.cs_highlights.iter().map(String::as_str))
        .chain(self.tags.iter().map(String::as_str))
    }
}
