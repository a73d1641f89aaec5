//! Career Counters
//!
//! Three counters computed in one pass over every timeline entry of every
//! player. Filter selections never reach this module.

use serde::Serialize;

use crate::config::TrophyMatch;
use crate::data::player::Player;
use crate::data::timeline::{Game, Tier, TimelineEntry};
use crate::engine::text::{contains_folded, contains_word};

/// Marker searched for in achievement text.
pub const TROPHY_MARKER: &str = "won";

/// Counters shown in the roster header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    /// CS:GO entries at Major tier
    pub cs_major_appearances: u32,
    /// Valorant entries at International or Champions tier
    pub valorant_international_placements: u32,
    /// Entries whose achievement mentions a win
    pub trophies_claimed: u32,
}

impl Aggregates {
    /// Add one timeline entry.
    pub fn record(&mut self, entry: &TimelineEntry, policy: TrophyMatch) {
        if entry.game == Game::CsGo && entry.tier == Tier::Major {
            self.cs_major_appearances += 1;
        }
        if entry.game == Game::Valorant && entry.tier.is_international() {
            self.valorant_international_placements += 1;
        }
        if is_trophy(&entry.achievement, policy) {
            self.trophies_claimed += 1;
        }
    }
}

/// Does the achievement text count as a trophy?
pub fn is_trophy(achievement: &str, policy: TrophyMatch) -> bool {
    match policy {
        TrophyMatch::Substring => contains_folded(achievement, TROPHY_MARKER),
        TrophyMatch::Word => contains_word(achievement, TROPHY_MARKER),
    }
}

/// Count over every player and every timeline entry.
pub fn compute_aggregates(players: &[Player], policy: TrophyMatch) -> Aggregates {
    players
        .iter()
        .flat_map(|p| p.timeline.iter())
        .fold(Aggregates::default(), |mut acc, entry| {
            acc.record(entry, policy);
            acc
        })
}
