//! View Session
//!
//! Owns the four filter selections for one interactive session and turns
//! them into [`RosterView`] snapshots. Vocabularies and counters depend only
//! on the dataset, so they are derived once when the session opens; the
//! filtered list is recomputed for every snapshot.

use serde::Serialize;
use tracing::debug;

use crate::config::{RoleMatch, RosterConfig, TrophyMatch};
use crate::data::player::Player;
use crate::data::roster::Roster;
use crate::engine::aggregate::{compute_aggregates, Aggregates};
use crate::engine::filter::{filter_players, FilterCriteria, RegionFilter, RoleFilter};
use crate::engine::options::{region_options, role_options, tag_options};

/// Current filter selections.
pub type FilterState = FilterCriteria;

/// Live count line under the filter panel.
pub fn caption(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} crossover pros.")
}

/// Everything the presentation layer needs for one render.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterView<'a> {
    /// Header counters, over the whole dataset
    pub aggregates: Aggregates,
    /// Region selector values
    pub region_options: Vec<&'static str>,
    /// Role selector values, sentinel first
    pub role_options: &'a [String],
    /// Tag toggle values
    pub tag_options: &'a [String],
    /// Selections that produced this view
    pub filters: FilterState,
    /// Matching players in dataset order
    pub players: Vec<&'a Player>,
    /// Number of matching players
    pub shown: usize,
    /// Number of players in the dataset
    pub total: usize,
    /// "Showing N of M crossover pros."
    pub caption: String,
}

/// Filter state bound to a roster.
#[derive(Debug)]
pub struct ViewSession<'a> {
    roster: &'a Roster,
    role_match: RoleMatch,
    state: FilterState,
    role_options: Vec<String>,
    tag_options: Vec<String>,
    aggregates: Aggregates,
}

impl<'a> ViewSession<'a> {
    /// Open a session with no constraints.
    pub fn new(roster: &'a Roster, role_match: RoleMatch, trophy_match: TrophyMatch) -> Self {
        let players = roster.players();
        Self {
            roster,
            role_match,
            state: FilterState::default(),
            role_options: role_options(players),
            tag_options: tag_options(players),
            aggregates: compute_aggregates(players, trophy_match),
        }
    }

    /// Open a session using the policies from `config`.
    pub fn with_config(roster: &'a Roster, config: &RosterConfig) -> Self {
        Self::new(roster, config.role_match, config.trophy_match)
    }

    /// Current selections.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Header counters.
    pub fn aggregates(&self) -> Aggregates {
        self.aggregates
    }

    /// Role selector values.
    pub fn role_options(&self) -> &[String] {
        &self.role_options
    }

    /// Tag toggle values.
    pub fn tag_options(&self) -> &[String] {
        &self.tag_options
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.log_change("query");
    }

    /// Pick a region.
    pub fn select_region(&mut self, region: RegionFilter) {
        self.state.region = region;
        self.log_change("region");
    }

    /// Pick a role.
    pub fn select_role(&mut self, role: RoleFilter) {
        self.state.role = role;
        self.log_change("role");
    }

    /// Press a tag button. Pressing the active tag clears it; pressing any
    /// other tag replaces it, so at most one tag is active.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.state.tag.as_deref() == Some(tag) {
            self.state.tag = None;
        } else {
            self.state.tag = Some(tag.to_string());
        }
        self.log_change("tag");
    }

    /// Press "All tags".
    pub fn clear_tag(&mut self) {
        self.state.tag = None;
        self.log_change("tag");
    }

    /// Drop every selection.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.log_change("reset");
    }

    /// Players matching the current selections.
    pub fn filtered(&self) -> Vec<&'a Player> {
        filter_players(self.roster.players(), &self.state, self.role_match)
    }

    /// Derive the full view for the current selections.
    pub fn snapshot(&self) -> RosterView<'_> {
        let players = self.filtered();
        let shown = players.len();
        let total = self.roster.len();
        RosterView {
            aggregates: self.aggregates,
            region_options: region_options(),
            role_options: &self.role_options,
            tag_options: &self.tag_options,
            filters: self.state.clone(),
            players,
            shown,
            total,
            caption: caption(shown, total),
        }
    }

    fn log_change(&self, what: &str) {
        debug!(
            change = what,
            filters = ?self.state,
            shown = self.filtered().len(),
            total = self.roster.len(),
            "Filter state changed"
        );
    }
}
