//! Roster Filter
//!
//! Four independent criteria ANDed together: free text, region, role, tag.
//! Filtering keeps dataset order and never fails; a selection that matches
//! nothing simply yields an empty list.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer};

use crate::config::RoleMatch;
use crate::data::player::{Player, Region, UnknownRegion};
use crate::engine::options::{ALL_REGIONS, ALL_ROLES};
use crate::engine::text::{contains_folded, normalize_query};

// =============================================================================
// SELECTIONS
// =============================================================================

/// Region selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    /// "All regions"
    #[default]
    All,
    /// A single region
    Only(Region),
}

impl RegionFilter {
    /// Check a player's region against the selection.
    #[inline]
    pub fn matches(self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(selected) => selected == region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str(ALL_REGIONS),
            RegionFilter::Only(region) => fmt::Display::fmt(region, f),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_REGIONS) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(RegionFilter::All);
        }
        trimmed.parse().map(RegionFilter::Only)
    }
}

impl Serialize for RegionFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Role selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoleFilter {
    /// "All roles"
    #[default]
    All,
    /// A role taken from the role vocabulary
    Role(String),
}

impl RoleFilter {
    /// Check a role descriptor against the selection.
    ///
    /// With [`RoleMatch::Substring`] the raw descriptor only has to contain
    /// the selection, so `"Duelist/IGL"` matches `"IGL"` and also `"L"`.
    pub fn matches(&self, player: &Player, policy: RoleMatch) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Role(role) => match policy {
                RoleMatch::Substring => player.valorant_role.contains(role.as_str()),
                RoleMatch::Token => player.roles().any(|r| r == role.as_str()),
            },
        }
    }
}

impl From<&str> for RoleFilter {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_ROLES) || s.eq_ignore_ascii_case("all") {
            RoleFilter::All
        } else {
            RoleFilter::Role(s.to_string())
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::All => f.write_str(ALL_ROLES),
            RoleFilter::Role(role) => f.write_str(role),
        }
    }
}

impl Serialize for RoleFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// CRITERIA
// =============================================================================

/// The four filter criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Free-text query, as typed
    pub query: String,
    /// Region selection
    pub region: RegionFilter,
    /// Role selection
    pub role: RoleFilter,
    /// Tag selection; `None` shows every tag
    pub tag: Option<String>,
}

impl FilterCriteria {
    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        normalize_query(&self.query).is_empty()
            && self.region == RegionFilter::All
            && self.role == RoleFilter::All
            && self.tag.is_none()
    }
}

/// Free-text match against the joined search fields.
///
/// `query` must be normalized with [`normalize_query`]. Fields are joined with
/// single spaces, so a query may span adjacent fields.
pub fn matches_query(player: &Player, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = player.search_fields().collect::<Vec<_>>().join(" ");
    contains_folded(&haystack, query)
}

/// Exact tag membership, or everything when no tag is selected.
#[inline]
pub fn matches_tag(player: &Player, tag: Option<&str>) -> bool {
    tag.map_or(true, |t| player.has_tag(t))
}

fn matches_normalized(
    player: &Player,
    criteria: &FilterCriteria,
    query: &str,
    role_match: RoleMatch,
) -> bool {
    matches_query(player, query)
        && criteria.region.matches(player.region)
        && criteria.role.matches(player, role_match)
        && matches_tag(player, criteria.tag.as_deref())
}

/// Players satisfying all criteria, in dataset order.
pub fn filter_players<'a>(
    players: &'a [Player],
    criteria: &FilterCriteria,
    role_match: RoleMatch,
) -> Vec<&'a Player> {
    let query = normalize_query(&criteria.query);
    players
        .iter()
        .filter(|p| matches_normalized(p, criteria, &query, role_match))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{arb_criteria, arb_roster, player, two_players};
    use proptest::prelude::*;

    fn ids(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_region_filter() {
        let players = two_players();
        let criteria = FilterCriteria {
            region: RegionFilter::Only(Region::NorthAmerica),
            ..Default::default()
        };
        assert_eq!(ids(&filter_players(&players, &criteria, RoleMatch::Substring)), vec!["a"]);
    }

    #[test]
    fn test_tag_filter() {
        let players = two_players();
        let criteria = FilterCriteria {
            tag: Some("Rookie".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_players(&players, &criteria, RoleMatch::Substring)), vec!["b"]);
    }

    #[test]
    fn test_mixed_case_query_hits_tag() {
        let players = two_players();
        let criteria = FilterCriteria {
            query: "  iGl ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_players(&players, &criteria, RoleMatch::Substring)), vec!["a"]);
    }

    #[test]
    fn test_unknown_query_yields_nothing() {
        let players = two_players();
        let criteria = FilterCriteria {
            query: "zzzz-not-present".to_string(),
            ..Default::default()
        };
        assert!(filter_players(&players, &criteria, RoleMatch::Substring).is_empty());
    }

    #[test]
    fn test_query_spans_adjacent_fields() {
        // alias "A" followed by name "Player A"
        let players = two_players();
        let criteria = FilterCriteria {
            query: "a player a".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_players(&players, &criteria, RoleMatch::Substring)), vec!["a"]);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let players = two_players();
        let criteria = FilterCriteria {
            tag: Some("rookie".to_string()),
            ..Default::default()
        };
        assert!(filter_players(&players, &criteria, RoleMatch::Substring).is_empty());
    }

    #[test]
    fn test_role_substring_vs_token() {
        let players = vec![player("a", Region::NorthAmerica, "Duelist/IGL", &[])];
        let short = FilterCriteria {
            role: RoleFilter::Role("L".to_string()),
            ..Default::default()
        };
        let exact = FilterCriteria {
            role: RoleFilter::Role("IGL".to_string()),
            ..Default::default()
        };

        assert_eq!(filter_players(&players, &short, RoleMatch::Substring).len(), 1);
        assert!(filter_players(&players, &short, RoleMatch::Token).is_empty());
        assert_eq!(filter_players(&players, &exact, RoleMatch::Token).len(), 1);
    }

    #[test]
    fn test_stale_role_selection_is_empty_not_error() {
        let players = two_players();
        let criteria = FilterCriteria {
            role: RoleFilter::Role("Smokes".to_string()),
            ..Default::default()
        };
        assert!(filter_players(&players, &criteria, RoleMatch::Substring).is_empty());
    }

    #[test]
    fn test_criteria_are_anded() {
        let players = two_players();
        let criteria = FilterCriteria {
            region: RegionFilter::Only(Region::Emea),
            tag: Some("IGL".to_string()),
            ..Default::default()
        };
        assert!(filter_players(&players, &criteria, RoleMatch::Substring).is_empty());
        assert!(!matches_normalized(&players[0], &criteria, "", RoleMatch::Substring));
    }

    #[test]
    fn test_region_filter_parse() {
        assert_eq!("All regions".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert_eq!("all".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert_eq!("EMEA".parse::<RegionFilter>(), Ok(RegionFilter::Only(Region::Emea)));
        assert!("Pacific".parse::<RegionFilter>().is_err());
    }

    #[test]
    fn test_role_filter_from_sentinel() {
        assert_eq!(RoleFilter::from("All roles"), RoleFilter::All);
        assert_eq!(RoleFilter::from("all roles"), RoleFilter::All);
        assert_eq!(RoleFilter::from(" ALL "), RoleFilter::All);
        assert_eq!(RoleFilter::from("Allrounder"), RoleFilter::Role("Allrounder".to_string()));
        assert_eq!(RoleFilter::from("IGL"), RoleFilter::Role("IGL".to_string()));
        assert_eq!(RoleFilter::All.to_string(), "All roles");
    }

    #[test]
    fn test_criteria_serialize_labels() {
        let criteria = FilterCriteria {
            region: RegionFilter::Only(Region::NorthAmerica),
            ..Default::default()
        };
        let json = serde_json::to_string(&criteria).unwrap();
        assert!(json.contains("\"region\":\"North America\""));
        assert!(json.contains("\"role\":\"All roles\""));
        assert!(json.contains("\"tag\":null"));
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subset(
            roster in arb_roster(),
            criteria in arb_criteria(),
            token in any::<bool>(),
        ) {
            let policy = if token { RoleMatch::Token } else { RoleMatch::Substring };
            let result = filter_players(&roster, &criteria, policy);

            let mut cursor = 0;
            for p in &result {
                let pos = roster[cursor..]
                    .iter()
                    .position(|q| q.id == p.id)
                    .map(|offset| cursor + offset);
                prop_assert!(pos.is_some(), "result out of order or not in dataset");
                cursor = pos.unwrap() + 1;
            }
        }

        #[test]
        fn prop_unconstrained_returns_everything(roster in arb_roster()) {
            let criteria = FilterCriteria::default();
            prop_assert!(criteria.is_unconstrained());

            let result = filter_players(&roster, &criteria, RoleMatch::Substring);
            let all: Vec<&Player> = roster.iter().collect();
            prop_assert_eq!(result, all);
        }

        #[test]
        fn prop_whitespace_query_is_unconstrained(roster in arb_roster(), pad in "[ \t]{0,4}") {
            let criteria = FilterCriteria { query: pad, ..Default::default() };
            prop_assert_eq!(filter_players(&roster, &criteria, RoleMatch::Token).len(), roster.len());
        }
    }
}
