//! Filter Vocabularies
//!
//! Selectable values for the region, role and tag controls, derived from
//! the dataset. Role and tag lists are deduplicated and collated with
//! [`locale_cmp`], so they do not depend on dataset order.

use std::collections::BTreeSet;

use crate::data::player::{Player, Region};
use crate::engine::text::locale_cmp;

/// Sentinel at the head of the role list.
pub const ALL_ROLES: &str = "All roles";

/// Sentinel at the head of the region list.
pub const ALL_REGIONS: &str = "All regions";

/// Region choices: the sentinel followed by every region.
pub fn region_options() -> Vec<&'static str> {
    std::iter::once(ALL_REGIONS)
        .chain(Region::ALL.iter().map(|r| r.label()))
        .collect()
}

/// Role choices: `"All roles"` followed by every distinct role, sorted.
pub fn role_options(players: &[Player]) -> Vec<String> {
    let roles: BTreeSet<&str> = players.iter().flat_map(|p| p.roles()).collect();
    let mut sorted = sorted_vocabulary(roles);
    sorted.insert(0, ALL_ROLES.to_string());
    sorted
}

/// Tag choices: every distinct tag, sorted. No sentinel entry.
pub fn tag_options(players: &[Player]) -> Vec<String> {
    let tags: BTreeSet<&str> = players
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();
    sorted_vocabulary(tags)
}

fn sorted_vocabulary(values: BTreeSet<&str>) -> Vec<String> {
    let mut out: Vec<String> = values.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out
}
