//! Fixtures and proptest strategies shared by engine and view tests.

use proptest::prelude::*;

use crate::data::player::{Player, PlayerId, Region, Socials};
use crate::data::timeline::TimelineEntry;
use crate::engine::filter::{FilterCriteria, RegionFilter, RoleFilter};

const ROLES: &[&str] = &["Duelist", "IGL", "Sentinel", "Controller", "Initiator"];
const TAGS: &[&str] = &["IGL", "Rookie", "Clutch", "Entry", "igl"];
const GAMES: &[&str] = &["CS:GO", "Valorant", "CS 1.6"];
const TIERS: &[&str] = &["Major", "International", "Champions", "Regional"];
const ACHIEVEMENTS: &[&str] = &["Won the Major", "Swonky run", "Top 8", "won", "Runner-up"];

/// Minimal player with the fields filters look at.
pub fn player(id: &str, region: Region, role: &str, tags: &[&str]) -> Player {
    Player {
        id: PlayerId::new(id),
        alias: id.to_uppercase(),
        name: format!("Player {}", id.to_uppercase()),
        country: "Nowhere".to_string(),
        region,
        current_team: "Team".to_string(),
        headline: String::new(),
        valorant_role: role.to_string(),
        valorant_highlights: Vec::new(),
        cs_highlights: Vec::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        socials: Socials::default(),
        timeline: Vec::new(),
    }
}

/// Player A (NA, Duelist, IGL tag, one won CS:GO Major) and
/// Player B (EMEA, Sentinel, Rookie tag, no timeline).
pub fn two_players() -> Vec<Player> {
    let mut a = player("a", Region::NorthAmerica, "Duelist", &["IGL"]);
    a.country = "USA".to_string();
    a.current_team = "T1".to_string();
    a.timeline = vec![TimelineEntry::new(2018, "CS:GO", "T1", "Won the Major", "Major")];

    let mut b = player("b", Region::Emea, "Sentinel", &["Rookie"]);
    b.country = "France".to_string();
    b.current_team = "T2".to_string();

    vec![a, b]
}

fn arb_region() -> impl Strategy<Value = Region> {
    prop_oneof![Just(Region::NorthAmerica), Just(Region::Emea)]
}

fn arb_entry() -> impl Strategy<Value = TimelineEntry> {
    (
        2012u16..2025,
        prop::sample::select(GAMES),
        prop::sample::select(TIERS),
        prop::sample::select(ACHIEVEMENTS),
    )
        .prop_map(|(year, game, tier, achievement)| {
            TimelineEntry::new(year, game, "Team", achievement, tier)
        })
}

fn arb_player(index: usize) -> impl Strategy<Value = Player> {
    (
        "[A-Za-z]{1,8}",
        arb_region(),
        prop::sample::subsequence(ROLES, 1..3),
        prop::sample::subsequence(TAGS, 0..3),
        prop::collection::vec(arb_entry(), 0..4),
    )
        .prop_map(move |(alias, region, roles, tags, timeline)| {
            let mut p = player(&format!("p{index}"), region, &roles.join("/"), &tags);
            p.alias = alias;
            p.timeline = timeline;
            p
        })
}

/// Roster of up to eight players with unique ids.
pub fn arb_roster() -> impl Strategy<Value = Vec<Player>> {
    (0usize..8).prop_flat_map(|len| (0..len).map(arb_player).collect::<Vec<_>>())
}

/// Any combination of the four criteria, including stale values.
pub fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    let query = prop_oneof![Just(String::new()), "[a-zA-Z ]{1,4}", Just("iGl".to_string())];
    let region = prop_oneof![
        Just(RegionFilter::All),
        arb_region().prop_map(RegionFilter::Only),
    ];
    let role = prop_oneof![
        Just(RoleFilter::All),
        prop::sample::select(ROLES).prop_map(RoleFilter::from),
        Just(RoleFilter::Role("L".to_string())),
    ];
    let tag = prop::option::of(prop::sample::select(TAGS).prop_map(str::to_string));

    (query, region, role, tag).prop_map(|(query, region, role, tag)| FilterCriteria {
        query,
        region,
        role,
        tag,
    })
}
