//! Text Rendering
//!
//! Plain-text presentation of a [`RosterView`]: metric header, filter
//! summary, live count, then one card per player.

use std::fmt;

use crate::data::player::Player;
use crate::engine::aggregate::Aggregates;
use crate::view::session::RosterView;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Header metrics as `(label, value, caption)`.
pub fn metrics(aggregates: &Aggregates) -> [(&'static str, u32, &'static str); 3] {
    [
        (
            "Combined CS:GO Major appearances",
            aggregates.cs_major_appearances,
            "Every player on this list has stepped onto a Major stage.",
        ),
        (
            "International Valorant placements",
            aggregates.valorant_international_placements,
            "Masters & Champions playoff runs powered by CS veterans.",
        ),
        (
            "Recorded tier-one trophies",
            aggregates.trophies_claimed,
            "Across Riot & Valve circuits with these core rosters.",
        ),
    ]
}

/// Displays the metric header.
pub struct MetricsPanel<'a>(pub &'a Aggregates);

impl fmt::Display for MetricsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value, caption) in metrics(self.0) {
            writeln!(f, "{value:>4}  {label}")?;
            writeln!(f, "      {caption}")?;
        }
        Ok(())
    }
}

/// Displays one player card.
pub struct PlayerCard<'a>(pub &'a Player);

impl fmt::Display for PlayerCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;

        writeln!(f, "[{}] [{}] [{}]", p.valorant_role, p.region, p.current_team)?;
        writeln!(f, "{} ({})", p.alias, p.name)?;
        if !p.headline.is_empty() {
            writeln!(f, "{}", p.headline)?;
        }

        write_list(f, "Valorant Impact", &p.valorant_highlights)?;
        write_list(f, "Counter-Strike Pedigree", &p.cs_highlights)?;

        if !p.timeline.is_empty() {
            writeln!(f)?;
            writeln!(f, "Career Timeline")?;
            for entry in &p.timeline {
                writeln!(
                    f,
                    "  {}  {:<9} {:<18} {}  [{}]",
                    entry.year, entry.game, entry.team, entry.achievement, entry.tier
                )?;
            }
        }

        if !p.tags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Tags: {}", p.tags.join(", "))?;
        }
        for (label, url) in p.socials.links() {
            writeln!(f, "{label}: {url}")?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{heading}")?;
    for item in items {
        writeln!(f, "  • {item}")?;
    }
    Ok(())
}

impl fmt::Display for RosterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MetricsPanel(&self.aggregates))?;
        writeln!(f, "{RULE}")?;

        let tag = self.filters.tag.as_deref().unwrap_or("All tags");
        writeln!(
            f,
            "Search: \"{}\" | {} | {} | {}",
            self.filters.query.trim(),
            self.filters.region,
            self.filters.role,
            tag
        )?;
        writeln!(f, "{}", self.caption)?;

        for player in &self.players {
            writeln!(f, "{RULE}")?;
            write!(f, "{}", PlayerCard(player))?;
        }
        Ok(())
    }
}

/// Displays the three selector vocabularies.
pub struct OptionsListing<'a>(pub &'a RosterView<'a>);

impl fmt::Display for OptionsListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regions: {}", self.0.region_options.join(", "))?;
        writeln!(f, "Roles:   {}", self.0.role_options.join(", "))?;
        writeln!(f, "Tags:    All tags, {}", self.0.tag_options.join(", "))
    }
}
