//! Static Dataset
//!
//! Player records are read once and never mutated.
//!
//! ## Module Structure
//!
//! - `player`: Player identity, career fields, socials
//! - `timeline`: Career timeline entries
//! - `roster`: Loading, id uniqueness, embedded dataset

pub mod player;
pub mod roster;
pub mod timeline;

// Re-export key types
pub use player::{Player, PlayerId, Region, Socials};
pub use roster::{Roster, RosterError, EMBEDDED_DATASET};
pub use timeline::{Game, Tier, TimelineEntry};
