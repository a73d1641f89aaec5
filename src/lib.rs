//! # Crossover Roster
//!
//! Filterable roster of Valorant professionals who previously competed at
//! the highest level of Counter-Strike.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CROSSOVER ROSTER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  data/           - Static dataset                            │
//! │  ├── player.rs   - Player records, regions, socials          │
//! │  ├── timeline.rs - Career timeline entries, games, tiers     │
//! │  └── roster.rs   - Dataset loading and id checks             │
//! │                                                              │
//! │  engine/         - View derivation (pure)                    │
//! │  ├── text.rs     - Case folding, collation, word matching    │
//! │  ├── options.rs  - Role / tag / region vocabularies          │
//! │  ├── filter.rs   - Four-criteria roster filter               │
//! │  └── aggregate.rs- Career counters over the whole dataset    │
//! │                                                              │
//! │  view/           - Session state and presentation            │
//! │  ├── session.rs  - Filter selections and snapshots           │
//! │  └── render.rs   - Text rendering of a snapshot              │
//! │                                                              │
//! │  config.rs       - Environment configuration                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//!
//! Everything under `engine/` is a total function of the dataset and the
//! current selections. Nothing is cached: every snapshot recomputes the
//! filtered list, and aggregates always cover the full dataset.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use config::{ConfigError, RoleMatch, RosterConfig, TrophyMatch};
pub use data::{Game, Player, PlayerId, Region, Roster, RosterError, Socials, Tier, TimelineEntry};
pub use engine::{Aggregates, FilterCriteria, RegionFilter, RoleFilter};
pub use view::{FilterState, RosterView, ViewSession};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
