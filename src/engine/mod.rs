//! View Derivation Engine
//!
//! Pure functions from the dataset and the current selections to what the
//! roster view displays. Nothing here allocates state between calls.
//!
//! ## Module Structure
//!
//! - `text`: Query normalization, collation, word matching
//! - `options`: Region, role and tag vocabularies
//! - `filter`: Four-criteria roster filter
//! - `aggregate`: Career counters over the full dataset

pub mod aggregate;
pub mod filter;
pub mod options;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types
pub use aggregate::{compute_aggregates, Aggregates};
pub use filter::{filter_players, FilterCriteria, RegionFilter, RoleFilter};
pub use options::{region_options, role_options, tag_options, ALL_REGIONS, ALL_ROLES};
pub use text::locale_cmp;
