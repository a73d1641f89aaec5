//! Session and Presentation
//!
//! The session layer holds the user's selections; the render layer turns a
//! snapshot into text.

pub mod render;
pub mod session;

pub use render::{MetricsPanel, OptionsListing, PlayerCard};
pub use session::{caption, FilterState, RosterView, ViewSession};
