//! Arena: the configured matchup and its resolution.
//!
//! ## Key Types
//!
//! - `ArenaConfig`: which attribute is contested and by which two cards
//! - `Outcome`: tagged draw/win result of a resolution
//! - `resolve` / `contestants` / `winner_label`: the resolution functions
//!
//! Resolution is pure. Inputs may be absent while resources load; absence
//! flows through as `None` rather than an error.

pub mod config;
pub mod outcome;
pub mod resolver;

pub use config::ArenaConfig;
pub use outcome::Outcome;
pub use resolver::{contestants, resolve, winner_label};
