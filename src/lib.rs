//! # card-arena
//!
//! Resolution engine for a static teacher-card battle page.
//!
//! Two decks of teacher cards, a configured matchup, and a history of past
//! outcomes are loaded from JSON resources. The crate computes the current
//! outcome and the lookup structures the page renders from; layout, styling,
//! and the HTTP transport live outside.
//!
//! ## Design Principles
//!
//! 1. **Absence is normal**: resources load independently and any of them
//!    may be missing at render time. Every computation reports absence with
//!    `Option` instead of failing.
//!
//! 2. **Pure per-render computation**: resolution, card lookup, and the
//!    page model are pure functions of immutable snapshots, recomputed
//!    whenever an input changes identity.
//!
//! 3. **Degrade, never fail**: a resource that cannot be fetched or parsed
//!    becomes its empty default plus one advisory notice. There are no
//!    fatal errors; the worst case is an empty page.
//!
//! ## Modules
//!
//! - `cards`: attributes, cards, decks, and the id lookup index
//! - `arena`: matchup configuration and outcome resolution
//! - `history`: past winner records and their rendering entries
//! - `resources`: the fetch seam and the fallback loading policy
//! - `view`: the per-render page model

pub mod arena;
pub mod cards;
pub mod history;
pub mod resources;
pub mod view;

// Re-export commonly used types
pub use crate::cards::{AttributeKey, Attributes, Card, CardId, CardIndex, Deck};

pub use crate::arena::{contestants, resolve, winner_label, ArenaConfig, Outcome};

pub use crate::history::{HistoryEntry, WinnerRecord};

pub use crate::resources::{
    ArenaResources, DirFetcher, FetchError, ResourceFetcher, StaticFetcher,
};

pub use crate::view::{ArenaView, PageModel};
