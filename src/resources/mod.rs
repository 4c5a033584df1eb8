//! Resource loading: the fetch seam and the fallback policy.
//!
//! Four externally supplied JSON resources feed the page: the two decks,
//! the arena configuration, and the winner history. Each loads
//! independently and degrades to a type-appropriate empty default on any
//! failure; one resource failing never blocks or corrupts another.
//!
//! ## Key Types
//!
//! - `ResourceFetcher`: the transport seam (implementations must bypass caches)
//! - `FetchError`: why a resource produced no usable bytes
//! - `ArenaResources`: all four resources loaded for one page view

pub mod fetcher;
pub mod loader;

pub use fetcher::{DirFetcher, FetchError, ResourceFetcher, StaticFetcher};
pub use loader::{
    load_or, ArenaResources, ARENA_PATH, DECK_A_PATH, DECK_B_PATH, WINNERS_PATH,
};
