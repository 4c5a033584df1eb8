//! The fallback loading policy.
//!
//! Nothing in here retries or propagates an error. A resource that cannot
//! be fetched, is empty, or fails to parse becomes the caller's default
//! plus one advisory notice; the worst case is an empty page.

use log::warn;
use serde::de::DeserializeOwned;

use crate::arena::ArenaConfig;
use crate::cards::Deck;
use crate::history::WinnerRecord;

use super::fetcher::{FetchError, ResourceFetcher};

/// Path of the deck A resource.
pub const DECK_A_PATH: &str = "/deckA.json";

/// Path of the deck B resource.
pub const DECK_B_PATH: &str = "/deckB.json";

/// Path of the arena configuration resource.
pub const ARENA_PATH: &str = "/arena.json";

/// Path of the winner history resource.
pub const WINNERS_PATH: &str = "/winners.json";

/// Fetch and decode one resource, substituting `fallback` on any failure.
///
/// A failure is logged and recorded as one line in `notices`; it is never
/// propagated and never retried.
pub fn load_or<T, F>(fetcher: &F, path: &str, fallback: T, notices: &mut Vec<String>) -> T
where
    T: DeserializeOwned,
    F: ResourceFetcher + ?Sized,
{
    match try_load(fetcher, path) {
        Ok(value) => value,
        Err(err) => {
            warn!("substituting default for {path}: {err}");
            notices.push(format!("{path}: {err}"));
            fallback
        }
    }
}

fn try_load<T, F>(fetcher: &F, path: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: ResourceFetcher + ?Sized,
{
    let bytes = fetcher.fetch(path)?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody {
            path: path.to_string(),
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}

/// The four externally supplied resources, loaded for one page view.
///
/// Decks and history fall back to empty, configuration to absent. The
/// application treats everything here as an immutable snapshot; a new page
/// view loads a new snapshot.
#[derive(Clone, Debug, Default)]
pub struct ArenaResources {
    /// Left-hand deck; empty when its resource failed to load.
    pub deck_a: Deck,

    /// Right-hand deck; empty when its resource failed to load.
    pub deck_b: Deck,

    /// Current matchup; `None` when unconfigured or failed to load.
    pub arena: Option<ArenaConfig>,

    /// Past outcomes, in recorded order.
    pub winners: Vec<WinnerRecord>,

    /// One advisory line per resource that fell back to its default.
    pub notices: Vec<String>,
}

impl ArenaResources {
    /// Load all four resources through the fetcher.
    ///
    /// Each load settles independently with its own fallback, so one
    /// failure never affects another resource.
    #[must_use]
    pub fn load<F>(fetcher: &F) -> Self
    where
        F: ResourceFetcher + ?Sized,
    {
        let mut notices = Vec::new();

        let deck_a = load_or(fetcher, DECK_A_PATH, Deck::default(), &mut notices);
        let deck_b = load_or(fetcher, DECK_B_PATH, Deck::default(), &mut notices);
        let arena = load_or(fetcher, ARENA_PATH, None, &mut notices);
        let winners = load_or(fetcher, WINNERS_PATH, Vec::new(), &mut notices);

        Self {
            deck_a,
            deck_b,
            arena,
            winners,
            notices,
        }
    }
}
