//! Card system: attributes, cards, decks, and the history lookup index.
//!
//! ## Key Types
//!
//! - `AttributeKey` / `Attributes`: the five fixed scores every card carries
//! - `CardId` / `Card`: static card data, loaded once and never mutated
//! - `Deck`: ordered card sequence with linear id lookup
//! - `CardIndex`: id lookup map spanning both decks

pub mod attributes;
pub mod card;
pub mod deck;
pub mod index;

pub use attributes::{AttributeKey, Attributes};
pub use card::{Card, CardId};
pub use deck::Deck;
pub use index::CardIndex;
