//! History rendering support.

use crate::cards::{Card, CardIndex};

use super::record::WinnerRecord;

/// A winner record resolved against the card index.
///
/// An id that is no longer present in either deck resolves to `None` and
/// renders as a missing card, not an error.
#[derive(Clone, Copy, Debug)]
pub struct HistoryEntry<'a> {
    /// The recorded outcome.
    pub record: &'a WinnerRecord,
    /// The winning card, when still present in a deck.
    pub winner: Option<&'a Card>,
    /// The losing card, when still present in a deck.
    pub loser: Option<&'a Card>,
}

impl<'a> HistoryEntry<'a> {
    /// Label prefix for the winning card.
    ///
    /// `"Vencedor — {name}"` when the record names the winner, plain
    /// `"Vencedor"` otherwise.
    #[must_use]
    pub fn winner_label(&self) -> String {
        match self.record.winner_name.as_deref() {
            Some(name) => format!("Vencedor — {name}"),
            None => "Vencedor".to_string(),
        }
    }
}

/// Resolve all records against the index, preserving record order.
#[must_use]
pub fn entries<'a>(records: &'a [WinnerRecord], index: &CardIndex<'a>) -> Vec<HistoryEntry<'a>> {
    records
        .iter()
        .map(|record| HistoryEntry {
            record,
            winner: index.get(&record.winner),
            loser: index.get(&record.loser),
        })
        .collect()
}
