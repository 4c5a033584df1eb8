//! Winner history: past outcomes replayed for display.
//!
//! Records are appended out of band (an edit to the history resource after
//! an arena outcome is observed) and only ever read here. The history is
//! displayed, never recomputed.

pub mod record;
pub mod view;

pub use record::WinnerRecord;
pub use view::{entries, HistoryEntry};
