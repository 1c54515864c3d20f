//! The global ranking table.
//!
//! A process-lifetime, in-memory leaderboard: display name → cumulative
//! score, kept sorted descending at all times so that a top-N query is a
//! plain slice of the head. Entries are never deleted.
//!
//! The table is an explicitly constructed value — build one at startup and
//! hand it to whoever owns score updates. There is deliberately no global
//! instance hiding in here.

use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

/// Descending-by-score table of cumulative points per display name.
///
/// Ordering is maintained incrementally on every [`add`](Ranking::add);
/// ties keep their relative insertion order — an entry that reaches a
/// score lands *after* the entries already holding that score, and is
/// never reshuffled by later unrelated updates.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    entries: Vec<ScoreEntry>,
}

impl Ranking {
    /// Creates an empty ranking.
    pub fn new() -> Ranking {
        Ranking {
            entries: Vec::new(),
        }
    }

    /// Adds `delta` points to `name`, inserting the entry on first award.
    ///
    /// The entry is repositioned by removal and a single scan: it lands at
    /// the first index whose current score is strictly below the new
    /// score, i.e. after every entry it ties with.
    pub fn add(&mut self, name: &str, delta: u64) {
        let entry = match self.entries.iter().position(|e| e.name == name) {
            Some(at) => {
                let mut entry = self.entries.remove(at);
                entry.score += delta;
                entry
            }
            None => ScoreEntry {
                name: name.to_string(),
                score: delta,
            },
        };

        let at = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());

        tracing::debug!(name = %entry.name, score = entry.score, position = at, "score updated");
        self.entries.insert(at, entry);
    }

    /// The first `n` entries of the maintained order (fewer if the table
    /// is smaller).
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The current score for `name`, if it ever scored.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.score)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nobody has scored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
