//! Match identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Counter distinguishing matches created within the same millisecond.
static NEXT_MATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// A match token: base-36 millisecond timestamp plus a process-unique
/// sequence suffix.
///
/// Unique within the process and monotonically distinguishable — a later
/// match always gets a lexically later suffix. Travels on the wire as a
/// plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Generates a fresh id.
    pub fn generate() -> MatchId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        let seq = NEXT_MATCH_SEQ.fetch_add(1, Ordering::Relaxed);
        MatchId(format!("{}-{}", base36(millis), seq))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> MatchId {
        MatchId(value.to_string())
    }
}

/// Lowercase base-36 rendering of `n`.
fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
