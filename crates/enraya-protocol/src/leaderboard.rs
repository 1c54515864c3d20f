//! Compact leaderboard snapshot encoding.
//!
//! Subscribed connections receive the top ten as a single string:
//! `name=score` pairs joined by `/`, names percent-encoded so that `=`,
//! `/` and anything else outside the RFC 3986 unreserved set cannot break
//! the framing.

use enraya_ranking::ScoreEntry;

/// Encodes a ranking snapshot into the `onLeaderboard` payload.
pub fn encode_leaderboard(entries: &[ScoreEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}={}", percent_encode(&e.name), e.score))
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encodes every byte outside the RFC 3986 unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
