//! WebSocket transport for Enraya.
//!
//! The rest of the stack treats a participant's connection as an opaque
//! handle: a [`ConnectionId`] plus an outbound channel. This crate owns
//! the real sockets behind that handle — a [`WsListener`] accepting
//! connections and [`WsConnection`]s carrying JSON text frames — and the
//! id allocator, which is also used for in-process participants (the
//! virtual opponent) that never touch a socket.

mod error;
mod ws;

pub use error::TransportError;
pub use ws::{WsConnection, WsListener, WsReceiver, WsSender};

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for allocating unique connection ids.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier for a connection.
///
/// The display form `conn-<n>` is stable and parseable — it is what the
/// `rivalId` argument of `startGame` carries when targeting a specific
/// participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocates the next process-unique id.
    pub fn allocate() -> ConnectionId {
        ConnectionId(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

impl FromStr for ConnectionId {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("conn-")
            .ok_or_else(|| TransportError::BadConnectionId(s.to_string()))?;
        let n: u64 = digits
            .parse()
            .map_err(|_| TransportError::BadConnectionId(s.to_string()))?;
        Ok(ConnectionId(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_yields_distinct_ids() {
        let a = ConnectionId::allocate();
        let b = ConnectionId::allocate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let id = ConnectionId::allocate();
        let parsed: ConnectionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_rejects_malformed_ids() {
        assert!("7".parse::<ConnectionId>().is_err());
        assert!("conn-".parse::<ConnectionId>().is_err());
        assert!("conn-x".parse::<ConnectionId>().is_err());
        assert!("session-7".parse::<ConnectionId>().is_err());
    }

    #[test]
    fn test_works_as_map_key() {
        use std::collections::HashMap;
        let a = ConnectionId::allocate();
        let mut map = HashMap::new();
        map.insert(a, "alice");
        assert_eq!(map[&a], "alice");
    }
}
