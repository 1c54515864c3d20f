//! Unified error type for the server crate.

use enraya_protocol::ProtocolError;
use enraya_transport::TransportError;

/// Top-level error wrapping the layer-specific failures.
///
/// The `#[from]` variants let `?` convert sub-crate errors automatically,
/// so callers of the server crate deal with one type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A transport-level failure (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level failure (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The HTTP leaderboard endpoint failed to bind or serve.
    #[error("leaderboard endpoint failed: {0}")]
    Http(#[source] std::io::Error),
}
