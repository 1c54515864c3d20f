//! Error types for the protocol layer.

/// The caller-visible validation failures, each with a stable numeric
/// code that travels in `onError`.
///
/// These are non-fatal by contract: the server reports them to the
/// originating connection and leaves all state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A queued player already holds this display name.
    #[error("a player with the same name is already waiting for a match")]
    UsernameExisting,

    /// No active match has the given id.
    #[error("game not found")]
    GameNotFound,

    /// The named player is not part of that match.
    #[error("player not found in that game")]
    PlayerNotFound,

    /// The move was rejected: wrong turn, out of range, or occupied cell.
    #[error("illegal move")]
    PlayRejected,
}

impl GameError {
    /// The stable wire code for this error.
    pub fn code(self) -> u16 {
        match self {
            GameError::UsernameExisting => 1,
            GameError::GameNotFound => 2,
            GameError::PlayerNotFound => 3,
            GameError::PlayRejected => 4,
        }
    }
}

/// Errors that can occur while encoding or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a message into a text frame).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, unknown verb, or arguments
    /// of the wrong shape.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The message parsed but violates a protocol rule.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
