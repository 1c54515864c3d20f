//! Codec trait and the JSON implementation.
//!
//! Messages travel as text frames, so a codec here converts between Rust
//! types and `String`s rather than byte buffers. [`JsonCodec`] is the only
//! implementation; the trait exists so a compact binary codec can slot in
//! without touching the call sites.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Converts messages to text frames and back.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a text frame.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes a text frame back into a value.
    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, ProtocolError>;
}

/// A [`Codec`] backed by `serde_json`. Human-readable, trivially
/// inspectable in browser dev tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, ProtocolError> {
        serde_json::from_str(data).map_err(ProtocolError::Decode)
    }
}
