//! Error types for the transport layer.

/// Errors that can occur on the wire.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Binding or accepting connections failed.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// Sending a frame failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving a frame failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// A connection id string did not have the `conn-<n>` form.
    #[error("malformed connection id: {0}")]
    BadConnectionId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_the_cause() {
        let err = TransportError::SendFailed(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe gone",
        ));
        assert!(err.to_string().contains("send failed"));
    }

    #[test]
    fn test_bad_connection_id_names_the_input() {
        let err = TransportError::BadConnectionId("bogus".into());
        assert!(err.to_string().contains("bogus"));
    }
}
