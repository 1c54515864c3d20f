//! A participant: display name plus opaque connection handle.

use enraya_protocol::ServerEvent;
use enraya_transport::ConnectionId;
use tokio::sync::mpsc;

/// Outbound event channel for one connection.
///
/// Unbounded on purpose: deliveries are fire-and-forget and must never
/// block the coordinator's command loop.
pub type EventSender = mpsc::UnboundedSender<ServerEvent>;

/// A participant owned by the coordinator while queued or in a match.
#[derive(Debug, Clone)]
pub(crate) struct Participant {
    pub name: String,
    pub conn: ConnectionId,
    pub outbox: EventSender,
}

impl Participant {
    pub fn new(name: String, conn: ConnectionId, outbox: EventSender) -> Participant {
        Participant { name, conn, outbox }
    }

    /// Fire-and-forget event delivery.
    ///
    /// A gone receiver means a disconnect is already in flight; the event
    /// is simply dropped.
    pub fn notify(&self, event: ServerEvent) {
        if self.outbox.send(event).is_err() {
            tracing::debug!(conn = %self.conn, "dropping event for closed connection");
        }
    }
}
