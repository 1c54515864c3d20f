//! Per-connection handler: decode inbound frames, pump outbound events.
//!
//! Each accepted connection gets one task running this handler plus a
//! writer task. The writer drains the connection's event channel into the
//! socket; the reader loop decodes client commands and forwards them to
//! the coordinator. Neither direction ever blocks the coordinator.

use enraya_protocol::{ClientCommand, Codec, JsonCodec, ServerEvent};
use enraya_transport::WsConnection;
use tokio::sync::mpsc;

use crate::coordinator::CoordinatorHandle;

pub(crate) async fn handle_connection(conn: WsConnection, handle: CoordinatorHandle) {
    let conn_id = conn.id();
    tracing::info!(%conn_id, peer = %conn.peer_addr(), "client connected");

    let (mut sender, mut receiver) = conn.split();
    let (outbox, mut events) = mpsc::unbounded_channel::<ServerEvent>();
    handle.connect(conn_id, outbox);

    let codec = JsonCodec;
    let writer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match codec.encode(&event) {
                Ok(text) => {
                    if sender.send(&text).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(%conn_id, error = %e, "failed to encode event")
                }
            }
        }
        let _ = sender.close().await;
    });

    loop {
        match receiver.recv().await {
            Ok(Some(text)) => match codec.decode::<ClientCommand>(&text) {
                Ok(command) => handle.request(conn_id, command),
                Err(e) => {
                    // Malformed frames are skipped, the connection lives on.
                    tracing::debug!(%conn_id, error = %e, "ignoring malformed frame");
                }
            },
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "receive error");
                break;
            }
        }
    }

    // Unregistering drops every clone of the outbox, which ends the writer.
    handle.disconnect(conn_id);
    let _ = writer.await;
}
