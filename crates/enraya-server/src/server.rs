//! `GameServer`: binds the transport and runs the accept loop.

use std::net::SocketAddr;

use enraya_ranking::Ranking;
use enraya_transport::WsListener;

use crate::ServerError;
use crate::config::ServerConfig;
use crate::coordinator::{self, CoordinatorHandle};
use crate::handler::handle_connection;

/// A bound Enraya match server.
///
/// [`bind`](Self::bind) brings up the WebSocket endpoint and the
/// coordinator; [`run`](Self::run) accepts connections until the process
/// terminates.
pub struct GameServer {
    listener: WsListener,
    handle: CoordinatorHandle,
}

impl GameServer {
    /// Binds the WebSocket endpoint and starts the coordinator.
    ///
    /// The ranking instance is constructed by the caller — once, at
    /// startup — and injected here for the life of the process.
    pub async fn bind(config: ServerConfig, ranking: Ranking) -> Result<GameServer, ServerError> {
        let listener = WsListener::bind(&config.game_addr).await?;
        let handle = coordinator::spawn(config.coordinator, config.bot, ranking);
        Ok(GameServer { listener, handle })
    }

    /// The local address the match endpoint is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// A coordinator handle for auxiliary surfaces (the HTTP endpoint,
    /// tooling).
    pub fn handle(&self) -> CoordinatorHandle {
        self.handle.clone()
    }

    /// Runs the accept loop, spawning a handler task per connection.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("enraya server running");
        loop {
            match self.listener.accept().await {
                Ok(conn) => {
                    let handle = self.handle.clone();
                    tokio::spawn(handle_connection(conn, handle));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
