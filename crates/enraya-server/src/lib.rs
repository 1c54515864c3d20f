//! # Enraya server
//!
//! Real-time multiplayer three-in-a-row over persistent WebSocket
//! connections: a matchmaking queue, per-match turn enforcement with
//! win/draw detection, a global ranking with periodic pushes to
//! subscribers, and an automated opponent reachable through the same
//! pairing protocol as any human.
//!
//! The layers, bottom up:
//!
//! ```text
//! enraya-board      the 3×3 grid state machine
//! enraya-ranking    the score table
//! enraya-protocol   verbs, error codes, codecs
//! enraya-transport  WebSocket listener/connections, connection ids
//! enraya-server     coordinator, sessions, virtual opponent, HTTP
//! ```
//!
//! All shared state lives behind one coordinator actor
//! ([`coordinator::spawn`]); everything else — connection handlers, the
//! virtual opponent, restart timers, the [`http`] endpoint — talks to it
//! through a [`coordinator::CoordinatorHandle`].

pub mod bot;
pub mod config;
pub mod coordinator;
pub mod http;

mod error;
mod handler;
mod names;
mod participant;
mod queue;
mod server;
mod session;

pub use config::{BotConfig, CoordinatorConfig, ServerConfig};
pub use coordinator::CoordinatorHandle;
pub use error::ServerError;
pub use participant::EventSender;
pub use server::GameServer;
