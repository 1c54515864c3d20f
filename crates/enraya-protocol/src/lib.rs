//! Wire protocol for Enraya.
//!
//! Defines the "language" spoken over a match connection:
//!
//! - **Messages** ([`ClientCommand`], [`ServerEvent`]) — every message is a
//!   verb plus positional arguments, `{"verb": ..., "args": ...}` in JSON.
//! - **Error codes** ([`GameError`]) — the four stable, caller-visible
//!   validation failures.
//! - **Codec** ([`Codec`], [`JsonCodec`]) — how messages become text
//!   frames and back.
//! - **Identifiers** ([`MatchId`]) — time-derived match tokens.
//! - **Leaderboard encoding** ([`encode_leaderboard`]) — the compact
//!   `name=score/...` snapshot pushed to subscribers.
//!
//! The protocol layer knows the board vocabulary ([`Seat`],
//! [`LineKind`](enraya_board::LineKind)) because those values travel on
//! the wire; it knows nothing about connections or matchmaking.

mod codec;
mod error;
mod id;
mod leaderboard;
mod message;

pub use codec::{Codec, JsonCodec};
pub use error::{GameError, ProtocolError};
pub use id::MatchId;
pub use leaderboard::encode_leaderboard;
pub use message::{ClientCommand, MatchOutcome, Mode, ServerEvent};
