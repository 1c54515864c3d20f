//! Message types: every frame is a verb plus positional arguments.
//!
//! The adjacently tagged serde representation produces exactly the wire
//! shape the protocol calls for:
//!
//! ```json
//! { "verb": "playGame", "args": ["m3x-7", "alice", 0, 2] }
//! ```
//!
//! Verbs with a single argument carry it bare (`"args": true`), and verbs
//! without arguments omit `args` entirely.

use enraya_board::{LineKind, Seat};
use serde::{Deserialize, Serialize};

use crate::MatchId;

/// How a player wants to be paired.
///
/// `0` on the wire is a human rival (queue or explicit opponent), `1`
/// requests the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    Pvp,
    Virtual,
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        match mode {
            Mode::Pvp => 0,
            Mode::Virtual => 1,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Pvp),
            1 => Ok(Mode::Virtual),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Outcome tag delivered with `onWin` and `onGameEnded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Victory,
    Defeat,
    Draw,
}

/// Client → server verbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verb", content = "args")]
pub enum ClientCommand {
    /// `startGame(username, mode, rivalId)` — request pairing. `rivalId`
    /// is `null` unless targeting a specific known participant.
    #[serde(rename = "startGame")]
    StartGame(String, Mode, Option<String>),

    /// `playGame(gameId, username, x, y)` — place a mark at row `x`,
    /// column `y` of an active match.
    #[serde(rename = "playGame")]
    PlayGame(MatchId, String, i64, i64),

    /// `subscribeToLeaderboard()` — start receiving periodic top-ten
    /// snapshots on this connection.
    #[serde(rename = "subscribeToLeaderboard")]
    SubscribeToLeaderboard,
}

/// Server → client verbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verb", content = "args")]
pub enum ServerEvent {
    /// `onGameStarted(gameId, rivalName, yourTurn, yourIndex)`.
    #[serde(rename = "onGameStarted")]
    GameStarted(MatchId, String, bool, Seat),

    /// `onGameRestarted(yourTurn)` — the board was reset for a new round.
    #[serde(rename = "onGameRestarted")]
    GameRestarted(bool),

    /// `onRivalPlay(gameId, x, y)` — the opponent placed a mark.
    #[serde(rename = "onRivalPlay")]
    RivalPlay(MatchId, i64, i64),

    /// `onWin(gameId, winnerName, result, where, index)`.
    #[serde(rename = "onWin")]
    Win(MatchId, String, MatchOutcome, LineKind, u8),

    /// `onDraw(gameId)` — board full, nobody won.
    #[serde(rename = "onDraw")]
    Draw(MatchId),

    /// `onGameEnded(gameId, winnerName, result)` — terminal end, e.g. the
    /// rival disconnected.
    #[serde(rename = "onGameEnded")]
    GameEnded(MatchId, String, MatchOutcome),

    /// `onScore(yourScore, rivalScore)` — cumulative scores after a round.
    #[serde(rename = "onScore")]
    Score(u64, u64),

    /// `onLeaderboard(encodedTopTen)` — see
    /// [`encode_leaderboard`](crate::encode_leaderboard).
    #[serde(rename = "onLeaderboard")]
    Leaderboard(String),

    /// `onError(code, message)` — a rejected request, state unchanged.
    #[serde(rename = "onError")]
    Error(u16, String),
}

impl ServerEvent {
    /// Builds the `onError` event for a validation failure.
    pub fn error(err: crate::GameError) -> ServerEvent {
        ServerEvent::Error(err.code(), err.to_string())
    }
}
