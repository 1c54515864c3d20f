//! One match: two participants sharing a board until disconnect or end.
//!
//! A session is a plain value owned by the coordinator — all of its
//! transitions happen on the coordinator's single thread of control. The
//! session emits lifecycle events straight to its participants; the
//! coordinator layers scoring and restart scheduling on top of the
//! [`Conclusion`] it reports back.

use enraya_board::{Board, Seat};
use enraya_protocol::{GameError, MatchId, MatchOutcome, ServerEvent};
use enraya_transport::ConnectionId;

use crate::participant::Participant;

/// Lifecycle state of a session.
///
/// ```text
/// InProgress ──(win)──→ Won ──┐
///     │  ↑                    ├─(after delay)─→ InProgress
///     │  └──(draw)──→ Drawn ──┘
///     └────(disconnect, from any state)────→ Ended (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    InProgress,
    Won,
    Drawn,
    Ended,
}

/// How a round concluded, reported to the coordinator for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conclusion {
    Won(Seat),
    Drawn,
}

/// A live match between two participants.
#[derive(Debug)]
pub(crate) struct Session {
    id: MatchId,
    participants: [Participant; 2],
    board: Board,
    state: SessionState,
    round: u32,
}

impl Session {
    /// Creates the session and announces it to both participants: the
    /// rival's name, whether they hold the opening turn, and their seat.
    pub fn open(id: MatchId, participants: [Participant; 2]) -> Session {
        let session = Session {
            id,
            participants,
            board: Board::new(),
            state: SessionState::InProgress,
            round: 0,
        };
        for seat in [Seat::Zero, Seat::One] {
            let rival = session.participant(seat.rival());
            session.participant(seat).notify(ServerEvent::GameStarted(
                session.id.clone(),
                rival.name.clone(),
                session.board.turn() == seat,
                seat,
            ));
        }
        session
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat.index()]
    }

    /// The seat held by the participant with this display name, if any.
    pub fn seat_of_name(&self, name: &str) -> Option<Seat> {
        self.participants
            .iter()
            .position(|p| p.name == name)
            .map(|at| if at == 0 { Seat::Zero } else { Seat::One })
    }

    /// `true` while a concluded round waits for its delayed reset.
    pub fn awaiting_restart(&self) -> bool {
        matches!(self.state(), SessionState::Won | SessionState::Drawn)
    }

    /// Applies a move by `seat` at row `x`, column `y`.
    ///
    /// A rejected move — wrong turn, out of range, occupied cell, or a
    /// round not in progress — mutates nothing and reports
    /// [`GameError::PlayRejected`]; the session stays usable. A legal move
    /// notifies the rival, and on a completed round notifies both sides of
    /// the outcome before reporting the [`Conclusion`].
    pub fn play(
        &mut self,
        seat: Seat,
        x: i64,
        y: i64,
    ) -> Result<Option<Conclusion>, GameError> {
        if self.state != SessionState::InProgress {
            return Err(GameError::PlayRejected);
        }
        if !self.board.play(seat, x, y) {
            return Err(GameError::PlayRejected);
        }

        self.participant(seat.rival())
            .notify(ServerEvent::RivalPlay(self.id.clone(), x, y));

        if let Some(line) = self.board.winner() {
            self.state = SessionState::Won;
            let winner_name = self.participant(line.seat).name.clone();
            for s in [Seat::Zero, Seat::One] {
                let outcome = if s == line.seat {
                    MatchOutcome::Victory
                } else {
                    MatchOutcome::Defeat
                };
                self.participant(s).notify(ServerEvent::Win(
                    self.id.clone(),
                    winner_name.clone(),
                    outcome,
                    line.kind,
                    line.index,
                ));
            }
            return Ok(Some(Conclusion::Won(line.seat)));
        }

        if self.board.is_full() {
            self.state = SessionState::Drawn;
            for s in [Seat::Zero, Seat::One] {
                self.participant(s)
                    .notify(ServerEvent::Draw(self.id.clone()));
            }
            return Ok(Some(Conclusion::Drawn));
        }

        Ok(None)
    }

    /// Resets the board for a new round: fresh grid, fresh random turn.
    ///
    /// Only meaningful after a win or a draw — the coordinator guards the
    /// call with [`awaiting_restart`](Self::awaiting_restart). Bumps the
    /// round counter so that stale restart timers can be told apart.
    pub fn restart(&mut self) {
        self.board.restart();
        self.state = SessionState::InProgress;
        self.round += 1;
        for seat in [Seat::Zero, Seat::One] {
            self.participant(seat)
                .notify(ServerEvent::GameRestarted(self.board.turn() == seat));
        }
    }

    /// Terminal end: `leaver` disconnected.
    ///
    /// The remaining participant receives a synthesized outcome — victory,
    /// or draw when the current round had already concluded without a
    /// winner. No further transitions happen after this.
    pub fn end_by_disconnect(&mut self, leaver: ConnectionId) {
        let result = if self.state == SessionState::Drawn {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Victory
        };
        self.state = SessionState::Ended;

        if let Some(remaining) = self.participants.iter().find(|p| p.conn != leaver) {
            remaining.notify(ServerEvent::GameEnded(
                self.id.clone(),
                remaining.name.clone(),
                result,
            ));
        }
    }
}
