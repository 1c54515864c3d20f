//! The match coordinator: queue, pairing policy, and dispatch.
//!
//! One actor task owns every piece of shared state — the waiting queue,
//! the active session set, the ranking, the subscriber list — and drains a
//! single command channel, so no two mutations are ever concurrent. The
//! outside world (connection handlers, the virtual opponent, the HTTP
//! endpoint, restart timers) talks to it through a [`CoordinatorHandle`].
//!
//! Deferred work never blocks the loop: restart timers and the periodic
//! leaderboard push re-enter as channel traffic and re-validate that their
//! target still exists before acting.

use std::collections::HashMap;

use enraya_board::Seat;
use enraya_protocol::{
    ClientCommand, GameError, MatchId, Mode, ServerEvent, encode_leaderboard,
};
use enraya_ranking::{Ranking, ScoreEntry};
use enraya_transport::ConnectionId;
use tokio::sync::{mpsc, oneshot};

use crate::bot;
use crate::config::{BotConfig, CoordinatorConfig};
use crate::names::sanitize_name;
use crate::participant::{EventSender, Participant};
use crate::queue::WaitQueue;
use crate::session::{Conclusion, Session};

/// Commands drained by the coordinator task.
pub(crate) enum Command {
    /// A connection came up; its outbound channel is registered.
    Connect {
        conn: ConnectionId,
        outbox: EventSender,
    },

    /// A decoded client request from a connection.
    Request {
        conn: ConnectionId,
        command: ClientCommand,
    },

    /// A connection went away.
    Disconnect { conn: ConnectionId },

    /// A restart timer elapsed for round `round` of match `id`.
    RestartDue { id: MatchId, round: u32 },

    /// Snapshot query used by the HTTP endpoint.
    TopTen {
        reply: oneshot::Sender<Vec<ScoreEntry>>,
    },
}

/// Cheap-to-clone handle for talking to the coordinator.
#[derive(Clone)]
pub struct CoordinatorHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl CoordinatorHandle {
    /// Registers a connection and its outbound event channel.
    pub fn connect(&self, conn: ConnectionId, outbox: EventSender) {
        let _ = self.tx.send(Command::Connect { conn, outbox });
    }

    /// Forwards a client request.
    pub fn request(&self, conn: ConnectionId, command: ClientCommand) {
        let _ = self.tx.send(Command::Request { conn, command });
    }

    /// Reports a connection as gone.
    pub fn disconnect(&self, conn: ConnectionId) {
        let _ = self.tx.send(Command::Disconnect { conn });
    }

    /// The current top-ten snapshot. Empty if the coordinator is gone.
    pub async fn top_ten(&self) -> Vec<ScoreEntry> {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(Command::TopTen { reply }).is_err() {
            return Vec::new();
        }
        rx.await.unwrap_or_default()
    }
}

/// Starts the coordinator task.
///
/// The ranking is constructed by the caller and injected here — a single
/// explicitly-owned instance with process lifetime, not a hidden global.
pub fn spawn(
    config: CoordinatorConfig,
    bot: BotConfig,
    ranking: Ranking,
) -> CoordinatorHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let coordinator = Coordinator {
        config,
        bot,
        ranking,
        connections: HashMap::new(),
        queue: WaitQueue::new(),
        pending: HashMap::new(),
        sessions: HashMap::new(),
        in_session: HashMap::new(),
        subscribers: Vec::new(),
        tx: tx.clone(),
        rx,
    };
    tokio::spawn(coordinator.run());
    CoordinatorHandle { tx }
}

struct Coordinator {
    config: CoordinatorConfig,
    bot: BotConfig,
    ranking: Ranking,

    /// Outbound channels of every live connection.
    connections: HashMap<ConnectionId, EventSender>,

    /// Participants waiting for a FIFO rival.
    queue: WaitQueue,

    /// Participants parked while their virtual rival joins; keyed by
    /// connection so explicit pairing can claim them.
    pending: HashMap<ConnectionId, Participant>,

    /// The active session set.
    sessions: HashMap<MatchId, Session>,

    /// Which session a connection is currently playing in.
    in_session: HashMap<ConnectionId, MatchId>,

    /// Connections receiving the periodic leaderboard push.
    subscribers: Vec<ConnectionId>,

    /// Loopback sender for deferred work (restart timers, the adapter).
    tx: mpsc::UnboundedSender<Command>,
    rx: mpsc::UnboundedReceiver<Command>,
}

impl Coordinator {
    async fn run(mut self) {
        tracing::info!("match coordinator started");

        let period = self.config.broadcast_interval;
        let mut broadcast =
            tokio::time::interval_at(tokio::time::Instant::now() + period, period);

        loop {
            tokio::select! {
                cmd = self.rx.recv() => match cmd {
                    Some(cmd) => self.handle(cmd),
                    None => break,
                },
                _ = broadcast.tick() => self.broadcast_leaderboard(),
            }
        }

        tracing::info!("match coordinator stopped");
    }

    fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Connect { conn, outbox } => {
                tracing::debug!(%conn, "connection registered");
                self.connections.insert(conn, outbox);
            }
            Command::Request { conn, command } => match command {
                ClientCommand::StartGame(name, mode, rival) => {
                    self.start_game(conn, &name, mode, rival.as_deref());
                }
                ClientCommand::PlayGame(id, name, x, y) => {
                    self.play_game(conn, id, &name, x, y);
                }
                ClientCommand::SubscribeToLeaderboard => self.subscribe(conn),
            },
            Command::Disconnect { conn } => self.remove_connection(conn),
            Command::RestartDue { id, round } => self.restart_match(&id, round),
            Command::TopTen { reply } => {
                let _ = reply.send(self.ranking.top(self.config.leaderboard_size).to_vec());
            }
        }
    }

    /// `startGame`: sanitize, guard the queue against duplicate names,
    /// then dispatch by mode.
    fn start_game(
        &mut self,
        conn: ConnectionId,
        raw_name: &str,
        mode: Mode,
        rival_id: Option<&str>,
    ) {
        let name = sanitize_name(raw_name);
        if self.queue.contains_name(&name) {
            Self::reject(self.connections.get(&conn), GameError::UsernameExisting);
            return;
        }
        let Some(outbox) = self.connections.get(&conn) else {
            tracing::debug!(%conn, "start request from unregistered connection");
            return;
        };
        let participant = Participant::new(name, conn, outbox.clone());
        tracing::info!(%conn, name = %participant.name, ?mode, "pairing requested");

        match mode {
            Mode::Virtual => {
                // The requester waits in the pending set; the adapter joins
                // through the same surface and claims them by connection id.
                self.pending.insert(conn, participant);
                bot::launch(
                    CoordinatorHandle {
                        tx: self.tx.clone(),
                    },
                    conn,
                    self.bot.clone(),
                );
            }
            Mode::Pvp => {
                if let Some(rival) = rival_id
                    .and_then(|s| s.parse().ok())
                    .and_then(|id| self.take_known(id))
                {
                    self.open_session(participant, rival);
                    return;
                }
                match self.queue.pop() {
                    Some(rival)
                        if rival.conn != participant.conn
                            && rival.name != participant.name =>
                    {
                        self.open_session(participant, rival);
                    }
                    Some(rival) => {
                        // Self-pairing guard: never pair identical names.
                        // The request is dropped for this round and the
                        // dequeued rival is not requeued; see DESIGN.md.
                        tracing::warn!(
                            %conn,
                            name = %participant.name,
                            rival = %rival.name,
                            "self-pairing guard tripped, request dropped"
                        );
                    }
                    None => {
                        tracing::info!(
                            %conn,
                            name = %participant.name,
                            waiting = self.queue.len() + 1,
                            "no rival waiting, participant queued"
                        );
                        self.queue.push(participant);
                    }
                }
            }
        }
    }

    /// Resolves an explicit-opponent id against the participants the
    /// coordinator currently knows: parked virtual-mode requesters first,
    /// then the waiting queue.
    fn take_known(&mut self, id: ConnectionId) -> Option<Participant> {
        self.pending
            .remove(&id)
            .or_else(|| self.queue.remove_by_conn(id))
    }

    fn open_session(&mut self, a: Participant, b: Participant) {
        let id = MatchId::generate();
        let conns = [a.conn, b.conn];
        let session = Session::open(id.clone(), [a, b]);
        for conn in conns {
            self.in_session.insert(conn, id.clone());
        }
        tracing::info!(%id, "match started");
        self.sessions.insert(id, session);
    }

    /// `playGame`: resolve the session and the mover, apply the move, and
    /// on a concluded round award points and schedule the reset.
    fn play_game(&mut self, conn: ConnectionId, id: MatchId, name: &str, x: i64, y: i64) {
        let outcome = {
            let Some(session) = self.sessions.get_mut(&id) else {
                Self::reject(self.connections.get(&conn), GameError::GameNotFound);
                return;
            };
            let Some(seat) = session.seat_of_name(name) else {
                Self::reject(self.connections.get(&conn), GameError::PlayerNotFound);
                return;
            };
            match session.play(seat, x, y) {
                Err(err) => {
                    Self::reject(self.connections.get(&conn), err);
                    return;
                }
                Ok(None) => None,
                Ok(Some(conclusion)) => {
                    let names = [
                        session.participant(Seat::Zero).name.clone(),
                        session.participant(Seat::One).name.clone(),
                    ];
                    Some((conclusion, names, session.round()))
                }
            }
        };

        if let Some((conclusion, names, round)) = outcome {
            match conclusion {
                Conclusion::Won(winner) => {
                    let winner_name = &names[winner.index()];
                    self.ranking.add(winner_name, self.config.win_points);
                    tracing::info!(%id, winner = %winner_name, "match won");
                }
                Conclusion::Drawn => {
                    for n in &names {
                        self.ranking.add(n, self.config.draw_points);
                    }
                    tracing::info!(%id, "match drawn");
                }
            }
            self.schedule_restart(id, round);
        }
    }

    /// Arms the delayed board reset for round `round` of match `id`.
    fn schedule_restart(&self, id: MatchId, round: u32) {
        let tx = self.tx.clone();
        let delay = self.config.restart_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The match may be gone by now; the handler re-validates.
            let _ = tx.send(Command::RestartDue { id, round });
        });
    }

    fn restart_match(&mut self, id: &MatchId, round: u32) {
        let Some(session) = self.sessions.get_mut(id) else {
            tracing::debug!(%id, "restart timer fired for a vanished match");
            return;
        };
        if session.round() != round || !session.awaiting_restart() {
            tracing::debug!(%id, round, "stale restart timer ignored");
            return;
        }

        session.restart();
        tracing::info!(%id, round = session.round(), "match restarted");

        // Each side learns both cumulative scores alongside the restart.
        for seat in [Seat::Zero, Seat::One] {
            let me = session.participant(seat);
            let rival = session.participant(seat.rival());
            let mine = self.ranking.get(&me.name).unwrap_or(0);
            let theirs = self.ranking.get(&rival.name).unwrap_or(0);
            me.notify(ServerEvent::Score(mine, theirs));
        }
    }

    fn subscribe(&mut self, conn: ConnectionId) {
        if !self.connections.contains_key(&conn) {
            return;
        }
        if !self.subscribers.contains(&conn) {
            tracing::debug!(%conn, "leaderboard subscription added");
            self.subscribers.push(conn);
        }
    }

    fn broadcast_leaderboard(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let encoded =
            encode_leaderboard(self.ranking.top(self.config.leaderboard_size));
        let connections = &self.connections;
        self.subscribers.retain(|conn| match connections.get(conn) {
            Some(outbox) => outbox
                .send(ServerEvent::Leaderboard(encoded.clone()))
                .is_ok(),
            None => false,
        });
    }

    /// Tears down everything a vanished connection was involved in: the
    /// registry, subscriptions, the pending set, the queue, and — if it
    /// was mid-match — the session, which ends in favor of the remaining
    /// participant.
    fn remove_connection(&mut self, conn: ConnectionId) {
        self.connections.remove(&conn);
        self.subscribers.retain(|c| *c != conn);
        if self.pending.remove(&conn).is_some() {
            tracing::debug!(%conn, "pending participant dropped");
        }
        if let Some(waiting) = self.queue.remove_by_conn(conn) {
            tracing::info!(%conn, name = %waiting.name, "queued participant left");
        }

        if let Some(id) = self.in_session.remove(&conn) {
            if let Some(mut session) = self.sessions.remove(&id) {
                session.end_by_disconnect(conn);
                for p in session.participants() {
                    self.in_session.remove(&p.conn);
                }
                tracing::info!(id = %session.id(), %conn, "match ended by disconnect");
            }
        }
    }

    /// Turns a validation failure into an `onError` message plus a log
    /// line. State is never touched on this path.
    fn reject(outbox: Option<&EventSender>, err: GameError) {
        tracing::warn!(code = err.code(), %err, "request rejected");
        if let Some(outbox) = outbox {
            let _ = outbox.send(ServerEvent::error(err));
        }
    }
}
