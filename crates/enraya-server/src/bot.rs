//! The virtual opponent: an in-process participant backed by a pluggable
//! move-selection capability.
//!
//! The adapter satisfies the same connection-facing protocol as a human —
//! it registers a connection, sends `startGame` targeting its rival's id,
//! and drives itself from the server events it receives, keeping a local
//! board replica as the match unfolds. When a request of its is rejected
//! because the match or player vanished mid-think, that is a normal
//! outcome: the error is logged and never retried.

use std::future::Future;
use std::time::Duration;

use enraya_board::{Board, Cells, Seat};
use enraya_protocol::{ClientCommand, MatchId, Mode, ServerEvent};
use enraya_transport::ConnectionId;
use rand::Rng;
use tokio::sync::mpsc;

use crate::config::BotConfig;
use crate::coordinator::CoordinatorHandle;

/// The opaque move-selection capability: given a board snapshot,
/// eventually returns a cell for `seat`.
///
/// Implementations control their own response time; the shipped
/// [`HeuristicSelector`] sleeps a configurable min–max interval before
/// answering. Returns `None` when no cell is free.
pub trait MoveSelector: Send + 'static {
    fn select(
        &mut self,
        cells: Cells,
        seat: Seat,
    ) -> impl Future<Output = Option<(i64, i64)>> + Send;
}

/// Spawns a virtual opponent that pairs against `rival` through the
/// coordinator's normal surface.
pub(crate) fn launch(handle: CoordinatorHandle, rival: ConnectionId, config: BotConfig) {
    let selector = HeuristicSelector::new(config.min_response, config.max_response);
    tokio::spawn(run(handle, rival, config.display_name, selector));
}

/// The bot's local view of its current match.
struct Replica {
    id: MatchId,
    seat: Seat,
    board: Board,
}

async fn run(
    handle: CoordinatorHandle,
    rival: ConnectionId,
    name: String,
    mut selector: impl MoveSelector,
) {
    let conn = ConnectionId::allocate();
    let (outbox, mut events) = mpsc::unbounded_channel();
    handle.connect(conn, outbox);
    handle.request(
        conn,
        ClientCommand::StartGame(name.clone(), Mode::Pvp, Some(rival.to_string())),
    );
    tracing::debug!(%conn, %rival, "virtual opponent joining");

    let mut replica: Option<Replica> = None;
    while let Some(event) = events.recv().await {
        match event {
            ServerEvent::GameStarted(id, _, your_turn, seat) => {
                let turn = if your_turn { seat } else { seat.rival() };
                let mut r = Replica {
                    id,
                    seat,
                    board: Board::with_turn(turn),
                };
                if your_turn {
                    take_turn(&handle, conn, &name, &mut r, &mut selector).await;
                }
                replica = Some(r);
            }
            ServerEvent::RivalPlay(_, x, y) => {
                if let Some(r) = replica.as_mut() {
                    if !r.board.play(r.seat.rival(), x, y) {
                        tracing::debug!(%conn, x, y, "replica rejected rival move");
                    }
                    if r.board.turn() == r.seat {
                        take_turn(&handle, conn, &name, r, &mut selector).await;
                    }
                }
            }
            ServerEvent::GameRestarted(your_turn) => {
                if let Some(r) = replica.as_mut() {
                    let turn = if your_turn { r.seat } else { r.seat.rival() };
                    r.board = Board::with_turn(turn);
                    if your_turn {
                        take_turn(&handle, conn, &name, r, &mut selector).await;
                    }
                }
            }
            ServerEvent::GameEnded(..) => break,
            ServerEvent::Error(code, message) => {
                // Match or player gone mid-think, or a desynced replica
                // produced an illegal move — drop it, never retry.
                tracing::debug!(%conn, code, message, "request rejected");
            }
            _ => {}
        }
    }

    handle.disconnect(conn);
    tracing::debug!(%conn, "virtual opponent detached");
}

/// Asks the selector for a cell and submits the move.
async fn take_turn(
    handle: &CoordinatorHandle,
    conn: ConnectionId,
    name: &str,
    replica: &mut Replica,
    selector: &mut impl MoveSelector,
) {
    let Some((x, y)) = selector.select(replica.board.cells(), replica.seat).await else {
        return;
    };
    if !replica.board.play(replica.seat, x, y) {
        tracing::debug!(%conn, x, y, "selector produced an illegal move");
    }
    handle.request(
        conn,
        ClientCommand::PlayGame(replica.id.clone(), name.to_string(), x, y),
    );
}

/// The shipped selector: win if able, block the rival's win, take the
/// center, then a random free corner, then any free cell.
pub struct HeuristicSelector {
    min_response: Duration,
    max_response: Duration,
}

impl HeuristicSelector {
    pub fn new(min_response: Duration, max_response: Duration) -> HeuristicSelector {
        HeuristicSelector {
            min_response,
            max_response,
        }
    }

    fn think_time(&self) -> Duration {
        let lo = self.min_response.as_millis() as u64;
        let hi = (self.max_response.as_millis() as u64).max(lo);
        Duration::from_millis(rand::rng().random_range(lo..=hi))
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(
        &mut self,
        cells: Cells,
        seat: Seat,
    ) -> impl Future<Output = Option<(i64, i64)>> + Send {
        let wait = self.think_time();
        let choice = pick(&cells, seat);
        async move {
            tokio::time::sleep(wait).await;
            choice
        }
    }
}

fn pick(cells: &Cells, seat: Seat) -> Option<(i64, i64)> {
    let free: Vec<(i64, i64)> = (0..3)
        .flat_map(|x| (0..3).map(move |y| (x as i64, y as i64)))
        .filter(|&(x, y)| cells[x as usize][y as usize].is_none())
        .collect();
    if free.is_empty() {
        return None;
    }

    // A winning cell for us, then a blocking cell against the rival.
    for side in [seat, seat.rival()] {
        for &(x, y) in &free {
            if completes_line(cells, side, x, y) {
                return Some((x, y));
            }
        }
    }

    if cells[1][1].is_none() {
        return Some((1, 1));
    }

    let corners: Vec<(i64, i64)> = free
        .iter()
        .copied()
        .filter(|&(x, y)| x != 1 && y != 1)
        .collect();
    let mut rng = rand::rng();
    if !corners.is_empty() {
        return Some(corners[rng.random_range(0..corners.len())]);
    }
    Some(free[rng.random_range(0..free.len())])
}

/// Would placing `seat` at (`x`, `y`) complete a line?
fn completes_line(cells: &Cells, seat: Seat, x: i64, y: i64) -> bool {
    let mut probe = *cells;
    probe[x as usize][y as usize] = Some(seat);
    Board::from_parts(probe, seat)
        .winner()
        .map(|line| line.seat)
        == Some(seat)
}
