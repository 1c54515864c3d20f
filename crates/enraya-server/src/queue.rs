//! The waiting queue: participants waiting to be paired, FIFO.

use std::collections::VecDeque;

use enraya_transport::ConnectionId;

use crate::participant::Participant;

/// FIFO queue of participants waiting for a rival.
///
/// Invariant: no two queued participants share a display name. The
/// coordinator enforces it by checking [`contains_name`](Self::contains_name)
/// before pushing.
#[derive(Debug, Default)]
pub(crate) struct WaitQueue {
    waiting: VecDeque<Participant>,
}

impl WaitQueue {
    pub fn new() -> WaitQueue {
        WaitQueue {
            waiting: VecDeque::new(),
        }
    }

    /// `true` when a queued participant already holds `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.waiting.iter().any(|p| p.name == name)
    }

    /// Appends a participant at the tail.
    pub fn push(&mut self, participant: Participant) {
        self.waiting.push_back(participant);
    }

    /// Removes and returns the head of the queue.
    pub fn pop(&mut self) -> Option<Participant> {
        self.waiting.pop_front()
    }

    /// Removes the participant with the given connection, wherever it sits.
    pub fn remove_by_conn(&mut self, conn: ConnectionId) -> Option<Participant> {
        let at = self.waiting.iter().position(|p| p.conn == conn)?;
        self.waiting.remove(at)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn participant(name: &str) -> Participant {
        let (tx, _rx) = mpsc::unbounded_channel();
        Participant::new(name.into(), ConnectionId::allocate(), tx)
    }

    #[test]
    fn test_pop_is_fifo() {
        let mut queue = WaitQueue::new();
        queue.push(participant("a"));
        queue.push(participant("b"));
        queue.push(participant("c"));

        assert_eq!(queue.pop().unwrap().name, "a");
        assert_eq!(queue.pop().unwrap().name, "b");
        assert_eq!(queue.pop().unwrap().name, "c");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_contains_name_tracks_membership() {
        let mut queue = WaitQueue::new();
        assert!(!queue.contains_name("a"));

        queue.push(participant("a"));
        assert!(queue.contains_name("a"));

        queue.pop();
        assert!(!queue.contains_name("a"));
    }

    #[test]
    fn test_remove_by_conn_plucks_from_the_middle() {
        let mut queue = WaitQueue::new();
        queue.push(participant("a"));
        let middle = participant("b");
        let conn = middle.conn;
        queue.push(middle);
        queue.push(participant("c"));

        let removed = queue.remove_by_conn(conn).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().unwrap().name, "a");
        assert_eq!(queue.pop().unwrap().name, "c");
    }

    #[test]
    fn test_remove_by_conn_unknown_is_none() {
        let mut queue = WaitQueue::new();
        queue.push(participant("a"));

        assert!(queue.remove_by_conn(ConnectionId::allocate()).is_none());
        assert_eq!(queue.len(), 1);
    }
}
