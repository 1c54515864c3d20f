//! The 3×3 grid and its rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Seat;

/// The grid: `None` is an empty cell, `Some(seat)` is that seat's mark.
///
/// Indexed `cells[x][y]` where `x` is the row and `y` the column, both 0–2.
pub type Cells = [[Option<Seat>; 3]; 3];

/// Kind of completed line. Lowercase on the wire (`"row"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// A completed line: who made it and where it sits.
///
/// `index` is 0–2; for diagonals, 0 is top-left → bottom-right and 1 the
/// anti-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub seat: Seat,
    pub kind: LineKind,
    pub index: u8,
}

/// Every line on the grid, in detection priority order: both diagonals
/// first, then rows 0–2, then columns 0–2. The first fully-equal non-empty
/// line in this order is the one reported.
const LINES: [(LineKind, u8, [(usize, usize); 3]); 8] = [
    (LineKind::Diagonal, 0, [(0, 0), (1, 1), (2, 2)]),
    (LineKind::Diagonal, 1, [(0, 2), (1, 1), (2, 0)]),
    (LineKind::Row, 0, [(0, 0), (0, 1), (0, 2)]),
    (LineKind::Row, 1, [(1, 0), (1, 1), (1, 2)]),
    (LineKind::Row, 2, [(2, 0), (2, 1), (2, 2)]),
    (LineKind::Column, 0, [(0, 0), (1, 0), (2, 0)]),
    (LineKind::Column, 1, [(0, 1), (1, 1), (2, 1)]),
    (LineKind::Column, 2, [(0, 2), (1, 2), (2, 2)]),
];

/// The 3×3 board plus whose turn it is.
///
/// Mutated only through [`play`](Board::play) and
/// [`restart`](Board::restart); a rejected move leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    turn: Seat,
}

impl Board {
    /// Creates an empty board with a randomly drawn starting turn.
    pub fn new() -> Board {
        Board::with_turn(Seat::random())
    }

    /// Creates an empty board with a fixed starting turn.
    pub fn with_turn(turn: Seat) -> Board {
        Board {
            cells: [[None; 3]; 3],
            turn,
        }
    }

    /// Assembles a board from raw parts.
    ///
    /// Useful for boards constructed out of normal play sequence (seeded
    /// test positions, state restored by a future extension). No legality
    /// check is performed on `cells`.
    pub fn from_parts(cells: Cells, turn: Seat) -> Board {
        Board { cells, turn }
    }

    /// The seat holding the turn.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// A copy of the grid.
    pub fn cells(&self) -> Cells {
        self.cells
    }

    /// Attempts a move by `seat` at row `x`, column `y`.
    ///
    /// Returns `false` — and mutates nothing — when it is not `seat`'s
    /// turn, when either coordinate falls outside 0–2, or when the target
    /// cell is already occupied. On success the mark is written and the
    /// turn flips to the rival.
    pub fn play(&mut self, seat: Seat, x: i64, y: i64) -> bool {
        if self.turn != seat {
            return false;
        }
        if !(0..=2).contains(&x) || !(0..=2).contains(&y) {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if self.cells[x][y].is_some() {
            return false;
        }

        self.cells[x][y] = Some(seat);
        self.turn = seat.rival();
        true
    }

    /// Scans for a completed line.
    ///
    /// Lines are checked in the fixed order of [`LINES`]; the first
    /// fully-equal non-empty one wins. Under legal alternating play at most
    /// one line can be newly completed per move, so the order only matters
    /// for boards assembled via [`from_parts`](Board::from_parts).
    pub fn winner(&self) -> Option<WinLine> {
        for (kind, index, coords) in LINES {
            let (x0, y0) = coords[0];
            if let Some(seat) = self.cells[x0][y0] {
                if coords.iter().all(|&(x, y)| self.cells[x][y] == Some(seat)) {
                    return Some(WinLine { seat, kind, index });
                }
            }
        }
        None
    }

    /// `true` when all nine cells are occupied.
    ///
    /// A full board with no [`winner`](Board::winner) is a draw.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Clears the grid and draws a fresh random starting turn.
    ///
    /// The re-randomization applies to every restart, post-game resets
    /// included — the fairness rule of the matchup.
    pub fn restart(&mut self) {
        self.cells = [[None; 3]; 3];
        self.turn = Seat::random();
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Renders one row per line, cells comma-separated, `-` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(seat) => seat.index().to_string(),
                    None => "-".to_string(),
                })
                .collect();
            write!(f, "{}", rendered.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a board by replaying `moves` from a known starting turn.
    fn replay(start: Seat, moves: &[(i64, i64)]) -> Board {
        let mut board = Board::with_turn(start);
        for &(x, y) in moves {
            let seat = board.turn();
            assert!(board.play(seat, x, y), "replay move ({x},{y}) rejected");
        }
        board
    }

    // =====================================================================
    // play()
    // =====================================================================

    #[test]
    fn test_play_wrong_turn_rejected_without_mutation() {
        let mut board = Board::with_turn(Seat::Zero);
        let before = board.clone();

        assert!(!board.play(Seat::One, 0, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_out_of_range_rejected_without_mutation() {
        let mut board = Board::with_turn(Seat::Zero);
        let before = board.clone();

        assert!(!board.play(Seat::Zero, 3, 0));
        assert!(!board.play(Seat::Zero, 0, 3));
        assert!(!board.play(Seat::Zero, -1, 0));
        assert!(!board.play(Seat::Zero, 0, -1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_occupied_cell_rejected_without_mutation() {
        let mut board = Board::with_turn(Seat::Zero);
        assert!(board.play(Seat::Zero, 1, 1));
        let before = board.clone();

        assert!(!board.play(Seat::One, 1, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_success_writes_mark_and_flips_turn() {
        let mut board = Board::with_turn(Seat::Zero);

        assert!(board.play(Seat::Zero, 0, 2));
        assert_eq!(board.cells()[0][2], Some(Seat::Zero));
        assert_eq!(board.turn(), Seat::One);
    }

    #[test]
    fn test_turn_alternates_strictly_over_a_sequence() {
        // After N legal moves the turn equals the starting turn when N is
        // even and the rival when N is odd.
        let start = Seat::One;
        let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];
        let mut board = Board::with_turn(start);

        for (n, &(x, y)) in moves.iter().enumerate() {
            let expected = if n % 2 == 0 { start } else { start.rival() };
            assert_eq!(board.turn(), expected, "before move {n}");
            assert!(board.play(board.turn(), x, y));
        }
    }

    // =====================================================================
    // winner()
    // =====================================================================

    #[test]
    fn test_winner_none_on_empty_board() {
        assert_eq!(Board::with_turn(Seat::Zero).winner(), None);
    }

    #[test]
    fn test_winner_detects_each_row() {
        for row in 0..3i64 {
            // Winner fills the row; loser answers elsewhere.
            let other = (row + 1) % 3;
            let board = replay(
                Seat::Zero,
                &[(row, 0), (other, 0), (row, 1), (other, 1), (row, 2)],
            );
            assert_eq!(
                board.winner(),
                Some(WinLine {
                    seat: Seat::Zero,
                    kind: LineKind::Row,
                    index: row as u8
                })
            );
        }
    }

    #[test]
    fn test_winner_detects_each_column() {
        for col in 0..3i64 {
            let other = (col + 1) % 3;
            let board = replay(
                Seat::One,
                &[(0, col), (0, other), (1, col), (1, other), (2, col)],
            );
            assert_eq!(
                board.winner(),
                Some(WinLine {
                    seat: Seat::One,
                    kind: LineKind::Column,
                    index: col as u8
                })
            );
        }
    }

    #[test]
    fn test_winner_detects_primary_diagonal() {
        let board = replay(Seat::Zero, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(
            board.winner(),
            Some(WinLine {
                seat: Seat::Zero,
                kind: LineKind::Diagonal,
                index: 0
            })
        );
    }

    #[test]
    fn test_winner_detects_anti_diagonal() {
        let board = replay(Seat::Zero, &[(0, 2), (0, 1), (1, 1), (0, 0), (2, 0)]);
        assert_eq!(
            board.winner(),
            Some(WinLine {
                seat: Seat::Zero,
                kind: LineKind::Diagonal,
                index: 1
            })
        );
    }

    #[test]
    fn test_winner_scan_order_prefers_diagonal_over_row() {
        // Both the primary diagonal and row 0 are complete for the same
        // seat — unreachable through alternating play, assembled directly.
        let s = Some(Seat::Zero);
        let cells: Cells = [[s, s, s], [None, s, None], [None, None, s]];
        let board = Board::from_parts(cells, Seat::One);

        let line = board.winner().expect("a line is complete");
        assert_eq!(line.kind, LineKind::Diagonal);
        assert_eq!(line.index, 0);
    }

    #[test]
    fn test_winner_scan_order_prefers_row_over_column() {
        let s = Some(Seat::One);
        let cells: Cells = [[s, s, s], [s, None, None], [s, None, None]];
        let board = Board::from_parts(cells, Seat::Zero);

        let line = board.winner().expect("a line is complete");
        assert_eq!(line.kind, LineKind::Row);
        assert_eq!(line.index, 0);
    }

    #[test]
    fn test_winner_scan_order_prefers_anti_diagonal_over_rows() {
        let s = Some(Seat::Zero);
        let cells: Cells = [[s, s, s], [None, s, None], [s, None, None]];
        let board = Board::from_parts(cells, Seat::One);

        let line = board.winner().expect("a line is complete");
        assert_eq!(line.kind, LineKind::Diagonal);
        assert_eq!(line.index, 1);
    }

    // =====================================================================
    // is_full()
    // =====================================================================

    #[test]
    fn test_is_full_false_with_any_empty_cell() {
        let board = replay(Seat::Zero, &[(0, 0), (1, 1)]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        //  0 | 1 | 0
        //  0 | 1 | 0
        //  1 | 0 | 1
        let board = replay(
            Seat::Zero,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (2, 0),
                (1, 2),
                (2, 2),
                (2, 1),
            ],
        );
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    // =====================================================================
    // restart()
    // =====================================================================

    #[test]
    fn test_restart_clears_the_grid() {
        let mut board = replay(Seat::Zero, &[(0, 0), (1, 1), (2, 2)]);

        board.restart();

        assert_eq!(board.cells(), [[None; 3]; 3]);
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_restart_eventually_draws_both_starting_turns() {
        let mut board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            board.restart();
            seen.insert(board.turn());
        }
        assert_eq!(seen.len(), 2, "restart must re-randomize the turn");
    }

    // =====================================================================
    // Display
    // =====================================================================

    #[test]
    fn test_display_renders_rows_with_dashes_for_empty() {
        let board = replay(Seat::Zero, &[(0, 0), (1, 1)]);
        assert_eq!(board.to_string(), "0,-,-\n-,1,-\n-,-,-");
    }
}
