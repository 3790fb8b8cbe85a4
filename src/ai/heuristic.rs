use crate::game::{Board, Cell};

use super::score::Score;

/// Cells inspected per direction, starting next to the landing cell.
const PROBE_REACH: isize = 3;

/// Upper bound on a heuristic score: at most five directions are walked,
/// three cells each. Keeps heuristic values clear of the forced and
/// illegal sentinels.
pub const MAX_HEURISTIC: u32 = 5 * PROBE_REACH as u32;

/// (row step, column step). Rows grow downward.
type Direction = (isize, isize);

const DOWN: Direction = (1, 0);
const LEFT: Direction = (0, -1);
const RIGHT: Direction = (0, 1);
const DOWN_LEFT: Direction = (1, -1);
const DOWN_RIGHT: Direction = (1, 1);

/// A probe walks each of its directions and scores them together.
type Probe = &'static [Direction];

const VERTICAL_PROBE: Probe = &[DOWN];
const HORIZONTAL_PROBE: Probe = &[LEFT, RIGHT];
const DOWN_LEFT_PROBE: Probe = &[DOWN_LEFT];
const DOWN_RIGHT_PROBE: Probe = &[DOWN_RIGHT];

/// Which optional probes the scorer runs.
///
/// The stock scorer looks down, left-and-right and down-left only. The
/// down-right diagonal is opt-in because enabling it changes which column
/// the computer prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicProbes {
    pub down_right: bool,
}

impl HeuristicProbes {
    pub fn with_down_right() -> Self {
        HeuristicProbes { down_right: true }
    }

    fn probes(self) -> Vec<Probe> {
        let mut probes = vec![VERTICAL_PROBE, HORIZONTAL_PROBE, DOWN_LEFT_PROBE];
        if self.down_right {
            probes.push(DOWN_RIGHT_PROBE);
        }
        probes
    }
}

/// Estimate how useful it is for the computer to drop a piece in `column`.
///
/// From the landing cell, each probe counts computer and player pieces
/// until it meets an empty cell or the edge. A probe that saw both colours
/// is dead and contributes nothing; otherwise it contributes its count, so
/// both extending a friendly run and capping an enemy run score.
pub fn positional_value(board: &Board, column: usize, probes: HeuristicProbes) -> Score {
    let Some(row) = board.landing_row(column) else {
        return Score::Illegal;
    };

    let value: u32 = probes
        .probes()
        .into_iter()
        .map(|directions| probe(board, row as isize, column as isize, directions))
        .sum();

    debug_assert!(value <= MAX_HEURISTIC);
    Score::Heuristic(value)
}

fn probe(board: &Board, row: isize, col: isize, directions: Probe) -> u32 {
    let mut computer = 0;
    let mut player = 0;

    for &(d_row, d_col) in directions {
        for step in 1..=PROBE_REACH {
            match board.get_checked(row + d_row * step, col + d_col * step) {
                Some(Cell::Computer) => computer += 1,
                Some(Cell::Player) => player += 1,
                _ => break,
            }
        }
    }

    if computer > 0 && player > 0 {
        0
    } else {
        computer + player
    }
}
