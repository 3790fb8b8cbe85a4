use std::ops::Range;

use crate::game::{is_winning_play, Board, Side};

use super::heuristic::{positional_value, HeuristicProbes};
use super::score::{Score, SELECTION_FLOOR};

/// Move selector configuration.
///
/// Both switches default to the classic behaviour: the rightmost column is
/// never evaluated and the down-right diagonal is never probed. Turning
/// either on changes which column the computer prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Also score the rightmost column.
    pub evaluate_last_column: bool,
    /// Add a down-right probe to the positional heuristic.
    pub probe_down_right: bool,
}

/// Single-ply move selection for the computer: take a win or block a loss
/// when one is available, otherwise play the best positional column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSelector {
    config: SelectorConfig,
}

impl MoveSelector {
    pub fn new(config: SelectorConfig) -> Self {
        MoveSelector { config }
    }

    /// Columns that get scored on a board `width` columns wide.
    pub fn evaluated_columns(&self, width: usize) -> Range<usize> {
        if self.config.evaluate_last_column {
            0..width
        } else {
            0..width.saturating_sub(1)
        }
    }

    fn probes(&self) -> HeuristicProbes {
        HeuristicProbes {
            down_right: self.config.probe_down_right,
        }
    }

    /// Score one column. Any pieces simulated on `board` are removed again
    /// before this returns.
    pub fn score_column(&self, board: &mut Board, column: usize) -> Score {
        if board.is_column_full(column) {
            return Score::Illegal;
        }

        // Both checks always run; either one forces the column.
        let wins = completes_four(board, column, Side::Computer);
        let blocks = completes_four(board, column, Side::Player);
        if wins || blocks {
            return Score::Forced;
        }

        positional_value(board, column, self.probes())
    }

    /// Per-column scores, `None` for columns that are not evaluated.
    pub fn scores(&self, board: &mut Board) -> Vec<Option<Score>> {
        let evaluated = self.evaluated_columns(board.width());
        (0..board.width())
            .map(|col| evaluated.contains(&col).then(|| self.score_column(board, col)))
            .collect()
    }

    /// Pick the computer's column: the highest score, lowest index on ties.
    ///
    /// Returns `None` if no evaluated column can be played. Callers must
    /// check that a move exists first.
    pub fn select(&self, board: &mut Board) -> Option<usize> {
        let mut best = None;
        let mut max = SELECTION_FLOOR;

        for (col, score) in self.scores(board).into_iter().enumerate() {
            let Some(score) = score else { continue };
            log::debug!("column {col}: {score}");
            if score.value() > max {
                max = score.value();
                best = Some(col);
            }
        }

        log::debug!("selected column {best:?} (score {max})");
        best
    }
}

/// Would `side` complete four in a row by dropping into `column`?
fn completes_four(board: &mut Board, column: usize, side: Side) -> bool {
    board
        .simulate(column, side)
        .is_some_and(|sim| is_winning_play(&sim))
}
