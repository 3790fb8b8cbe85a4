use crate::error::NoMoveYet;

use super::board::{Board, Cell};
use super::lines::Lines;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Check whether `line` holds four consecutive `cell`s anywhere along it.
/// Never true for `Cell::Empty`.
pub fn has_four_in_a_row(line: &[Cell], cell: Cell) -> bool {
    cell != Cell::Empty
        && line
            .windows(CONNECT)
            .any(|window| window.iter().all(|&c| c == cell))
}

/// Check if the most recent move completed four in a row.
///
/// Only the lines through the last move are inspected: a new win always
/// includes the newest piece. Returns false (and logs a warning) when no
/// move has been made.
pub fn is_winning_play(board: &Board) -> bool {
    let Some(last) = board.last_move() else {
        log::warn!("win check skipped: {}", NoMoveYet);
        return false;
    };
    let cell = board.get(last.row, last.column);

    Lines::through(board, last)
        .iter()
        .any(|line| has_four_in_a_row(line, cell))
}
