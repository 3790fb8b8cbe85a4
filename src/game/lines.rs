//! The four lines (row, column and both diagonals) running through a cell.

use crate::error::NoMoveYet;

use super::board::{Board, Cell, Position};

/// Cells along each line through a position, clipped to the board and
/// ordered left to right / top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    pub horizontal: Vec<Cell>,
    pub vertical: Vec<Cell>,
    /// Bottom-left to top-right, listed from the top row down.
    pub slash: Vec<Cell>,
    /// Top-left to bottom-right, listed from the top row down.
    pub backslash: Vec<Cell>,
}

impl Lines {
    /// Extract the lines through `position`
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board. Use
    /// [`Lines::through_last_move`] for a position that is always valid.
    pub fn through(board: &Board, position: Position) -> Self {
        let Position { column, row } = position;
        let (c, r) = (column as isize, row as isize);

        let horizontal = (0..board.width()).map(|col| board.get(row, col)).collect();
        let vertical = (0..board.height()).map(|h| board.get(h, column)).collect();
        let slash = diagonal(board, |h| r + c - h);
        let backslash = diagonal(board, |h| c - r + h);

        Lines {
            horizontal,
            vertical,
            slash,
            backslash,
        }
    }

    /// Extract the lines through the board's most recent move
    pub fn through_last_move(board: &Board) -> Result<Self, NoMoveYet> {
        let position = board.last_move().ok_or(NoMoveYet)?;
        Ok(Self::through(board, position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Cell]> {
        [
            self.horizontal.as_slice(),
            self.vertical.as_slice(),
            self.slash.as_slice(),
            self.backslash.as_slice(),
        ]
        .into_iter()
    }
}

/// Walk every row top to bottom, keeping the cells whose column (computed
/// from the row) lands on the board.
fn diagonal(board: &Board, column_at: impl Fn(isize) -> isize) -> Vec<Cell> {
    (0..board.height() as isize)
        .filter_map(|h| board.get_checked(h, column_at(h)))
        .collect()
}
