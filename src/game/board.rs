use std::fmt;
use std::ops::Deref;

use crate::error::{BoardError, InvalidColumnReason, MoveError};

use super::side::Side;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
/// Most cells a board may hold.
pub const MAX_CELLS: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// Character used in the text rendering of the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'R',
            Cell::Computer => 'Y',
        }
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, `height` rows of `width` cells.
    cells: Vec<Cell>,
    last_move: Option<Position>,
    move_count: usize,
}

impl Board {
    /// Create a new empty board with the given dimensions. Both must be
    /// positive and the board may hold at most [`MAX_CELLS`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0 && cells <= MAX_CELLS)
            .ok_or(BoardError::InvalidDimensions { width, height })?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; cells],
            last_move: None,
            move_count: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Position of the most recent piece, `None` before the first move
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Like [`Board::get`], but `None` outside the board. Takes signed
    /// coordinates so callers can step off any edge.
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }

    fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row * self.width + position.column] = cell;
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Row a piece dropped in `col` would land in
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if every cell has been filled
    pub fn is_full(&self) -> bool {
        self.move_count == self.width * self.height
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                reason: InvalidColumnReason::OutOfRange { width: self.width },
            });
        }

        let row = self.landing_row(col).ok_or(MoveError::InvalidColumn {
            column: col,
            reason: InvalidColumnReason::Full,
        })?;

        let position = Position::new(col, row);
        self.set(position, side.cell());
        self.last_move = Some(position);
        self.move_count += 1;
        Ok(row)
    }

    /// Tentatively drop a piece in `col`. The piece is removed, and the
    /// previous last move restored, when the returned guard is dropped.
    pub fn simulate(&mut self, col: usize, side: Side) -> Option<Simulation<'_>> {
        let row = self.landing_row(col)?;
        let position = Position::new(col, row);
        let previous_last_move = self.last_move;

        self.set(position, side.cell());
        self.last_move = Some(position);
        self.move_count += 1;

        Some(Simulation {
            board: self,
            position,
            previous_last_move,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            cells: vec![Cell::Empty; DEFAULT_COLS * DEFAULT_ROWS],
            last_move: None,
            move_count: 0,
        }
    }
}

/// Header of 1-based column labels, wrapping to 0 after 9 so every label is
/// one character wide.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..self.width {
            write!(f, "{}", (col + 1) % 10)?;
        }
        for row in 0..self.height {
            writeln!(f)?;
            for col in 0..self.width {
                write!(f, "{}", self.get(row, col).symbol())?;
            }
        }
        Ok(())
    }
}

/// A piece placed by [`Board::simulate`]. Read the board through it; it is
/// taken back out when the guard goes out of scope.
pub struct Simulation<'a> {
    board: &'a mut Board,
    position: Position,
    previous_last_move: Option<Position>,
}

impl Simulation<'_> {
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Cell::Empty);
        self.board.last_move = self.previous_last_move;
        self.board.move_count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(Board::new(7, 0).is_err());
        assert_eq!(Board::new(7, 6).unwrap(), Board::default());
    }

    #[test]
    fn test_new_rejects_oversized_dimensions() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(BoardError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(Board::new(2, 99_999_999_999_999_999).is_err());
        assert!(Board::new(MAX_CELLS + 1, 1).is_err());
        assert!(Board::new(MAX_CELLS, 1).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Side::Player).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Player);
        assert_eq!(board.last_move(), Some(Position::new(3, 5)));

        // Drop second piece in same column
        let row = board.drop_piece(3, Side::Computer).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Computer);
        assert_eq!(board.last_move(), Some(Position::new(3, 4)));
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, Side::Player).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Side::Computer),
            Err(MoveError::InvalidColumn {
                column: 0,
                reason: InvalidColumnReason::Full
            })
        );
        assert_eq!(board, before, "failed drop must not touch the board");
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Side::Player),
            Err(MoveError::InvalidColumn {
                column: 7,
                reason: InvalidColumnReason::OutOfRange { width: 7 }
            })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..DEFAULT_COLS {
            for _ in 0..DEFAULT_ROWS {
                assert!(!board.is_full());
                board.drop_piece(col, Side::Player).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.move_count(), DEFAULT_COLS * DEFAULT_ROWS);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(4, 3).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.drop_piece(3, Side::Player).unwrap(), 2);
        assert!(board.drop_piece(4, Side::Player).is_err());
    }

    #[test]
    fn test_get_checked_bounds() {
        let board = Board::default();
        assert_eq!(board.get_checked(0, 0), Some(Cell::Empty));
        assert_eq!(board.get_checked(-1, 0), None);
        assert_eq!(board.get_checked(0, -1), None);
        assert_eq!(board.get_checked(6, 0), None);
        assert_eq!(board.get_checked(0, 7), None);
    }

    #[test]
    fn test_gravity_holds_for_random_drops() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::default();
            for turn in 0..60 {
                let col = rng.random_range(0..DEFAULT_COLS);
                let side = if turn % 2 == 0 { Side::Player } else { Side::Computer };
                let _ = board.drop_piece(col, side);
            }
            for col in 0..DEFAULT_COLS {
                let mut seen_piece = false;
                for row in 0..DEFAULT_ROWS {
                    let occupied = board.get(row, col) != Cell::Empty;
                    assert!(
                        !seen_piece || occupied,
                        "gap below a piece in column {col} at row {row}"
                    );
                    seen_piece |= occupied;
                }
            }
        }
    }

    #[test]
    fn test_simulation_places_and_restores() {
        let mut board = Board::default();
        board.drop_piece(2, Side::Player).unwrap();
        let before = board.clone();

        {
            let sim = board.simulate(2, Side::Computer).unwrap();
            assert_eq!(sim.position(), Position::new(2, 4));
            assert_eq!(sim.get(4, 2), Cell::Computer);
            assert_eq!(sim.last_move(), Some(Position::new(2, 4)));
            assert_eq!(sim.move_count(), 2);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_simulation_round_trip_every_column() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::default();
        for _ in 0..20 {
            let _ = board.drop_piece(rng.random_range(0..DEFAULT_COLS), Side::Player);
            let _ = board.drop_piece(rng.random_range(0..DEFAULT_COLS), Side::Computer);
        }

        let before = board.clone();
        for col in 0..DEFAULT_COLS {
            for side in [Side::Player, Side::Computer] {
                let placed = board.simulate(col, side).is_some();
                assert_eq!(placed, !before.is_column_full(col));
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_simulate_full_column_is_none() {
        let mut board = Board::new(2, 1).unwrap();
        board.drop_piece(0, Side::Player).unwrap();
        assert!(board.simulate(0, Side::Computer).is_none());
        assert!(board.simulate(1, Side::Computer).is_some());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4, 2).unwrap();
        board.drop_piece(1, Side::Player).unwrap();
        board.drop_piece(1, Side::Computer).unwrap();
        board.drop_piece(3, Side::Player).unwrap();
        assert_eq!(board.to_string(), "1234\n.Y..\n.R.R");
    }

    #[test]
    fn test_display_wide_board_labels() {
        let board = Board::new(12, 1).unwrap();
        assert_eq!(board.to_string(), "123456789012\n............");
    }
}
