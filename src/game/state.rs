use crate::ai::MoveSelector;
use crate::error::{BoardError, MoveError};

use super::{is_winning_play, Board, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameOutcome {
    fn win_for(side: Side) -> Self {
        match side {
            Side::Player => GameOutcome::PlayerWin,
            Side::Computer => GameOutcome::ComputerWin,
        }
    }

    /// The side that won, if any
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::PlayerWin => Some(Side::Player),
            GameOutcome::ComputerWin => Some(Side::Computer),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

/// A game between the human player and the computer.
///
/// Moves are not forced to alternate; the caller drives the turn order.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    outcome: GameOutcome,
    selector: MoveSelector,
}

impl GameState {
    /// Create initial game state on the standard 7x6 board
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            outcome: GameOutcome::InProgress,
            selector: MoveSelector::default(),
        }
    }

    /// Create a game on a `width` x `height` board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(width, height)?,
            outcome: GameOutcome::InProgress,
            selector: MoveSelector::default(),
        })
    }

    /// Use `selector` to pick the computer's moves
    pub fn with_selector(mut self, selector: MoveSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply the human's move and return new state (immutable)
    pub fn apply_player_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(Side::Player, column)?;
        Ok(next)
    }

    /// Apply the computer's move and return new state (immutable)
    pub fn apply_computer_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(Side::Computer, column)?;
        Ok(next)
    }

    /// Apply the human's move in place
    pub fn apply_player_move_mut(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        self.apply_move_mut(Side::Player, column)
    }

    /// Apply the computer's move in place
    pub fn apply_computer_move_mut(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        self.apply_move_mut(Side::Computer, column)
    }

    fn apply_move_mut(&mut self, side: Side, column: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, side)?;

        // Check for win
        if is_winning_play(&self.board) {
            self.outcome = GameOutcome::win_for(side);
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        }

        Ok(self.outcome)
    }

    /// Choose the computer's next column.
    ///
    /// The selector never scores the rightmost column unless configured to;
    /// if that leaves nothing selectable while a column is still open, the
    /// lowest open column is played instead.
    pub fn compute_computer_move(&self) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        // The selector simulates moves, so give it a scratch copy
        let mut scratch = self.board.clone();
        if let Some(column) = self.selector.select(&mut scratch) {
            return Ok(column);
        }

        let fallback = self
            .legal_columns()
            .first()
            .copied()
            .ok_or(MoveError::GameOver)?;
        log::warn!("no evaluated column is playable, falling back to column {fallback}");
        Ok(fallback)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
