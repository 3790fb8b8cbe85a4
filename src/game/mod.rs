//! Core Connect Four game logic: board, line extraction, win detection and
//! the game state machine.

mod board;
mod lines;
mod side;
mod state;
mod win;

pub use board::{Board, Cell, Position, Simulation, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
pub use lines::Lines;
pub use side::Side;
pub use state::{GameOutcome, GameState};
pub use win::{has_four_in_a_row, is_winning_play, CONNECT};
