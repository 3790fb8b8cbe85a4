//! The computer opponent: a positional heuristic and the single-ply move
//! selector built on it.

mod heuristic;
mod score;
mod selector;

pub use heuristic::{positional_value, HeuristicProbes, MAX_HEURISTIC};
pub use score::{Score, FORCED_SCORE, ILLEGAL_SCORE, SELECTION_FLOOR};
pub use selector::{MoveSelector, SelectorConfig};
