use std::fmt;

/// Integer value of a column that cannot be played.
pub const ILLEGAL_SCORE: i32 = -1000;
/// Integer value of a column that wins or blocks a win.
pub const FORCED_SCORE: i32 = 1000;
/// A column must score above this to be selected at all.
pub const SELECTION_FLOOR: i32 = -999;

/// Evaluation of a single candidate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// The column is full.
    Illegal,
    /// Playing here wins, or leaving it open lets the opponent win.
    Forced,
    /// Positional estimate, see [`positional_value`](super::positional_value).
    Heuristic(u32),
}

impl Score {
    /// Collapse to the integer scale used when comparing columns
    pub fn value(self) -> i32 {
        match self {
            Score::Illegal => ILLEGAL_SCORE,
            Score::Forced => FORCED_SCORE,
            Score::Heuristic(v) => v as i32,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Illegal => write!(f, "illegal"),
            Score::Forced => write!(f, "forced"),
            Score::Heuristic(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MAX_HEURISTIC;

    #[test]
    fn test_values() {
        assert_eq!(Score::Illegal.value(), -1000);
        assert_eq!(Score::Forced.value(), 1000);
        assert_eq!(Score::Heuristic(5).value(), 5);
    }

    #[test]
    fn test_heuristic_range_is_disjoint_from_sentinels() {
        let top = Score::Heuristic(MAX_HEURISTIC).value();
        assert!(top < FORCED_SCORE);
        assert!(Score::Heuristic(0).value() > SELECTION_FLOOR);
        assert!(Score::Illegal.value() < SELECTION_FLOOR);
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::Illegal.to_string(), "illegal");
        assert_eq!(Score::Forced.to_string(), "forced");
        assert_eq!(Score::Heuristic(3).to_string(), "3");
    }
}
