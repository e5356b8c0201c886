//! Streak momentum.
//!
//! Counts the trailing run of entries on the same side of the threshold as
//! the most recent entry and turns it into a small capped nudge: positive
//! after an "under" run, negative after an "above" run.

use super::{HistorySignal, is_above};

const STREAK_STEP: f64 = 0.01;
const STREAK_CAP: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StreakState {
    /// Trailing run length including the last entry. Zero only for empty history.
    pub length: usize,

    /// Side of the most recent entry.
    pub last_above: bool,

    /// `min(length * 0.01, 0.1)`.
    pub impact: f64,

    /// Signed impact.
    pub score: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Streak {
    pub threshold: f64,
}

impl Streak {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl HistorySignal for Streak {
    type Output = StreakState;

    fn compute(&self, history: &[f64]) -> StreakState {
        let Some(&last) = history.last() else {
            return StreakState::default();
        };

        let last_above = is_above(last, self.threshold);

        // Walk backward from the second-to-last entry, stop at the first side change.
        let length = 1 + history[..history.len() - 1]
            .iter()
            .rev()
            .take_while(|&&v| is_above(v, self.threshold) == last_above)
            .count();

        let impact = (length as f64 * STREAK_STEP).min(STREAK_CAP);
        let score = if last_above { -impact } else { impact };

        StreakState {
            length,
            last_above,
            impact,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streak(history: &[f64]) -> StreakState {
        Streak::new(2.0).compute(history)
    }

    #[test]
    fn single_entry_is_a_streak_of_one() {
        let s = streak(&[3.0]);
        assert_eq!(s.length, 1);
        assert_eq!(s.impact, 0.01);
        assert_eq!(s.score, -0.01);

        let s = streak(&[1.0]);
        assert_eq!(s.length, 1);
        assert_eq!(s.score, 0.01);
    }

    #[test]
    fn under_run_pushes_up_above_run_pushes_down() {
        let s = streak(&[3.0, 3.0, 1.0]);
        assert_eq!(s.length, 1);
        assert!(s.score > 0.0);

        let s = streak(&[1.0, 1.0, 3.0]);
        assert_eq!(s.length, 1);
        assert!(s.score < 0.0);
    }

    #[test]
    fn run_stops_at_first_side_change() {
        let s = streak(&[1.0, 3.0, 1.0, 1.0, 1.0]);
        assert_eq!(s.length, 3);
        assert!((s.score - 0.03).abs() < 1e-12);
    }

    #[test]
    fn equal_to_threshold_shares_the_under_side() {
        let s = streak(&[1.0, 2.0, 0.5]);
        assert_eq!(s.length, 3);
        assert!(!s.last_above);
    }

    #[test]
    fn impact_is_capped() {
        let s = streak(&[1.0; 25]);
        assert_eq!(s.length, 25);
        assert_eq!(s.impact, 0.1);
        assert_eq!(s.score, 0.1);

        let s = streak(&[5.0; 12]);
        assert_eq!(s.score, -0.1);
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(streak(&[]), StreakState::default());
    }
}
