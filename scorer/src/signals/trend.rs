//! Recent trend: unweighted share of "above" outcomes in the trailing window.

use super::{HistorySignal, is_above};

#[derive(Clone, Copy, Debug)]
pub struct RecentTrend {
    pub threshold: f64,
    pub window: usize,
}

impl RecentTrend {
    pub fn new(threshold: f64, window: usize) -> Self {
        Self { threshold, window }
    }
}

impl HistorySignal for RecentTrend {
    type Output = f64;

    fn compute(&self, history: &[f64]) -> f64 {
        let take = history.len().min(self.window);
        let recent = &history[history.len() - take..];

        if recent.is_empty() {
            return 0.5;
        }

        let hits = recent
            .iter()
            .filter(|&&v| is_above(v, self.threshold))
            .count();

        hits as f64 / recent.len() as f64
    }
}
