//! Weighted base frequency.
//!
//! Long-run share of "above" outcomes with a mild recency tilt: weights rise
//! linearly from 0.5 on the oldest entry to 1.0 on the newest.

use super::{HistorySignal, is_above};

const OLDEST_WEIGHT: f64 = 0.5;
const NEWEST_WEIGHT: f64 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct WeightedFrequency {
    pub threshold: f64,
}

impl WeightedFrequency {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Weight of entry `i` in a history of length `n`.
///
/// A single entry gets full weight; there is no interval to interpolate over.
pub(crate) fn linear_weight(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return NEWEST_WEIGHT;
    }
    OLDEST_WEIGHT + (NEWEST_WEIGHT - OLDEST_WEIGHT) * (i as f64) / ((n - 1) as f64)
}

impl HistorySignal for WeightedFrequency {
    type Output = f64;

    fn compute(&self, history: &[f64]) -> f64 {
        let n = history.len();
        if n == 0 {
            return 0.5;
        }

        let mut weighted_hits = 0.0;
        let mut total_weight = 0.0;

        for (i, &value) in history.iter().enumerate() {
            let w = linear_weight(i, n);
            if is_above(value, self.threshold) {
                weighted_hits += w;
            }
            total_weight += w;
        }

        weighted_hits / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_span_half_to_one() {
        assert_eq!(linear_weight(0, 5), 0.5);
        assert_eq!(linear_weight(2, 5), 0.75);
        assert_eq!(linear_weight(4, 5), 1.0);
    }

    #[test]
    fn single_entry_has_full_weight() {
        assert_eq!(linear_weight(0, 1), 1.0);
    }

    #[test]
    fn single_entry_reduces_to_indicator() {
        let f = WeightedFrequency::new(2.0);
        assert_eq!(f.compute(&[3.0]), 1.0);
        assert_eq!(f.compute(&[1.0]), 0.0);
    }

    #[test]
    fn recent_hits_weigh_more_than_old_hits() {
        let f = WeightedFrequency::new(2.0);

        // Weights 0.5 and 1.0: a late hit is worth 2/3, an early one 1/3.
        let late = f.compute(&[1.0, 3.0]);
        let early = f.compute(&[3.0, 1.0]);

        assert!((late - 2.0 / 3.0).abs() < 1e-12);
        assert!((early - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn value_equal_to_threshold_is_not_a_hit() {
        let f = WeightedFrequency::new(2.0);
        assert_eq!(f.compute(&[2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn empty_history_is_neutral() {
        assert_eq!(WeightedFrequency::new(2.0).compute(&[]), 0.5);
    }
}
