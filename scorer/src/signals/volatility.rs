//! Volatility damper.
//!
//! Population standard deviation of the whole history. Above the limit the
//! blended score is scaled by 0.9 toward zero, not toward 0.5.

use super::HistorySignal;

pub const VOLATILITY_LIMIT: f64 = 2.0;
pub const DAMPING_FACTOR: f64 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VolatilityState {
    pub stdev: f64,
    pub dampened: bool,
}

impl VolatilityState {
    /// Applies the damper to a blended score.
    pub fn apply(&self, combined: f64) -> f64 {
        if self.dampened {
            combined * DAMPING_FACTOR
        } else {
            combined
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Volatility;

/// Population (ddof = 0) standard deviation. Zero for an empty slice.
pub fn population_stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}

impl HistorySignal for Volatility {
    type Output = VolatilityState;

    fn compute(&self, history: &[f64]) -> VolatilityState {
        let stdev = population_stdev(history);
        VolatilityState {
            stdev,
            dampened: stdev > VOLATILITY_LIMIT,
        }
    }
}
