use serde::{Deserialize, Serialize};

use crate::error::ScorerError;

pub const DEFAULT_THRESHOLD: f64 = 2.0;
pub const DEFAULT_TREND_WINDOW: usize = 10;

/// Tunable parameters of one scoring pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Decision boundary. Entries strictly greater than this count as "above";
    /// entries equal to it count as "under".
    pub threshold: f64,

    /// Number of most recent entries feeding the trend signal.
    pub trend_window: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trend_window: DEFAULT_TREND_WINDOW,
        }
    }
}

impl ScorerConfig {
    /// Builds a validated config.
    pub fn new(threshold: f64, trend_window: usize) -> Result<Self, ScorerError> {
        let cfg = Self {
            threshold,
            trend_window,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ScorerError> {
        if !self.threshold.is_finite() {
            return Err(ScorerError::NonFiniteThreshold(self.threshold));
        }
        if self.trend_window == 0 {
            return Err(ScorerError::ZeroTrendWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ScorerConfig::default();
        assert_eq!(cfg.threshold, 2.0);
        assert_eq!(cfg.trend_window, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        assert_eq!(
            ScorerConfig::new(2.0, 0),
            Err(ScorerError::ZeroTrendWindow)
        );
    }

    #[test]
    fn rejects_non_finite_threshold() {
        assert!(matches!(
            ScorerConfig::new(f64::NAN, 10),
            Err(ScorerError::NonFiniteThreshold(_))
        ));
        assert!(matches!(
            ScorerConfig::new(f64::INFINITY, 10),
            Err(ScorerError::NonFiniteThreshold(_))
        ));
    }

    #[test]
    fn accepts_custom_values() {
        let cfg = ScorerConfig::new(1.5, 3).unwrap();
        assert_eq!(cfg.threshold, 1.5);
        assert_eq!(cfg.trend_window, 3);
    }
}
