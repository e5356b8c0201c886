use std::fmt;

use serde::{Deserialize, Serialize};

/// Above/under confidence pair.
///
/// Both sides lie in `[0, 1]` and sum to `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    pub above: f64,
    pub under: f64,
}

impl ConfidenceResult {
    /// Maximal uncertainty, returned when there is no data.
    pub const NEUTRAL: Self = Self {
        above: 0.5,
        under: 0.5,
    };

    /// Clamps `combined` into `[0, 1]` and pairs it with its complement.
    pub fn from_combined(combined: f64) -> Self {
        let above = combined.clamp(0.0, 1.0);
        Self {
            above,
            under: 1.0 - above,
        }
    }

    /// "Above" only wins on a strict majority; a tie reads as "under".
    pub fn direction(&self) -> Direction {
        if self.above > self.under {
            Direction::Above
        } else {
            Direction::Under
        }
    }

    /// Confidence of the side picked by [`Self::direction`].
    pub fn winning_confidence(&self) -> f64 {
        match self.direction() {
            Direction::Above => self.above,
            Direction::Under => self.under,
        }
    }
}

/// Predicted side of the threshold for the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Under,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Above => f.write_str("Above"),
            Direction::Under => f.write_str("Under"),
        }
    }
}

/// Presenter-facing prediction: direction, its confidence and the boundary it refers to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    pub confidence: f64,
    pub threshold: f64,
    pub scores: ConfidenceResult,
}

impl Prediction {
    pub fn new(scores: ConfidenceResult, threshold: f64) -> Self {
        Self {
            direction: scores.direction(),
            confidence: scores.winning_confidence(),
            threshold,
            scores,
        }
    }
}

impl fmt::Display for Prediction {
    /// Renders e.g. `Above 200% (94.9% confidence)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.0}% ({:.1}% confidence)",
            self.direction,
            self.threshold * 100.0,
            self.confidence * 100.0
        )
    }
}

/// Every intermediate value of one scoring pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub entries: usize,

    /// Linearly weighted fraction of entries above the threshold.
    pub base_score: f64,

    /// Fraction of the trailing window above the threshold.
    pub trend_score: f64,

    /// Length of the trailing run sharing the last entry's side.
    pub streak_length: usize,

    /// Signed streak nudge, positive after an "under" run.
    pub streak_score: f64,

    /// Population standard deviation of the history.
    pub volatility: f64,

    /// Whether the 0.9 volatility damper was applied.
    pub dampened: bool,

    /// Blended score before damping and clamping.
    pub undamped: f64,

    pub result: ConfidenceResult,
}

impl ScoreBreakdown {
    /// Breakdown reported for an empty history.
    pub fn neutral() -> Self {
        Self {
            entries: 0,
            base_score: 0.5,
            trend_score: 0.5,
            streak_length: 0,
            streak_score: 0.0,
            volatility: 0.0,
            dampened: false,
            undamped: 0.5,
            result: ConfidenceResult::NEUTRAL,
        }
    }
}
