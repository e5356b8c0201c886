use tracing::{Span, debug, field, instrument};

use crate::config::ScorerConfig;
use crate::signals::{HistorySignal, RecentTrend, Streak, Volatility, WeightedFrequency};
use crate::types::{ConfidenceResult, ScoreBreakdown};

/// Blend weights. They sum to 1.0.
const BASE_WEIGHT: f64 = 0.6;
const TREND_WEIGHT: f64 = 0.3;
const STREAK_WEIGHT: f64 = 0.1;

/// The streak term is centred on 0.5 so a zero nudge contributes its plain 10% share.
const STREAK_CENTER: f64 = 0.5;

/// Scores a history snapshot into an above/under confidence pair.
///
/// Empty history yields `(0.5, 0.5)`. The input is only borrowed; callers
/// owning a mutable buffer hand in a stable slice for the duration of the call.
pub fn score(history: &[f64], config: &ScorerConfig) -> ConfidenceResult {
    score_detailed(history, config).result
}

/// Same as [`score`] but keeps every intermediate component.
///
/// Steps:
/// - weighted base frequency (weights 0.5 → 1.0 across the history)
/// - trend over the trailing `trend_window` entries
/// - streak nudge, capped at ±0.1
/// - `0.6 * base + 0.3 * trend + 0.1 * (0.5 + streak)`
/// - ×0.9 when the population stdev exceeds 2.0
/// - clamp into `[0, 1]` and complement
#[instrument(
    level = "debug",
    skip(history, config),
    fields(
        entries = history.len(),
        threshold = config.threshold,
        trend_window = config.trend_window,
        above = field::Empty
    )
)]
pub fn score_detailed(history: &[f64], config: &ScorerConfig) -> ScoreBreakdown {
    if history.is_empty() {
        debug!("empty history; returning neutral confidence");
        return ScoreBreakdown::neutral();
    }

    let base_score = WeightedFrequency::new(config.threshold).compute(history);
    let trend_score = RecentTrend::new(config.threshold, config.trend_window).compute(history);
    let streak = Streak::new(config.threshold).compute(history);

    debug!(
        base_score,
        trend_score,
        streak_length = streak.length,
        streak_score = streak.score,
        "computed signal components"
    );

    let undamped = combine(base_score, trend_score, streak.score);

    let volatility = Volatility.compute(history);
    let combined = volatility.apply(undamped);

    if volatility.dampened {
        debug!(
            stdev = volatility.stdev,
            undamped, combined, "volatility dampening applied"
        );
    }

    let result = ConfidenceResult::from_combined(combined);
    Span::current().record("above", result.above);

    ScoreBreakdown {
        entries: history.len(),
        base_score,
        trend_score,
        streak_length: streak.length,
        streak_score: streak.score,
        volatility: volatility.stdev,
        dampened: volatility.dampened,
        undamped,
        result,
    }
}

fn combine(base_score: f64, trend_score: f64, streak_score: f64) -> f64 {
    BASE_WEIGHT * base_score
        + TREND_WEIGHT * trend_score
        + STREAK_WEIGHT * (STREAK_CENTER + streak_score)
}
