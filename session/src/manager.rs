use std::path::Path;

use scorer::{Prediction, ScoreBreakdown, ScorerConfig, score_detailed};
use tracing::{debug, info, instrument};

use crate::error::{HistoryError, LoadError};
use crate::history::History;
use crate::loader::load_csv_path;

/// One user's prediction state: the history plus the scorer parameters.
///
/// The session owns its history explicitly; every prediction hands the
/// scorer a borrowed snapshot of it.
#[derive(Clone, Debug, Default)]
pub struct PredictionSession {
    history: History,
    config: ScorerConfig,
}

impl PredictionSession {
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            history: History::new(),
            config,
        }
    }

    pub fn with_history(config: ScorerConfig, history: History) -> Self {
        Self { history, config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Appends a manually typed entry (`1.87` or `187`). Returns the stored multiplier.
    pub fn add_entry(&mut self, input: &str) -> Result<f64, HistoryError> {
        let value = self.history.push_str(input)?;
        debug!(value, entries = self.history.len(), "added entry");
        Ok(value)
    }

    /// Appends a numeric entry, normalizing percentages.
    pub fn add_value(&mut self, raw: f64) -> Result<f64, HistoryError> {
        self.history.push(raw)
    }

    /// Replaces the history with the `column` values of a CSV file.
    ///
    /// On error the current history is kept.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_csv(&mut self, path: &Path, column: &str) -> Result<usize, LoadError> {
        let values = load_csv_path(path, column)?;
        let loaded = values.len();
        self.history.replace(values)?;

        Ok(loaded)
    }

    pub fn reset(&mut self) {
        self.history.reset();
        info!("history cleared");
    }

    /// Current prediction, or `None` when there is no data yet.
    pub fn predict(&self) -> Option<Prediction> {
        self.explain()
            .map(|b| Prediction::new(b.result, self.config.threshold))
    }

    /// Full component breakdown of the current prediction, or `None` when empty.
    pub fn explain(&self) -> Option<ScoreBreakdown> {
        if self.history.is_empty() {
            return None;
        }

        let breakdown = score_detailed(self.history.as_slice(), &self.config);
        debug!(
            entries = breakdown.entries,
            above = breakdown.result.above,
            dampened = breakdown.dampened,
            "scored history"
        );

        Some(breakdown)
    }
}
