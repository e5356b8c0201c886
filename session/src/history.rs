use crate::error::HistoryError;

/// Manual entries above this are read as percentages (`187` means `1.87x`).
pub const PERCENT_CUTOFF: f64 = 10.0;

/// Number of entries after which the warm-up indicator reads full.
pub const WARMUP_ENTRIES: usize = 20;

/// Converts a percentage-style entry into multiplier form.
///
/// Values strictly greater than 10 are divided by 100; everything else is
/// already a multiplier.
pub fn normalize_input(value: f64) -> f64 {
    if value > PERCENT_CUTOFF {
        value / 100.0
    } else {
        value
    }
}

/// Ordered, append-only multiplier history.
///
/// Entries are always finite. The scorer only ever sees `as_slice()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from values already in multiplier form.
    pub fn from_values(values: Vec<f64>) -> Result<Self, HistoryError> {
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(HistoryError::NonFinite(bad));
        }
        Ok(Self { entries: values })
    }

    /// Normalizes and appends one raw entry. Returns the stored multiplier.
    pub fn push(&mut self, raw: f64) -> Result<f64, HistoryError> {
        if !raw.is_finite() {
            return Err(HistoryError::NonFinite(raw));
        }
        let value = normalize_input(raw);
        self.entries.push(value);
        Ok(value)
    }

    /// Parses and appends a manually typed entry such as `1.87` or `187`.
    pub fn push_str(&mut self, input: &str) -> Result<f64, HistoryError> {
        let trimmed = input.trim();
        let raw: f64 = trimmed
            .parse()
            .map_err(|_| HistoryError::Unparseable(trimmed.to_string()))?;
        self.push(raw)
    }

    /// Replaces the whole history, e.g. after a bulk load.
    pub fn replace(&mut self, values: Vec<f64>) -> Result<(), HistoryError> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Fraction of the warm-up target reached, in `[0, 1]`.
    pub fn warmup_progress(&self) -> f64 {
        (self.entries.len() as f64 / WARMUP_ENTRIES as f64).min(1.0)
    }
}

impl AsRef<[f64]> for History {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}
