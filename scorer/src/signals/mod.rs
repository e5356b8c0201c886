//! History signals.
//!
//! A signal is a side-effect-free observer that derives one scoring component
//! from a borrowed history snapshot. Signals never mutate the history and are
//! total over non-empty, finite input.

pub mod frequency;
pub mod streak;
pub mod trend;
pub mod volatility;

pub use self::frequency::WeightedFrequency;
pub use self::streak::{Streak, StreakState};
pub use self::trend::RecentTrend;
pub use self::volatility::{Volatility, VolatilityState};

/// Trait for deriving one scoring component from a history snapshot.
pub trait HistorySignal {
    /// The specific component produced by this signal.
    type Output;

    /// Computes the component for `history`.
    ///
    /// Must be side-effect free and never panic, including on an empty slice.
    fn compute(&self, history: &[f64]) -> Self::Output;
}

/// Strict comparison used by every signal: equal to the threshold is "under".
#[inline]
pub fn is_above(value: f64, threshold: f64) -> bool {
    value > threshold
}
