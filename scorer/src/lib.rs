//! Confidence scoring for crash-round multiplier histories.
//!
//! The scorer is a pure function of a borrowed history snapshot and a
//! [`ScorerConfig`]. It blends four signals (weighted frequency, recent trend,
//! streak momentum, volatility) into a bounded above/under confidence pair.

pub mod confidence;
pub mod config;
pub mod error;
pub mod signals;
pub mod types;

pub use confidence::{score, score_detailed};
pub use config::ScorerConfig;
pub use error::ScorerError;
pub use types::{ConfidenceResult, Direction, Prediction, ScoreBreakdown};
