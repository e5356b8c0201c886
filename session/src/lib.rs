//! Caller-owned prediction state.
//!
//! Holds the multiplier history the scorer reads from, applies input
//! normalization for manual entries and loads bulk history from CSV.

pub mod error;
pub mod history;
pub mod loader;
pub mod manager;

pub use error::{HistoryError, LoadError};
pub use history::{History, normalize_input};
pub use loader::{DEFAULT_COLUMN, load_csv, load_csv_path};
pub use manager::PredictionSession;
