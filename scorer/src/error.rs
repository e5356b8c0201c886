use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    #[error("threshold must be a finite number, got {0}")]
    NonFiniteThreshold(f64),

    #[error("trend window must be a positive integer")]
    ZeroTrendWindow,
}
