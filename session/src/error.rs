use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("'{0}' is not a number")]
    Unparseable(String),

    #[error("{0} is not a finite multiplier")]
    NonFinite(f64),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("row {row}: '{value}' is not a finite number")]
    InvalidValue { row: usize, value: String },

    #[error(transparent)]
    History(#[from] HistoryError),
}
