//! Error types shared across the filter resolver and dataset pipeline.

use thiserror::Error;

/// Which filter axis a resolver error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    City,
    Month,
    Day,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::City => write!(f, "city"),
            FilterKind::Month => write!(f, "month"),
            FilterKind::Day => write!(f, "day"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Free text matched no vocabulary entry. Recoverable: the caller
    /// should re-prompt.
    #[error("{kind} {input:?} did not match any known {kind}")]
    NoMatch { kind: FilterKind, input: String },

    /// Free text matched more than one month/day entry. Recoverable: the
    /// caller should re-prompt for a longer prefix. Never raised for
    /// cities, where the first match wins.
    #[error("{kind} {input:?} is ambiguous (matches {matches:?})")]
    Ambiguous {
        kind: FilterKind,
        input: String,
        matches: Vec<String>,
    },

    /// No backing CSV is registered for the requested city. Fatal to the
    /// exploration cycle.
    #[error("no dataset registered for city {0:?}")]
    DatasetNotFound(String),

    #[error("invalid timestamp {value:?} in row {row}")]
    Timestamp { row: usize, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
