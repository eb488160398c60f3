//! Error Types

use thiserror::Error;

/// Failures of programmatic schedule edits. UI handlers log these and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("unknown schedule field {0:?}")]
    UnknownField(String),
    #[error("row {index} out of range (schedule has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("no row with id {0}")]
    UnknownId(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no document available")]
    MissingDocument,
}
