// File: crates/pulse-core/src/error.rs
// Summary: Errors raised while loading chart options and series. Geometry itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart kind `{0}` (expected line, column or pie)")]
    UnknownKind(String),

    #[error("invalid chart options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid series CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ChartResult<T> = Result<T, ChartError>;
