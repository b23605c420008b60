use std::path::PathBuf;
use thiserror::Error;

/// File-level failures. Per-line problems never end up here; they become
/// [`LineOutcome::Skipped`](crate::analysis::LineOutcome::Skipped).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("path is a directory, not a file: {path}")]
    IsDirectory { path: PathBuf },

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line_number}: {source}")]
    Read {
        line_number: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number} is {length} characters long, the limit is {limit}")]
    OversizeLine {
        line_number: u64,
        length: usize,
        limit: usize,
    },
}
