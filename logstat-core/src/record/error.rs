use serde::Serialize;
use thiserror::Error;

/// Why a line could not become a [`LogRecord`](crate::record::LogRecord).
///
/// Missing trailing segments (referer, user-agent) are tolerated and never
/// produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseFailure {
    #[error("no bracketed timestamp found")]
    MissingTimestamp,

    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("invalid status token '{token}'")]
    InvalidStatus { token: String },

    #[error("invalid response size token '{token}'")]
    InvalidSize { token: String },
}

impl ParseFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            ParseFailure::MissingTimestamp => "missing_timestamp",
            ParseFailure::InvalidTimestamp { .. } => "invalid_timestamp",
            ParseFailure::InvalidStatus { .. } => "invalid_status",
            ParseFailure::InvalidSize { .. } => "invalid_size",
        }
    }
}
