use crate::record::{LogRecord, ParseFailure};

/// What happened to one line that passed the length check.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(LogRecord),
    /// Counted as observed, contributes nothing else.
    Skipped(ParseFailure),
}

impl From<Result<LogRecord, ParseFailure>> for LineOutcome {
    fn from(result: Result<LogRecord, ParseFailure>) -> Self {
        match result {
            Ok(record) => LineOutcome::Parsed(record),
            Err(reason) => LineOutcome::Skipped(reason),
        }
    }
}
