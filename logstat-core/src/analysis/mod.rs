//! Access log analysis driver
//!
//! Reads a log one line at a time, rejects oversize lines, parses what it
//! can, skips what it can't, and folds every parsed record into an
//! [`AggregateState`](crate::stats::AggregateState). At end of input the
//! state is finalized into an [`AnalysisReport`].
//!
//! The overall data processing architecture is:
//!
//! file
//! feed_line
//! LineOutcome
//! AggregateState
//! AnalysisReport
//! render_report
//!

mod constants;
mod error;
mod outcome;
mod report;
mod run;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use error::*;
pub use outcome::*;
pub use report::*;
pub use run::*;
