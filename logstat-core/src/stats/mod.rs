//! Streaming statistics over parsed records.
//!
//! The data flow is:
//!
//! LogRecord
//! AggregateState::add_record
//! AggregateState::finalize
//! DerivedMetrics + queries (top_pages, referer_domains, category_shares)
//!

mod aggregation;
mod derived;
mod distinct;
mod queries;


pub use aggregation::*;
pub use derived::{DerivedMetrics, hours_between};
pub use queries::*;
