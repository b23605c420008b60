use crate::enrichment::user_agent::{BrowserCategory, OsCategory, is_generic_bot};
use crate::record::HttpMethod;
use chrono::{DateTime, Utc};

/// Placeholder used for absent path, referer and user-agent fields.
pub const MISSING_FIELD: &str = "-";

/// Status code recorded when the status/size segment is absent.
pub const MISSING_STATUS: i32 = -1;

/// One successfully parsed access log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub client_address: String,
    /// Normalized to UTC regardless of the offset in the log.
    pub timestamp: DateTime<Utc>,
    pub method: HttpMethod,
    pub path: String,
    pub status_code: i32,
    pub response_size: u64,
    pub referer: String,
    pub user_agent_raw: String,
    pub os: OsCategory,
    pub browser: BrowserCategory,
}

impl LogRecord {
    /// Human visits are the only records indexed by client and by second.
    pub fn is_human_visit(&self) -> bool {
        !self.client_address.is_empty() && !is_generic_bot(&self.user_agent_raw)
    }

    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status_code)
    }
}
