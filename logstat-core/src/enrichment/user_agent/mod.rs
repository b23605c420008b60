mod rules;


use crate::enrichment::user_agent::rules::{BROWSER_RULES, OS_RULES, first_match};
use serde::Serialize;
use std::fmt;

/// Substring that marks a user-agent as automated for visit counting.
const GENERIC_BOT_MARKER: &str = "bot";

/// Derive the coarse OS and browser buckets for a raw user-agent.
pub fn classify(user_agent: &str) -> (OsCategory, BrowserCategory) {
    let lowered = user_agent.to_lowercase();
    (
        first_match(&lowered, OS_RULES, OsCategory::Other),
        first_match(&lowered, BROWSER_RULES, BrowserCategory::Other),
    )
}

/// True when the user-agent mentions "bot" in any letter case.
///
/// This is looser than the named crawler identities in
/// [`crate::enrichment::crawler`]; it only decides whether a record counts
/// as a human visit.
pub fn is_generic_bot(user_agent: &str) -> bool {
    user_agent.to_lowercase().contains(GENERIC_BOT_MARKER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OsCategory {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    Other,
}

impl OsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsCategory::Windows => "Windows",
            OsCategory::MacOs => "macOS",
            OsCategory::Linux => "Linux",
            OsCategory::Other => "Other",
        }
    }
}

impl fmt::Display for OsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BrowserCategory {
    Edge,
    Firefox,
    Chrome,
    Opera,
    Other,
}

impl BrowserCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserCategory::Edge => "Edge",
            BrowserCategory::Firefox => "Firefox",
            BrowserCategory::Chrome => "Chrome",
            BrowserCategory::Opera => "Opera",
            BrowserCategory::Other => "Other",
        }
    }
}

impl fmt::Display for BrowserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
