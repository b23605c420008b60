use crate::stats::{DerivedMetrics, PageListing};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the CLI prints for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub lines_observed: u64,
    pub records_parsed: u64,
    /// failure kind -> lines
    pub lines_skipped: BTreeMap<&'static str, u64>,

    pub crawlers: Vec<CrawlerShare>,

    pub total_traffic: u64,
    pub metrics: DerivedMetrics,

    pub pages_ok: PageListing,
    pub pages_not_found: PageListing,

    pub os_shares: BTreeMap<&'static str, f64>,
    pub browser_shares: BTreeMap<&'static str, f64>,

    pub referer_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlerShare {
    pub name: String,
    pub requests: u64,
    /// Percent of all observed lines, parsed or not.
    pub percent: f64,
}

impl CrawlerShare {
    pub(crate) fn new(name: &str, requests: u64, lines_observed: u64) -> Self {
        let percent = if lines_observed > 0 {
            requests as f64 * 100.0 / lines_observed as f64
        } else {
            0.0
        };

        Self {
            name: name.to_string(),
            requests,
            percent,
        }
    }
}

impl AnalysisReport {
    pub fn lines_skipped_total(&self) -> u64 {
        self.lines_skipped.values().sum()
    }
}
