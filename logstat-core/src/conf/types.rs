use crate::analysis::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_TOP_PAGES};
use crate::enrichment::crawler::{CrawlerIdentities, DEFAULT_CRAWLER_IDENTITIES};
use serde::{Deserialize, Serialize};

/// Resolved analyzer settings. Every field has a default, so an empty file
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub crawlers: CrawlerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Lines longer than this many characters abort the file.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// How many 200/404 paths the report lists.
    #[serde(default = "default_top_pages")]
    pub top_pages: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            top_pages: default_top_pages(),
        }
    }
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_top_pages() -> usize {
    DEFAULT_TOP_PAGES
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Ordered; matched case-sensitively against the raw user-agent.
    #[serde(default = "default_identities")]
    pub identities: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            identities: default_identities(),
        }
    }
}

impl CrawlerConfig {
    pub fn to_identities(&self) -> CrawlerIdentities {
        CrawlerIdentities::new(self.identities.iter().cloned())
    }
}

fn default_identities() -> Vec<String> {
    DEFAULT_CRAWLER_IDENTITIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
