//! Named crawler identities.
//!
//! Crawler shares in the report count lines whose raw user-agent contains
//! one of these names verbatim (case-sensitive). A line is attributed to the
//! first identity that matches, so each line counts toward at most one.

pub const DEFAULT_CRAWLER_IDENTITIES: &[&str] = &["YandexBot", "Googlebot"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerIdentities {
    names: Vec<String>,
}

impl Default for CrawlerIdentities {
    fn default() -> Self {
        Self::new(DEFAULT_CRAWLER_IDENTITIES.iter().copied())
    }
}

impl CrawlerIdentities {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn identify(&self, user_agent: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| user_agent.contains(name.as_str()))
            .map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
