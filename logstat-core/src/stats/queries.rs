use crate::stats::AggregateState;
use crate::stats::distinct::DistinctValues;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200
    Ok,
    /// 404
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Os,
    Browser,
}

/// A bounded slice of distinct paths plus how many were left out.
///
/// Paths come out in first-seen order; this is not a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageListing {
    pub pages: Vec<String>,
    pub remaining: usize,
}

impl AggregateState {
    pub fn top_pages(&self, class: StatusClass, limit: usize) -> PageListing {
        let set = match class {
            StatusClass::Ok => &self.pages_ok,
            StatusClass::NotFound => &self.pages_not_found,
        };

        PageListing {
            pages: set.iter().take(limit).map(str::to_string).collect(),
            remaining: set.len().saturating_sub(limit),
        }
    }

    /// Distinct referer hosts with any leading `www.` removed.
    ///
    /// Referers are free text; anything that is not an absolute URL with a
    /// host is skipped without complaint.
    pub fn referer_domains(&self) -> Vec<String> {
        let mut domains = DistinctValues::default();

        for referer in self.referers.iter() {
            let Ok(url) = Url::parse(referer) else {
                continue;
            };
            let Some(host) = url.host_str().filter(|h| !h.is_empty()) else {
                continue;
            };
            domains.insert(host.strip_prefix("www.").unwrap_or(host));
        }

        domains.iter().map(str::to_string).collect()
    }

    /// Fraction of classified records per category. Empty until a record
    /// has been added.
    pub fn category_shares(&self, kind: CategoryKind) -> BTreeMap<&'static str, f64> {
        let counts: Vec<(&'static str, u64)> = match kind {
            CategoryKind::Os => self
                .os_counts
                .iter()
                .map(|(category, count)| (category.as_str(), *count))
                .collect(),
            CategoryKind::Browser => self
                .browser_counts
                .iter()
                .map(|(category, count)| (category.as_str(), *count))
                .collect(),
        };

        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return BTreeMap::new();
        }

        counts
            .into_iter()
            .map(|(name, count)| (name, count as f64 / total as f64))
            .collect()
    }
}
