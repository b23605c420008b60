use crate::enrichment::user_agent::{BrowserCategory, OsCategory};
use crate::record::{LogRecord, MISSING_FIELD};
use crate::stats::derived::{DerivedMetrics, compute_derived};
use crate::stats::distinct::DistinctValues;
use ahash::AHashMap;
use chrono::{DateTime, Utc};

/// Running totals for one analysis pass.
///
/// Every parsed record is folded in through [`AggregateState::add_record`];
/// nothing keeps the records themselves. Rates are only produced by
/// [`AggregateState::finalize`].
#[derive(Debug, Clone, Default)]
pub struct AggregateState {
    pub(crate) lines_observed: u64,
    pub(crate) records_parsed: u64,
    pub(crate) total_traffic: u64,
    pub(crate) error_count: u64,
    pub(crate) human_visits: u64,
    pub(crate) crawler_counts: AHashMap<String, u64>,

    pub(crate) min_time: Option<DateTime<Utc>>,
    pub(crate) max_time: Option<DateTime<Utc>>,

    pub(crate) pages_ok: DistinctValues,
    pub(crate) pages_not_found: DistinctValues,
    pub(crate) referers: DistinctValues,

    pub(crate) os_counts: AHashMap<OsCategory, u64>,
    pub(crate) browser_counts: AHashMap<BrowserCategory, u64>,
    /// epoch second -> human visits in that second
    pub(crate) visits_per_second: AHashMap<i64, u64>,
    /// client address -> human visits; the keys are the distinct human clients
    pub(crate) visits_per_client: AHashMap<String, u64>,

    pub(crate) derived: Option<DerivedMetrics>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a raw line, whether or not it parses.
    pub fn observe_line(&mut self) {
        self.lines_observed += 1;
    }

    pub fn record_crawler(&mut self, identity: &str) {
        *self.crawler_counts.entry(identity.to_string()).or_insert(0) += 1;
    }

    pub fn add_record(&mut self, record: &LogRecord) {
        self.records_parsed += 1;
        self.total_traffic = self.total_traffic.saturating_add(record.response_size);

        let ts = record.timestamp;
        if self.min_time.is_none_or(|min| ts < min) {
            self.min_time = Some(ts);
        }
        if self.max_time.is_none_or(|max| ts > max) {
            self.max_time = Some(ts);
        }

        match record.status_code {
            200 => {
                self.pages_ok.insert(&record.path);
            }
            404 => {
                self.pages_not_found.insert(&record.path);
            }
            _ => {}
        }

        if record.is_error() {
            self.error_count += 1;
        }

        *self.os_counts.entry(record.os).or_insert(0) += 1;
        *self.browser_counts.entry(record.browser).or_insert(0) += 1;

        if record.is_human_visit() {
            self.human_visits += 1;
            *self.visits_per_second.entry(ts.timestamp()).or_insert(0) += 1;
            *self
                .visits_per_client
                .entry(record.client_address.clone())
                .or_insert(0) += 1;
        }

        if record.referer != MISSING_FIELD {
            self.referers.insert(&record.referer);
        }
    }

    /// Compute the derived metrics from what has been folded so far.
    ///
    /// Calling this again without new records yields the same values.
    pub fn finalize(&mut self) -> DerivedMetrics {
        let derived = compute_derived(self);
        self.derived = Some(derived);
        derived
    }

    /// Metrics from the last [`finalize`](Self::finalize), if any.
    pub fn derived(&self) -> Option<DerivedMetrics> {
        self.derived
    }

    /// Drop everything so the state can be reused for another file.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn lines_observed(&self) -> u64 {
        self.lines_observed
    }

    pub fn records_parsed(&self) -> u64 {
        self.records_parsed
    }

    pub fn total_traffic(&self) -> u64 {
        self.total_traffic
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    pub fn human_visits(&self) -> u64 {
        self.human_visits
    }

    pub fn unique_clients(&self) -> usize {
        self.visits_per_client.len()
    }

    pub fn crawler_count(&self, identity: &str) -> u64 {
        self.crawler_counts.get(identity).copied().unwrap_or(0)
    }

    pub fn visits_for_client(&self, address: &str) -> u64 {
        self.visits_per_client.get(address).copied().unwrap_or(0)
    }

    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.min_time.zip(self.max_time)
    }
}
