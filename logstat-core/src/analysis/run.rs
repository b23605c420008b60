use crate::analysis::report::{AnalysisReport, CrawlerShare};
use crate::analysis::{AnalysisError, LineOutcome};
use crate::conf::AnalyzerConfig;
use crate::enrichment::crawler::CrawlerIdentities;
use crate::record::parse_record;
use crate::stats::{AggregateState, CategoryKind, StatusClass};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Settings shared by every file analysed in one run.
#[derive(Debug, Clone)]
pub struct Analyzer {
    max_line_length: usize,
    top_pages: usize,
    crawlers: CrawlerIdentities,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_line_length: config.analysis.max_line_length,
            top_pages: config.analysis.top_pages,
            crawlers: config.crawlers.to_identities(),
        }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Start a fresh pass. Nothing carries over from earlier passes.
    pub fn begin(&self) -> Analysis<'_> {
        Analysis {
            analyzer: self,
            state: AggregateState::new(),
            lines_skipped: BTreeMap::new(),
            line_number: 0,
        }
    }

    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport, AnalysisError> {
        if !path.exists() {
            return Err(AnalysisError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            return Err(AnalysisError::IsDirectory {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| AnalysisError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "analysis started");

        let mut report = self.analyze_reader(BufReader::new(file))?;
        report.source = Some(path.display().to_string());

        info!(
            path = %path.display(),
            lines = report.lines_observed,
            records = report.records_parsed,
            skipped = report.lines_skipped_total(),
            "analysis finished"
        );

        Ok(report)
    }

    pub fn analyze_reader<R: BufRead>(&self, mut reader: R) -> Result<AnalysisReport, AnalysisError> {
        let mut analysis = self.begin();
        let mut buf = Vec::new();
        // Widest UTF-8 encoding of a line at the limit, plus "\r\n".
        let bound = self.max_line_length.saturating_mul(4).saturating_add(2) as u64;

        loop {
            buf.clear();
            let read = (&mut reader)
                .take(bound)
                .read_until(b'\n', &mut buf)
                .map_err(|source| AnalysisError::Read {
                    line_number: analysis.line_number + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let line = decode_line(&buf);
            if read as u64 == bound && !buf.ends_with(b"\n") {
                // The rest of the line is never read; report what was seen.
                let seen = line.chars().count().max(self.max_line_length.saturating_add(1));
                return Err(analysis.reject_oversize(seen));
            }

            analysis.feed_line(&line)?;
        }

        Ok(analysis.finish())
    }
}

/// Strip the terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// One in-progress pass over a single input.
pub struct Analysis<'a> {
    analyzer: &'a Analyzer,
    state: AggregateState,
    lines_skipped: BTreeMap<&'static str, u64>,
    line_number: u64,
}

impl Analysis<'_> {
    /// Feed the next line (without its terminator).
    ///
    /// Only an oversize line is an error; it ends the pass and whatever was
    /// accumulated so far should be discarded.
    pub fn feed_line(&mut self, line: &str) -> Result<LineOutcome, AnalysisError> {
        let length = line.chars().count();
        if length > self.analyzer.max_line_length {
            return Err(self.reject_oversize(length));
        }

        self.line_number += 1;
        self.state.observe_line();

        let outcome = LineOutcome::from(parse_record(line));
        match &outcome {
            LineOutcome::Parsed(record) => {
                if let Some(identity) = self.analyzer.crawlers.identify(&record.user_agent_raw) {
                    self.state.record_crawler(identity);
                }
                self.state.add_record(record);
            }
            LineOutcome::Skipped(reason) => {
                debug!(
                    line_number = self.line_number,
                    kind = reason.kind(),
                    reason = %reason,
                    "line skipped"
                );
                *self.lines_skipped.entry(reason.kind()).or_insert(0) += 1;
            }
        }

        Ok(outcome)
    }

    fn reject_oversize(&mut self, length: usize) -> AnalysisError {
        self.line_number += 1;
        let limit = self.analyzer.max_line_length;

        warn!(
            line_number = self.line_number,
            length, limit, "line exceeds length limit, aborting file"
        );

        AnalysisError::OversizeLine {
            line_number: self.line_number,
            length,
            limit,
        }
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn finish(mut self) -> AnalysisReport {
        let metrics = self.state.finalize();
        let top = self.analyzer.top_pages;
        let lines_observed = self.state.lines_observed();

        let crawlers = self
            .analyzer
            .crawlers
            .names()
            .map(|name| CrawlerShare::new(name, self.state.crawler_count(name), lines_observed))
            .collect();

        AnalysisReport {
            source: None,
            lines_observed,
            records_parsed: self.state.records_parsed(),
            lines_skipped: self.lines_skipped,
            crawlers,
            total_traffic: self.state.total_traffic(),
            metrics,
            pages_ok: self.state.top_pages(StatusClass::Ok, top),
            pages_not_found: self.state.top_pages(StatusClass::NotFound, top),
            os_shares: self.state.category_shares(CategoryKind::Os),
            browser_shares: self.state.category_shares(CategoryKind::Browser),
            referer_domains: self.state.referer_domains(),
        }
    }
}
