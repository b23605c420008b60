use crate::analysis::AnalysisReport;
use crate::stats::PageListing;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Plain { color: bool },
    Json,
}

pub fn render(report: &AnalysisReport, style: ReportStyle) -> anyhow::Result<String> {
    match style {
        ReportStyle::Plain { color } => Ok(render_report(report, color)),
        ReportStyle::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn heading(title: &str, color: bool) -> String {
    if color {
        title.bold().to_string()
    } else {
        title.to_string()
    }
}

pub fn render_report(report: &AnalysisReport, color: bool) -> String {
    let mut out = String::new();

    let title = match &report.source {
        Some(source) => format!("Access log report: {source}"),
        None => "Access log report".to_string(),
    };
    let _ = writeln!(out, "{}", heading(&title, color));
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    let _ = writeln!(
        out,
        "Lines: {} | parsed: {} | skipped: {}",
        report.lines_observed,
        report.records_parsed,
        report.lines_skipped_total()
    );
    if !report.lines_skipped.is_empty() {
        out.push_str("  ");
        for (kind, count) in &report.lines_skipped {
            let _ = write!(out, "{kind}={count} ");
        }
        out.push('\n');
    }
    out.push('\n');

    if !report.crawlers.is_empty() {
        let _ = writeln!(out, "{}", heading("Crawler share of all lines:", color));
        for crawler in &report.crawlers {
            let _ = writeln!(
                out,
                "  {:<12} {:>6.2}% ({})",
                crawler.name, crawler.percent, crawler.requests
            );
        }
        out.push('\n');
    }

    let m = &report.metrics;
    let _ = writeln!(
        out,
        "Traffic: {} bytes total | {:.2} bytes/hour\n",
        report.total_traffic, m.traffic_per_hour
    );

    let _ = writeln!(out, "{}", heading("Visits:", color));
    let _ = writeln!(out, "  avg per hour          {:.2}", m.visits_per_hour);
    let _ = writeln!(out, "  avg errors per hour   {:.2}", m.errors_per_hour);
    let _ = writeln!(out, "  avg per user          {:.2}", m.visits_per_user);
    let _ = writeln!(out, "  peak per second       {}", m.peak_visits_per_second);
    let _ = writeln!(out, "  max by one client     {}", m.max_visits_per_user);
    out.push('\n');

    render_pages(&mut out, 200, &report.pages_ok, color);
    render_pages(&mut out, 404, &report.pages_not_found, color);

    render_shares(&mut out, "Operating systems:", &report.os_shares, color);
    render_shares(&mut out, "Browsers:", &report.browser_shares, color);

    let _ = writeln!(out, "{}", heading("Referer domains:", color));
    if report.referer_domains.is_empty() {
        out.push_str("  <none>\n");
    }
    for domain in &report.referer_domains {
        let _ = writeln!(out, "  {domain}");
    }

    out
}

fn render_pages(out: &mut String, status: u16, listing: &PageListing, color: bool) {
    let title = format!(
        "First {} pages with status {status}:",
        listing.pages.len()
    );
    let _ = writeln!(out, "{}", heading(&title, color));
    for page in &listing.pages {
        let _ = writeln!(out, "  {page}");
    }
    if listing.remaining > 0 {
        let _ = writeln!(out, "  ...and {} more", listing.remaining);
    }
    out.push('\n');
}

fn render_shares(out: &mut String, title: &str, shares: &BTreeMap<&'static str, f64>, color: bool) {
    let _ = writeln!(out, "{}", heading(title, color));
    if shares.is_empty() {
        out.push_str("  <no records>\n");
    }
    for (name, share) in shares {
        let _ = writeln!(out, "  {:<8} {:>6.2}%", name, share * 100.0);
    }
    out.push('\n');
}
