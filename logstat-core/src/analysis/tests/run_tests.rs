use crate::analysis::{AnalysisError, Analyzer, LineOutcome};
use crate::conf::AnalyzerConfig;
use crate::record::ParseFailure;
use crate::stats::{DerivedMetrics, PageListing};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const HUMAN: &str = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "-" "Mozilla/5.0 (Windows NT 10.0) Chrome/118.0""#;
const GOOGLEBOT: &str = r#"66.249.66.1 - - [10/Oct/2023:13:55:37 +0000] "GET /robots.txt HTTP/1.1" 200 68 "-" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#;
const YANDEX: &str = r#"5.255.253.1 - - [10/Oct/2023:13:55:38 +0000] "GET /index.html HTTP/1.1" 200 1024 "-" "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)""#;
const MISSING: &str = r#"198.51.100.7 - - [10/Oct/2023:14:10:00 +0000] "GET /missing.html HTTP/1.1" 404 512 "http://www.example.com/page" "Mozilla/5.0 (X11; Linux x86_64) Firefox/118.0""#;
const BAD_STATUS: &str = r#"198.51.100.7 - - [10/Oct/2023:14:10:00 +0000] "GET / HTTP/1.1" abc 1 "-" "-""#;

fn analyze(input: &str) -> Result<crate::analysis::AnalysisReport, AnalysisError> {
    Analyzer::default().analyze_reader(Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn human_line_updates_traffic_and_visits() {
    // Arrange
    let analyzer = Analyzer::default();
    let mut analysis = analyzer.begin();

    // Act
    let outcome = analysis.feed_line(HUMAN).unwrap();

    // Assert
    let LineOutcome::Parsed(record) = outcome else {
        panic!("expected parsed record");
    };
    assert_eq!(record.client_address, "203.0.113.5");
    let state = analysis.state();
    assert_eq!(state.total_traffic(), 1024);
    assert_eq!(state.human_visits(), 1);
    assert_eq!(state.visits_for_client("203.0.113.5"), 1);
}

#[test]
fn googlebot_is_tallied_not_visited() {
    let analyzer = Analyzer::default();
    let mut analysis = analyzer.begin();

    analysis.feed_line(GOOGLEBOT).unwrap();

    assert_eq!(analysis.state().crawler_count("Googlebot"), 1);
    assert_eq!(analysis.state().crawler_count("YandexBot"), 0);
    assert_eq!(analysis.state().human_visits(), 0);
}

#[test]
fn not_found_line_is_listed_and_counted_as_error() {
    let report = analyze(MISSING).unwrap();

    assert_eq!(
        report.pages_not_found,
        PageListing {
            pages: vec!["/missing.html".to_string()],
            remaining: 0,
        }
    );
    assert_eq!(report.metrics.errors_per_hour, 1.0);
    assert_eq!(report.referer_domains, vec!["example.com".to_string()]);
}

#[test]
fn skipped_lines_count_as_observed_only() {
    // Arrange
    let analyzer = Analyzer::default();
    let mut analysis = analyzer.begin();

    // Act
    let outcome = analysis.feed_line(BAD_STATUS).unwrap();

    // Assert
    assert_eq!(
        outcome,
        LineOutcome::Skipped(ParseFailure::InvalidStatus {
            token: "abc".to_string()
        })
    );
    assert_eq!(analysis.state().lines_observed(), 1);
    assert_eq!(analysis.state().records_parsed(), 0);
    assert_eq!(analysis.state().total_traffic(), 0);
}

#[test]
fn report_over_mixed_input() {
    let input = [HUMAN, GOOGLEBOT, "", YANDEX, MISSING, BAD_STATUS].join("\n");

    let report = analyze(&input).unwrap();

    assert_eq!(report.lines_observed, 6);
    assert_eq!(report.records_parsed, 4);
    assert_eq!(report.lines_skipped.get("invalid_status"), Some(&1));
    assert_eq!(report.lines_skipped.get("missing_timestamp"), Some(&1));
    assert_eq!(report.lines_skipped_total(), 2);

    let names: Vec<_> = report.crawlers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["YandexBot", "Googlebot"]);
    assert_eq!(report.crawlers[0].requests, 1);
    assert_eq!(report.crawlers[1].requests, 1);
    assert!((report.crawlers[1].percent - 100.0 / 6.0).abs() < 1e-9);

    assert_eq!(report.total_traffic, 1024 + 68 + 1024 + 512);
    assert_eq!(
        report.pages_ok,
        PageListing {
            pages: vec!["/index.html".to_string(), "/robots.txt".to_string()],
            remaining: 0,
        }
    );
    assert_eq!(report.metrics.peak_visits_per_second, 1);
    assert_eq!(report.metrics.visits_per_hour, 2.0);
    assert_eq!(report.metrics.visits_per_user, 1.0);
}

#[test]
fn trailing_newline_does_not_add_a_line() {
    let report = analyze(&format!("{HUMAN}\n")).unwrap();

    assert_eq!(report.lines_observed, 1);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let report = analyze(&format!("{HUMAN}\r\n{MISSING}\r\n")).unwrap();

    assert_eq!(report.records_parsed, 2);
    assert_eq!(report.lines_skipped_total(), 0);
}

#[test]
fn empty_input_has_zero_rates() {
    let report = analyze("").unwrap();

    assert_eq!(report.lines_observed, 0);
    assert_eq!(report.metrics, DerivedMetrics::default());
    assert!(report.os_shares.is_empty());
    assert!(report.crawlers.iter().all(|c| c.percent == 0.0));
}

#[test]
fn only_malformed_lines_have_zero_rates() {
    let report = analyze("garbage\nmore garbage\n").unwrap();

    assert_eq!(report.lines_observed, 2);
    assert_eq!(report.records_parsed, 0);
    assert_eq!(report.metrics, DerivedMetrics::default());
}

#[test]
fn oversize_line_aborts_regardless_of_content() {
    let oversize = "x".repeat(1025);
    let input = [HUMAN, oversize.as_str(), HUMAN].join("\n");

    let err = analyze(&input).unwrap_err();

    match err {
        AnalysisError::OversizeLine {
            line_number,
            length,
            limit,
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(length, 1025);
            assert_eq!(limit, 1024);
        }
        other => panic!("expected OversizeLine, got {other:?}"),
    }
}

#[test]
fn line_at_limit_is_accepted() {
    let exact = "x".repeat(1024);

    let report = analyze(&exact).unwrap();

    assert_eq!(report.lines_observed, 1);
    assert_eq!(report.records_parsed, 0);
}

#[test]
fn length_counts_characters_not_bytes() {
    let wide = "é".repeat(1000);

    let report = analyze(&wide).unwrap();

    assert_eq!(report.lines_observed, 1);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let mut bytes = HUMAN.as_bytes().to_vec();
    bytes.extend_from_slice(b"\n\xff\xfe broken\n");

    let report = Analyzer::default()
        .analyze_reader(Cursor::new(bytes))
        .unwrap();

    assert_eq!(report.lines_observed, 2);
    assert_eq!(report.records_parsed, 1);
}

#[test]
fn configured_limits_apply() {
    // Arrange
    let mut config = AnalyzerConfig::default();
    config.analysis.max_line_length = 10;
    config.analysis.top_pages = 1;
    let analyzer = Analyzer::new(&config);

    // Act
    let err = analyzer
        .analyze_reader(Cursor::new(HUMAN.as_bytes().to_vec()))
        .unwrap_err();

    // Assert
    assert!(matches!(err, AnalysisError::OversizeLine { limit: 10, .. }));
    assert_eq!(analyzer.max_line_length(), 10);
}

#[test]
fn top_pages_setting_limits_report() {
    let mut config = AnalyzerConfig::default();
    config.analysis.top_pages = 1;
    let analyzer = Analyzer::new(&config);
    let input = [HUMAN, GOOGLEBOT].join("\n");

    let report = analyzer
        .analyze_reader(Cursor::new(input.into_bytes()))
        .unwrap();

    assert_eq!(
        report.pages_ok,
        PageListing {
            pages: vec!["/index.html".to_string()],
            remaining: 1,
        }
    );
}

#[test]
fn custom_crawler_identities_replace_defaults() {
    let mut config = AnalyzerConfig::default();
    config.crawlers.identities = vec!["bingbot".to_string()];
    let analyzer = Analyzer::new(&config);
    let bing = r#"40.77.167.1 - - [10/Oct/2023:13:55:36 +0000] "GET / HTTP/1.1" 200 1 "-" "Mozilla/5.0 (compatible; bingbot/2.0)""#;
    let input = [bing, GOOGLEBOT].join("\n");

    let report = analyzer
        .analyze_reader(Cursor::new(input.into_bytes()))
        .unwrap();

    assert_eq!(report.crawlers.len(), 1);
    assert_eq!(report.crawlers[0].name, "bingbot");
    assert_eq!(report.crawlers[0].requests, 1);
    assert_eq!(report.crawlers[0].percent, 50.0);
}

#[test]
fn each_pass_starts_fresh() {
    let analyzer = Analyzer::default();

    let first = analyzer
        .analyze_reader(Cursor::new(HUMAN.as_bytes().to_vec()))
        .unwrap();
    let second = analyzer
        .analyze_reader(Cursor::new(HUMAN.as_bytes().to_vec()))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.lines_observed, 1);
}

#[test]
fn unterminated_oversize_line_is_not_buffered_whole() {
    // Arrange
    let mut config = AnalyzerConfig::default();
    config.analysis.max_line_length = 10;
    let analyzer = Analyzer::new(&config);
    let mut input = Cursor::new("x".repeat(10_000).into_bytes());

    // Act
    let err = analyzer.analyze_reader(&mut input).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        AnalysisError::OversizeLine {
            line_number: 1,
            length: 42,
            limit: 10,
        }
    ));
    assert_eq!(input.position(), 42);
}

#[test]
fn oversize_line_after_short_lines_keeps_its_number() {
    let mut config = AnalyzerConfig::default();
    config.analysis.max_line_length = 10;
    let analyzer = Analyzer::new(&config);
    let input = format!("short\nshort\n{}", "y".repeat(500));

    let err = analyzer
        .analyze_reader(Cursor::new(input.into_bytes()))
        .unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::OversizeLine { line_number: 3, .. }
    ));
}
