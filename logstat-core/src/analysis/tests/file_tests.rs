use crate::analysis::{AnalysisError, Analyzer};
use std::fs;
use tempfile::tempdir;

const LINE: &str = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "-" "Mozilla/5.0 (Windows NT 10.0) Chrome/118.0""#;

#[test]
fn analyze_file_sets_source() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, format!("{LINE}\n{LINE}\n")).unwrap();

    // Act
    let report = Analyzer::default().analyze_file(&path).unwrap();

    // Assert
    assert_eq!(report.source, Some(path.display().to_string()));
    assert_eq!(report.lines_observed, 2);
    assert_eq!(report.metrics.max_visits_per_user, 2);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.log");

    let err = Analyzer::default().analyze_file(&path).unwrap_err();

    assert!(matches!(err, AnalysisError::NotFound { path: p } if p == path));
}

#[test]
fn directory_is_rejected() {
    let dir = tempdir().unwrap();

    let err = Analyzer::default().analyze_file(dir.path()).unwrap_err();

    assert!(matches!(err, AnalysisError::IsDirectory { .. }));
}

#[test]
fn oversize_line_in_file_aborts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, format!("{LINE}\n{}\n", "a".repeat(1025))).unwrap();

    let err = Analyzer::default().analyze_file(&path).unwrap_err();

    assert_eq!(
        err.to_string(),
        "line 2 is 1025 characters long, the limit is 1024"
    );
}
