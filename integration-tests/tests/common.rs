use integration_tests::harness::fixture_path;
use logstat_core::analysis::{AnalysisError, AnalysisReport, Analyzer};
use logstat_core::conf::load_config;

pub fn analyze_fixture(file: &str) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::default().analyze_file(&fixture_path(file))
}

#[allow(dead_code)]
pub fn configured_analyzer() -> Analyzer {
    let config = load_config(&fixture_path("logstat.hcl")).expect("failed to load logstat.hcl");
    Analyzer::new(&config)
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
