use crate::conf::validate::validate_config;
use crate::conf::{AnalyzerConfig, ConfigError};
use std::fs;
use std::path::Path;

/// Read, parse and validate an HCL config file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &contents)?;

    tracing::debug!(
        path = %path.display(),
        max_line_length = config.analysis.max_line_length,
        top_pages = config.analysis.top_pages,
        crawlers = config.crawlers.identities.len(),
        "config loaded"
    );

    Ok(config)
}

/// `origin` is only used in error messages.
pub fn parse_config(origin: &Path, contents: &str) -> Result<AnalyzerConfig, ConfigError> {
    let config: AnalyzerConfig =
        hcl::from_str(contents).map_err(|e| ConfigError::parse(origin, e))?;

    validate_config(&config).map_err(|errors| ConfigError::Validation { errors })?;

    Ok(config)
}
