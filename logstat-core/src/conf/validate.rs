use crate::conf::{AnalyzerConfig, ValidationError};
use ahash::AHashSet;

/// Check a parsed config, collecting every problem instead of stopping at
/// the first one.
pub fn validate_config(config: &AnalyzerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.analysis.max_line_length == 0 {
        errors.push(ValidationError::ZeroMaxLineLength);
    }
    if config.analysis.top_pages == 0 {
        errors.push(ValidationError::ZeroTopPages);
    }

    let mut seen = AHashSet::new();
    for (index, name) in config.crawlers.identities.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyIdentity { index });
            continue;
        }
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateIdentity { name: name.clone() });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
