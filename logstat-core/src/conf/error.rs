use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("invalid configuration ({} problem(s))", .errors.len())]
    Validation { errors: Vec<ValidationError> },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("analysis.max_line_length must be greater than zero")]
    ZeroMaxLineLength,

    #[error("analysis.top_pages must be greater than zero")]
    ZeroTopPages,

    #[error("crawlers.identities[{index}] is empty")]
    EmptyIdentity { index: usize },

    #[error("crawler identity '{name}' is listed more than once")]
    DuplicateIdentity { name: String },
}
