use crate::analysis::Analyzer;
use crate::cli::render::{ReportStyle, render};
use crate::conf::{AnalyzerConfig, ConfigError, load_config, validate_config};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::error;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Access log files, analysed one after another
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print each report as JSON
    #[arg(long)]
    pub json: bool,

    /// Bold section headings
    #[arg(long, conflicts_with = "json")]
    pub color: bool,
}

/// Flags that feed [`resolve_config`]; shared by `analyze` and `prompt`.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to an HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of 200/404 pages to list
    #[arg(long = "top")]
    pub top_pages: Option<usize>,

    /// Longest accepted line, in characters
    #[arg(long)]
    pub max_line_length: Option<usize>,
}

impl AnalyzeArgs {
    pub fn style(&self) -> ReportStyle {
        if self.json {
            ReportStyle::Json
        } else {
            ReportStyle::Plain { color: self.color }
        }
    }
}

/// Config file (or defaults), then flag overrides, then validation again so
/// `--top 0` is rejected the same way as `top_pages = 0`.
pub fn resolve_config(settings: &SettingsArgs) -> Result<AnalyzerConfig, ConfigError> {
    let mut config = match &settings.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(top_pages) = settings.top_pages {
        config.analysis.top_pages = top_pages;
    }
    if let Some(max_line_length) = settings.max_line_length {
        config.analysis.max_line_length = max_line_length;
    }

    validate_config(&config).map_err(|errors| ConfigError::Validation { errors })?;

    Ok(config)
}

/// Analyse every file, writing reports to `out` and per-file failures to
/// `err`. Returns how many files failed.
pub fn run_analyze<W: Write, E: Write>(
    args: &AnalyzeArgs,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<usize> {
    let config = resolve_config(&args.settings)?;
    let analyzer = Analyzer::new(&config);
    let style = args.style();

    let mut failures = 0;
    for path in &args.files {
        match analyzer.analyze_file(path) {
            Ok(report) => {
                writeln!(out, "{}", render(&report, style)?)?;
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "analysis failed");
                writeln!(err, "{}: {e}", path.display())?;
                failures += 1;
            }
        }
    }

    Ok(failures)
}
