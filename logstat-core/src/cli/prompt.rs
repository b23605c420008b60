use crate::analysis::{AnalysisError, Analyzer};
use crate::cli::analyze::{SettingsArgs, resolve_config};
use crate::cli::render::{ReportStyle, render};
use clap::Args;
use std::io::{BufRead, Write};
use std::path::Path;

pub const PROMPT: &str = "Enter the path to a log file: ";

#[derive(Args, Debug, Clone, Default)]
pub struct PromptArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print each report as JSON
    #[arg(long)]
    pub json: bool,
}

impl PromptArgs {
    pub fn analyzer(&self) -> anyhow::Result<Analyzer> {
        Ok(Analyzer::new(&resolve_config(&self.settings)?))
    }

    pub fn style(&self) -> ReportStyle {
        if self.json {
            ReportStyle::Json
        } else {
            ReportStyle::Plain { color: false }
        }
    }
}

/// Ask for paths until EOF, `quit` or `exit`.
///
/// Missing files and directories are reported and asked for again; they do
/// not get a sequence number. Any other failure (an oversize line, an I/O
/// error) is reported and the loop moves on. Returns the number of accepted
/// files.
pub fn run_prompt<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    style: ReportStyle,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut accepted = 0;
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            break;
        }

        match analyzer.analyze_file(Path::new(entry)) {
            Ok(report) => {
                accepted += 1;
                writeln!(out, "This is file number {accepted}")?;
                writeln!(out, "{}", render(&report, style)?)?;
            }
            Err(e @ (AnalysisError::NotFound { .. } | AnalysisError::IsDirectory { .. })) => {
                writeln!(out, "{e}")?;
            }
            Err(e) => {
                accepted += 1;
                writeln!(out, "This is file number {accepted}")?;
                writeln!(out, "analysis aborted: {e}")?;
            }
        }
    }

    Ok(accepted)
}
