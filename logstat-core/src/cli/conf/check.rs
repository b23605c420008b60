use crate::conf::{ConfigError, ValidationError, load_config};
use std::io::Write;
use std::path::Path;

pub fn check<W: Write, E: Write>(
    path: &Path,
    plain: bool,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<bool> {
    match load_config(path) {
        Ok(cfg) => {
            writeln!(out, "✔ Config loaded successfully")?;
            writeln!(out, "✔ max_line_length = {}", cfg.analysis.max_line_length)?;
            writeln!(out, "✔ top_pages = {}", cfg.analysis.top_pages)?;
            writeln!(
                out,
                "✔ {} crawler identities",
                cfg.crawlers.identities.len()
            )?;
            Ok(true)
        }
        Err(e) => {
            print_config_error(&e, plain, err)?;
            Ok(false)
        }
    }
}

fn print_config_error<E: Write>(e: &ConfigError, plain: bool, err: &mut E) -> anyhow::Result<()> {
    writeln!(err, "{e}")?;

    let ConfigError::Validation { errors } = e else {
        return Ok(());
    };

    for problem in errors {
        writeln!(err, "  ✘ {problem}")?;
        if plain {
            continue;
        }
        if let Some(hint) = validation_hint(problem) {
            writeln!(err)?;
            for line in hint.lines() {
                writeln!(err, "    {line}")?;
            }
            writeln!(err)?;
        }
    }

    Ok(())
}

pub fn validation_hint(problem: &ValidationError) -> Option<&'static str> {
    match problem {
        ValidationError::ZeroMaxLineLength => Some(
            "Every line would be rejected. Use a positive limit.\n\
             \n\
             analysis {\n  max_line_length = 1024\n}",
        ),

        ValidationError::ZeroTopPages => Some(
            "The page listings would always be empty. Use a positive count.\n\
             \n\
             analysis {\n  top_pages = 5\n}",
        ),

        ValidationError::EmptyIdentity { .. } => Some(
            "An empty identity matches every user-agent. Remove the entry.",
        ),

        ValidationError::DuplicateIdentity { .. } => None,
    }
}
