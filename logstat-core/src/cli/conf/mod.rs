mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the HCL config file
        #[arg(default_value = "logstat.hcl")]
        path: PathBuf,

        /// Skip the hints after each problem
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved configuration as JSON
    Dump {
        #[arg(default_value = "logstat.hcl")]
        path: PathBuf,
    },
}

/// Returns `false` when the config was rejected.
pub fn run<W: std::io::Write, E: std::io::Write>(
    cmd: ConfigCmd,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<bool> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(&path, plain, out, err),
        ConfigCmd::Dump { path } => {
            dump(&path, out)?;
            Ok(true)
        }
    }
}
