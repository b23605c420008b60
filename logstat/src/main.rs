use clap::{Parser, Subcommand};
use logstat_core::cli::conf::ConfigCmd;
use logstat_core::cli::{AnalyzeArgs, PromptArgs, run_analyze, run_prompt};
use logstat_core::logging::{LogFormat, default_log_format, init_logging};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: access log analyzer"
)]
struct Cli {
    /// Diagnostics format on stderr (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse one or more access log files
    Analyze(AnalyzeArgs),

    /// Ask for log file paths on stdin, one at a time
    Prompt(PromptArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<bool> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    match command {
        Command::Analyze(args) => {
            let failures = run_analyze(&args, &mut out, &mut err)?;
            Ok(failures == 0)
        }

        Command::Prompt(args) => {
            let analyzer = args.analyzer()?;
            run_prompt(&analyzer, args.style(), io::stdin().lock(), &mut out)?;
            Ok(true)
        }

        Command::Config { cmd } => logstat_core::cli::conf::run(cmd, &mut out, &mut err),
    }
}
