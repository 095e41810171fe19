//! `moodlift` binary.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use moodlift_cli::commands::{classify, interactive, manage};
use moodlift_cli::runtime::open_store;
use moodlift_cli::{exit_code_for_error, Cli, CliExitCode, Command, Runtime};
use moodlift_core::config::CliOverrides;
use moodlift_core::tracing_setup::init_tracing;
use moodlift_core::{AppError, MoodliftConfig};

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => CliExitCode::Success,
        Err(err) => {
            eprintln!("error: {err}");
            exit_code_for_error(&err)
        }
    };
    std::process::exit(code.code());
}

fn run(cli: Cli) -> Result<(), AppError> {
    let root = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let overrides = CliOverrides {
        database_path: cli.db.as_ref().map(|p| p.display().to_string()),
        log_level: cli.verbosity_level().map(str::to_string),
    };
    let config = MoodliftConfig::load(&root, Some(&overrides))?;
    init_tracing(&config.logging, cli.verbosity_level());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Classify(args) => {
            let runtime = Runtime::from_config(&config, &root)?;
            classify::handle_classify(&runtime, &args, &mut out)?;
        }
        Command::Interactive => {
            let runtime = Runtime::from_config(&config, &root)?;
            let stdin = io::stdin();
            interactive::run_interactive(&runtime, stdin.lock(), &mut out)?;
        }
        Command::Seed => manage::handle_seed(&open_store(&config, &root)?, &mut out)?,
        Command::Add(args) => manage::handle_add(&open_store(&config, &root)?, args, &mut out)?,
        Command::Stats => manage::handle_stats(&open_store(&config, &root)?, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
