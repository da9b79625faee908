use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::Level;

use troute::cli::{print_warn, run_check, run_generate, Args, Command, GenerateOptions};
use troute::config::Config;
use troute::pipeline::Stage;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_warn(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<()> {
    tracing::debug!(stage = %Stage::Idle, "Starting troute generation");

    let config = Config::resolve(args.config.as_deref())?;
    let root = Path::new("");

    match args.command {
        Command::Generate {
            path,
            lenient,
            dry_run,
            json,
        } => run_generate(
            root,
            path.as_deref(),
            config.generate,
            GenerateOptions {
                lenient,
                dry_run,
                json,
            },
        ),
        Command::Check { path, lenient } => {
            run_check(root, path.as_deref(), config.generate, lenient)
        }
    }
}
