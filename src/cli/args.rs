use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "troute")]
#[command(version, about = "Generate server actions from a troute declaration file")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Run with verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file [default: troute.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate actions. Needed whenever troute's queries change.
    Generate {
        /// Path to the troute file
        path: Option<PathBuf>,

        /// Allow entry points that have no matching import
        #[arg(long)]
        lenient: bool,

        /// Print the generated module instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Verify the generated actions are up to date without writing.
    Check {
        /// Path to the troute file
        path: Option<PathBuf>,

        /// Allow entry points that have no matching import
        #[arg(long)]
        lenient: bool,
    },
}
