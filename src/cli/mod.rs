mod args;
mod check;
mod generate;
mod output;

pub use args::{Args, Command};
pub use check::run_check;
pub use generate::{run_generate, GenerateOptions};
pub use output::print_warn;
