use anyhow::Result;
use std::path::Path;

use super::output::{print_diagnostics, print_success};
use crate::config::GenerateConfig;
use crate::pipeline::{resolve_declaration_path, Generator};

pub fn run_check(
    root: &Path,
    path: Option<&Path>,
    config: GenerateConfig,
    lenient: bool,
) -> Result<()> {
    let declaration = resolve_declaration_path(root, path, &config);
    let generator = Generator::new(config)?.lenient(lenient);

    let generation = generator.check(&declaration)?;
    print_diagnostics(&generation);

    print_success(&format!(
        "{} is up to date",
        generation.output.display()
    ));

    Ok(())
}
