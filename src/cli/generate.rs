use anyhow::Result;
use console::style;
use std::path::Path;

use super::output::{print_diagnostics, print_info, print_success};
use crate::config::GenerateConfig;
use crate::emit::JsonReport;
use crate::pipeline::{resolve_declaration_path, Generator};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub lenient: bool,
    pub dry_run: bool,
    pub json: bool,
}

pub fn run_generate(
    root: &Path,
    path: Option<&Path>,
    config: GenerateConfig,
    options: GenerateOptions,
) -> Result<()> {
    let declaration = resolve_declaration_path(root, path, &config);
    let generator = Generator::new(config)?.lenient(options.lenient);
    let quiet = options.json || options.dry_run;

    let generation = if options.dry_run {
        generator.render(&declaration)?
    } else {
        generator.generate(&declaration)?
    };

    print_diagnostics(&generation);

    if options.json {
        let report = JsonReport::from_generation(&generation, !options.dry_run);
        println!("{}", report.to_json());
    } else if options.dry_run {
        print!("{}", generation.content);
    }

    if !quiet {
        print_info(&format!(
            "Found troute file at {}",
            generation.declaration.display()
        ));
        print_success(&format!(
            "Successfully generated {}",
            style(generation.output.display()).bold()
        ));
    }

    Ok(())
}
