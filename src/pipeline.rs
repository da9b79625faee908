//! Generation pipeline: read the declaration file, scan it, narrow the
//! imports, render the actions module and persist it.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyze::{resolve_imports, Resolution, Scanner};
use crate::config::GenerateConfig;
use crate::emit::{actions_path, read_actions, write_actions};
use crate::error::{Result, TrouteError};
use crate::generate::generate_actions;
use crate::types::EntryPointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ResolvingPath,
    Reading,
    Extracting,
    Filtering,
    Synthesizing,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::ResolvingPath => "resolving-path",
            Stage::Reading => "reading",
            Stage::Extracting => "extracting",
            Stage::Filtering => "filtering",
            Stage::Synthesizing => "synthesizing",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of one run, whether or not it was written to disk.
#[derive(Debug, Clone)]
pub struct Generation {
    pub declaration: PathBuf,
    pub output: PathBuf,
    pub entry_points: EntryPointSet,
    pub resolution: Resolution,
    pub extra_factory_calls: usize,
    pub content: String,
}

/// Pick the declaration file when none was given on the command line.
///
/// Exactly one candidate is produced: `<root>/<source_dir>/<stem>.<ext>` if
/// anything named `source_dir` exists, otherwise `<root>/<stem>.<ext>`.
pub fn default_declaration_path(root: &Path, config: &GenerateConfig) -> PathBuf {
    let file_name = format!("{}.{}", config.file_stem, config.extension);
    let source_dir = root.join(&config.source_dir);

    debug!(stage = %Stage::ResolvingPath, dir = %source_dir.display(), "No path provided, checking for source directory");

    if source_dir.exists() {
        source_dir.join(file_name)
    } else {
        root.join(file_name)
    }
}

pub fn resolve_declaration_path(
    root: &Path,
    path: Option<&Path>,
    config: &GenerateConfig,
) -> PathBuf {
    match path {
        Some(p) if !p.as_os_str().is_empty() => root.join(p),
        _ => default_declaration_path(root, config),
    }
}

pub struct Generator {
    config: GenerateConfig,
    scanner: Scanner,
    strict: bool,
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Result<Self> {
        let scanner = Scanner::new(&config.factory)?;
        let strict = config.strict;
        Ok(Self {
            config,
            scanner,
            strict,
        })
    }

    /// Allow entry points without a backing import.
    pub fn lenient(mut self, lenient: bool) -> Self {
        if lenient {
            self.strict = false;
        }
        self
    }

    /// Run every stage except writing.
    pub fn render(&self, declaration: &Path) -> Result<Generation> {
        self.render_stages(declaration).inspect_err(|e| {
            debug!(stage = %Stage::Failed, error = %e, "Generation failed");
        })
    }

    fn render_stages(&self, declaration: &Path) -> Result<Generation> {
        debug!(stage = %Stage::Reading, path = %declaration.display(), "Looking for troute file");
        let content = read_declaration(declaration)?;

        debug!(stage = %Stage::Extracting, factory = self.scanner.factory(), "Scanning declaration file");
        let extraction =
            self.scanner
                .extract(&content)
                .ok_or_else(|| TrouteError::PatternNotMatched {
                    path: declaration.to_path_buf(),
                    factory: self.scanner.factory().to_string(),
                })?;
        debug!(
            imports = extraction.imports.len(),
            entry_points = extraction.entry_points.len(),
            extra_factory_calls = extraction.extra_factory_calls,
            "Extracted declarations"
        );

        debug!(stage = %Stage::Filtering, "Resolving entry points against imports");
        let resolution = resolve_imports(&extraction.imports, &extraction.entry_points);
        for path in &resolution.dropped {
            debug!(module = %path, "Import contributes no entry points");
        }

        if self.strict && !resolution.is_fully_backed() {
            return Err(TrouteError::UnbackedEntryPoints {
                names: resolution.unbacked.clone(),
            });
        }

        debug!(stage = %Stage::Synthesizing, "Rendering actions module");
        let rendered = generate_actions(
            &self.config.directive,
            &resolution.imports,
            &extraction.entry_points,
        );

        Ok(Generation {
            declaration: declaration.to_path_buf(),
            output: actions_path(declaration, &self.config),
            entry_points: extraction.entry_points,
            resolution,
            extra_factory_calls: extraction.extra_factory_calls,
            content: rendered,
        })
    }

    /// Render and write the actions module, replacing any previous one.
    pub fn generate(&self, declaration: &Path) -> Result<Generation> {
        let generation = self.render(declaration)?;

        debug!(stage = %Stage::Writing, path = %generation.output.display(), "Writing output");
        write_actions(&generation.output, &generation.content).inspect_err(|e| {
            debug!(stage = %Stage::Failed, error = %e, "Generation failed");
        })?;

        debug!(stage = %Stage::Done, "Generation finished");
        Ok(generation)
    }

    /// Render and compare with the actions module on disk without writing.
    pub fn check(&self, declaration: &Path) -> Result<Generation> {
        let generation = self.render(declaration)?;

        match read_actions(&generation.output)? {
            Some(existing) if existing == generation.content => {
                debug!(stage = %Stage::Done, path = %generation.output.display(), "Actions module is up to date");
                Ok(generation)
            }
            _ => Err(TrouteError::Stale {
                path: generation.output,
            }),
        }
    }
}

fn read_declaration(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(TrouteError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(TrouteError::io(path, e)),
    }
}
