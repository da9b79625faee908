use serde::Serialize;

use crate::analyze::Resolution;
use crate::pipeline::Generation;
use crate::types::{EntryPointSet, FilteredImport};

#[derive(Serialize)]
pub struct JsonReport {
    pub version: String,
    pub declaration: String,
    pub output: String,
    pub written: bool,
    pub entry_points: EntryPointSet,
    pub imports: Vec<FilteredImport>,
    pub dropped_imports: Vec<String>,
    pub unbacked: Vec<String>,
    pub extra_factory_calls: usize,
}

impl JsonReport {
    pub fn from_generation(generation: &Generation, written: bool) -> Self {
        let Resolution {
            imports,
            dropped,
            unbacked,
        } = generation.resolution.clone();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            declaration: generation.declaration.display().to_string(),
            output: generation.output.display().to_string(),
            written,
            entry_points: generation.entry_points.clone(),
            imports,
            dropped_imports: dropped,
            unbacked,
            extra_factory_calls: generation.extra_factory_calls,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
