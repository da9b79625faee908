use serde::Serialize;

/// One `import { ... } from "..."` statement found in a declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Names inside the braces, trimmed, in source order
    pub names: Vec<String>,
    /// Module specifier exactly as written
    pub path: String,
}

impl ImportBinding {
    pub fn new(names: Vec<String>, path: impl Into<String>) -> Self {
        Self {
            names,
            path: path.into(),
        }
    }
}

/// Entry-point names passed to the factory call, in declaration order.
///
/// Duplicates are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryPointSet {
    names: Vec<String>,
}

impl EntryPointSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An import restricted to the names that are also entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredImport {
    pub names: Vec<String>,
    pub path: String,
}

/// Everything the scanner pulled out of a declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub imports: Vec<ImportBinding>,
    pub entry_points: EntryPointSet,
    /// Factory calls after the first one; these are ignored
    pub extra_factory_calls: usize,
}
