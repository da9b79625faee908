use std::collections::HashSet;

use crate::types::{EntryPointSet, FilteredImport, ImportBinding};

/// Imports narrowed to entry points, plus the entry points nothing imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub imports: Vec<FilteredImport>,
    /// Import statements that contributed nothing
    pub dropped: Vec<String>,
    /// Entry points with no backing import, in declaration order
    pub unbacked: Vec<String>,
}

impl Resolution {
    pub fn is_fully_backed(&self) -> bool {
        self.unbacked.is_empty()
    }
}

/// Keep, for each import, only the names that are entry points.
///
/// Name order within an import is preserved. A name already claimed by an
/// earlier import is not repeated. Imports left empty are dropped.
pub fn resolve_imports(imports: &[ImportBinding], entry_points: &EntryPointSet) -> Resolution {
    let mut kept: Vec<FilteredImport> = Vec::new();
    let mut dropped = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for import in imports {
        let mut names = Vec::new();
        for name in &import.names {
            if entry_points.contains(name) && claimed.insert(name.as_str()) {
                names.push(name.clone());
            }
        }

        if names.is_empty() {
            dropped.push(import.path.clone());
        } else {
            kept.push(FilteredImport {
                names,
                path: import.path.clone(),
            });
        }
    }

    let mut unbacked: Vec<String> = Vec::new();
    for name in entry_points.names() {
        if !claimed.contains(name.as_str()) && !unbacked.contains(name) {
            unbacked.push(name.clone());
        }
    }

    Resolution {
        imports: kept,
        dropped,
        unbacked,
    }
}
