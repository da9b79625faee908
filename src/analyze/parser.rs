//! Scanner for troute declaration files.
//!
//! Recognises exactly two statement shapes:
//! - `import { a, b } from "./path"` (every occurrence, source order)
//! - `<factory>({ a, b })` (first occurrence wins)
//!
//! Everything else in the file is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::types::{EntryPointSet, Extraction, ImportBinding};

static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)import\s+\{([^}]+)\}\s+from\s+["']([^"']+)["']"#).unwrap()
});

pub struct Scanner {
    factory: String,
    factory_pattern: Regex,
}

impl Scanner {
    pub fn new(factory: &str) -> Result<Self> {
        let pattern = format!(r"{}\(\s*\{{([^}}]+)\}}\s*\)", regex::escape(factory));
        Ok(Self {
            factory: factory.to_string(),
            factory_pattern: Regex::new(&pattern)?,
        })
    }

    pub fn factory(&self) -> &str {
        &self.factory
    }

    /// All import statements in source order.
    pub fn scan_imports(&self, content: &str) -> Vec<ImportBinding> {
        IMPORT_PATTERN
            .captures_iter(content)
            .filter_map(|cap| {
                let names = cap.get(1)?.as_str();
                let path = cap.get(2)?.as_str();
                Some(ImportBinding::new(split_names(names), path))
            })
            .collect()
    }

    /// Argument lists of every factory call in source order.
    pub fn scan_factory_calls(&self, content: &str) -> Vec<EntryPointSet> {
        self.factory_pattern
            .captures_iter(content)
            .filter_map(|cap| cap.get(1))
            .map(|m| EntryPointSet::new(split_names(m.as_str())))
            .collect()
    }

    /// Scan a whole declaration file.
    ///
    /// Returns `None` when no factory call is present. When several are
    /// present the first one is used and the rest are counted.
    pub fn extract(&self, content: &str) -> Option<Extraction> {
        let mut calls = self.scan_factory_calls(content).into_iter();
        let entry_points = calls.next()?;

        Some(Extraction {
            imports: self.scan_imports(content),
            entry_points,
            extra_factory_calls: calls.count(),
        })
    }
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
