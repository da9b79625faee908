use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::GenerateConfig;
use crate::error::{Result, TrouteError};

/// `<declaration dir>/<output_dir>/<output_stem>.<ext>`
///
/// The extension follows the declaration file's own, falling back to the
/// configured default.
pub fn actions_path(declaration: &Path, config: &GenerateConfig) -> PathBuf {
    let dir = declaration.parent().unwrap_or_else(|| Path::new(""));
    let ext = declaration
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(config.extension.as_str());

    dir.join(&config.output_dir)
        .join(format!("{}.{}", config.output_stem, ext))
}

/// Write the derived file, creating its directory and replacing any previous version.
pub fn write_actions(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TrouteError::io(parent, e))?;
        }
    }

    fs::write(path, content).map_err(|e| TrouteError::io(path, e))
}

/// Current contents of the derived file, if it exists.
pub fn read_actions(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TrouteError::io(path, e)),
    }
}
