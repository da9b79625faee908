//! Project configuration loaded from `troute.toml`.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, TrouteError};

pub const CONFIG_FILE: &str = "troute.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Conventional source directory probed when no path is given
    pub source_dir: String,
    pub file_stem: String,
    pub extension: String,
    pub output_dir: String,
    pub output_stem: String,
    /// Factory function whose argument lists the entry points
    pub factory: String,
    pub directive: String,
    /// Fail when an entry point has no matching import
    pub strict: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            file_stem: "troute".to_string(),
            extension: "ts".to_string(),
            output_dir: ".troute".to_string(),
            output_stem: "actions".to_string(),
            factory: "createTroute".to_string(),
            directive: "use server".to_string(),
            strict: true,
        }
    }
}

impl Config {
    /// Load an explicitly named config file, or `troute.toml` when none was
    /// named. Only the implicit file may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(CONFIG_FILE)),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrouteError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => TrouteError::io(path, e),
        })?;
        Self::parse(&content).map_err(|source| TrouteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
