use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrouteError>;

#[derive(Debug, Error)]
pub enum TrouteError {
    #[error("Troute file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Could not find {factory} object in troute file {}", .path.display())]
    PatternNotMatched { path: PathBuf, factory: String },

    #[error("Entry points without a matching import: {}", .names.join(", "))]
    UnbackedEntryPoints { names: Vec<String> },

    #[error("Generated file {} is out of date; run `troute generate`", .path.display())]
    Stale { path: PathBuf },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid factory pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config file not found at {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TrouteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
