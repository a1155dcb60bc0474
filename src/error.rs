use std::path::PathBuf;

use thiserror::Error;

/// Message served when the export route is switched off.
pub const DISABLED_MESSAGE: &str = "llms.txt is not enabled for this Catalog.";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{}", DISABLED_MESSAGE)]
    Disabled,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("catalog directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to walk catalog directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
