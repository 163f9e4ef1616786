//! Error types for architecture catalog loading.

use std::path::PathBuf;

/// Errors that can occur when loading an architecture catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read architecture catalog {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file does not carry the expected extension.
    #[error("improper filename {path}: expected a .toml file")]
    ImproperFilename {
        /// The offending path.
        path: PathBuf,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse architecture catalog: {0}")]
    Parse(String),

    /// A model entry has an empty name.
    #[error("architecture model #{index} has an empty name")]
    EmptyModelName {
        /// Zero-based position of the entry in the file.
        index: usize,
    },
}
