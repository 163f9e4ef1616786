//! Error types for loading a netlist module.

use std::path::PathBuf;

/// Errors that can occur while reading a netlist interchange file.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// The netlist file could not be read.
    #[error("failed to read netlist {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file does not carry the expected extension.
    #[error("improper filename {path}: expected a .{expected} file")]
    ImproperFilename {
        /// The offending path.
        path: PathBuf,
        /// The expected extension, without the dot.
        expected: &'static str,
    },

    /// The content is not a valid netlist document.
    #[error("failed to parse netlist: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },
}
