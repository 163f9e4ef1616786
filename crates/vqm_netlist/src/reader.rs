//! JSON interchange reader for the module graph.
//!
//! The document is either a module object or `null`; `null` stands for a
//! netlist that yielded no module and is reported by the structural
//! validator, not here.

use crate::error::NetlistError;
use crate::module::Module;
use std::path::Path;
use vqm_common::has_extension;

/// Reads a module graph from a `.json` file.
pub fn read_module(path: &Path) -> Result<Option<Module>, NetlistError> {
    if !has_extension(path, "json") {
        return Err(NetlistError::ImproperFilename {
            path: path.to_path_buf(),
            expected: "json",
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| NetlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_module_from_str(&content)
}

/// Parses a module graph from JSON text.
pub fn read_module_from_str(content: &str) -> Result<Option<Module>, NetlistError> {
    serde_json::from_str(content).map_err(|e| NetlistError::Parse {
        reason: e.to_string(),
    })
}
