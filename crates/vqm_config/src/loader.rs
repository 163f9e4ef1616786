//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::VqmConfig;
use std::path::{Path, PathBuf};
use vqm_common::has_extension;

/// The configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vqm.toml";

/// Returns `<dir>/vqm.toml` if it exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<VqmConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<VqmConfig, ConfigError> {
    let config: VqmConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects empty paths and inputs with the wrong extension.
fn validate_config(config: &VqmConfig) -> Result<(), ConfigError> {
    check_path("input.netlist", config.input.netlist.as_deref(), Some("json"))?;
    check_path("input.catalog", config.input.catalog.as_deref(), Some("toml"))?;
    check_path("output.report", config.output.report.as_deref(), None)?;
    Ok(())
}

fn check_path(
    field: &str,
    value: Option<&str>,
    extension: Option<&str>,
) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.is_empty() {
        return Err(ConfigError::MissingField(field.to_string()));
    }
    if let Some(ext) = extension {
        if !has_extension(Path::new(value), ext) {
            return Err(ConfigError::Validation(format!(
                "{field} '{value}' must have a .{ext} extension"
            )));
        }
    }
    Ok(())
}
