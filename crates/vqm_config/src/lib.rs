//! Parsing and validation of `vqm.toml` run configuration files.
//!
//! The configuration names the netlist and architecture catalog to translate
//! and where the report goes. Every field is optional; command-line flags
//! take precedence over anything set here.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
