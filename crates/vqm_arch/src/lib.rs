//! Architecture catalog: the primitive models a target device supports.
//!
//! The translation core only ever asks one question of the architecture:
//! "is there a model with exactly this name?". This crate provides the
//! [`Catalog`] that answers it and a TOML reader that builds one.
//!
//! # Usage
//!
//! ```
//! use vqm_arch::load_catalog_from_str;
//!
//! let catalog = load_catalog_from_str(r#"
//! [[model]]
//! name = "stratixiv_ram_block.opmode{dual_port}"
//! "#).unwrap();
//! assert!(catalog.find_model("stratixiv_ram_block.opmode{dual_port}").is_some());
//! assert!(catalog.find_model("stratixiv_ram_block").is_none());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{ArchModel, Catalog};
pub use error::CatalogError;
pub use loader::{load_catalog, load_catalog_from_str};
