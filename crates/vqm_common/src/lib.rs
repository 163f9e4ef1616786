//! Shared foundational types used across the VQM translation workspace.
//!
//! This crate provides identifier sanitization for the target netlist naming
//! convention, file naming helpers, and the common internal-error result type.

#![warn(missing_docs)]

pub mod files;
pub mod ident;
pub mod result;

pub use files::{derive_output_path, has_extension};
pub use ident::{is_valid_identifier, sanitize};
pub use result::{InternalError, VqmResult};
