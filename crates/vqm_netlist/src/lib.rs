//! In-memory netlist graph consumed by the translation core.
//!
//! This crate defines the [`Module`] graph produced by the netlist parser:
//! [`Pin`]s (wires and buses), [`Assignment`]s, and primitive [`Instance`]s
//! with typed [`Parameter`]s and [`PortAssociation`]s. References between
//! entities are typed arena IDs that resolve inside the owning module.
//!
//! The [`reader`] module loads a module graph from its JSON interchange form.

#![warn(missing_docs)]

pub mod arena;
pub mod error;
pub mod ids;
pub mod instance;
pub mod module;
pub mod param;
pub mod pin;
pub mod reader;

pub use arena::{Arena, ArenaId};
pub use error::NetlistError;
pub use ids::{InstanceId, PinId};
pub use instance::{Instance, PortAssociation};
pub use module::{AssignSource, Assignment, Module};
pub use param::{ParamKind, ParamValue, Parameter};
pub use pin::{Pin, WHOLE_PIN};
pub use reader::{read_module, read_module_from_str};
