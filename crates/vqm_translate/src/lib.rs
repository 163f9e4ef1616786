//! Translation core: structural validation and mode-hash resolution.
//!
//! A translation run is a single pass over one parsed [`Module`](vqm_netlist::Module):
//!
//! 1. [`validate`] certifies the module graph is structurally sound
//!    (names present, every pin reference resolves, every bit index is in range).
//! 2. [`resolve_mode_hash`] derives, for every primitive instance, the
//!    canonical architecture model name, checked against the [`Catalog`](vqm_arch::Catalog).
//! 3. [`resolve_name`] produces canonical `name[bit]` net names for the emitter.
//!
//! [`translate`] runs the whole pass. Every failure is returned as a
//! [`TranslateError`]; nothing in this crate terminates the process.

#![warn(missing_docs)]

pub mod error;
pub mod mode_hash;
pub mod names;
pub mod translate;
pub mod validate;

pub use error::{Connection, ModeHashError, NameError, TranslateError, ValidationError};
pub use mode_hash::{resolve_mode, resolve_mode_hash, ModeResolution, Tier};
pub use names::{append_index, resolve_name};
pub use translate::{
    translate, ResolvedAssignment, ResolvedInstance, ResolvedPort, TranslateOptions, Translation,
};
pub use validate::validate;
