//! Mode-hash resolution: mapping a primitive instance onto an architecture model.
//!
//! The mode hash starts as the instance's declared type and is made more
//! specific with the configuration parameters the architecture distinguishes:
//!
//! 1. `type`: the bare primitive.
//! 2. `type.opmode{mode}`: any primitive with an `operation_mode`.
//! 3. `type.opmode{single_port}.port_a_address_width{7}`: single-port memories.
//! 4. `type.opmode{dual_port}.port_a_address_width{5}.port_b_address_width{5}`:
//!    dual-port memories with equal ports.
//! 5. `type.opmode{dual_port}.port_a_data_width{..}.port_a_address_width{..}.port_b_data_width{..}.port_b_address_width{..}`:
//!    mixed-width dual-port memories, but only if the catalog has that
//!    model; otherwise the opmode-only name from step 2 is used.
//!
//! Data widths of same-width memories are left out: the downstream memory
//! model derives them from the port connections.
//!
//! Whatever name is chosen must exist in the catalog.

use serde::Serialize;
use vqm_arch::Catalog;
use vqm_common::sanitize;
use vqm_netlist::{Instance, ParamKind, Parameter};

use crate::error::ModeHashError;

const OPERATION_MODE: &str = "operation_mode";
const PORT_A_DATA_WIDTH: &str = "port_a_data_width";
const PORT_A_ADDRESS_WIDTH: &str = "port_a_address_width";
const PORT_B_DATA_WIDTH: &str = "port_b_data_width";
const PORT_B_ADDRESS_WIDTH: &str = "port_b_address_width";

/// Which naming tier produced a mode hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The type name, plus `.opmode{..}` when an operation mode is set.
    Opmode,
    /// Single-port memory: opmode plus port A address width.
    SinglePort,
    /// Dual-port memory with equal ports: opmode plus both address widths.
    DualPort,
    /// Dual-port memory with mixed widths: opmode plus all four widths.
    MixedWidth,
}

/// The outcome of resolving one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeResolution {
    /// The catalog model name for the instance.
    pub mode_hash: String,
    /// The tier that produced `mode_hash`.
    pub tier: Tier,
    /// The detailed mixed-width name that was probed and not found, if the
    /// resolver fell back to the opmode-only name.
    pub rejected_probe: Option<String>,
}

/// The configuration parameters that drive name escalation.
#[derive(Debug, Default)]
struct ModeParams<'a> {
    operation_mode: Option<&'a str>,
    port_a_data_width: Option<i64>,
    port_a_address_width: Option<i64>,
    port_b_data_width: Option<i64>,
    port_b_address_width: Option<i64>,
}

/// How the width parameters describe the instance.
enum MemoryShape {
    NotMemory,
    SinglePort {
        a_addr: i64,
    },
    DualPort {
        a_data: i64,
        a_addr: i64,
        b_data: i64,
        b_addr: i64,
    },
}

impl<'a> ModeParams<'a> {
    /// Captures the recognized parameters in one pass.
    ///
    /// A later duplicate overrides an earlier one.
    fn scan(instance: &'a Instance) -> Result<Self, ModeHashError> {
        let mut params = Self::default();
        for param in &instance.params {
            match param.name.as_str() {
                OPERATION_MODE => params.operation_mode = Some(expect_string(instance, param)?),
                PORT_A_DATA_WIDTH => {
                    params.port_a_data_width = Some(expect_integer(instance, param)?)
                }
                PORT_A_ADDRESS_WIDTH => {
                    params.port_a_address_width = Some(expect_integer(instance, param)?)
                }
                PORT_B_DATA_WIDTH => {
                    params.port_b_data_width = Some(expect_integer(instance, param)?)
                }
                PORT_B_ADDRESS_WIDTH => {
                    params.port_b_address_width = Some(expect_integer(instance, param)?)
                }
                _ => {}
            }
        }
        Ok(params)
    }

    fn shape(&self) -> MemoryShape {
        match (
            self.port_a_data_width,
            self.port_a_address_width,
            self.port_b_data_width,
            self.port_b_address_width,
        ) {
            (Some(_), Some(a_addr), None, None) => MemoryShape::SinglePort { a_addr },
            (Some(a_data), Some(a_addr), Some(b_data), Some(b_addr)) => MemoryShape::DualPort {
                a_data,
                a_addr,
                b_data,
                b_addr,
            },
            _ => MemoryShape::NotMemory,
        }
    }
}

fn expect_string<'a>(instance: &Instance, param: &'a Parameter) -> Result<&'a str, ModeHashError> {
    param
        .value
        .as_str()
        .ok_or_else(|| type_mismatch(instance, param, ParamKind::String))
}

fn expect_integer(instance: &Instance, param: &Parameter) -> Result<i64, ModeHashError> {
    param
        .value
        .as_integer()
        .ok_or_else(|| type_mismatch(instance, param, ParamKind::Integer))
}

fn type_mismatch(instance: &Instance, param: &Parameter, expected: ParamKind) -> ModeHashError {
    ModeHashError::ParamTypeMismatch {
        instance: instance.name.clone(),
        param: param.name.clone(),
        expected,
        found: param.value.kind(),
    }
}

fn push_width(name: &mut String, param: &str, width: i64) {
    name.push_str(&format!(".{param}{{{width}}}"));
}

/// Resolves `instance` to a catalog model, reporting how the name was built.
///
/// Pure: the same instance and catalog always give the same result.
pub fn resolve_mode(instance: &Instance, catalog: &Catalog) -> Result<ModeResolution, ModeHashError> {
    let params = ModeParams::scan(instance)?;

    let mut mode_hash = instance.type_name.clone();
    if let Some(mode) = params.operation_mode {
        mode_hash.push_str(&format!(".opmode{{{}}}", sanitize(mode)));
    }

    let mut tier = Tier::Opmode;
    let mut rejected_probe = None;

    match params.shape() {
        MemoryShape::SinglePort { a_addr } => {
            push_width(&mut mode_hash, PORT_A_ADDRESS_WIDTH, a_addr);
            if !catalog.contains(&mode_hash) {
                return Err(ModeHashError::SinglePortMiss {
                    candidate: mode_hash,
                });
            }
            tier = Tier::SinglePort;
        }
        MemoryShape::DualPort {
            a_data,
            a_addr,
            b_data,
            b_addr,
        } if a_data == b_data && a_addr == b_addr => {
            push_width(&mut mode_hash, PORT_A_ADDRESS_WIDTH, a_addr);
            push_width(&mut mode_hash, PORT_B_ADDRESS_WIDTH, b_addr);
            if !catalog.contains(&mode_hash) {
                return Err(ModeHashError::DualPortMiss {
                    candidate: mode_hash,
                });
            }
            tier = Tier::DualPort;
        }
        MemoryShape::DualPort {
            a_data,
            a_addr,
            b_data,
            b_addr,
        } => {
            let mut detailed = mode_hash.clone();
            push_width(&mut detailed, PORT_A_DATA_WIDTH, a_data);
            push_width(&mut detailed, PORT_A_ADDRESS_WIDTH, a_addr);
            push_width(&mut detailed, PORT_B_DATA_WIDTH, b_data);
            push_width(&mut detailed, PORT_B_ADDRESS_WIDTH, b_addr);
            if catalog.contains(&detailed) {
                mode_hash = detailed;
                tier = Tier::MixedWidth;
            } else {
                rejected_probe = Some(detailed);
            }
        }
        MemoryShape::NotMemory => {}
    }

    // The mixed-width fallback lands here unchecked; this is its only gate.
    if !catalog.contains(&mode_hash) {
        return Err(ModeHashError::PrimitiveMiss {
            candidate: mode_hash,
        });
    }

    Ok(ModeResolution {
        mode_hash,
        tier,
        rejected_probe,
    })
}

/// Returns the mode hash of `instance`: the catalog model name it maps to.
pub fn resolve_mode_hash(instance: &Instance, catalog: &Catalog) -> Result<String, ModeHashError> {
    resolve_mode(instance, catalog).map(|r| r.mode_hash)
}
