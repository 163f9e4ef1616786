//! Primitive instances and their port associations.

use crate::ids::PinId;
use crate::param::Parameter;
use crate::pin::WHOLE_PIN;
use serde::{Deserialize, Serialize};

fn whole_pin() -> i32 {
    WHOLE_PIN
}

/// Connects one port of an [`Instance`] to a pin (or one bit of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortAssociation {
    /// The primitive port name (e.g., `portadatain`).
    pub port: String,
    /// The bit of the primitive port, or [`WHOLE_PIN`] for a scalar port.
    #[serde(default = "whole_pin")]
    pub port_index: i32,
    /// The pin driving or driven by this port.
    pub net: PinId,
    /// The bit of `net`, or [`WHOLE_PIN`] to use the whole (single-bit) pin.
    #[serde(default = "whole_pin")]
    pub index: i32,
}

impl PortAssociation {
    /// Associates scalar port `port` with bit `index` of `net`.
    pub fn new(port: impl Into<String>, net: PinId, index: i32) -> Self {
        Self {
            port: port.into(),
            port_index: WHOLE_PIN,
            net,
            index,
        }
    }
}

/// A placed primitive with its configuration parameters and connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// The instance name.
    pub name: String,
    /// The declared primitive type (e.g., `stratixiv_ram_block`).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Configuration parameters in source order.
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Port connections in source order.
    #[serde(default)]
    pub ports: Vec<PortAssociation>,
}

impl Instance {
    /// Creates an instance with no parameters or connections.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            params: Vec::new(),
            ports: Vec::new(),
        }
    }

    /// Adds a parameter.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Adds a port association.
    pub fn with_port(mut self, port: PortAssociation) -> Self {
        self.ports.push(port);
        self
    }

    /// Returns the first parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}
