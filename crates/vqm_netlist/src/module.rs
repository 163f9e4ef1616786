//! Module definitions: the top-level translation unit.
//!
//! A [`Module`] owns its pins, assignments, and primitive instances. It is
//! built once by the parser and then only read by the translation core.

use crate::arena::Arena;
use crate::ids::{InstanceId, PinId};
use crate::instance::Instance;
use crate::pin::{Pin, WHOLE_PIN};
use serde::{Deserialize, Serialize};

/// The right-hand side of an [`Assignment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignSource {
    /// A bit of another pin (or the whole pin for [`WHOLE_PIN`]).
    Net {
        /// The source pin.
        pin: PinId,
        /// The source bit index.
        #[serde(default = "whole_pin")]
        index: i32,
    },
    /// An integer constant.
    Constant(i64),
}

fn whole_pin() -> i32 {
    WHOLE_PIN
}

/// A concurrent assignment `target[index] = source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The pin being driven.
    pub target: PinId,
    /// The driven bit, or [`WHOLE_PIN`] for a single-bit target.
    #[serde(default = "whole_pin")]
    pub target_index: i32,
    /// The driving expression.
    pub source: AssignSource,
    /// Whether the source is inverted.
    #[serde(default)]
    pub inverted: bool,
    /// Whether the assignment is a tri-state buffer.
    #[serde(default)]
    pub tristated: bool,
}

impl Assignment {
    /// Creates a plain `target[target_index] = source` assignment.
    pub fn new(target: PinId, target_index: i32, source: AssignSource) -> Self {
        Self {
            target,
            target_index,
            source,
            inverted: false,
            tristated: false,
        }
    }
}

/// A parsed netlist module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Module {
    /// The module name.
    pub name: String,
    /// Wires and buses in declaration order.
    #[serde(default)]
    pub pins: Arena<PinId, Pin>,
    /// Concurrent assignments in source order.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Primitive instances in source order.
    #[serde(default)]
    pub instances: Arena<InstanceId, Instance>,
}

impl Module {
    /// Creates an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a pin and returns its ID.
    pub fn add_pin(&mut self, pin: Pin) -> PinId {
        self.pins.alloc(pin)
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds an instance and returns its ID.
    pub fn add_instance(&mut self, instance: Instance) -> InstanceId {
        self.instances.alloc(instance)
    }

    /// Returns the pin with the given ID, or `None` if it does not resolve.
    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.pins.try_get(id)
    }

    /// Returns the first pin named `name`.
    pub fn find_pin(&self, name: &str) -> Option<(PinId, &Pin)> {
        self.pins.iter().find(|(_, p)| p.name == name)
    }

    /// Returns the number of instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}
