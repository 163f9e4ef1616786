//! Structural validation of a parsed module.
//!
//! Validation gates the rest of the pipeline: either the whole module is
//! certified sound, or the first violation is returned and nothing else runs.
//! Checks run in a fixed order (module, pins, assignments, instance ports),
//! so the reported violation is deterministic. Nothing is repaired.

use crate::error::{Connection, ValidationError};
use vqm_netlist::{Module, PinId};

/// Validates `module`, returning the first structural violation.
///
/// `None` stands for a netlist from which the parser produced no module.
pub fn validate(module: Option<&Module>) -> Result<(), ValidationError> {
    let module = module.ok_or(ValidationError::MissingModule)?;

    if module.name.is_empty() {
        return Err(ValidationError::EmptyModuleName);
    }

    for (id, pin) in module.pins.iter() {
        if pin.name.is_empty() {
            return Err(ValidationError::EmptyPinName { pin: id });
        }
    }

    for (index, assignment) in module.assignments.iter().enumerate() {
        check_connection(module, assignment.target, assignment.target_index, || {
            Connection::Assignment { index }
        })?;
    }

    for instance in module.instances.values() {
        for port in &instance.ports {
            check_connection(module, port.net, port.index, || Connection::Port {
                instance: instance.name.clone(),
                port: port.port.clone(),
            })?;
        }
    }

    Ok(())
}

/// Checks one pin reference: the pin must exist, a concrete bit must be in
/// range, and a whole-pin reference needs a single-bit pin.
fn check_connection(
    module: &Module,
    pin_id: PinId,
    index: i32,
    site: impl Fn() -> Connection,
) -> Result<(), ValidationError> {
    let pin = module.pin(pin_id).ok_or_else(|| ValidationError::DanglingPin {
        site: site(),
        pin: pin_id,
    })?;

    if index >= 0 {
        if !pin.contains(index) {
            let (low, high) = pin.range();
            return Err(ValidationError::IndexOutOfRange {
                site: site(),
                pin: pin.name.clone(),
                index,
                low,
                high,
            });
        }
    } else if !pin.is_single_bit() {
        return Err(ValidationError::WholePinNotSingleBit {
            site: site(),
            pin: pin.name.clone(),
            left: pin.left,
            right: pin.right,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vqm_netlist::{AssignSource, Assignment, Instance, Pin, PortAssociation, WHOLE_PIN};

    fn constant(target: PinId, index: i32) -> Assignment {
        Assignment::new(target, index, AssignSource::Constant(0))
    }

    #[test]
    fn empty_module_is_valid() {
        assert_eq!(validate(Some(&Module::new("top"))), Ok(()));
    }

    #[test]
    fn missing_module() {
        assert_eq!(validate(None), Err(ValidationError::MissingModule));
    }

    #[test]
    fn empty_module_name() {
        assert_eq!(
            validate(Some(&Module::new(""))),
            Err(ValidationError::EmptyModuleName)
        );
    }

    #[test]
    fn empty_pin_name() {
        let mut m = Module::new("top");
        m.add_pin(Pin::wire("a"));
        let bad = m.add_pin(Pin::wire(""));
        assert_eq!(
            validate(Some(&m)),
            Err(ValidationError::EmptyPinName { pin: bad })
        );
    }

    #[test]
    fn assignment_in_range() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 7, 0));
        m.add_assignment(constant(d, 0));
        m.add_assignment(constant(d, 7));
        assert_eq!(validate(Some(&m)), Ok(()));
    }

    #[test]
    fn assignment_out_of_range() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 7, 0));
        m.add_assignment(constant(d, 10));
        assert_eq!(
            validate(Some(&m)),
            Err(ValidationError::IndexOutOfRange {
                site: Connection::Assignment { index: 0 },
                pin: "d".to_string(),
                index: 10,
                low: 0,
                high: 7,
            })
        );
    }

    #[test]
    fn ascending_range_bounds() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 4, 8));
        m.add_assignment(constant(d, 4));
        m.add_assignment(constant(d, 3));
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::IndexOutOfRange {
                site: Connection::Assignment { index: 1 },
                low: 4,
                high: 8,
                ..
            })
        ));
    }

    #[test]
    fn whole_pin_on_bus_rejected() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 7, 0));
        m.add_assignment(constant(d, WHOLE_PIN));
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::WholePinNotSingleBit { left: 7, right: 0, .. })
        ));
    }

    #[test]
    fn whole_pin_on_wire_and_one_bit_bus() {
        let mut m = Module::new("top");
        let w = m.add_pin(Pin::wire("w"));
        let b = m.add_pin(Pin::bus("b", 3, 3));
        m.add_assignment(constant(w, WHOLE_PIN));
        m.add_assignment(constant(b, WHOLE_PIN));
        assert_eq!(validate(Some(&m)), Ok(()));
    }

    #[test]
    fn dangling_assignment_target() {
        let mut m = Module::new("top");
        m.add_pin(Pin::wire("w"));
        m.add_assignment(constant(PinId::from_raw(5), WHOLE_PIN));
        assert_eq!(
            validate(Some(&m)),
            Err(ValidationError::DanglingPin {
                site: Connection::Assignment { index: 0 },
                pin: PinId::from_raw(5),
            })
        );
    }

    #[test]
    fn port_checks() {
        let mut m = Module::new("top");
        let clk = m.add_pin(Pin::wire("clk"));
        let q = m.add_pin(Pin::bus("q", 3, 0));
        m.add_instance(
            Instance::new("ff0", "dffeas")
                .with_port(PortAssociation::new("clk", clk, WHOLE_PIN))
                .with_port(PortAssociation::new("q", q, 4)),
        );
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::IndexOutOfRange {
                site: Connection::Port { ref instance, ref port },
                index: 4,
                ..
            }) if instance == "ff0" && port == "q"
        ));
    }

    #[test]
    fn dangling_port_net() {
        let mut m = Module::new("top");
        m.add_instance(
            Instance::new("u0", "lcell_comb").with_port(PortAssociation::new(
                "dataa",
                PinId::from_raw(0),
                WHOLE_PIN,
            )),
        );
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::DanglingPin { .. })
        ));
    }

    #[test]
    fn pins_checked_before_assignments() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 1, 0));
        m.add_pin(Pin::wire(""));
        m.add_assignment(constant(d, 9));
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::EmptyPinName { .. })
        ));
    }

    #[test]
    fn assignments_checked_before_ports() {
        let mut m = Module::new("top");
        let d = m.add_pin(Pin::bus("d", 1, 0));
        m.add_instance(
            Instance::new("u0", "lcell_comb").with_port(PortAssociation::new("dataa", d, 5)),
        );
        m.add_assignment(constant(d, WHOLE_PIN));
        assert!(matches!(
            validate(Some(&m)),
            Err(ValidationError::WholePinNotSingleBit {
                site: Connection::Assignment { .. },
                ..
            })
        ));
    }
}
