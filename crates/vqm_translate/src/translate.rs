//! The translation pass: validate, then resolve every instance.

use rayon::prelude::*;
use serde::Serialize;
use vqm_arch::Catalog;
use vqm_common::{InternalError, VqmResult};
use vqm_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use vqm_netlist::{AssignSource, Assignment, Instance, Module, Pin, PinId, WHOLE_PIN};

use crate::error::TranslateError;
use crate::mode_hash::{resolve_mode, Tier};
use crate::names::{append_index, resolve_name};
use crate::validate::validate;

/// Note emitted when a mixed-width memory falls back to its opmode-only name.
const MIXED_WIDTH_FALLBACK: DiagnosticCode = DiagnosticCode::new(Category::Info, 201);

/// Options for a translation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateOptions {
    /// Resolve instances on the rayon thread pool.
    pub parallel: bool,
}

/// One port of a resolved instance with its canonical net name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPort {
    /// The primitive port name, with `[bit]` for bus ports.
    pub port: String,
    /// The canonical name of the connected net bit.
    pub net: String,
}

/// An instance with its architecture model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInstance {
    /// The instance name.
    pub name: String,
    /// The declared primitive type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// The catalog model the instance maps to.
    pub mode_hash: String,
    /// Which naming tier produced `mode_hash`.
    pub tier: Tier,
    /// Port connections in source order.
    pub ports: Vec<ResolvedPort>,
}

/// An assignment with canonical names on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAssignment {
    /// The canonical name of the driven bit.
    pub target: String,
    /// The canonical name of the driving bit, or the constant in decimal.
    pub source: String,
    /// Whether the source is inverted.
    pub inverted: bool,
    /// Whether the assignment is a tri-state buffer.
    pub tristated: bool,
}

/// The result of a successful translation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// The module name.
    pub module: String,
    /// Resolved instances in source order.
    pub instances: Vec<ResolvedInstance>,
    /// Resolved assignments in source order.
    pub assignments: Vec<ResolvedAssignment>,
}

/// Runs a full translation pass over `module`.
///
/// Validation runs first; if it fails nothing else is attempted. Instances
/// are then resolved against `catalog`. The first failure in source order is
/// returned, whether or not the instances were resolved in parallel.
///
/// Non-fatal observations (mixed-width fallbacks) are emitted into `sink`
/// as notes, in source order.
pub fn translate(
    module: Option<&Module>,
    catalog: &Catalog,
    options: TranslateOptions,
    sink: &DiagnosticSink,
) -> Result<Translation, TranslateError> {
    validate(module)?;
    let module = module.ok_or_else(|| InternalError::new("module vanished after validation"))?;

    let outcomes: Vec<Result<(ResolvedInstance, Option<String>), TranslateError>> =
        if options.parallel {
            module
                .instances
                .as_slice()
                .par_iter()
                .map(|inst| resolve_instance(module, inst, catalog))
                .collect()
        } else {
            module
                .instances
                .values()
                .map(|inst| resolve_instance(module, inst, catalog))
                .collect()
        };

    let mut instances = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let (resolved, rejected_probe) = outcome?;
        if let Some(probe) = rejected_probe {
            sink.emit(
                Diagnostic::note(
                    MIXED_WIDTH_FALLBACK,
                    format!(
                        "mixed-width memory '{}' resolved to '{}'",
                        resolved.name, resolved.mode_hash
                    ),
                )
                .with_subject(resolved.name.clone())
                .with_note(format!("no architecture model named '{probe}'")),
            );
        }
        instances.push(resolved);
    }

    let assignments = module
        .assignments
        .iter()
        .map(|a| resolve_assignment(module, a))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Translation {
        module: module.name.clone(),
        instances,
        assignments,
    })
}

fn resolve_instance(
    module: &Module,
    instance: &Instance,
    catalog: &Catalog,
) -> Result<(ResolvedInstance, Option<String>), TranslateError> {
    let resolution = resolve_mode(instance, catalog)?;

    let ports = instance
        .ports
        .iter()
        .map(|assoc| -> Result<ResolvedPort, TranslateError> {
            let port = if assoc.port_index == WHOLE_PIN {
                assoc.port.clone()
            } else {
                append_index(&assoc.port, i64::from(assoc.port_index))?
            };
            let net = resolve_name(pin_of(module, assoc.net)?, assoc.index)?;
            Ok(ResolvedPort { port, net })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        ResolvedInstance {
            name: instance.name.clone(),
            type_name: instance.type_name.clone(),
            mode_hash: resolution.mode_hash,
            tier: resolution.tier,
            ports,
        },
        resolution.rejected_probe,
    ))
}

fn resolve_assignment(
    module: &Module,
    assignment: &Assignment,
) -> Result<ResolvedAssignment, TranslateError> {
    let target = resolve_name(pin_of(module, assignment.target)?, assignment.target_index)?;
    let source = match &assignment.source {
        AssignSource::Net { pin, index } => resolve_name(pin_of(module, *pin)?, *index)?,
        AssignSource::Constant(value) => value.to_string(),
    };
    Ok(ResolvedAssignment {
        target,
        source,
        inverted: assignment.inverted,
        tristated: assignment.tristated,
    })
}

/// Looks up a pin the validator does not cover (assignment sources) or
/// has already certified (targets and ports).
fn pin_of(module: &Module, id: PinId) -> VqmResult<&Pin> {
    module
        .pin(id)
        .ok_or_else(|| InternalError::new(format!("reference to unknown pin #{}", id.as_raw())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ModeHashError, ValidationError};
    use vqm_diagnostics::Severity;
    use vqm_netlist::{Parameter, PortAssociation};

    fn sample() -> (Module, Catalog) {
        let mut m = Module::new("top");
        let clk = m.add_pin(Pin::wire("clk"));
        let addr = m.add_pin(Pin::bus("addr", 6, 0));
        let q = m.add_pin(Pin::bus("q", 7, 0));
        let y = m.add_pin(Pin::bus("y", 0, 0));
        m.add_instance(
            Instance::new("ram0", "ram")
                .with_param(Parameter::string("operation_mode", "single_port"))
                .with_param(Parameter::integer("port_a_data_width", 8))
                .with_param(Parameter::integer("port_a_address_width", 7))
                .with_port(PortAssociation::new("clk0", clk, WHOLE_PIN))
                .with_port(PortAssociation {
                    port: "portaaddr".to_string(),
                    port_index: 2,
                    net: addr,
                    index: 2,
                }),
        );
        m.add_instance(
            Instance::new("lut0", "lcell_comb").with_port(PortAssociation::new("combout", y, WHOLE_PIN)),
        );
        let mut inverted = Assignment::new(q, 3, AssignSource::Net { pin: y, index: WHOLE_PIN });
        inverted.inverted = true;
        m.add_assignment(inverted);
        m.add_assignment(Assignment::new(q, 4, AssignSource::Constant(1)));

        let catalog = Catalog::from_names([
            "ram.opmode{single_port}.port_a_address_width{7}",
            "lcell_comb",
        ]);
        (m, catalog)
    }

    #[test]
    fn translates_sample() {
        let (m, catalog) = sample();
        let sink = DiagnosticSink::new();
        let t = translate(Some(&m), &catalog, TranslateOptions::default(), &sink).unwrap();

        assert_eq!(t.module, "top");
        assert_eq!(t.instances.len(), 2);
        let ram = &t.instances[0];
        assert_eq!(ram.mode_hash, "ram.opmode{single_port}.port_a_address_width{7}");
        assert_eq!(ram.tier, Tier::SinglePort);
        assert_eq!(
            ram.ports,
            vec![
                ResolvedPort {
                    port: "clk0".to_string(),
                    net: "clk".to_string()
                },
                ResolvedPort {
                    port: "portaaddr[2]".to_string(),
                    net: "addr[2]".to_string()
                },
            ]
        );
        assert_eq!(t.instances[1].ports[0].net, "y[0]");

        assert_eq!(t.assignments[0].target, "q[3]");
        assert_eq!(t.assignments[0].source, "y[0]");
        assert!(t.assignments[0].inverted);
        assert_eq!(t.assignments[1].source, "1");
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let (m, catalog) = sample();
        let sink = DiagnosticSink::new();
        let seq = translate(Some(&m), &catalog, TranslateOptions::default(), &sink).unwrap();
        let par = translate(Some(&m), &catalog, TranslateOptions { parallel: true }, &sink).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn validation_runs_before_resolution() {
        let (mut m, _) = sample();
        m.add_assignment(Assignment::new(PinId::from_raw(99), WHOLE_PIN, AssignSource::Constant(0)));
        // An empty catalog would fail resolution; validation must fail first.
        let err = translate(Some(&m), &Catalog::new(), TranslateOptions::default(), &DiagnosticSink::new())
            .unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Validation(ValidationError::DanglingPin { .. })
        ));
    }

    #[test]
    fn first_failing_instance_is_reported() {
        let (mut m, _) = sample();
        m.add_instance(Instance::new("late", "mystery"));
        let catalog = Catalog::from_names(["lcell_comb"]);
        for parallel in [false, true] {
            let err = translate(
                Some(&m),
                &catalog,
                TranslateOptions { parallel },
                &DiagnosticSink::new(),
            )
            .unwrap_err();
            assert_eq!(
                err,
                TranslateError::ModeHash(ModeHashError::SinglePortMiss {
                    candidate: "ram.opmode{single_port}.port_a_address_width{7}".to_string()
                })
            );
        }
    }

    #[test]
    fn fallback_emits_note() {
        let mut m = Module::new("top");
        m.add_instance(
            Instance::new("ram1", "ram")
                .with_param(Parameter::string("operation_mode", "dual_port"))
                .with_param(Parameter::integer("port_a_data_width", 16))
                .with_param(Parameter::integer("port_a_address_width", 4))
                .with_param(Parameter::integer("port_b_data_width", 8))
                .with_param(Parameter::integer("port_b_address_width", 5)),
        );
        let catalog = Catalog::from_names(["ram.opmode{dual_port}"]);
        let sink = DiagnosticSink::new();
        let t = translate(Some(&m), &catalog, TranslateOptions::default(), &sink).unwrap();
        assert_eq!(t.instances[0].mode_hash, "ram.opmode{dual_port}");

        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Note);
        assert_eq!(diags[0].code.to_string(), "I201");
        assert!(diags[0].notes[0].contains("port_a_data_width{16}"));
        assert!(!sink.has_errors());
    }

    #[test]
    fn dangling_assignment_source_is_internal_error() {
        let mut m = Module::new("top");
        let a = m.add_pin(Pin::wire("a"));
        m.add_assignment(Assignment::new(
            a,
            WHOLE_PIN,
            AssignSource::Net {
                pin: PinId::from_raw(7),
                index: WHOLE_PIN,
            },
        ));
        let err = translate(Some(&m), &Catalog::new(), TranslateOptions::default(), &DiagnosticSink::new())
            .unwrap_err();
        assert!(matches!(err, TranslateError::Internal(_)));
    }

    #[test]
    fn report_serializes() {
        let (m, catalog) = sample();
        let t = translate(Some(&m), &catalog, TranslateOptions::default(), &DiagnosticSink::new()).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["instances"][0]["type"], "ram");
        assert_eq!(json["instances"][0]["tier"], "single_port");
        assert_eq!(json["assignments"][1]["target"], "q[4]");
    }
}
