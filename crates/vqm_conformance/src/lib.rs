//! Conformance test helpers for the VQM translation core.
//!
//! Provides builders for memory instances and small modules, and a helper
//! that runs the full read → validate → resolve pipeline on interchange text
//! and returns the outcome together with every diagnostic emitted.

#![warn(missing_docs)]

use vqm_arch::{load_catalog_from_str, Catalog};
use vqm_diagnostics::{Diagnostic, DiagnosticSink};
use vqm_netlist::{read_module_from_str, Instance, Module, Parameter, Pin, PinId};
use vqm_translate::{translate, TranslateError, TranslateOptions, Translation};

/// Result of running the full translation pipeline.
pub struct PipelineResult {
    /// The translation, or the first fatal error.
    pub outcome: Result<Translation, TranslateError>,
    /// Non-fatal diagnostics emitted during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl PipelineResult {
    /// Returns the mode hash of each instance, in source order.
    ///
    /// Panics if the run failed.
    pub fn mode_hashes(&self) -> Vec<&str> {
        match &self.outcome {
            Ok(t) => t.instances.iter().map(|i| i.mode_hash.as_str()).collect(),
            Err(e) => panic!("translation failed: {e}"),
        }
    }

    /// Returns the fatal error.
    ///
    /// Panics if the run succeeded.
    pub fn error(&self) -> &TranslateError {
        match &self.outcome {
            Ok(_) => panic!("translation unexpectedly succeeded"),
            Err(e) => e,
        }
    }
}

/// The four width parameters of a dual-port memory, in order A data,
/// A address, B data, B address.
pub fn dual_port_widths(widths: [i64; 4]) -> Vec<(&'static str, i64)> {
    vec![
        ("port_a_data_width", widths[0]),
        ("port_a_address_width", widths[1]),
        ("port_b_data_width", widths[2]),
        ("port_b_address_width", widths[3]),
    ]
}

/// Builds a memory instance with an operation mode and integer width parameters.
pub fn memory(type_name: &str, mode: &str, widths: &[(&str, i64)]) -> Instance {
    let mut inst =
        Instance::new("mem0", type_name).with_param(Parameter::string("operation_mode", mode));
    for (name, value) in widths {
        inst = inst.with_param(Parameter::integer(*name, *value));
    }
    inst
}

/// Builds a catalog from model names.
pub fn catalog(names: &[&str]) -> Catalog {
    Catalog::from_names(names.iter().copied())
}

/// Builds a module named `top` with a single bus pin `[left:right]`.
pub fn bus_module(name: &str, left: i32, right: i32) -> (Module, PinId) {
    let mut module = Module::new("top");
    let pin = module.add_pin(Pin::bus(name, left, right));
    (module, pin)
}

/// Runs the pipeline on an in-memory module.
pub fn run_module(module: Option<&Module>, catalog: &Catalog, parallel: bool) -> PipelineResult {
    let sink = DiagnosticSink::new();
    let outcome = translate(module, catalog, TranslateOptions { parallel }, &sink);
    PipelineResult {
        outcome,
        diagnostics: sink.take_all(),
    }
}

/// Reads a JSON netlist and a TOML catalog from text, then runs the pipeline.
///
/// Panics if either document is malformed.
pub fn run_text(netlist_json: &str, catalog_toml: &str, parallel: bool) -> PipelineResult {
    let module = read_module_from_str(netlist_json).expect("netlist should parse");
    let catalog = load_catalog_from_str(catalog_toml).expect("catalog should parse");
    run_module(module.as_ref(), &catalog, parallel)
}
