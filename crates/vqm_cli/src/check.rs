//! `vqm check`: structural validation without a catalog.

use vqm_netlist::read_module;
use vqm_translate::{validate, TranslateError};

use crate::pipeline::{pick_path, report_translate_error, resolve_config, RunConfig};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `vqm check` command.
///
/// Returns exit code 0 if the module is structurally sound, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let RunConfig { config, base } = resolve_config(global)?;
    let netlist_path = pick_path(
        args.netlist.as_deref(),
        config.netlist_path(&base),
        "netlist",
        "input.netlist",
    )?;

    if !global.quiet {
        eprintln!("   Checking {}", netlist_path.display());
    }

    let module = read_module(&netlist_path)?;
    if let Err(e) = validate(module.as_ref()) {
        report_translate_error(&TranslateError::from(e), global);
        return Ok(1);
    }

    if !global.quiet {
        if let Some(m) = &module {
            eprintln!(
                "   Valid: module '{}', {} pin(s), {} assignment(s), {} instance(s)",
                m.name,
                m.pins.len(),
                m.assignments.len(),
                m.instance_count()
            );
        }
    }
    Ok(0)
}
