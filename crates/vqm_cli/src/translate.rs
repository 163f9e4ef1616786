//! `vqm translate`: the full translation pass.
//!
//! 1. Resolve configuration and input paths
//! 2. Read the netlist and the architecture catalog
//! 3. Validate, then resolve every instance to a catalog model
//! 4. Write the report (JSON or text)

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use vqm_arch::load_catalog;
use vqm_common::derive_output_path;
use vqm_config::ReportFormat;
use vqm_diagnostics::DiagnosticSink;
use vqm_netlist::read_module;
use vqm_translate::{translate, TranslateOptions, Translation};

use crate::pipeline::{
    pick_path, render_diagnostics, report_translate_error, resolve_config, RunConfig,
};
use crate::{GlobalArgs, TranslateArgs};

/// Runs the `vqm translate` command.
///
/// Returns exit code 0 when the report was written, 1 when translation failed.
pub fn run(args: &TranslateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let RunConfig { config, base } = resolve_config(global)?;

    let netlist_path = pick_path(
        args.netlist.as_deref(),
        config.netlist_path(&base),
        "netlist",
        "input.netlist",
    )?;
    let catalog_path = pick_path(
        args.catalog.as_deref(),
        config.catalog_path(&base),
        "catalog",
        "input.catalog",
    )?;
    let format = args.format.map_or(config.output.format, ReportFormat::from);
    let report_path = args
        .output
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.report_path(&base))
        .unwrap_or_else(|| default_report_path(&netlist_path, format));
    let options = TranslateOptions {
        parallel: args.parallel || config.translate.parallel,
    };

    if !global.quiet {
        eprintln!("   Translating {}", netlist_path.display());
    }

    let module = read_module(&netlist_path)?;
    let catalog = load_catalog(&catalog_path)?;
    if global.verbose {
        eprintln!(
            "     Catalog {} ({} model(s))",
            catalog_path.display(),
            catalog.len()
        );
    }

    let sink = DiagnosticSink::new();
    let result = translate(module.as_ref(), &catalog, options, &sink);
    render_diagnostics(&sink, global);

    let translation = match result {
        Ok(t) => t,
        Err(e) => {
            report_translate_error(&e, global);
            return Ok(1);
        }
    };

    if global.verbose && !global.quiet {
        for inst in &translation.instances {
            eprintln!("     {} -> {}", inst.name, inst.mode_hash);
        }
    }

    let report = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&translation)? + "\n",
        ReportFormat::Text => render_text(&translation),
    };
    std::fs::write(&report_path, report)
        .map_err(|e| format!("cannot write report {}: {e}", report_path.display()))?;

    if !global.quiet {
        eprintln!(
            "   Finished {} instance(s), {} assignment(s) -> {}",
            translation.instances.len(),
            translation.assignments.len(),
            report_path.display()
        );
    }
    Ok(0)
}

fn default_report_path(netlist: &Path, format: ReportFormat) -> PathBuf {
    match format {
        ReportFormat::Json => derive_output_path(netlist, ".modes.json"),
        ReportFormat::Text => derive_output_path(netlist, ".modes.txt"),
    }
}

/// Formats a translation as an aligned plain-text table.
fn render_text(t: &Translation) -> String {
    let name_w = column_width("instance", t.instances.iter().map(|i| i.name.as_str()));
    let type_w = column_width("type", t.instances.iter().map(|i| i.type_name.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "module {}", t.module);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<name_w$}  {:<type_w$}  mode hash", "instance", "type");
    for inst in &t.instances {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<type_w$}  {}",
            inst.name, inst.type_name, inst.mode_hash
        );
        for port in &inst.ports {
            let _ = writeln!(out, "    .{}({})", port.port, port.net);
        }
    }
    if !t.assignments.is_empty() {
        let _ = writeln!(out);
        for a in &t.assignments {
            let op = if a.inverted { "~" } else { "" };
            let tri = if a.tristated { " (tri)" } else { "" };
            let _ = writeln!(out, "assign {} = {op}{}{tri}", a.target, a.source);
        }
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).fold(header.len(), usize::max)
}
