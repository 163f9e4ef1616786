//! `vqm lookup`: query the catalog for one exact model name.

use vqm_arch::load_catalog;
use vqm_common::{is_valid_identifier, sanitize};
use vqm_translate::{ModeHashError, TranslateError};

use crate::pipeline::{pick_path, render_error, resolve_config, RunConfig};
use crate::{GlobalArgs, LookupArgs};

/// Runs the `vqm lookup` command.
///
/// Prints the model and its port lists to stdout. Returns exit code 1 if
/// the catalog has no model with that exact name.
pub fn run(args: &LookupArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let RunConfig { config, base } = resolve_config(global)?;
    let catalog_path = pick_path(
        args.catalog.as_deref(),
        config.catalog_path(&base),
        "catalog",
        "input.catalog",
    )?;
    let catalog = load_catalog(&catalog_path)?;

    let Some(model) = catalog.find_model(&args.name) else {
        let miss = ModeHashError::PrimitiveMiss {
            candidate: args.name.clone(),
        };
        let mut diag = TranslateError::from(miss).to_diagnostic();
        if !is_valid_identifier(&args.name) {
            diag = diag.with_help(format!(
                "model names never contain spaces; try '{}'",
                sanitize(&args.name)
            ));
        }
        render_error(&diag, global);
        return Ok(1);
    };

    println!("{}", model.name);
    if global.verbose || !model.inputs.is_empty() || !model.outputs.is_empty() {
        println!("  inputs:  {}", model.inputs.join(", "));
        println!("  outputs: {}", model.outputs.join(", "));
    }
    Ok(0)
}
