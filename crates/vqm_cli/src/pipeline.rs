//! Shared pipeline helpers for CLI commands.
//!
//! Resolves the configuration file and input paths (flags first, then
//! `vqm.toml`), and renders diagnostics to stderr.

use std::error::Error;
use std::path::{Path, PathBuf};

use vqm_config::{find_config, load_config, VqmConfig};
use vqm_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, Severity,
    TerminalRenderer,
};
use vqm_translate::TranslateError;

use crate::GlobalArgs;

/// Code for failures outside the translation core: unreadable or malformed
/// input files, bad configuration, missing paths.
pub const INPUT_ERROR: DiagnosticCode = DiagnosticCode::new(Category::Error, 1);

/// A loaded configuration together with the directory its paths are relative to.
pub struct RunConfig {
    /// The parsed configuration, or the defaults if there is no file.
    pub config: VqmConfig,
    /// Directory that relative paths in `config` are resolved against.
    pub base: PathBuf,
}

/// Loads the configuration named by `--config`, or `./vqm.toml` if present.
///
/// Without either, the defaults are used.
pub fn resolve_config(global: &GlobalArgs) -> Result<RunConfig, Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let path = match global.config {
        Some(ref p) => Some(PathBuf::from(p)),
        None => find_config(&cwd),
    };
    let Some(path) = path else {
        return Ok(RunConfig {
            config: VqmConfig::default(),
            base: cwd,
        });
    };
    let config = load_config(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or(cwd);
    if global.verbose {
        eprintln!("     Config {}", path.display());
    }
    Ok(RunConfig { config, base })
}

/// Picks the flag value if given, otherwise the configured path.
pub fn pick_path(
    flag: Option<&str>,
    configured: Option<PathBuf>,
    what: &str,
    key: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    flag.map(PathBuf::from)
        .or(configured)
        .ok_or_else(|| format!("no {what} given; pass --{what} or set {key} in vqm.toml").into())
}

/// Renders accumulated notes and warnings; notes only in verbose mode.
pub fn render_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) {
    if global.quiet {
        return;
    }
    let renderer = TerminalRenderer::new(global.color);
    for diag in sink.take_all() {
        if diag.severity == Severity::Note && !global.verbose {
            continue;
        }
        eprintln!("{}", renderer.render(&diag));
    }
}

/// Renders the single error diagnostic for a failed translation run.
pub fn report_translate_error(err: &TranslateError, global: &GlobalArgs) {
    render_error(&err.to_diagnostic(), global);
}

/// Renders the single error diagnostic for a failure outside the core.
pub fn report_fatal(err: &dyn Error, global: &GlobalArgs) {
    let message = err.to_string();
    let mut diag = Diagnostic::error(INPUT_ERROR, message.clone());
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            diag = diag.with_note(text);
        }
        source = cause.source();
    }
    render_error(&diag, global);
}

/// Renders one error diagnostic to stderr, even in quiet mode.
pub fn render_error(diag: &Diagnostic, global: &GlobalArgs) {
    let renderer = TerminalRenderer::new(global.color);
    eprintln!("{}", renderer.render(diag));
}
