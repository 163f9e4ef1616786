//! Configuration types deserialized from `vqm.toml`.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The top-level run configuration parsed from `vqm.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VqmConfig {
    /// Input files.
    #[serde(default)]
    pub input: InputConfig,
    /// Report settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Translation settings.
    #[serde(default)]
    pub translate: TranslateConfig,
}

/// The `[input]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Path to the JSON module graph.
    #[serde(default)]
    pub netlist: Option<String>,
    /// Path to the TOML architecture catalog.
    #[serde(default)]
    pub catalog: Option<String>,
}

/// The `[output]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Where to write the translation report.
    ///
    /// Defaults to `<netlist stem>.modes.json` next to the netlist.
    #[serde(default)]
    pub report: Option<String>,
    /// Report format.
    #[serde(default)]
    pub format: ReportFormat,
}

/// The `[translate]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Resolve instances on a thread pool.
    #[serde(default)]
    pub parallel: bool,
}

/// Output format of the translation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// A plain-text table.
    Text,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Text => write!(f, "text"),
        }
    }
}

impl VqmConfig {
    /// Returns the netlist path, resolved against `base`.
    pub fn netlist_path(&self, base: &Path) -> Option<PathBuf> {
        self.input.netlist.as_deref().map(|p| base.join(p))
    }

    /// Returns the catalog path, resolved against `base`.
    pub fn catalog_path(&self, base: &Path) -> Option<PathBuf> {
        self.input.catalog.as_deref().map(|p| base.join(p))
    }

    /// Returns the report path, resolved against `base`.
    pub fn report_path(&self, base: &Path) -> Option<PathBuf> {
        self.output.report.as_deref().map(|p| base.join(p))
    }
}
