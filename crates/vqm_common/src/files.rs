//! File naming helpers shared by the netlist and catalog readers.

use std::path::{Path, PathBuf};

/// Returns `true` if `path` ends with `.<extension>` (case-sensitive).
///
/// Only the text after the last `.` of the file name is compared, so
/// `top.v.json` has the extension `json`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Derives an output path from `input` by replacing its extension with `suffix`.
///
/// `suffix` is appended verbatim to the file stem, so it should carry its own
/// leading dot: `derive_output_path("build/top.json", ".modes.json")` yields
/// `build/top.modes.json`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}
