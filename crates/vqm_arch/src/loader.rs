//! Architecture catalog loading and validation.

use crate::catalog::{ArchModel, Catalog};
use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;
use vqm_common::has_extension;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "model")]
    models: Vec<ArchModel>,
}

/// Loads an architecture catalog from a `.toml` file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !has_extension(path, "toml") {
        return Err(CatalogError::ImproperFilename {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_catalog_from_str(&content)
}

/// Parses and validates an architecture catalog from TOML text.
///
/// Useful for testing without filesystem dependencies.
pub fn load_catalog_from_str(content: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
    if let Some(index) = file.models.iter().position(|m| m.name.is_empty()) {
        return Err(CatalogError::EmptyModelName { index });
    }
    Ok(Catalog::from_models(file.models))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_models_in_order() {
        let toml = r#"
[[model]]
name = "stratixiv_ram_block.opmode{single_port}.port_a_address_width{7}"
inputs = ["clk0", "portaaddr"]
outputs = ["portadataout"]

[[model]]
name = "stratixiv_lcell_comb"
"#;
        let catalog = load_catalog_from_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        let ram = catalog
            .find_model("stratixiv_ram_block.opmode{single_port}.port_a_address_width{7}")
            .unwrap();
        assert_eq!(ram.inputs.len(), 2);
        assert_eq!(ram.outputs, vec!["portadataout"]);
        assert_eq!(catalog.iter().nth(1).unwrap().name, "stratixiv_lcell_comb");
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        assert!(load_catalog_from_str("").unwrap().is_empty());
    }

    #[test]
    fn empty_name_rejected() {
        let toml = r#"
[[model]]
name = "ok"

[[model]]
name = ""
"#;
        let err = load_catalog_from_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyModelName { index: 1 }));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_catalog_from_str("[[model]\nname = 1").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn wrong_extension_errors() {
        let err = load_catalog(Path::new("arch.xml")).unwrap_err();
        assert!(matches!(err, CatalogError::ImproperFilename { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arch.toml");
        std::fs::write(&path, "[[model]]\nname = \"lcell_comb\"\n").unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.contains("lcell_comb"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/arch.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
