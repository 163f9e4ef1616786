//! Reading netlists and catalogs from disk.

use std::fs;

use vqm_arch::{load_catalog, CatalogError};
use vqm_conformance::run_module;
use vqm_netlist::{read_module, NetlistError};

#[test]
fn read_both_inputs_and_translate() {
    let dir = tempfile::tempdir().unwrap();
    let netlist = dir.path().join("top.json");
    let arch = dir.path().join("arch.toml");
    fs::write(
        &netlist,
        r#"{"name": "top", "instances": [{"name": "u0", "type": "lcell_comb"}]}"#,
    )
    .unwrap();
    fs::write(&arch, "[[model]]\nname = \"lcell_comb\"\n").unwrap();

    let module = read_module(&netlist).unwrap();
    let catalog = load_catalog(&arch).unwrap();
    let result = run_module(module.as_ref(), &catalog, false);
    assert_eq!(result.mode_hashes(), vec!["lcell_comb"]);
}

#[test]
fn improper_filenames_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let netlist = dir.path().join("top.vqm");
    let arch = dir.path().join("arch.xml");
    fs::write(&netlist, "null").unwrap();
    fs::write(&arch, "").unwrap();

    assert!(matches!(
        read_module(&netlist),
        Err(NetlistError::ImproperFilename { .. })
    ));
    assert!(matches!(
        load_catalog(&arch),
        Err(CatalogError::ImproperFilename { .. })
    ));
}

#[test]
fn missing_files_are_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_module(&dir.path().join("absent.json")),
        Err(NetlistError::Io { .. })
    ));
    assert!(matches!(
        load_catalog(&dir.path().join("absent.toml")),
        Err(CatalogError::Io { .. })
    ));
}
