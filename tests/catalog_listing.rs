//! Directory catalog behaviour against real on-disk libraries.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use fpcycle::board::Side;
use fpcycle::catalog::{CatalogError, DirectoryCatalog, LibraryCatalog, NameOrder};

const TWO_PAD_DEF: &str = r#"{
    "description": "chip resistor",
    "pads": [
        {"number": "1", "x": -0.75, "y": 0.0},
        {"number": "2", "x": 0.75, "y": 0.0}
    ]
}"#;

fn write_library(root: &Path, library: &str, names: &[&str]) {
    let dir = root.join(format!("{library}.pretty"));
    fs::create_dir_all(&dir).unwrap();
    for name in names {
        fs::write(dir.join(format!("{name}.json")), TWO_PAD_DEF).unwrap();
    }
}

#[test]
fn listing_is_sorted_and_suffix_free() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Resistor_SMD", &["R_0805", "R_0402", "R_0603"]);

    let catalog = DirectoryCatalog::new(tmp.path());
    let names = catalog.list_footprints("Resistor_SMD").unwrap();
    assert_eq!(names, vec!["R_0402", "R_0603", "R_0805"]);
}

#[test]
fn listing_ignores_unrelated_files() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Resistor_SMD", &["R_0402"]);
    let dir = tmp.path().join("Resistor_SMD.pretty");
    fs::write(dir.join("README.md"), "not a footprint").unwrap();
    fs::write(dir.join("notes.txt"), "scratch").unwrap();

    let catalog = DirectoryCatalog::new(tmp.path());
    assert_eq!(
        catalog.list_footprints("Resistor_SMD").unwrap(),
        vec!["R_0402"]
    );
}

#[test]
fn missing_library_is_reported() {
    let tmp = TempDir::new().unwrap();
    let catalog = DirectoryCatalog::new(tmp.path());

    let err = catalog.list_footprints("Nope").unwrap_err();
    assert!(matches!(err, CatalogError::LibraryNotFound { .. }));
    assert!(err.to_string().contains("Nope.pretty"));
}

#[test]
fn natural_order_listing() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Headers", &["PIN_10", "PIN_2", "PIN_1"]);

    let lex = DirectoryCatalog::new(tmp.path());
    assert_eq!(
        lex.list_footprints("Headers").unwrap(),
        vec!["PIN_1", "PIN_10", "PIN_2"]
    );

    let natural = DirectoryCatalog::new(tmp.path()).with_order(NameOrder::Natural);
    assert_eq!(
        natural.list_footprints("Headers").unwrap(),
        vec!["PIN_1", "PIN_2", "PIN_10"]
    );
}

#[test]
fn load_builds_a_detached_template() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Resistor_SMD", &["R_0603"]);

    let catalog = DirectoryCatalog::new(tmp.path());
    let inst = catalog.load_footprint("Resistor_SMD", "R_0603").unwrap();

    assert_eq!(inst.id.to_string(), "Resistor_SMD:R_0603");
    assert_eq!(inst.side, Side::Front);
    assert_eq!(inst.pads.len(), 2);
    assert!(inst.pads.iter().all(|p| !p.net.is_connected()));

    // Templates are independent: two loads get distinct identities.
    let again = catalog.load_footprint("Resistor_SMD", "R_0603").unwrap();
    assert_ne!(inst.path, again.path);
}

#[test]
fn load_missing_definition_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Resistor_SMD", &["R_0603"]);

    let catalog = DirectoryCatalog::new(tmp.path());
    let err = catalog.load_footprint("Resistor_SMD", "R_9999").unwrap_err();
    assert!(matches!(err, CatalogError::DefinitionMissing { .. }));
}

#[test]
fn load_malformed_definition_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_library(tmp.path(), "Resistor_SMD", &["R_0603"]);
    let dir = tmp.path().join("Resistor_SMD.pretty");
    fs::write(dir.join("R_0805.json"), "{ not json").unwrap();

    let catalog = DirectoryCatalog::new(tmp.path());
    let err = catalog.load_footprint("Resistor_SMD", "R_0805").unwrap_err();
    assert!(matches!(err, CatalogError::DefinitionInvalid { .. }));
}
