use std::io::Write;
use std::path::PathBuf;

use mu::units::{LoadError, UnitsRegistry};

mod stubs;

fn bundled_doc_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/units.yaml")
}

#[test]
fn parse_valid_doc() {
    let reg = UnitsRegistry::from_str(stubs::registry::VALID_DOC).unwrap();
    assert_eq!(reg.units().len(), 3);
    assert_eq!(reg.quantity_kinds().len(), 3);
}

#[test]
fn parse_bad_doc_fails() {
    assert!(matches!(
        UnitsRegistry::from_str(stubs::registry::BAD_DOC),
        Err(LoadError::Parse(_))
    ));
}

#[test]
fn empty_doc_lookups_match_nothing() {
    let reg = UnitsRegistry::from_str(stubs::registry::EMPTY_DOC).unwrap();
    assert!(reg.units().is_empty());
    assert!(reg.quantity_kinds().is_empty());
    assert!(reg.lookup_quantity_kinds("temperature", Some("°C"), 0).is_empty());
}

#[test]
fn coercion_doc_is_permissive() {
    let reg = UnitsRegistry::from_str(stubs::registry::COERCION_DOC).unwrap();
    let qk = reg.quantity_kind("oddball").unwrap();
    assert_eq!(qk.default_unit, "42");
    assert_eq!(qk.label, "oddball");
    assert!(qk.aliases.is_empty() && qk.tags.is_empty());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(stubs::registry::VALID_DOC.as_bytes()).unwrap();

    let reg = UnitsRegistry::load(file.path()).unwrap();
    assert_eq!(reg.normalize_unit(Some("mbar")), Some("hectopascal"));
}

#[test]
fn load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        UnitsRegistry::load(dir.path().join("nope.yaml")),
        Err(LoadError::Read(_))
    ));
}

#[test]
fn bundled_doc_parses() {
    let reg = UnitsRegistry::load(bundled_doc_path()).unwrap();
    assert!(!reg.units().is_empty());
    assert!(!reg.quantity_kinds().is_empty());

    // every non-empty default unit in the bundled doc is normalizable
    for qk in reg.quantity_kinds() {
        if !qk.default_unit.is_empty() {
            assert!(
                reg.normalize_unit(Some(&qk.default_unit)).is_some(),
                "default unit '{}' of '{}' does not normalize",
                qk.default_unit,
                qk.key
            );
        }
    }
}

#[test]
fn bundled_doc_ranks_humidity_first() {
    let reg = UnitsRegistry::load(bundled_doc_path()).unwrap();
    let results = reg.lookup_quantity_kinds("humidity", Some("%"), 10);
    assert_eq!(results[0].0, "relative_humidity");
}
