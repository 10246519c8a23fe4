use std::fs;
use std::path::{Path, PathBuf};

use bytes2json_core::{DecodeOptions, NoopObserver, catalog, decode_root, decode_root_with};

fn golden_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(name)
}

fn load_input(name: &str) -> Vec<u8> {
    fs::read(golden_dir(name).join("input.bytes")).expect("read input.bytes")
}

fn load_expected(name: &str) -> serde_json::Value {
    let expected_json =
        fs::read_to_string(golden_dir(name).join("expected.json")).expect("read expected.json");
    serde_json::from_str(&expected_json).expect("parse expected json")
}

fn run_golden(name: &str) {
    let entry = catalog::lookup(name).expect("catalog entry");
    let input = load_input(name);
    let expected = load_expected(name);

    let actual = decode_root(&input, entry.root).expect("decode golden input");
    let actual_value = serde_json::to_value(actual).expect("serialize actual");

    assert_eq!(actual_value, expected, "golden mismatch in {name}");
}

#[test]
fn golden_buff() {
    run_golden("buff");
}

#[test]
fn golden_equip() {
    run_golden("equip");
}

#[test]
fn golden_types_relation() {
    run_golden("typesRelation");
}

#[test]
fn golden_suit() {
    run_golden("suit");
}

#[test]
fn golden_pet_book() {
    run_golden("petBook");
}

#[test]
fn golden_buff_omits_absent_icon() {
    let expected = load_expected("buff");
    let second = &expected["data"][1];
    assert!(second.get("icon").is_none());
    assert_eq!(expected["data"][2]["icon"], serde_json::json!([]));
}

#[test]
fn golden_types_relation_has_trailing_bytes() {
    let entry = catalog::lookup("typesRelation").expect("catalog entry");
    let input = load_input("typesRelation");
    let err = decode_root_with(&input, entry.root, DecodeOptions::strict(), &mut NoopObserver)
        .unwrap_err();
    assert_eq!(err.kind_name(), "TrailingBytes");
}

#[test]
fn golden_inputs_underrun_when_truncated() {
    for name in ["buff", "equip", "suit", "petBook"] {
        let entry = catalog::lookup(name).expect("catalog entry");
        let input = load_input(name);
        for cut in [input.len() - 1, input.len() / 2, 9] {
            let err = decode_root(&input[..cut], entry.root).unwrap_err();
            assert_eq!(err.kind_name(), "BufferUnderrun", "{name} cut at {cut}: {err}");
        }
    }
}
