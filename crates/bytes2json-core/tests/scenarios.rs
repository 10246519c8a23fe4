mod support;

use bytes2json_core::catalog::buff;
use bytes2json_core::schema;
use bytes2json_core::schema::{Element, FieldKind::*, Schema};
use bytes2json_core::{Cursor, DecodeError, Value, WireError, decode, decode_root};

use support::{encode, float, int, ints, list, record, root, text};

const BUFF_INFO_BYTES: [u8; 18] = [
    0x01, 0x00, 0x41, 0x01, 0x00, 0x42, 0x01, 0x00, 0x43, 0x00, 0x05, 0x00, 0x00, 0x00, 0x2a, 0x00,
    0x00, 0x00,
];

static INNER: Schema = schema!("Inner" {
    "innerArray" => OptionalArray(Element::Int32),
});

static OUTER: Schema = schema!("Outer" {
    "field" => OptionalStruct(&INNER),
});

static FLAT: Schema = schema!("Flat" {
    "id" => Int32,
    "speed" => Float32,
    "port" => UInt16,
    "on" => Bool,
    "name" => Text,
});

static MIXED: Schema = schema!("Mixed" {
    "id" => Int32,
    "tags" => OptionalArray(Element::Text),
    "child" => OptionalStruct(&FLAT),
    "children" => OptionalArray(Element::Record(&FLAT)),
    "fixed" => FixedArray(Element::UInt16),
});

fn flat(id: i32, name: &str) -> Value {
    record(vec![
        ("id", int(id)),
        ("speed", float(1.5)),
        ("port", Value::UInt16(8080)),
        ("on", Value::Bool(true)),
        ("name", text(name)),
    ])
}

#[test]
fn buff_info_with_absent_icon() {
    let record = decode_root(&BUFF_INFO_BYTES, &buff::BUFF_INFO).expect("decode buff info");
    let expected = root(vec![
        ("Desc", text("A")),
        ("Tag", text("B")),
        ("desc_tag", text("C")),
        ("icon", Value::Absent),
        ("icontype", int(5)),
        ("id", int(42)),
    ]);
    assert_eq!(record, expected);

    let json = serde_json::to_string(&record).expect("json");
    assert_eq!(
        json,
        r#"{"Desc":"A","Tag":"B","desc_tag":"C","icontype":5,"id":42}"#
    );
}

#[test]
fn buff_info_with_present_icon_list() {
    let record = root(vec![
        ("Desc", text("A")),
        ("Tag", text("B")),
        ("desc_tag", text("C")),
        ("icon", ints(&[7, 8])),
        ("icontype", int(5)),
        ("id", int(42)),
    ]);
    let bytes = encode(&buff::BUFF_INFO, &record);
    let icon = [
        0x01, 0x02, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00,
    ];
    assert_eq!(&bytes[9..22], &icon);

    let decoded = decode_root(&bytes, &buff::BUFF_INFO).expect("decode buff info with icon");
    assert_eq!(
        decoded.get("icon"),
        Some(&Value::List(vec![Value::Int32(7), Value::Int32(8)]))
    );
    assert_eq!(decoded, record);
}

#[test]
fn zero_length_text_decodes_empty() {
    let mut bytes = BUFF_INFO_BYTES.to_vec();
    // Replace Tag ("B") with a zero-length string.
    bytes.splice(3..6, [0x00, 0x00]);
    let record = decode_root(&bytes, &buff::BUFF_INFO).expect("decode empty tag");
    assert_eq!(record.get("Tag"), Some(&text("")));
    assert_eq!(record.get("desc_tag"), Some(&text("C")));
}

#[test]
fn truncated_id_underruns() {
    let bytes = &BUFF_INFO_BYTES[..BUFF_INFO_BYTES.len() - 4];
    let err = decode_root(bytes, &buff::BUFF_INFO).unwrap_err();
    assert_eq!(err.kind_name(), "BufferUnderrun");
    assert_eq!(err.path().and_then(|path| path.leaf()), Some("id"));
    assert_eq!(
        err.wire_error(),
        Some(&WireError::BufferUnderrun {
            offset: 14,
            needed: 4,
            remaining: 0
        })
    );
    assert_eq!(
        err.to_string(),
        "IBuffInfo.id: buffer underrun at offset 14: need 4 bytes, 0 remaining"
    );
}

#[test]
fn absent_array_inside_present_struct() {
    let bytes = [0x01, 0x00, 0xff];
    let mut cursor = Cursor::new(&bytes);
    let decoded = decode(&mut cursor, &OUTER).expect("decode nested optional");
    assert_eq!(cursor.position(), 2);
    assert_eq!(
        decoded,
        root(vec![("field", record(vec![("innerArray", Value::Absent)]))])
    );
    assert_eq!(serde_json::to_string(&decoded).unwrap(), r#"{"field":{}}"#);
}

#[test]
fn absent_optional_consumes_only_its_flag() {
    let record = root(vec![
        ("id", int(1)),
        ("tags", Value::Absent),
        ("child", Value::Absent),
        ("children", Value::Absent),
        ("fixed", list(Vec::new())),
    ]);
    let bytes = encode(&MIXED, &record);
    assert_eq!(bytes.len(), 4 + 1 + 1 + 1 + 4);
    assert_eq!(decode_root(&bytes, &MIXED).unwrap(), record);
}

#[test]
fn cursor_advances_by_exact_field_costs() {
    let cases = [
        root(vec![
            ("id", int(0)),
            ("tags", Value::Absent),
            ("child", Value::Absent),
            ("children", Value::Absent),
            ("fixed", list(Vec::new())),
        ]),
        root(vec![
            ("id", int(-3)),
            ("tags", list(vec![text("x")])),
            ("child", Value::Absent),
            ("children", Value::Absent),
            ("fixed", list(vec![Value::UInt16(1)])),
        ]),
        root(vec![
            ("id", int(i32::MAX)),
            ("tags", list(vec![text(""), text("星"), text("long tag")])),
            ("child", flat(1, "one")),
            ("children", list(vec![flat(2, "two"), flat(3, "")])),
            ("fixed", list(vec![Value::UInt16(1), Value::UInt16(u16::MAX)])),
        ]),
    ];

    for case in &cases {
        let mut bytes = encode(&MIXED, case);
        let expected_end = bytes.len();
        bytes.extend_from_slice(&[0xde, 0xad]);

        let mut cursor = Cursor::new(&bytes);
        let decoded = decode(&mut cursor, &MIXED).expect("decode case");
        assert_eq!(&decoded, case);
        assert_eq!(cursor.position(), expected_end);
        assert_eq!(cursor.remaining(), 2);
    }
}

#[test]
fn every_truncation_of_a_flat_record_underruns() {
    for cut in 0..BUFF_INFO_BYTES.len() {
        let err = decode_root(&BUFF_INFO_BYTES[..cut], &buff::BUFF_INFO).unwrap_err();
        assert_eq!(err.kind_name(), "BufferUnderrun", "cut at {cut}: {err}");
    }
}

#[test]
fn every_truncation_of_a_nested_record_underruns() {
    let record = root(vec![
        ("id", int(9)),
        ("tags", list(vec![text("ab"), text("c")])),
        ("child", flat(1, "one")),
        ("children", list(vec![flat(2, "two")])),
        ("fixed", list(vec![Value::UInt16(4)])),
    ]);
    let bytes = encode(&MIXED, &record);

    for cut in 0..bytes.len() {
        let err = decode_root(&bytes[..cut], &MIXED).unwrap_err();
        assert_eq!(err.kind_name(), "BufferUnderrun", "cut at {cut}: {err}");
    }
}

#[test]
fn truncation_inside_icon_list_underruns() {
    let record = root(vec![
        ("Desc", text("A")),
        ("Tag", text("B")),
        ("desc_tag", text("C")),
        ("icon", ints(&[7, 8])),
        ("icontype", int(5)),
        ("id", int(42)),
    ]);
    let bytes = encode(&buff::BUFF_INFO, &record);

    for cut in [15, 18, 20] {
        let err = decode_root(&bytes[..cut], &buff::BUFF_INFO).unwrap_err();
        assert_eq!(err.kind_name(), "BufferUnderrun", "cut at {cut}: {err}");
        assert_eq!(err.path().and_then(|path| path.leaf()), Some("icon"));
    }

    let err = decode_root(&bytes[..18], &buff::BUFF_INFO).unwrap_err();
    assert_eq!(
        err.wire_error(),
        Some(&WireError::BufferUnderrun {
            offset: 14,
            needed: 8,
            remaining: 4
        })
    );
}

#[test]
fn negative_count_is_a_schema_mismatch() {
    let mut bytes = vec![0x01];
    bytes.extend_from_slice(&(-1i32).to_le_bytes());
    let err = decode_root(&bytes, &buff::ROOT).unwrap_err();
    match err {
        DecodeError::Wire { schema, path, source } => {
            assert_eq!(schema, "BuffConfig");
            assert_eq!(path.to_string(), "data");
            assert_eq!(
                source,
                WireError::SchemaMismatch {
                    offset: 1,
                    count: -1
                }
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn invalid_utf8_reports_text_offset() {
    let mut bytes = BUFF_INFO_BYTES.to_vec();
    bytes[2] = 0xff;
    let err = decode_root(&bytes, &buff::BUFF_INFO).unwrap_err();
    assert_eq!(err.kind_name(), "InvalidUtf8");
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("Desc"));
    assert_eq!(
        err.wire_error(),
        Some(&WireError::InvalidUtf8 { offset: 2, len: 1 })
    );
}

#[test]
fn nonzero_flag_bytes_count_as_present() {
    let bytes = [0x7f, 0x00];
    let record = decode_root(&bytes, &OUTER).unwrap();
    assert!(record.get("field").and_then(Value::as_record).is_some());
}

#[test]
fn nested_failure_path_includes_list_index() {
    let record = root(vec![
        ("id", int(9)),
        ("tags", Value::Absent),
        ("child", Value::Absent),
        ("children", list(vec![flat(1, "a"), flat(2, "bb")])),
        ("fixed", list(Vec::new())),
    ]);
    let mut bytes = encode(&MIXED, &record);
    // Corrupt the last byte of children[1].name.
    let name_end = bytes.len() - 4;
    bytes[name_end - 1] = 0xc3;

    let err = decode_root(&bytes, &MIXED).unwrap_err();
    assert_eq!(err.kind_name(), "InvalidUtf8");
    assert_eq!(
        err.path().map(ToString::to_string).as_deref(),
        Some("children[1].name")
    );
}
