#![allow(dead_code)]

//! Fixture encoder: writes a record back into the positional wire format.
//!
//! Only tests use it; the library itself is decode-only.

use bytes2json_core::schema::{Element, FieldKind, Schema};
use bytes2json_core::{Record, Value};

pub fn encode(schema: &Schema, record: &Record) -> Vec<u8> {
    let mut out = Vec::new();
    encode_record(&mut out, schema, record);
    out
}

fn encode_record(out: &mut Vec<u8>, schema: &Schema, record: &Record) {
    assert_eq!(
        record.len(),
        schema.fields.len(),
        "{} fixture has the wrong number of fields",
        schema.name
    );
    for field in schema.fields {
        let value = record
            .get(field.name)
            .unwrap_or_else(|| panic!("{}.{} missing from fixture", schema.name, field.name));
        encode_field(out, field.kind, value);
    }
}

fn encode_field(out: &mut Vec<u8>, kind: FieldKind, value: &Value) {
    match kind {
        FieldKind::Bool => encode_element(out, Element::Bool, value),
        FieldKind::Int32 => encode_element(out, Element::Int32, value),
        FieldKind::Float32 => encode_element(out, Element::Float32, value),
        FieldKind::UInt16 => encode_element(out, Element::UInt16, value),
        FieldKind::Text => encode_element(out, Element::Text, value),
        FieldKind::OptionalArray(element) => match value {
            Value::Absent => out.push(0),
            Value::List(items) => {
                out.push(1);
                encode_list(out, element, items);
            }
            other => panic!("expected list or absent, got {other:?}"),
        },
        FieldKind::OptionalStruct(schema) => match value {
            Value::Absent => out.push(0),
            Value::Record(record) => {
                out.push(1);
                encode_record(out, schema, record);
            }
            other => panic!("expected record or absent, got {other:?}"),
        },
        FieldKind::Struct(schema) => match value {
            Value::Record(record) => encode_record(out, schema, record),
            other => panic!("expected record, got {other:?}"),
        },
        FieldKind::FixedArray(element) => match value {
            Value::List(items) => encode_list(out, element, items),
            other => panic!("expected list, got {other:?}"),
        },
    }
}

fn encode_list(out: &mut Vec<u8>, element: Element, items: &[Value]) {
    put_i32(out, i32::try_from(items.len()).expect("fixture list too long"));
    for item in items {
        encode_element(out, element, item);
    }
}

fn encode_element(out: &mut Vec<u8>, element: Element, value: &Value) {
    match (element, value) {
        (Element::Bool, Value::Bool(flag)) => out.push(u8::from(*flag)),
        (Element::Int32, Value::Int32(number)) => put_i32(out, *number),
        (Element::Float32, Value::Float32(number)) => out.extend_from_slice(&number.to_le_bytes()),
        (Element::UInt16, Value::UInt16(number)) => out.extend_from_slice(&number.to_le_bytes()),
        (Element::Text, Value::Text(text)) => put_text(out, text),
        (Element::Record(schema), Value::Record(record)) => encode_record(out, schema, record),
        (element, value) => panic!("cannot encode {value:?} as {element}"),
    }
}

pub fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn put_text(out: &mut Vec<u8>, text: &str) {
    let len = u16::try_from(text.len()).expect("fixture text too long");
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(text.as_bytes());
}

pub fn int(value: i32) -> Value {
    Value::Int32(value)
}

pub fn float(value: f32) -> Value {
    Value::Float32(value)
}

pub fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub fn ints(values: &[i32]) -> Value {
    Value::List(values.iter().copied().map(Value::Int32).collect())
}

pub fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

pub fn record(fields: Vec<(&'static str, Value)>) -> Value {
    Value::Record(Record::from_fields(fields))
}

pub fn root(fields: Vec<(&'static str, Value)>) -> Record {
    Record::from_fields(fields)
}
