//! bytes2json core library: schema-driven decoding of positional config
//! records.
//!
//! Exported game configuration tables are flat byte streams with no tags
//! and no type markers. A field's identity is implied by its position in
//! the schema; optional fields carry a leading presence flag and sequences
//! a leading element count. This crate decodes such buffers into owned
//! [`Record`] graphs that serialize straight to JSON.
//!
//! Layers, bottom-up:
//! - `wire`: bounds-checked cursor and the presence/count conventions
//! - `schema`: declarative field-order tables
//! - `decode`: the single generic engine and the root pipeline entry
//! - `catalog`: the schemas of every known config table
//!
//! Invariants:
//! - Fields are decoded strictly in declaration order, without gaps.
//! - Every read is bounds-checked; a short buffer is always an error.
//! - A failed decode never yields a partial record.
//!
//! # Examples
//! ```
//! use bytes2json_core::{Value, catalog, decode_root};
//!
//! // buff.bytes with a single empty `data` list.
//! let bytes = [0x01, 0x00, 0x00, 0x00, 0x00];
//! let entry = catalog::lookup("buff").expect("buff schema");
//! let record = decode_root(&bytes, entry.root)?;
//! assert_eq!(record.get("data"), Some(&Value::List(Vec::new())));
//! # Ok::<(), bytes2json_core::DecodeError>(())
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

pub mod catalog;
pub mod decode;
pub mod schema;
pub mod wire;

pub use decode::{
    DecodeError, DecodeObserver, DecodeOptions, FieldPath, NoopObserver, Segment, TracingObserver,
    TrailingBytes, decode, decode_observed, decode_root, decode_root_with,
};
pub use schema::{Element, FieldDescriptor, FieldKind, Schema};
pub use wire::{Cursor, WireError};

/// One decoded field value.
///
/// `Absent` is what an optional field decodes to when its presence flag is
/// false. It is a value, not a missing key: a [`Record`] always holds one
/// entry per schema field.
///
/// # Examples
/// ```
/// use bytes2json_core::Value;
///
/// let value = Value::List(vec![Value::Int32(7), Value::Int32(8)]);
/// assert_eq!(value.as_list().map(|items| items.len()), Some(2));
/// assert!(Value::Absent.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Absent,
    Bool(bool),
    Int32(i32),
    Float32(f32),
    UInt16(u16),
    Text(String),
    Record(Record),
    List(Vec<Value>),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float32(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    fn is_nested(&self) -> bool {
        matches!(self, Value::Record(_) | Value::List(_))
    }
}

/// Decoded instance of one schema: field names mapped to values, in
/// declaration order.
///
/// A record owns every decoded string and list; it keeps no reference to
/// the source buffer. Serializing a record produces a JSON object that
/// omits `Absent` fields.
///
/// # Examples
/// ```
/// use bytes2json_core::{Record, Value};
///
/// let record = Record::from_fields(vec![
///     ("id", Value::Int32(42)),
///     ("icon", Value::Absent),
/// ]);
/// assert_eq!(record.get("id"), Some(&Value::Int32(42)));
/// assert_eq!(record.get("icon"), Some(&Value::Absent));
/// assert_eq!(record.get("unknown"), None);
///
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"id":42}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn from_fields(fields: Vec<(&'static str, Value)>) -> Self {
        Self { fields }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    /// Value of `name`; `None` only when the schema has no such field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Levels of JSON nesting this record serializes to. Objects and
    /// arrays count one level each, so a flat record has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 1;
        let mut pending: Vec<(&Value, usize)> = self
            .fields
            .iter()
            .filter(|(_, value)| value.is_nested())
            .map(|(_, value)| (value, 2))
            .collect();
        while let Some((value, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match value {
                Value::Record(record) => pending.extend(
                    record
                        .fields
                        .iter()
                        .filter(|(_, value)| value.is_nested())
                        .map(|(_, value)| (value, depth + 1)),
                ),
                Value::List(items) => pending.extend(
                    items
                        .iter()
                        .filter(|value| value.is_nested())
                        .map(|value| (value, depth + 1)),
                ),
                _ => {}
            }
        }
        deepest
    }
}

// Nested records are unlinked onto a heap stack before they drop, so
// dropping a deep graph does not recurse once per level.
impl Drop for Record {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = self
            .fields
            .drain(..)
            .map(|(_, value)| value)
            .filter(Value::is_nested)
            .collect();
        while let Some(value) = pending.pop() {
            match value {
                Value::Record(mut record) => pending.extend(
                    record
                        .fields
                        .drain(..)
                        .map(|(_, value)| value)
                        .filter(Value::is_nested),
                ),
                Value::List(items) => {
                    pending.extend(items.into_iter().filter(Value::is_nested));
                }
                _ => {}
            }
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.fields.iter().filter(|(_, value)| !value.is_absent());
        let mut map = serializer.serialize_map(Some(present.clone().count()))?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int32(value) => serializer.serialize_i32(*value),
            Value::Float32(value) => serializer.serialize_f32(*value),
            Value::UInt16(value) => serializer.serialize_u16(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Record(record) => record.serialize(serializer),
            Value::List(items) => serializer.collect_seq(items),
        }
    }
}
