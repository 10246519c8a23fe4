//! Declarative positional schemas.
//!
//! A schema is nothing more than the ordered list of fields the exporter
//! writes. Field identity on the wire is implied by position alone, so
//! reordering, inserting or removing a field in any schema changes the
//! binary format and must bump [`crate::catalog::CATALOG_VERSION`].
//!
//! Schemas are `'static` data and may reference each other (or themselves)
//! through `&'static Schema`.

use std::fmt;

use crate::wire::layout;

/// Depth at which `min_wire_size` stops following mandatory nested structs.
const MIN_SIZE_DEPTH: usize = 32;

/// Kind of one element inside a counted sequence.
#[derive(Debug, Clone, Copy)]
pub enum Element {
    Bool,
    Int32,
    Float32,
    UInt16,
    Text,
    Record(&'static Schema),
}

/// Decode kind of one schema field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Bool,
    Int32,
    Float32,
    UInt16,
    Text,
    /// Presence flag, then (if set) a count and that many elements.
    OptionalArray(Element),
    /// Presence flag, then (if set) the nested record.
    OptionalStruct(&'static Schema),
    /// Nested record with no presence flag.
    Struct(&'static Schema),
    /// Count and elements with no presence flag.
    FixedArray(Element),
}

/// One named field in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ordered field list identified by name.
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Build a [`Schema`] from `"field" => kind` pairs in wire order.
///
/// # Examples
/// ```
/// use bytes2json_core::schema;
/// use bytes2json_core::schema::{Element, FieldKind::*, Schema};
///
/// static RANK: Schema = schema!("IRankItem" {
///     "Desc" => Text,
///     "Lv" => Int32,
/// });
/// static EQUIP: Schema = schema!("IEquipItem" {
///     "Name" => Text,
///     "Rank" => OptionalArray(Element::Record(&RANK)),
/// });
///
/// assert_eq!(EQUIP.fields.len(), 2);
/// assert_eq!(EQUIP.min_wire_size(), 3);
/// ```
#[macro_export]
macro_rules! schema {
    ($name:literal { $($field:literal => $kind:expr),* $(,)? }) => {
        $crate::schema::Schema {
            name: $name,
            fields: &[
                $($crate::schema::FieldDescriptor { name: $field, kind: $kind }),*
            ],
        }
    };
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Smallest number of bytes any valid encoding of this schema occupies.
    ///
    /// Optional fields count as their presence flag, sequences as their
    /// count, text as its length prefix.
    pub fn min_wire_size(&self) -> usize {
        self.min_size_within(MIN_SIZE_DEPTH)
    }

    fn min_size_within(&self, depth: usize) -> usize {
        if depth == 0 {
            return 0;
        }
        self.fields
            .iter()
            .map(|field| field.kind.min_size_within(depth))
            .fold(0usize, usize::saturating_add)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.name, field.kind))
            .collect();
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &fields)
            .finish()
    }
}

impl Element {
    pub fn min_wire_size(&self) -> usize {
        self.min_size_within(MIN_SIZE_DEPTH)
    }

    fn min_size_within(&self, depth: usize) -> usize {
        match self {
            Element::Bool => layout::BOOL_LEN,
            Element::Int32 => layout::INT32_LEN,
            Element::Float32 => layout::FLOAT32_LEN,
            Element::UInt16 => layout::UINT16_LEN,
            Element::Text => layout::TEXT_PREFIX_LEN,
            Element::Record(schema) => schema.min_size_within(depth - 1),
        }
    }
}

impl FieldKind {
    fn min_size_within(&self, depth: usize) -> usize {
        match self {
            FieldKind::Bool => layout::BOOL_LEN,
            FieldKind::Int32 => layout::INT32_LEN,
            FieldKind::Float32 => layout::FLOAT32_LEN,
            FieldKind::UInt16 => layout::UINT16_LEN,
            FieldKind::Text => layout::TEXT_PREFIX_LEN,
            FieldKind::OptionalArray(_) | FieldKind::OptionalStruct(_) => layout::PRESENCE_LEN,
            FieldKind::FixedArray(_) => layout::COUNT_LEN,
            FieldKind::Struct(schema) => schema.min_size_within(depth - 1),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Bool => f.write_str("bool"),
            Element::Int32 => f.write_str("int32"),
            Element::Float32 => f.write_str("float32"),
            Element::UInt16 => f.write_str("uint16"),
            Element::Text => f.write_str("text"),
            Element::Record(schema) => f.write_str(schema.name),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Int32 => f.write_str("int32"),
            FieldKind::Float32 => f.write_str("float32"),
            FieldKind::UInt16 => f.write_str("uint16"),
            FieldKind::Text => f.write_str("text"),
            FieldKind::OptionalArray(element) => write!(f, "optional [{element}]"),
            FieldKind::OptionalStruct(schema) => write!(f, "optional {}", schema.name),
            FieldKind::Struct(schema) => f.write_str(schema.name),
            FieldKind::FixedArray(element) => write!(f, "[{element}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, FieldKind::*, Schema};

    static LEAF: Schema = schema!("Leaf" {
        "id" => Int32,
        "name" => Text,
    });

    static BRANCH: Schema = schema!("Branch" {
        "flag" => Bool,
        "leaf" => Struct(&LEAF),
        "leaves" => FixedArray(Element::Record(&LEAF)),
        "extra" => OptionalStruct(&LEAF),
        "scale" => Float32,
        "port" => UInt16,
    });

    static NODE: Schema = schema!("Node" {
        "value" => Int32,
        "children" => OptionalArray(Element::Record(&NODE)),
    });

    static LOOP: Schema = schema!("Loop" {
        "next" => Struct(&LOOP),
    });

    #[test]
    fn min_size_sums_field_minimums() {
        assert_eq!(LEAF.min_wire_size(), 6);
        assert_eq!(BRANCH.min_wire_size(), 1 + 6 + 4 + 1 + 4 + 2);
    }

    #[test]
    fn self_reference_through_optional_is_finite() {
        assert_eq!(NODE.min_wire_size(), 5);
        assert_eq!(Element::Record(&NODE).min_wire_size(), 5);
    }

    #[test]
    fn mandatory_self_reference_terminates() {
        assert_eq!(LOOP.min_wire_size(), 0);
    }

    #[test]
    fn field_lookup_by_name() {
        assert!(BRANCH.field("leaves").is_some());
        assert!(BRANCH.field("missing").is_none());
    }

    #[test]
    fn debug_names_referenced_schemas_without_recursing() {
        let debug = format!("{:?}", NODE);
        assert!(debug.contains("children: optional [Node]"));
    }
}
