//! The positional decoder.
//!
//! One algorithm serves every schema: walk the fields in declaration order,
//! read a presence flag before each optional field, a count before each
//! sequence, and descend into nested schemas. Open records and sequences
//! live on a heap stack, so nesting depth is bounded by the buffer alone.

use crate::schema::{Element, FieldDescriptor, FieldKind, Schema};
use crate::wire::{Cursor, WireError, read_count, read_presence};
use crate::{Record, Value};

use super::error::{DecodeError, FieldPath, Segment};
use super::observer::{DecodeObserver, NoopObserver};

/// Decode one instance of `schema` at the cursor's position.
///
/// On success the cursor sits exactly past the record. On failure the
/// cursor position is unspecified and no partial record is returned.
///
/// # Examples
/// ```
/// use bytes2json_core::schema;
/// use bytes2json_core::schema::{FieldKind::*, Schema};
/// use bytes2json_core::{Cursor, Value, decode};
///
/// static RANK: Schema = schema!("IRankItem" { "Desc" => Text, "Lv" => Int32 });
///
/// let bytes = [0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0xff];
/// let mut cursor = Cursor::new(&bytes);
/// let record = decode(&mut cursor, &RANK)?;
/// assert_eq!(record.get("Lv"), Some(&Value::Int32(3)));
/// assert_eq!(cursor.position(), 6);
/// # Ok::<(), bytes2json_core::DecodeError>(())
/// ```
pub fn decode(cursor: &mut Cursor<'_>, schema: &Schema) -> Result<Record, DecodeError> {
    decode_observed(cursor, schema, &mut NoopObserver)
}

/// [`decode`] with an observer attached.
pub fn decode_observed(
    cursor: &mut Cursor<'_>,
    schema: &Schema,
    observer: &mut dyn DecodeObserver,
) -> Result<Record, DecodeError> {
    let mut root = RecordFrame::open(schema, cursor.position(), observer);
    let mut nested: Vec<Frame<'_>> = Vec::new();

    loop {
        let step = match nested.last_mut() {
            Some(Frame::Record(frame)) => frame.advance(cursor, observer),
            Some(Frame::Sequence(frame)) => frame.advance(cursor, observer),
            None => root.advance(cursor, observer),
        };
        let step = step.map_err(|source| DecodeError::Wire {
            schema: schema.name,
            path: locate(&root, &nested),
            source,
        })?;

        match step {
            Step::Value(value) => deliver(&mut root, &mut nested, value),
            Step::Enter(frame) => nested.push(frame),
            Step::Done => match nested.pop() {
                Some(frame) => {
                    let value = frame.finish(cursor.position(), observer);
                    deliver(&mut root, &mut nested, value);
                }
                None => return Ok(root.finish(cursor.position(), observer)),
            },
        }
    }
}

/// What the innermost open frame did with the next bytes.
enum Step<'s> {
    Value(Value),
    Enter(Frame<'s>),
    Done,
}

enum Frame<'s> {
    Record(RecordFrame<'s>),
    Sequence(SequenceFrame),
}

impl Frame<'_> {
    fn finish(self, offset: usize, observer: &mut dyn DecodeObserver) -> Value {
        match self {
            Frame::Record(frame) => Value::Record(frame.finish(offset, observer)),
            Frame::Sequence(frame) => Value::List(frame.items),
        }
    }
}

struct RecordFrame<'s> {
    schema: &'s Schema,
    record: Record,
    next: usize,
}

impl<'s> RecordFrame<'s> {
    fn open(schema: &'s Schema, offset: usize, observer: &mut dyn DecodeObserver) -> Self {
        observer.record_started(schema, offset);
        Self {
            schema,
            record: Record::with_capacity(schema.fields.len()),
            next: 0,
        }
    }

    fn current(&self) -> Option<&'s FieldDescriptor> {
        self.schema.fields.get(self.next)
    }

    fn advance(
        &mut self,
        cursor: &mut Cursor<'_>,
        observer: &mut dyn DecodeObserver,
    ) -> Result<Step<'s>, WireError> {
        match self.current() {
            Some(field) => open_field(cursor, field, observer),
            None => Ok(Step::Done),
        }
    }

    fn accept(&mut self, value: Value) {
        if let Some(field) = self.current() {
            self.record.push(field.name, value);
            self.next += 1;
        }
    }

    fn finish(self, offset: usize, observer: &mut dyn DecodeObserver) -> Record {
        observer.record_finished(self.schema, offset);
        self.record
    }
}

struct SequenceFrame {
    element: Element,
    count: usize,
    items: Vec<Value>,
}

impl SequenceFrame {
    fn advance<'s>(
        &mut self,
        cursor: &mut Cursor<'_>,
        observer: &mut dyn DecodeObserver,
    ) -> Result<Step<'s>, WireError> {
        if self.items.len() == self.count {
            return Ok(Step::Done);
        }
        open_element(cursor, self.element, observer)
    }
}

fn deliver(root: &mut RecordFrame<'_>, nested: &mut [Frame<'_>], value: Value) {
    match nested.last_mut() {
        Some(Frame::Record(frame)) => frame.accept(value),
        Some(Frame::Sequence(frame)) => frame.items.push(value),
        None => root.accept(value),
    }
}

/// Path from the root to the field or element being read.
fn locate(root: &RecordFrame<'_>, nested: &[Frame<'_>]) -> FieldPath {
    let outer = root.current().map(|field| Segment::Field(field.name));
    let inner = nested.iter().filter_map(|frame| match frame {
        Frame::Record(frame) => frame.current().map(|field| Segment::Field(field.name)),
        Frame::Sequence(frame) => Some(Segment::Index(frame.items.len())),
    });
    FieldPath::from_segments(outer.into_iter().chain(inner))
}

fn open_field<'s>(
    cursor: &mut Cursor<'_>,
    field: &FieldDescriptor,
    observer: &mut dyn DecodeObserver,
) -> Result<Step<'s>, WireError> {
    match field.kind {
        FieldKind::Bool => open_element(cursor, Element::Bool, observer),
        FieldKind::Int32 => open_element(cursor, Element::Int32, observer),
        FieldKind::Float32 => open_element(cursor, Element::Float32, observer),
        FieldKind::UInt16 => open_element(cursor, Element::UInt16, observer),
        FieldKind::Text => open_element(cursor, Element::Text, observer),
        FieldKind::OptionalArray(element) => {
            if !read_presence(cursor)? {
                return Ok(Step::Value(Value::Absent));
            }
            open_sequence(cursor, field.name, element, observer)
        }
        FieldKind::OptionalStruct(schema) => {
            if !read_presence(cursor)? {
                return Ok(Step::Value(Value::Absent));
            }
            open_element(cursor, Element::Record(schema), observer)
        }
        FieldKind::Struct(schema) => open_element(cursor, Element::Record(schema), observer),
        FieldKind::FixedArray(element) => open_sequence(cursor, field.name, element, observer),
    }
}

fn open_sequence<'s>(
    cursor: &mut Cursor<'_>,
    name: &'static str,
    element: Element,
    observer: &mut dyn DecodeObserver,
) -> Result<Step<'s>, WireError> {
    let count = read_count(cursor, element.min_wire_size())?;
    observer.sequence_started(name, count, cursor.position());
    // Zero-sized elements pass the count check at any count.
    let capacity = count.min(cursor.remaining());
    Ok(Step::Enter(Frame::Sequence(SequenceFrame {
        element,
        count,
        items: Vec::with_capacity(capacity),
    })))
}

fn open_element<'s>(
    cursor: &mut Cursor<'_>,
    element: Element,
    observer: &mut dyn DecodeObserver,
) -> Result<Step<'s>, WireError> {
    let value = match element {
        Element::Bool => Value::Bool(cursor.read_bool()?),
        Element::Int32 => Value::Int32(cursor.read_i32()?),
        Element::Float32 => Value::Float32(cursor.read_f32()?),
        Element::UInt16 => Value::UInt16(cursor.read_u16()?),
        Element::Text => Value::Text(cursor.read_text()?),
        Element::Record(schema) => {
            let frame = RecordFrame::open(schema, cursor.position(), observer);
            return Ok(Step::Enter(Frame::Record(frame)));
        }
    };
    Ok(Step::Value(value))
}
