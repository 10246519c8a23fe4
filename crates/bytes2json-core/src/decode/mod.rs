//! Decoding pipeline.
//!
//! `decode_root` is the entry point used by callers: it owns a fresh cursor
//! over the caller's buffer, runs the engine on the root schema and applies
//! the trailing-bytes policy. Each call is independent; nothing is shared
//! between calls, so distinct buffers can be decoded concurrently.
//!
//! Errors are terminal: the first failing field aborts the whole decode and
//! is reported with its path from the root record.

mod engine;
mod error;
mod observer;

pub use engine::{decode, decode_observed};
pub use error::{DecodeError, FieldPath, Segment};
pub use observer::{DecodeObserver, NoopObserver, TracingObserver};

use crate::Record;
use crate::schema::Schema;
use crate::wire::Cursor;

/// Policy for bytes left over after the root record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBytes {
    /// Ignore them; newer exporters may append fields.
    #[default]
    Allow,
    /// Fail with [`DecodeError::TrailingBytes`].
    Reject,
}

/// Options for one root decode.
///
/// # Examples
/// ```
/// use bytes2json_core::{DecodeOptions, TrailingBytes};
///
/// assert_eq!(DecodeOptions::default().trailing, TrailingBytes::Allow);
/// assert_eq!(DecodeOptions::strict().trailing, TrailingBytes::Reject);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub trailing: TrailingBytes,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            trailing: TrailingBytes::Reject,
        }
    }
}

/// Decode `buffer` as one instance of `schema`, tolerating trailing bytes.
///
/// # Errors
/// Returns the first [`DecodeError`] met; no partial record is produced.
pub fn decode_root(buffer: &[u8], schema: &Schema) -> Result<Record, DecodeError> {
    decode_root_with(buffer, schema, DecodeOptions::default(), &mut NoopObserver)
}

/// [`decode_root`] with explicit options and an observer.
///
/// # Examples
/// ```
/// use bytes2json_core::{DecodeOptions, TracingObserver, catalog, decode_root_with};
///
/// let entry = catalog::lookup("buff").unwrap();
/// let bytes = [0x00, 0xaa];
/// let mut observer = TracingObserver::new();
///
/// let lenient = decode_root_with(&bytes, entry.root, DecodeOptions::default(), &mut observer);
/// assert!(lenient.is_ok());
///
/// let strict = decode_root_with(&bytes, entry.root, DecodeOptions::strict(), &mut observer);
/// assert_eq!(strict.unwrap_err().kind_name(), "TrailingBytes");
/// ```
pub fn decode_root_with(
    buffer: &[u8],
    schema: &Schema,
    options: DecodeOptions,
    observer: &mut dyn DecodeObserver,
) -> Result<Record, DecodeError> {
    let mut cursor = Cursor::new(buffer);
    let record = decode_observed(&mut cursor, schema, observer)?;
    let trailing = cursor.remaining();
    observer.finished(schema, cursor.position(), trailing);

    if trailing > 0 && options.trailing == TrailingBytes::Reject {
        return Err(DecodeError::TrailingBytes {
            schema: schema.name,
            offset: cursor.position(),
            remaining: trailing,
        });
    }
    Ok(record)
}
