use std::fmt;

use thiserror::Error;

use crate::wire::WireError;

/// One step in the path from the root record to a failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Field(&'static str),
    Index(usize),
}

/// Location of a failure inside the record graph, e.g. `data[0].id`.
///
/// # Examples
/// ```
/// use bytes2json_core::{FieldPath, Segment};
///
/// let path = FieldPath::from_segments([
///     Segment::Field("data"),
///     Segment::Index(0),
///     Segment::Field("id"),
/// ]);
/// assert_eq!(path.to_string(), "data[0].id");
/// assert_eq!(path.leaf(), Some("id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Segments from the root down to the failing field.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments.iter().copied()
    }

    /// Name of the innermost field on the path.
    pub fn leaf(&self) -> Option<&'static str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            Segment::Field(name) => Some(*name),
            Segment::Index(_) => None,
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Terminal failure of one decode call.
///
/// # Examples
/// ```
/// use bytes2json_core::{DecodeError, FieldPath, Segment, WireError};
///
/// let err = DecodeError::Wire {
///     schema: "IBuffInfo",
///     path: FieldPath::from_segments([Segment::Field("id")]),
///     source: WireError::BufferUnderrun { offset: 14, needed: 4, remaining: 0 },
/// };
/// assert!(err.to_string().contains("IBuffInfo.id"));
/// assert_eq!(err.kind_name(), "BufferUnderrun");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{schema}.{path}: {source}")]
    Wire {
        schema: &'static str,
        path: FieldPath,
        #[source]
        source: WireError,
    },
    #[error("{schema}: {remaining} trailing bytes after offset {offset}")]
    TrailingBytes {
        schema: &'static str,
        offset: usize,
        remaining: usize,
    },
}

impl DecodeError {
    pub fn wire_error(&self) -> Option<&WireError> {
        match self {
            DecodeError::Wire { source, .. } => Some(source),
            DecodeError::TrailingBytes { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            DecodeError::Wire { path, .. } => Some(path),
            DecodeError::TrailingBytes { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DecodeError::Wire { source, .. } => source.kind_name(),
            DecodeError::TrailingBytes { .. } => "TrailingBytes",
        }
    }
}
