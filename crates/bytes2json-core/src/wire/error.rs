use thiserror::Error;

/// Failures raised by primitive reads and the presence/count protocol.
///
/// Every variant is fatal for the buffer being decoded.
///
/// # Examples
/// ```
/// use bytes2json_core::WireError;
///
/// let err = WireError::BufferUnderrun { offset: 14, needed: 4, remaining: 0 };
/// assert!(err.to_string().contains("buffer underrun"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("buffer underrun at offset {offset}: need {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("invalid UTF-8 in {len}-byte text at offset {offset}")]
    InvalidUtf8 { offset: usize, len: usize },
    #[error("negative element count {count} at offset {offset}")]
    SchemaMismatch { offset: usize, count: i32 },
}

impl WireError {
    /// Short stable name of the error kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            WireError::BufferUnderrun { .. } => "BufferUnderrun",
            WireError::InvalidUtf8 { .. } => "InvalidUtf8",
            WireError::SchemaMismatch { .. } => "SchemaMismatch",
        }
    }
}
