//! Byte widths of every wire primitive. All multi-byte values are little-endian.

pub const BOOL_LEN: usize = 1;
pub const INT32_LEN: usize = 4;
pub const FLOAT32_LEN: usize = 4;
pub const UINT16_LEN: usize = 2;

/// Width of the length prefix in front of every text value.
pub const TEXT_PREFIX_LEN: usize = UINT16_LEN;
/// Width of the presence flag in front of every optional field.
pub const PRESENCE_LEN: usize = BOOL_LEN;
/// Width of the element count in front of every sequence.
pub const COUNT_LEN: usize = INT32_LEN;
