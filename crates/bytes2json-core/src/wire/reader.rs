//! Presence/count conventions layered on top of the cursor.

use super::cursor::Cursor;
use super::error::WireError;

/// Read the flag that gates an optional field.
pub fn read_presence(cursor: &mut Cursor<'_>) -> Result<bool, WireError> {
    cursor.read_bool()
}

/// Read a sequence count and check it against the bytes left.
///
/// `min_element_size` is the smallest encoding one element can have. A
/// count whose elements cannot fit in the remaining bytes is rejected
/// here, before the caller allocates for it. Zero-sized elements always
/// fit; callers must bound their capacity by the bytes left instead.
///
/// # Errors
/// `SchemaMismatch` when the count is negative. `BufferUnderrun` when the
/// count itself is cut short or its elements cannot fit.
pub fn read_count(cursor: &mut Cursor<'_>, min_element_size: usize) -> Result<usize, WireError> {
    let offset = cursor.position();
    let raw = cursor.read_i32()?;
    let Ok(count) = usize::try_from(raw) else {
        return Err(WireError::SchemaMismatch { offset, count: raw });
    };
    let needed = count.saturating_mul(min_element_size);
    let remaining = cursor.remaining();
    if needed > remaining {
        return Err(WireError::BufferUnderrun {
            offset: cursor.position(),
            needed,
            remaining,
        });
    }
    Ok(count)
}
