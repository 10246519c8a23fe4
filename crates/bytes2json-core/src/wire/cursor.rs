use super::error::WireError;
use super::layout;

/// Forward-only read position over a borrowed byte buffer.
///
/// The position never moves backwards and never passes the end of the
/// buffer. A read that fails leaves the position untouched.
///
/// # Examples
/// ```
/// use bytes2json_core::Cursor;
///
/// let bytes = [0x01, 0x00, 0x41, 0x2a, 0x00, 0x00, 0x00];
/// let mut cursor = Cursor::new(&bytes);
/// assert_eq!(cursor.read_text()?, "A");
/// assert_eq!(cursor.read_i32()?, 42);
/// assert!(cursor.is_at_end());
/// # Ok::<(), bytes2json_core::WireError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with `BufferUnderrun` unless `needed` bytes are left.
    pub fn require(&self, needed: usize) -> Result<(), WireError> {
        if self.remaining() < needed {
            return Err(WireError::BufferUnderrun {
                offset: self.position,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Consume exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.require(len)?;
        let start = self.position;
        self.position += len;
        Ok(&self.buffer[start..self.position])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        let [byte] = self.take_array::<{ layout::BOOL_LEN }>()?;
        Ok(byte != 0)
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        self.take_array::<{ layout::INT32_LEN }>()
            .map(i32::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        self.take_array::<{ layout::FLOAT32_LEN }>()
            .map(f32::from_le_bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.take_array::<{ layout::UINT16_LEN }>()
            .map(u16::from_le_bytes)
    }

    /// Read a `u16` length prefix followed by that many UTF-8 bytes.
    ///
    /// Nothing is consumed unless the whole value decodes.
    ///
    /// # Errors
    /// `BufferUnderrun` when the prefix or the payload is cut short,
    /// `InvalidUtf8` when the payload is not valid UTF-8.
    pub fn read_text(&mut self) -> Result<String, WireError> {
        let start = self.position;
        let len = self.read_u16()? as usize;
        let payload_offset = self.position;
        let bytes = match self.take(len) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.position = start;
                return Err(err);
            }
        };
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(_) => {
                self.position = start;
                Err(WireError::InvalidUtf8 {
                    offset: payload_offset,
                    len,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::wire::WireError;

    #[test]
    fn reads_little_endian_primitives() {
        let mut bytes = Vec::new();
        bytes.push(0x02);
        bytes.extend_from_slice(&(-7i32).to_le_bytes());
        bytes.extend_from_slice(&1.5f32.to_le_bytes());
        bytes.extend_from_slice(&0xbeefu16.to_le_bytes());

        let mut cursor = Cursor::new(&bytes);
        assert!(cursor.read_bool().unwrap());
        assert_eq!(cursor.read_i32().unwrap(), -7);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
        assert_eq!(cursor.read_u16().unwrap(), 0xbeef);
        assert_eq!(cursor.position(), 11);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn zero_byte_is_false() {
        let mut cursor = Cursor::new(&[0x00]);
        assert!(!cursor.read_bool().unwrap());
    }

    #[test]
    fn empty_text_is_empty_string() {
        let mut cursor = Cursor::new(&[0x00, 0x00]);
        assert_eq!(cursor.read_text().unwrap(), "");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn text_decodes_multibyte_utf8() {
        let text = "精灵";
        let mut bytes = (text.len() as u16).to_le_bytes().to_vec();
        bytes.extend_from_slice(text.as_bytes());
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_text().unwrap(), text);
    }

    #[test]
    fn short_int_is_underrun_and_does_not_advance() {
        let mut cursor = Cursor::new(&[0x01, 0x02, 0x03]);
        let err = cursor.read_i32().unwrap_err();
        assert_eq!(
            err,
            WireError::BufferUnderrun {
                offset: 0,
                needed: 4,
                remaining: 3
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn short_text_payload_is_underrun_not_empty() {
        let mut cursor = Cursor::new(&[0x05, 0x00, b'a', b'b']);
        let err = cursor.read_text().unwrap_err();
        assert!(matches!(
            err,
            WireError::BufferUnderrun {
                offset: 2,
                needed: 5,
                remaining: 2
            }
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn invalid_utf8_is_reported_with_offset() {
        let mut cursor = Cursor::new(&[0x02, 0x00, 0xff, 0xfe]);
        let err = cursor.read_text().unwrap_err();
        assert_eq!(err, WireError::InvalidUtf8 { offset: 2, len: 2 });
    }

    #[test]
    fn empty_buffer_underruns_on_bool() {
        let mut cursor = Cursor::new(&[]);
        assert!(cursor.is_empty());
        assert!(matches!(
            cursor.read_bool(),
            Err(WireError::BufferUnderrun { needed: 1, .. })
        ));
    }
}
