//! # Cursor - Sequential Big-Endian Reads over a Byte Slice
//!
//! `Cursor` borrows a byte slice and tracks a read position. All getters
//! return values (or `&'a` slices) read at the current position and advance
//! past them. Bounds are checked before any state changes.
//!
//! ## Zero-Copy Design
//!
//! `read_bytes` and `read_string` return references into the underlying
//! buffer. No heap allocation happens inside the cursor except for
//! `read_i32_array`, which materializes the decoded elements.
//!
//! ## Thread Safety
//!
//! `Cursor` is a plain mutable value with no interior mutability. One
//! decode call owns one cursor; concurrent use requires separate cursors.

use eyre::{bail, Result};

use crate::error::DecodeError;

/// Escape value in the short length byte that switches a string's length
/// prefix to the 4-byte wide form.
const STRING_WIDE_LENGTH_ESCAPE: u8 = 255;

#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset from the start of the underlying slice.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn require(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            bail!(DecodeError::TruncatedInput {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.require(n)?;
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.require(n)?;
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads `count` big-endian `i32` values.
    pub fn read_i32_array(&mut self, count: usize) -> Result<Vec<i32>> {
        let bytes = self.read_bytes(count * 4)?;
        let values = bytes
            .chunks_exact(4)
            .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(values)
    }

    /// Reads a length-prefixed string: one length byte, where the value 255
    /// escapes to a 4-byte big-endian length, followed by that many raw
    /// bytes. The bytes must be valid UTF-8.
    pub fn read_string(&mut self) -> Result<&'a str> {
        let short = self.read_u8()?;
        let len = if short == STRING_WIDE_LENGTH_ESCAPE {
            self.read_u32()? as usize
        } else {
            short as usize
        };
        let bytes = self.read_bytes(len)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s),
            Err(_) => bail!(DecodeError::CorruptRecord {
                class_name: "String",
                detail: format!("invalid UTF-8 in {}-byte string", len),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn reads_fixed_width_big_endian_fields() {
        let data = [0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0xFF, 0xFF, 0xFF, 0xFE];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_u16().unwrap(), 1);
        assert_eq!(cursor.read_u32().unwrap(), 2);
        assert_eq!(cursor.read_i32().unwrap(), -2);
        assert_eq!(cursor.pos(), 10);
        assert!(cursor.is_empty());
    }

    #[test]
    fn skip_advances_without_reading() {
        let data = [0u8; 8];
        let mut cursor = Cursor::new(&data);

        cursor.skip(6).unwrap();
        assert_eq!(cursor.pos(), 6);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn short_read_fails_without_advancing() {
        let data = [0x00, 0x01];
        let mut cursor = Cursor::new(&data);

        let err = cursor.read_u32().unwrap_err();
        let decode_err = err.downcast_ref::<DecodeError>().unwrap();
        assert_eq!(
            *decode_err,
            DecodeError::TruncatedInput {
                offset: 0,
                needed: 4,
                available: 2,
            }
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn skip_past_end_fails() {
        let data = [0u8; 4];
        let mut cursor = Cursor::new(&data);

        assert!(cursor.skip(5).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn reads_short_form_string() {
        let data = [0x05, b'h', b'e', b'l', b'l', b'o'];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string().unwrap(), "hello");
        assert_eq!(cursor.pos(), 6);
    }

    #[test]
    fn reads_empty_string() {
        let data = [0x00];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string().unwrap(), "");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn reads_wide_form_string_via_escape_byte() {
        let mut data = vec![0xFF, 0x00, 0x00, 0x01, 0x04];
        data.extend(std::iter::repeat(b'x').take(260));
        let mut cursor = Cursor::new(&data);

        let s = cursor.read_string().unwrap();
        assert_eq!(s.len(), 260);
        assert_eq!(cursor.pos(), 5 + 260);
    }

    #[test]
    fn string_truncated_after_length_prefix_fails() {
        let data = [0x05, b'h', b'i'];
        let mut cursor = Cursor::new(&data);

        let err = cursor.read_string().unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn string_with_invalid_utf8_is_corrupt() {
        let data = [0x02, 0xC3, 0x28];
        let mut cursor = Cursor::new(&data);

        let err = cursor.read_string().unwrap_err();
        let decode_err = err.downcast_ref::<DecodeError>().unwrap();
        assert!(matches!(decode_err, DecodeError::CorruptRecord { .. }));
    }

    #[test]
    fn reads_i32_array() {
        let mut data = Vec::new();
        for v in [5i32, -2, 100_000] {
            data.extend_from_slice(&v.to_be_bytes());
        }
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_i32_array(3).unwrap(), vec![5, -2, 100_000]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn reads_zero_length_i32_array() {
        let data: [u8; 0] = [];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_i32_array(0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn truncated_i32_array_fails() {
        let data = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);

        let err = cursor.read_i32_array(2).unwrap_err();
        let decode_err = err.downcast_ref::<DecodeError>().unwrap();
        assert_eq!(
            *decode_err,
            DecodeError::TruncatedInput {
                offset: 0,
                needed: 8,
                available: 6,
            }
        );
    }

    #[test]
    fn zero_copy_string_points_into_input() {
        let data = [0x02, b'o', b'k'];
        let mut cursor = Cursor::new(&data);

        let s = cursor.read_string().unwrap();
        assert!(std::ptr::eq(s.as_ptr(), data[1..].as_ptr()));
    }
}
