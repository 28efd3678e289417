//! # Array Reference Record
//!
//! The reference-array record carries a name, a declared element count and
//! a trailing run of big-endian `i32` reference numbers:
//!
//! ```text
//! Offset  Size   Field       Description
//! ------  -----  ----------  ----------------------------------
//! 0       10     (reserved)  ignored
//! 10      var    name        length-prefixed string
//! +0      4      size        big-endian i32 element count N
//! +4      6      (reserved)  ignored
//! +10     4×N    refs        N big-endian i32 values
//! ```
//!
//! Total bytes consumed: 20 + name-prefix-and-bytes + 4×N. A zero count is
//! a valid empty array; a negative count is structural corruption and is
//! rejected before any element read is attempted. The member-wise variant
//! is rejected before any bytes are consumed, as for the scalar record.

use eyre::{bail, Result};

use crate::error::DecodeError;
use crate::reader::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRef {
    name: String,
    size: i32,
    refs: Vec<i32>,
}

impl ArrayRef {
    pub const CLASS_NAME: &'static str = "ArrayRef";

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared element count. Always equals `refs().len()`.
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn refs(&self) -> &[i32] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.refs.get(index).copied()
    }

    pub fn decode(cursor: &mut Cursor<'_>, memberwise: bool) -> Result<Self> {
        if memberwise {
            bail!(DecodeError::UnsupportedSerializationMode {
                class_name: Self::CLASS_NAME,
            });
        }

        cursor.skip(10)?;
        let name = cursor.read_string()?.to_owned();
        let size = cursor.read_i32()?;
        if size < 0 {
            bail!(DecodeError::CorruptRecord {
                class_name: Self::CLASS_NAME,
                detail: format!("negative element count {}", size),
            });
        }
        cursor.skip(6)?;
        let refs = cursor.read_i32_array(size as usize)?;

        Ok(Self { name, size, refs })
    }
}

impl std::ops::Index<usize> for ArrayRef {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.refs[index]
    }
}

impl<'a> IntoIterator for &'a ArrayRef {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}
