//! # Scalar Reference Record
//!
//! The single-reference record is 12 bytes, fixed, independent of content:
//!
//! ```text
//! Offset  Size  Field       Description
//! ------  ----  ----------  -------------------------
//! 0       2     (reserved)  ignored
//! 2       4     ref         big-endian u32 reference
//! 6       6     (reserved)  ignored
//! ```
//!
//! The member-wise serialization variant has no defined layout for this
//! record and is rejected before any bytes are consumed.

use eyre::{bail, Result};

use crate::error::DecodeError;
use crate::reader::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarRef {
    ref_: u32,
}

impl ScalarRef {
    pub const CLASS_NAME: &'static str = "ScalarRef";

    /// Bytes consumed by one record.
    pub const WIRE_SIZE: usize = 12;

    /// The reference number.
    pub fn ref_(&self) -> u32 {
        self.ref_
    }

    pub fn decode(cursor: &mut Cursor<'_>, memberwise: bool) -> Result<Self> {
        if memberwise {
            bail!(DecodeError::UnsupportedSerializationMode {
                class_name: Self::CLASS_NAME,
            });
        }

        cursor.skip(2)?;
        let ref_ = cursor.read_u32()?;
        cursor.skip(6)?;

        Ok(Self { ref_ })
    }
}
