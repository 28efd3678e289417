//! # Strided View of Scalar-Reference Records
//!
//! A contiguous run of scalar-reference records can be interpreted as an
//! array of fixed-size structs, without per-record parsing. This module
//! provides both halves of that:
//!
//! - `strided_fields()`: the flat, ordered field list describing one
//!   record's byte layout. Strided access requires every byte accounted
//!   for, so the two reserved regions appear as `@`-prefixed fields.
//! - `StridedScalarRefs`: a zero-copy view reinterpreting a byte buffer
//!   as `&[RawScalarRef]` via `zerocopy`.
//!
//! ## Record Layout (12 bytes, big-endian)
//!
//! ```text
//! Offset  Size  Field    Description
//! ------  ----  -------  -------------------------------
//! 0       2     @pidf    reserved, carried for stride
//! 2       4     ref      the reference number
//! 6       2     @other1  reserved, carried for stride
//! 8       4     @other2  reserved, carried for stride
//! ```
//!
//! All four wrapper fields have alignment 1, so `RawScalarRef` is exactly
//! 12 bytes with no padding and any 12-byte-aligned-to-nothing slice can
//! back it.

use eyre::{ensure, Result};
use smallvec::{smallvec, SmallVec};
use zerocopy::big_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::schema::node::PrimitiveType;

/// Bytes per scalar-reference record.
pub const SCALAR_REF_STRIDE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridedField {
    pub name: &'static str,
    pub prim: PrimitiveType,
    pub offset: usize,
}

impl StridedField {
    pub fn width(&self) -> usize {
        self.prim.width()
    }
}

/// The flat field list for the scalar-reference record, in byte order,
/// covering all 12 bytes with no gaps.
pub fn strided_fields() -> SmallVec<[StridedField; 4]> {
    smallvec![
        StridedField {
            name: "@pidf",
            prim: PrimitiveType::UInt16,
            offset: 0,
        },
        StridedField {
            name: "ref",
            prim: PrimitiveType::UInt32,
            offset: 2,
        },
        StridedField {
            name: "@other1",
            prim: PrimitiveType::UInt16,
            offset: 6,
        },
        StridedField {
            name: "@other2",
            prim: PrimitiveType::UInt32,
            offset: 8,
        },
    ]
}

/// One scalar-reference record as it sits on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct RawScalarRef {
    pidf: U16,
    ref_: U32,
    other1: U16,
    other2: U32,
}

impl RawScalarRef {
    be_getters! {
        pidf: u16,
        ref_: u32,
        other1: u16,
        other2: u32,
    }
}

/// Zero-copy view of a contiguous run of scalar-reference records.
#[derive(Debug, Clone, Copy)]
pub struct StridedScalarRefs<'a> {
    records: &'a [RawScalarRef],
}

impl<'a> StridedScalarRefs<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        ensure!(
            data.len() % SCALAR_REF_STRIDE == 0,
            "strided buffer length {} is not a multiple of the {}-byte record stride",
            data.len(),
            SCALAR_REF_STRIDE
        );
        let records = <[RawScalarRef]>::ref_from_bytes(data)
            .map_err(|e| eyre::eyre!("failed to reinterpret strided buffer: {:?}", e))?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a RawScalarRef> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, RawScalarRef> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for StridedScalarRefs<'a> {
    type Item = &'a RawScalarRef;
    type IntoIter = std::slice::Iter<'a, RawScalarRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
