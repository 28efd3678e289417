//! # Class Registry
//!
//! Dispatch from a record-type name to its decoder. The registry is an
//! explicit table constructed at process start and passed to whatever layer
//! selects decoders; nothing in this crate mutates process-wide state at
//! load time.
//!
//! `with_builtin_classes` registers the two reference-record types this
//! crate decodes. Callers embedding the registry into a larger container
//! reader can register additional classes, but a name can be bound only
//! once.

use std::collections::HashMap;

use eyre::{ensure, Result};

use crate::reader::Cursor;
use crate::records::array::ArrayRef;
use crate::records::scalar::ScalarRef;

/// A decoded record of either reference type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    Scalar(ScalarRef),
    Array(ArrayRef),
}

pub type DecodeFn = fn(&mut Cursor<'_>, bool) -> Result<DecodedRecord>;

fn decode_scalar_ref(cursor: &mut Cursor<'_>, memberwise: bool) -> Result<DecodedRecord> {
    Ok(DecodedRecord::Scalar(ScalarRef::decode(cursor, memberwise)?))
}

fn decode_array_ref(cursor: &mut Cursor<'_>, memberwise: bool) -> Result<DecodedRecord> {
    Ok(DecodedRecord::Array(ArrayRef::decode(cursor, memberwise)?))
}

#[derive(Debug, Default)]
pub struct ClassRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with both reference-record types.
    pub fn with_builtin_classes() -> Self {
        let mut registry = Self::new();
        registry
            .register(ScalarRef::CLASS_NAME, decode_scalar_ref)
            .expect("fresh registry has no entries");
        registry
            .register(ArrayRef::CLASS_NAME, decode_array_ref)
            .expect("fresh registry has no entries");
        registry
    }

    pub fn register(&mut self, class_name: &'static str, decoder: DecodeFn) -> Result<()> {
        ensure!(
            !self.decoders.contains_key(class_name),
            "record class '{}' is already registered",
            class_name
        );
        self.decoders.insert(class_name, decoder);
        Ok(())
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.decoders.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Dispatches one decode by class name.
    pub fn decode(
        &self,
        class_name: &str,
        cursor: &mut Cursor<'_>,
        memberwise: bool,
    ) -> Result<DecodedRecord> {
        let decoder = self
            .decoders
            .get(class_name)
            .ok_or_else(|| eyre::eyre!("unknown record class '{}'", class_name))?;
        decoder(cursor, memberwise)
    }
}
