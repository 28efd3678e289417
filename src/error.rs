//! # Decode Error Taxonomy
//!
//! This module defines the typed error values raised by the record decoders
//! and the byte cursor. Errors are raised through `eyre::bail!` so they
//! travel inside `eyre::Result` like every other error in the crate, while
//! remaining downcastable for callers that need to distinguish the kinds.
//!
//! ## Error Kinds
//!
//! | Kind | Meaning | Raised by |
//! |------|---------|-----------|
//! | `UnsupportedSerializationMode` | the member-wise encoding variant was requested | record decoders |
//! | `TruncatedInput` | fewer bytes available than the layout requires | cursor |
//! | `CorruptRecord` | a structurally invalid value (e.g. negative element count) | record decoders |
//!
//! All three are fatal for the current decode call. There is no local
//! recovery, no partial-record return, and no default-value substitution;
//! callers may retry at a higher level by re-reading the source.
//!
//! Schema-build errors (key allocation or context-state misuse) are
//! programming errors, not data errors, and are asserted in
//! `schema::context` rather than represented here.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The member-wise serialization variant has no defined layout for
    /// these record types. Raised before any bytes are consumed.
    UnsupportedSerializationMode { class_name: &'static str },
    /// The input ended before the layout was satisfied.
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A decoded value violates the record's structural invariants.
    CorruptRecord {
        class_name: &'static str,
        detail: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedSerializationMode { class_name } => {
                write!(f, "memberwise serialization of {} is not supported", class_name)
            }
            DecodeError::TruncatedInput {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "truncated input at offset {}: need {} bytes, {} available",
                    offset, needed, available
                )
            }
            DecodeError::CorruptRecord { class_name, detail } => {
                write!(f, "corrupt {} record: {}", class_name, detail)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
