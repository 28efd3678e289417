//! # colref - Reference-Record Decoding for a Columnar Container
//!
//! colref decodes the two reference-object record types found in a
//! self-describing, big-endian columnar container format, and derives the
//! two schema descriptors downstream consumers need: a strided descriptor
//! for array-of-structs access over contiguous record runs, and a columnar
//! schema tree for a lazy bytecode-driven extraction path.
//!
//! ## Quick Start
//!
//! ```
//! use colref::reader::Cursor;
//! use colref::records::ScalarRef;
//!
//! let data = [0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
//! let mut cursor = Cursor::new(&data);
//! let record = ScalarRef::decode(&mut cursor, false).unwrap();
//! assert_eq!(record.ref_(), 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Class Registry (name -> decoder)      │
//! ├─────────────────────┬───────────────────┤
//! │  Record Decoders    │  Schema Builders  │
//! │  ScalarRef/ArrayRef │  strided/columnar │
//! ├─────────────────────┴───────────────────┤
//! │   Byte Cursor (big-endian, bounds-      │
//! │   checked, offset-tracked)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Decoding and schema building are independent consumers of the same byte
//! layout: the decoders read records one at a time through the cursor,
//! while the schema builders describe that layout to downstream bulk
//! readers without performing any I/O themselves.
//!
//! ## Schema Builders
//!
//! The columnar builders come in two mutually exclusive modes behind one
//! trait. Native mode describes shape; bytecode mode also reserves node
//! keys from a [`schema::BuildContext`] and emits an extraction program so
//! a later-stage virtual machine can materialize columns in the record's
//! physical byte order. Both modes produce structurally equivalent trees.
//!
//! ## Error Handling
//!
//! Fallible operations return `eyre::Result`. Decode failures carry a typed
//! [`error::DecodeError`] (unsupported serialization mode, truncated input,
//! corrupt record) that callers can downcast to. Failures are fatal for the
//! current decode or build call; the crate never retries and never returns
//! partial records.
//!
//! ## Module Overview
//!
//! - [`reader`]: offset-tracked, bounds-checked big-endian cursor
//! - [`records`]: the two record decoders and the class registry
//! - [`schema`]: strided and columnar schema derivation
//! - [`error`]: the decode-error taxonomy

#[macro_use]
mod macros;

pub mod error;
pub mod reader;
pub mod records;
pub mod schema;

pub use error::DecodeError;
pub use reader::Cursor;
pub use records::{ArrayRef, ClassRegistry, DecodedRecord, ScalarRef};
pub use schema::{
    BuildContext, BytecodeSchemaBuilder, NativeSchemaBuilder, SchemaBuilder, SchemaNode,
};
