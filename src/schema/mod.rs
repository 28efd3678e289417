//! # Schema Derivation
//!
//! The container's reference records can be consumed two ways downstream,
//! and each way needs its own schema descriptor:
//!
//! - **Strided**: a contiguous run of identically-shaped records read as an
//!   array of fixed-size structs. Only the scalar-reference record has a
//!   fixed size, so only it gets a strided descriptor (`strided`).
//! - **Columnar**: a nested schema tree driving lazy, column-at-a-time
//!   extraction (`node`, `columnar`). The tree is built either *native*
//!   (shape only) or *bytecode* (shape plus node-key allocation and an
//!   emitted extraction program; see `context` and `program`).
//!
//! ## Module Structure
//!
//! - `node`: SchemaNode tree, PrimitiveType, NodeKey, structural equality
//! - `strided`: flat field list + zero-copy raw view for scalar references
//! - `context`: per-pass BuildContext (key counter, prev-key, fragments)
//! - `program`: ExtractionProgram emitted by bytecode-mode builds
//! - `columnar`: the SchemaBuilder trait and its two implementations

pub mod columnar;
pub mod context;
pub mod node;
pub mod program;
pub mod strided;

pub use columnar::{BytecodeSchemaBuilder, NativeSchemaBuilder, SchemaBuilder, ARRAY_REF_KEY_SPAN};
pub use context::{BuildContext, RecordScope};
pub use node::{NodeKey, PrimitiveType, SchemaNode};
pub use program::{ExtractOp, ExtractionProgram, Fragment, Stage};
pub use strided::{strided_fields, RawScalarRef, StridedField, StridedScalarRefs, SCALAR_REF_STRIDE};
