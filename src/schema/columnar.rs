//! # Columnar Schema Builders
//!
//! This module derives the nested schema descriptor consumed by the
//! downstream columnar analytics layer, for both reference-record types.
//! One `SchemaBuilder` capability, two implementations:
//!
//! - `NativeSchemaBuilder` describes shape only. No context, no side
//!   effects beyond tree construction.
//! - `BytecodeSchemaBuilder` additionally reserves node keys from a
//!   `BuildContext` and emits the extraction-program fragments that make
//!   the downstream machine read fields in physical byte order.
//!
//! Both produce structurally equivalent trees for the same record type;
//! `SchemaNode::structural_eq` ignores the bytecode-only key metadata.
//!
//! ## ArrayRef Key Block
//!
//! Each array-reference record reserves six keys from the context counter:
//!
//! ```text
//! base+1  record node
//! base+2  name string offsets
//! base+3  name string content
//! base+4  size scalar
//! base+5  refs list offsets
//! base+6  refs list content
//! ```
//!
//! The offsets are fixed; downstream bytecode addresses nodes by them.
//!
//! ## Physical Read Order
//!
//! The emitted fragments read `skip 10, name, size, skip 6` before the
//! field subtrees (pre) and the trailing `size × i32` array after them
//! (post), mirroring the wire layout rather than schema order.

use eyre::Result;

use crate::schema::context::BuildContext;
use crate::schema::node::{PrimitiveType, SchemaNode};
use crate::schema::program::{ExtractOp, Fragment, Stage};

/// Keys reserved per array-reference record in a bytecode pass.
pub const ARRAY_REF_KEY_SPAN: u32 = 6;

pub trait SchemaBuilder {
    fn scalar_ref_schema(&mut self) -> Result<SchemaNode>;
    fn array_ref_schema(&mut self) -> Result<SchemaNode>;
}

fn scalar_ref_fields() -> Vec<(String, SchemaNode)> {
    vec![
        ("@pidf".to_string(), SchemaNode::scalar(PrimitiveType::UInt16)),
        ("ref".to_string(), SchemaNode::scalar(PrimitiveType::UInt32)),
        ("@other1".to_string(), SchemaNode::scalar(PrimitiveType::UInt16)),
        ("@other2".to_string(), SchemaNode::scalar(PrimitiveType::UInt32)),
    ]
}

/// Shape-only schema construction.
#[derive(Debug, Default)]
pub struct NativeSchemaBuilder;

impl NativeSchemaBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaBuilder for NativeSchemaBuilder {
    fn scalar_ref_schema(&mut self) -> Result<SchemaNode> {
        Ok(SchemaNode::record("ScalarRef", scalar_ref_fields()))
    }

    fn array_ref_schema(&mut self) -> Result<SchemaNode> {
        Ok(SchemaNode::record(
            "ArrayRef",
            vec![
                ("name".to_string(), SchemaNode::string()),
                ("size".to_string(), SchemaNode::scalar(PrimitiveType::Int32)),
                (
                    "refs".to_string(),
                    SchemaNode::list(SchemaNode::scalar(PrimitiveType::Int32)),
                ),
            ],
        ))
    }
}

/// Schema construction with node-key allocation and extraction-program
/// emission. Holds the pass's `BuildContext` by mutable reference; one
/// pass, one context.
#[derive(Debug)]
pub struct BytecodeSchemaBuilder<'a> {
    ctx: &'a mut BuildContext,
}

impl<'a> BytecodeSchemaBuilder<'a> {
    pub fn new(ctx: &'a mut BuildContext) -> Self {
        Self { ctx }
    }

    /// Builds a scalar leaf whose key is whatever the container linked
    /// through the prev-key pointer.
    fn keyed_leaf(&mut self, prim: PrimitiveType) -> SchemaNode {
        SchemaNode::Scalar {
            prim,
            key: self.ctx.take_prev_key(),
        }
    }
}

impl SchemaBuilder for BytecodeSchemaBuilder<'_> {
    /// The scalar-reference record has no bytecode path: its strided view
    /// covers bulk access, so even in a bytecode pass it contributes shape
    /// only: no keys reserved, no fragments emitted.
    fn scalar_ref_schema(&mut self) -> Result<SchemaNode> {
        Ok(SchemaNode::record("ScalarRef", scalar_ref_fields()))
    }

    fn array_ref_schema(&mut self) -> Result<SchemaNode> {
        self.ctx.traverse();

        let base = self.ctx.reserve_keys(ARRAY_REF_KEY_SPAN);
        let record_key = base.offset(1);
        let name_offsets = base.offset(2);
        let name_content = base.offset(3);
        let size_key = base.offset(4);
        let refs_offsets = base.offset(5);
        let refs_content = base.offset(6);

        let scope = self.ctx.enter_record();

        self.ctx.emit(Fragment {
            key: record_key,
            stage: Stage::Pre,
            ops: vec![
                ExtractOp::Skip(10),
                ExtractOp::ReadString {
                    offsets: name_offsets,
                    content: name_content,
                },
                ExtractOp::ReadI32 { dst: size_key },
                ExtractOp::Skip(6),
            ],
        });

        let mut fields = Vec::with_capacity(3);
        fields.push((
            "name".to_string(),
            SchemaNode::String {
                offsets_key: Some(name_offsets),
                content_key: Some(name_content),
            },
        ));

        self.ctx.set_prev_key(size_key);
        fields.push(("size".to_string(), self.keyed_leaf(PrimitiveType::Int32)));

        self.ctx.set_prev_key(refs_content);
        let element = self.keyed_leaf(PrimitiveType::Int32);
        fields.push((
            "refs".to_string(),
            SchemaNode::List {
                element: Box::new(element),
                key: Some(refs_offsets),
            },
        ));

        self.ctx.emit(Fragment {
            key: record_key,
            stage: Stage::Post,
            ops: vec![ExtractOp::ReadI32Array {
                len_from: size_key,
                offsets: refs_offsets,
                content: refs_content,
            }],
        });

        self.ctx.exit_record(scope);

        Ok(SchemaNode::Record {
            name: "ArrayRef".to_string(),
            fields,
            key: Some(record_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::node::NodeKey;

    #[test]
    fn native_scalar_ref_schema_mirrors_strided_layout() {
        let schema = NativeSchemaBuilder::new().scalar_ref_schema().unwrap();
        let SchemaNode::Record { name, fields, key } = &schema else {
            panic!("expected record node");
        };
        assert_eq!(name, "ScalarRef");
        assert_eq!(key, &None);
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["@pidf", "ref", "@other1", "@other2"]);
    }

    #[test]
    fn native_array_ref_schema_has_expected_shape() {
        let schema = NativeSchemaBuilder::new().array_ref_schema().unwrap();
        let expected = SchemaNode::record(
            "ArrayRef",
            vec![
                ("name".into(), SchemaNode::string()),
                ("size".into(), SchemaNode::scalar(PrimitiveType::Int32)),
                (
                    "refs".into(),
                    SchemaNode::list(SchemaNode::scalar(PrimitiveType::Int32)),
                ),
            ],
        );
        assert_eq!(schema, expected);
    }

    #[test]
    fn bytecode_and_native_array_ref_schemas_are_structurally_equivalent() {
        let native = NativeSchemaBuilder::new().array_ref_schema().unwrap();

        let mut ctx = BuildContext::new();
        let bytecode = BytecodeSchemaBuilder::new(&mut ctx)
            .array_ref_schema()
            .unwrap();

        assert!(native.structural_eq(&bytecode));
        assert_ne!(native, bytecode);
    }

    #[test]
    fn bytecode_array_ref_assigns_the_documented_key_block() {
        let mut ctx = BuildContext::new();
        let schema = BytecodeSchemaBuilder::new(&mut ctx)
            .array_ref_schema()
            .unwrap();

        let SchemaNode::Record { fields, key, .. } = &schema else {
            panic!("expected record node");
        };
        assert_eq!(*key, Some(NodeKey(1)));

        let SchemaNode::String {
            offsets_key,
            content_key,
        } = &fields[0].1
        else {
            panic!("expected string node for name");
        };
        assert_eq!(*offsets_key, Some(NodeKey(2)));
        assert_eq!(*content_key, Some(NodeKey(3)));

        assert_eq!(fields[1].1.key(), Some(NodeKey(4)));

        let SchemaNode::List { element, key } = &fields[2].1 else {
            panic!("expected list node for refs");
        };
        assert_eq!(*key, Some(NodeKey(5)));
        assert_eq!(element.key(), Some(NodeKey(6)));
    }

    #[test]
    fn bytecode_array_ref_emits_fragments_in_physical_order() {
        let mut ctx = BuildContext::new();
        BytecodeSchemaBuilder::new(&mut ctx)
            .array_ref_schema()
            .unwrap();
        let program = ctx.finish();

        assert_eq!(program.len(), 2);
        let fragments = program.fragments();

        assert_eq!(fragments[0].key, NodeKey(1));
        assert_eq!(fragments[0].stage, Stage::Pre);
        assert_eq!(
            fragments[0].ops,
            vec![
                ExtractOp::Skip(10),
                ExtractOp::ReadString {
                    offsets: NodeKey(2),
                    content: NodeKey(3),
                },
                ExtractOp::ReadI32 { dst: NodeKey(4) },
                ExtractOp::Skip(6),
            ]
        );

        assert_eq!(fragments[1].key, NodeKey(1));
        assert_eq!(fragments[1].stage, Stage::Post);
        assert_eq!(
            fragments[1].ops,
            vec![ExtractOp::ReadI32Array {
                len_from: NodeKey(4),
                offsets: NodeKey(5),
                content: NodeKey(6),
            }]
        );
    }

    #[test]
    fn second_array_ref_in_same_pass_gets_base_plus_six() {
        let mut ctx = BuildContext::new();
        let mut builder = BytecodeSchemaBuilder::new(&mut ctx);

        let first = builder.array_ref_schema().unwrap();
        let second = builder.array_ref_schema().unwrap();

        assert_eq!(first.key(), Some(NodeKey(1)));
        assert_eq!(second.key(), Some(NodeKey(7)));
    }

    #[test]
    fn array_ref_build_leaves_no_prev_key_residue() {
        let mut ctx = BuildContext::new();
        BytecodeSchemaBuilder::new(&mut ctx)
            .array_ref_schema()
            .unwrap();
        assert_eq!(ctx.prev_key(), None);
    }

    #[test]
    fn array_ref_build_restores_enclosing_prev_key() {
        let mut ctx = BuildContext::new();
        ctx.set_prev_key(NodeKey(99));

        BytecodeSchemaBuilder::new(&mut ctx)
            .array_ref_schema()
            .unwrap();

        assert_eq!(ctx.prev_key(), Some(NodeKey(99)));
    }

    #[test]
    fn bytecode_scalar_ref_reserves_no_keys_and_emits_nothing() {
        let mut ctx = BuildContext::new();
        let schema = BytecodeSchemaBuilder::new(&mut ctx)
            .scalar_ref_schema()
            .unwrap();

        assert_eq!(schema.key(), None);
        assert_eq!(ctx.last_key(), 0);
        assert!(ctx.finish().is_empty());
    }

    #[test]
    fn traverse_finalizes_first_record_before_second_reserves_keys() {
        let mut ctx = BuildContext::new();
        let mut builder = BytecodeSchemaBuilder::new(&mut ctx);

        builder.array_ref_schema().unwrap();
        builder.array_ref_schema().unwrap();

        // The second build's traverse flushed the first record's fragments.
        assert_eq!(ctx.program().len(), 2);
        assert_eq!(ctx.finish().len(), 4);
    }
}
