//! # Schema Nodes
//!
//! This module defines the tagged schema tree produced by the columnar
//! builders. A node describes shape only; bytecode-mode builds additionally
//! annotate nodes with the node keys the downstream extraction machine uses
//! to address them. `structural_eq` compares two trees while ignoring that
//! metadata, so a native-mode and a bytecode-mode build of the same record
//! type compare equal.
//!
//! ## Node Kinds
//!
//! | Kind | Describes | Key metadata |
//! |------|-----------|--------------|
//! | `Scalar` | one fixed-width primitive | content key |
//! | `String` | length-prefixed character data | offsets key + content key |
//! | `List` | variable-count run of one element shape | offsets key |
//! | `Record` | named, ordered fields | record key |

use std::fmt;

/// Identifier assigned to a schema node so the extraction machine can
/// address it when materializing columnar output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(pub u32);

impl NodeKey {
    pub fn offset(self, n: u32) -> NodeKey {
        NodeKey(self.0 + n)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    UInt16,
    UInt32,
    Int32,
    Char,
}

impl PrimitiveType {
    pub fn width(&self) -> usize {
        match self {
            PrimitiveType::UInt16 => 2,
            PrimitiveType::UInt32 => 4,
            PrimitiveType::Int32 => 4,
            PrimitiveType::Char => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Scalar {
        prim: PrimitiveType,
        key: Option<NodeKey>,
    },
    String {
        offsets_key: Option<NodeKey>,
        content_key: Option<NodeKey>,
    },
    List {
        element: Box<SchemaNode>,
        key: Option<NodeKey>,
    },
    Record {
        name: String,
        fields: Vec<(String, SchemaNode)>,
        key: Option<NodeKey>,
    },
}

impl SchemaNode {
    pub fn scalar(prim: PrimitiveType) -> Self {
        SchemaNode::Scalar { prim, key: None }
    }

    pub fn string() -> Self {
        SchemaNode::String {
            offsets_key: None,
            content_key: None,
        }
    }

    pub fn list(element: SchemaNode) -> Self {
        SchemaNode::List {
            element: Box::new(element),
            key: None,
        }
    }

    pub fn record(name: impl Into<String>, fields: Vec<(String, SchemaNode)>) -> Self {
        SchemaNode::Record {
            name: name.into(),
            fields,
            key: None,
        }
    }

    /// The node key assigned by a bytecode-mode build, if any. For `String`
    /// nodes this is the offsets key.
    pub fn key(&self) -> Option<NodeKey> {
        match self {
            SchemaNode::Scalar { key, .. } => *key,
            SchemaNode::String { offsets_key, .. } => *offsets_key,
            SchemaNode::List { key, .. } => *key,
            SchemaNode::Record { key, .. } => *key,
        }
    }

    /// Compares shape only: kinds, primitive types, record names, field
    /// names and field order, recursively. Node-key metadata is ignored.
    pub fn structural_eq(&self, other: &SchemaNode) -> bool {
        match (self, other) {
            (SchemaNode::Scalar { prim: a, .. }, SchemaNode::Scalar { prim: b, .. }) => a == b,
            (SchemaNode::String { .. }, SchemaNode::String { .. }) => true,
            (SchemaNode::List { element: a, .. }, SchemaNode::List { element: b, .. }) => {
                a.structural_eq(b)
            }
            (
                SchemaNode::Record {
                    name: a_name,
                    fields: a_fields,
                    ..
                },
                SchemaNode::Record {
                    name: b_name,
                    fields: b_fields,
                    ..
                },
            ) => {
                a_name == b_name
                    && a_fields.len() == b_fields.len()
                    && a_fields
                        .iter()
                        .zip(b_fields.iter())
                        .all(|((an, av), (bn, bv))| an == bn && av.structural_eq(bv))
            }
            _ => false,
        }
    }
}
