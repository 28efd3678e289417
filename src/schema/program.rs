//! # Extraction Program Fragments
//!
//! Bytecode-mode schema builds emit a program for the downstream extraction
//! machine alongside the schema tree. The program is a flat sequence of
//! fragments; each fragment belongs to one record node and runs either
//! before (`Pre`) or after (`Post`) the record's field subtrees, so the
//! machine reads bytes in the record's physical layout order rather than
//! schema-declaration order.
//!
//! Operations reference schema nodes by node key. The crate only emits
//! programs; executing them is the extraction machine's concern.

use crate::schema::node::NodeKey;

/// One read-plan step, in physical byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOp {
    /// Skip a reserved/ignored region.
    Skip(usize),
    /// Read a length-prefixed string; byte offsets land in `offsets`,
    /// character data in `content`.
    ReadString { offsets: NodeKey, content: NodeKey },
    /// Read one big-endian `i32` into `dst`.
    ReadI32 { dst: NodeKey },
    /// Read as many big-endian `i32` values as the count previously stored
    /// in `len_from`; element offsets land in `offsets`, values in
    /// `content`.
    ReadI32Array {
        len_from: NodeKey,
        offsets: NodeKey,
        content: NodeKey,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pre,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Key of the record node this fragment belongs to.
    pub key: NodeKey,
    pub stage: Stage,
    pub ops: Vec<ExtractOp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionProgram {
    fragments: Vec<Fragment>,
}

impl ExtractionProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        self.fragments.extend(fragments);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments belonging to one record node, in emission order.
    pub fn fragments_for(&self, key: NodeKey) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(move |f| f.key == key)
    }
}
