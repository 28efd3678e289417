//! # Build Context
//!
//! Mutable state shared by reference through one bytecode-mode schema-build
//! pass: the monotonic node-key counter, the "previous key" pointer that
//! links a list node's content node to its container, and the extraction
//! program accumulated so far.
//!
//! ## Key Numbering
//!
//! A fresh context has issued no keys. `reserve_keys(n)` returns the base
//! of a contiguous block; the block's usable keys are `base+1 ..= base+n`.
//! Allocation is strictly monotonic within a pass and blocks never overlap,
//! so downstream bytecode can address nodes by fixed offsets from the base.
//!
//! ## Record Scopes
//!
//! The prev-key pointer is per-record state. `enter_record` clears it and
//! returns a scope token holding whatever the enclosing record had set;
//! `exit_record` restores that value. A record build that nests inside
//! another therefore leaves no residual pointer state for its siblings.
//!
//! ## Pending Fragments and Traversal
//!
//! Fragments are emitted into a pending list and folded into the program by
//! the next `traverse` (or by `finish`). A builder calls `traverse` before
//! reserving keys so any not-yet-finalized upstream record is finalized
//! first and key numbering stays consistent across the whole pass.
//!
//! ## Concurrency
//!
//! One pass owns the context via `&mut`; the borrow checker enforces the
//! one-pass-per-context contract. Misuse of scopes is a programming error
//! and is asserted, not surfaced as `Result`.

use crate::schema::node::NodeKey;
use crate::schema::program::{ExtractionProgram, Fragment};

#[derive(Debug, Default)]
pub struct BuildContext {
    next_key: u32,
    prev_key: Option<NodeKey>,
    open_scopes: usize,
    pending: Vec<Fragment>,
    program: ExtractionProgram,
}

/// Token returned by `enter_record`; holds the enclosing record's prev-key
/// so `exit_record` can restore it.
#[derive(Debug)]
#[must_use = "a record scope must be closed with exit_record"]
pub struct RecordScope {
    saved_prev_key: Option<NodeKey>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest key issued so far; 0 if none.
    pub fn last_key(&self) -> u32 {
        self.next_key
    }

    /// Reserves a contiguous block of `count` keys and returns its base.
    /// The reserved keys are `base+1 ..= base+count`.
    pub fn reserve_keys(&mut self, count: u32) -> NodeKey {
        assert!(count > 0, "key reservation must be non-empty");
        let base = NodeKey(self.next_key);
        self.next_key += count;
        base
    }

    pub fn set_prev_key(&mut self, key: NodeKey) {
        self.prev_key = Some(key);
    }

    /// Consumes the prev-key pointer; the caller building a leaf node takes
    /// the key its container linked for it.
    pub fn take_prev_key(&mut self) -> Option<NodeKey> {
        self.prev_key.take()
    }

    pub fn prev_key(&self) -> Option<NodeKey> {
        self.prev_key
    }

    pub fn enter_record(&mut self) -> RecordScope {
        self.open_scopes += 1;
        RecordScope {
            saved_prev_key: self.prev_key.take(),
        }
    }

    pub fn exit_record(&mut self, scope: RecordScope) {
        assert!(self.open_scopes > 0, "exit_record without matching enter_record");
        self.open_scopes -= 1;
        self.prev_key = scope.saved_prev_key;
    }

    /// Emits a fragment into the pending list. It reaches the program at
    /// the next `traverse` or at `finish`.
    pub fn emit(&mut self, fragment: Fragment) {
        self.pending.push(fragment);
    }

    /// Finalizes pending upstream fragments into the program. Called before
    /// reserving a new key block so the whole pass numbers nodes in one
    /// consistent sweep.
    pub fn traverse(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.program.extend(pending);
    }

    pub fn program(&self) -> &ExtractionProgram {
        &self.program
    }

    /// Flushes any pending fragments and returns the completed program.
    pub fn finish(mut self) -> ExtractionProgram {
        assert!(self.open_scopes == 0, "finish with an open record scope");
        self.traverse();
        self.program
    }
}
