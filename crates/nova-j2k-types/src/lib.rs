//! Leaf value model shared by the Java-to-Kotlin conversion tree.
//!
//! Everything in this crate is an immutable (or copy-on-write) value: types,
//! literal kinds, symbol handles and spans. The mutable tree lives in
//! `nova-j2k-tree`.

use serde::{Deserialize, Serialize};
use std::fmt;

mod literal;
mod symbol;
mod ty;

pub use crate::literal::LiteralType;
pub use crate::symbol::{ClassSymbol, FieldSymbol, MethodSymbol};
pub use crate::ty::{
    type_for_keyword, ArrayType, ClassType, DisjunctionType, JkType, Nullability, PrimitiveType,
};

/// A byte-span into the Java source the tree was built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{})", self.start, self.end)
    }
}

/// Raised when an input falls outside a closed mapping (an operator token, a
/// keyword, a node kind).
///
/// Always fatal to the current translation step; callers decide whether to
/// fall back to an unlowered form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not implemented: {what} `{text}`")]
pub struct Unimplemented {
    /// What kind of input was being mapped (e.g. `"operator token"`).
    pub what: &'static str,
    /// Textual identity of the unrecognized input.
    pub text: String,
}

impl Unimplemented {
    pub fn new(what: &'static str, text: impl Into<String>) -> Self {
        Self {
            what,
            text: text.into(),
        }
    }
}
