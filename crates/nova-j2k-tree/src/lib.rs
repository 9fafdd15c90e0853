//! Mutable intermediate representation for Java-to-Kotlin conversion.
//!
//! The Java front-end allocates Java-flavored nodes into a [`Tree`]; lowering
//! passes walk it with a [`Visitor`]/[`VisitorMut`] and rewrite subtrees in
//! place through the slot API until [`Tree::java_flavored_nodes`] comes back
//! empty and the printer can take over.
//!
//! Tracing targets: `nova.j2k.tree` (slot mutations), `nova.j2k.operators`
//! (unhandled tokens), `nova.j2k.settings` (ignored settings keys).

pub mod element;
mod error;
mod factory;
pub mod operators;
mod origin;
mod settings;
mod tree;
mod visitor;

pub use crate::element::{
    Category, ClassKind, Dialect, Element, ElementData, ElementKind, ExtraModifier,
    Modality, Mutability, Slot, SlotDecl, SlotRef, SlotShape, Visibility,
};
pub use crate::error::{ContractViolation, J2kError, Result};
pub use crate::operators::{
    JavaTokenType, KtOperatorToken, KtTokenType, Operator, OperatorToken, Qualifier, WordOperator,
};
pub use crate::origin::SourceOrigin;
pub use crate::settings::{ConverterSettings, SettingsError};
pub use crate::tree::{NodeId, Tree};
pub use crate::visitor::{walk_children, walk_children_mut, Visitor, VisitorMut};

pub use nova_j2k_types as types;
