use nova_j2k_types::{LiteralType, Unimplemented};

use crate::element::{Category, ElementKind, Slot, SlotShape};
use crate::tree::NodeId;

pub type Result<T> = std::result::Result<T, J2kError>;

/// Every failure surfaced by the conversion tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum J2kError {
    #[error(transparent)]
    Unimplemented(#[from] Unimplemented),

    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
}

impl J2kError {
    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, J2kError::Unimplemented(_))
    }

    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, J2kError::Contract(_))
    }
}

/// An invariant of the tree would be broken. Raised eagerly, before anything
/// is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("literal kind {ty:?} is not valid for a Java literal expression")]
    JavaLiteralKind { ty: LiteralType },

    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("{kind:?} has no slot {slot:?}")]
    NoSuchSlot { kind: ElementKind, slot: Slot },

    #[error("slot {slot:?} of {kind:?} is not a {expected:?} slot")]
    SlotShape {
        kind: ElementKind,
        slot: Slot,
        expected: SlotShape,
    },

    #[error("{child:?} ({child_kind:?}) cannot occupy slot {slot:?} of {kind:?}, which holds {expected:?}")]
    SlotCategory {
        kind: ElementKind,
        slot: Slot,
        expected: Category,
        child: NodeId,
        child_kind: ElementKind,
    },

    #[error("{node:?} is already attached to {parent:?}")]
    AlreadyAttached { node: NodeId, parent: NodeId },

    #[error("attaching {node:?} under {parent:?} would create a cycle")]
    Cycle { node: NodeId, parent: NodeId },

    #[error("{node:?} appears more than once among the children of a node")]
    DuplicateChild { node: NodeId },

    #[error("{node:?} occupies single slot {slot:?} of {parent:?}; replace it instead of detaching")]
    DetachFromSingleSlot {
        node: NodeId,
        parent: NodeId,
        slot: Slot,
    },

    #[error("the declaration list of an empty class body is immutable")]
    EmptyClassBodyDeclarations,

    #[error("{node:?} is a {actual:?}, expected {expected:?}")]
    UnexpectedKind {
        node: NodeId,
        actual: ElementKind,
        expected: ElementKind,
    },

    #[error("the child links of {node:?} were reassigned outside of the slot API")]
    ChildrenReassigned { node: NodeId },

    #[error("{kind:?} does not carry source origin metadata")]
    NotOriginOwner { kind: ElementKind },

    #[error("the tree already holds {len} nodes and cannot address another")]
    TreeFull { len: usize },

    #[error("index {index} is out of bounds for slot {slot:?} of length {len}")]
    IndexOutOfBounds { slot: Slot, index: usize, len: usize },
}
