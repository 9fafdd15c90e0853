//! Where in the Java source a node came from.
//!
//! Only Java-flavored kinds and `return` statements record an origin; the
//! table lives beside the arena so nodes without one pay nothing.

use nova_j2k_types::Span;

use crate::error::{ContractViolation, Result};
use crate::tree::{NodeId, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceOrigin {
    pub span: Span,
}

impl SourceOrigin {
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Tree {
    /// Records where `id` came from, replacing any previous origin.
    pub fn set_origin(&mut self, id: NodeId, origin: SourceOrigin) -> Result<Option<SourceOrigin>> {
        let kind = self.kind(id)?;
        if !kind.is_origin_owner() {
            return Err(ContractViolation::NotOriginOwner { kind }.into());
        }
        Ok(self.origins.insert(id, origin))
    }

    pub fn origin(&self, id: NodeId) -> Result<Option<SourceOrigin>> {
        self.kind(id)?;
        Ok(self.origins.get(&id).copied())
    }

    pub fn clear_origin(&mut self, id: NodeId) -> Result<Option<SourceOrigin>> {
        self.kind(id)?;
        Ok(self.origins.remove(&id))
    }
}
