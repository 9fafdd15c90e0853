//! Handles for declarations resolved outside of this crate.
//!
//! The resolution engine hands these out; the tree only stores and compares
//! them.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassSymbol {
    fq_name: SmolStr,
}

impl ClassSymbol {
    pub fn new(fq_name: impl Into<SmolStr>) -> Self {
        Self {
            fq_name: fq_name.into(),
        }
    }

    #[must_use]
    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.fq_name.rsplit('.').next().unwrap_or(&self.fq_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSymbol {
    owner: Option<ClassSymbol>,
    name: SmolStr,
}

impl MethodSymbol {
    pub fn new(owner: Option<ClassSymbol>, name: impl Into<SmolStr>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<&ClassSymbol> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSymbol {
    owner: Option<ClassSymbol>,
    name: SmolStr,
}

impl FieldSymbol {
    pub fn new(owner: Option<ClassSymbol>, name: impl Into<SmolStr>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<&ClassSymbol> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
