use serde::{Deserialize, Serialize};

use crate::{ClassSymbol, Unimplemented};

/// Nullability attached to a type value (not to the declaration using it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nullability {
    Nullable,
    NotNull,
    /// Nothing is known; the printer decides.
    Default,
}

/// The eight JVM primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Float,
    Long,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Char,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Float,
        PrimitiveType::Long,
        PrimitiveType::Double,
    ];

    /// Java keyword spelling.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Long => "long",
            PrimitiveType::Double => "double",
        }
    }

    /// JVM field descriptor character.
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Char => 'C',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Short => 'S',
            PrimitiveType::Int => 'I',
            PrimitiveType::Float => 'F',
            PrimitiveType::Long => 'J',
            PrimitiveType::Double => 'D',
        }
    }

    /// Kotlin class the primitive maps to.
    #[must_use]
    pub const fn kotlin_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Char => "Char",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Int",
            PrimitiveType::Float => "Float",
            PrimitiveType::Long => "Long",
            PrimitiveType::Double => "Double",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.keyword() == keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayType {
    pub element: Box<JkType>,
    pub nullability: Nullability,
}

/// Alternatives of a multi-catch parameter, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisjunctionType {
    pub disjunctions: Vec<JkType>,
    pub nullability: Nullability,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    pub symbol: ClassSymbol,
    pub parameters: Vec<JkType>,
    pub nullability: Nullability,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JkType {
    Primitive(PrimitiveType),
    Void,
    Array(ArrayType),
    Disjunction(DisjunctionType),
    Class(ClassType),
}

impl JkType {
    #[must_use]
    pub fn array_of(element: JkType, nullability: Nullability) -> Self {
        JkType::Array(ArrayType {
            element: Box::new(element),
            nullability,
        })
    }

    #[must_use]
    pub fn disjunction(disjunctions: Vec<JkType>, nullability: Nullability) -> Self {
        JkType::Disjunction(DisjunctionType {
            disjunctions,
            nullability,
        })
    }

    #[must_use]
    pub fn class(symbol: ClassSymbol, parameters: Vec<JkType>, nullability: Nullability) -> Self {
        JkType::Class(ClassType {
            symbol,
            parameters,
            nullability,
        })
    }

    #[must_use]
    pub fn nullability(&self) -> Nullability {
        match self {
            JkType::Primitive(_) | JkType::Void => Nullability::NotNull,
            JkType::Array(ty) => ty.nullability,
            JkType::Disjunction(ty) => ty.nullability,
            JkType::Class(ty) => ty.nullability,
        }
    }

    /// Primitives and `void` can never be null; updating them is a no-op.
    pub fn set_nullability(&mut self, nullability: Nullability) {
        match self {
            JkType::Primitive(_) | JkType::Void => {}
            JkType::Array(ty) => ty.nullability = nullability,
            JkType::Disjunction(ty) => ty.nullability = nullability,
            JkType::Class(ty) => ty.nullability = nullability,
        }
    }

    #[must_use]
    pub fn with_nullability(mut self, nullability: Nullability) -> Self {
        self.set_nullability(nullability);
        self
    }

    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, JkType::Primitive(_))
    }
}

impl From<PrimitiveType> for JkType {
    fn from(ty: PrimitiveType) -> Self {
        JkType::Primitive(ty)
    }
}

/// Resolves a Java primitive-type keyword (including `void`).
pub fn type_for_keyword(keyword: &str) -> Result<JkType, Unimplemented> {
    if keyword == "void" {
        return Ok(JkType::Void);
    }
    PrimitiveType::from_keyword(keyword)
        .map(JkType::Primitive)
        .ok_or_else(|| Unimplemented::new("primitive type keyword", keyword))
}
