use serde::{Deserialize, Serialize};

/// Kind of a literal expression.
///
/// `Boolean` and `Null` exist for the Kotlin side of the tree; Java literal
/// expressions only accept the kinds in [`LiteralType::JAVA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiteralType {
    String,
    Char,
    Boolean,
    Null,
    Int,
    Long,
    Float,
    Double,
}

impl LiteralType {
    pub const JAVA: [LiteralType; 6] = [
        LiteralType::String,
        LiteralType::Char,
        LiteralType::Int,
        LiteralType::Long,
        LiteralType::Float,
        LiteralType::Double,
    ];

    #[must_use]
    pub fn is_java_literal(self) -> bool {
        Self::JAVA.contains(&self)
    }
}
