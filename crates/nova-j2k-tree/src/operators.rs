//! Operator tokens of both dialects, their precedence and the Java → Kotlin
//! token translation.
//!
//! Precedence numbers mirror the Java grammar (lower binds tighter). Kotlin
//! has no symbolic bitwise or shift operators, so those become infix
//! functions ("word" operators) that live in the simple-name band.

use nova_j2k_types::Unimplemented;
use std::fmt;

/// Tokens the Java front-end can hand us, named after the lexer's element
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JavaTokenType {
    Eq,
    EqEq,
    Ne,
    AndAnd,
    OrOr,
    Gt,
    Lt,
    Ge,
    Le,
    Excl,
    Tilde,
    Plus,
    Minus,
    Asterisk,
    Div,
    Perc,
    PlusEq,
    MinusEq,
    AsteriskEq,
    DivEq,
    PercEq,
    GtGt,
    LtLt,
    GtGtGt,
    Xor,
    And,
    Or,
    GtGtEq,
    LtLtEq,
    GtGtGtEq,
    XorEq,
    AndEq,
    OrEq,
    PlusPlus,
    MinusMinus,

    // Punctuation; never an operator.
    Quest,
    Colon,
    Dot,
    Comma,
    Semicolon,
    Arrow,
    DoubleColon,
    Ellipsis,
    At,
}

impl JavaTokenType {
    /// The grammar's operation token set.
    pub const OPERATION_SET: &'static [JavaTokenType] = &[
        JavaTokenType::Eq,
        JavaTokenType::AsteriskEq,
        JavaTokenType::DivEq,
        JavaTokenType::PercEq,
        JavaTokenType::PlusEq,
        JavaTokenType::MinusEq,
        JavaTokenType::LtLtEq,
        JavaTokenType::GtGtEq,
        JavaTokenType::GtGtGtEq,
        JavaTokenType::AndEq,
        JavaTokenType::OrEq,
        JavaTokenType::XorEq,
        JavaTokenType::OrOr,
        JavaTokenType::AndAnd,
        JavaTokenType::Or,
        JavaTokenType::Xor,
        JavaTokenType::And,
        JavaTokenType::EqEq,
        JavaTokenType::Ne,
        JavaTokenType::Lt,
        JavaTokenType::Gt,
        JavaTokenType::Le,
        JavaTokenType::Ge,
        JavaTokenType::LtLt,
        JavaTokenType::GtGt,
        JavaTokenType::GtGtGt,
        JavaTokenType::Plus,
        JavaTokenType::Minus,
        JavaTokenType::Asterisk,
        JavaTokenType::Div,
        JavaTokenType::Perc,
        JavaTokenType::PlusPlus,
        JavaTokenType::MinusMinus,
        JavaTokenType::Excl,
        JavaTokenType::Tilde,
    ];

    #[must_use]
    pub fn is_operation(self) -> bool {
        Self::OPERATION_SET.contains(&self)
    }

    /// Raw Java spelling, used when reporting unhandled tokens.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            JavaTokenType::Eq => "=",
            JavaTokenType::EqEq => "==",
            JavaTokenType::Ne => "!=",
            JavaTokenType::AndAnd => "&&",
            JavaTokenType::OrOr => "||",
            JavaTokenType::Gt => ">",
            JavaTokenType::Lt => "<",
            JavaTokenType::Ge => ">=",
            JavaTokenType::Le => "<=",
            JavaTokenType::Excl => "!",
            JavaTokenType::Tilde => "~",
            JavaTokenType::Plus => "+",
            JavaTokenType::Minus => "-",
            JavaTokenType::Asterisk => "*",
            JavaTokenType::Div => "/",
            JavaTokenType::Perc => "%",
            JavaTokenType::PlusEq => "+=",
            JavaTokenType::MinusEq => "-=",
            JavaTokenType::AsteriskEq => "*=",
            JavaTokenType::DivEq => "/=",
            JavaTokenType::PercEq => "%=",
            JavaTokenType::GtGt => ">>",
            JavaTokenType::LtLt => "<<",
            JavaTokenType::GtGtGt => ">>>",
            JavaTokenType::Xor => "^",
            JavaTokenType::And => "&",
            JavaTokenType::Or => "|",
            JavaTokenType::GtGtEq => ">>=",
            JavaTokenType::LtLtEq => "<<=",
            JavaTokenType::GtGtGtEq => ">>>=",
            JavaTokenType::XorEq => "^=",
            JavaTokenType::AndEq => "&=",
            JavaTokenType::OrEq => "|=",
            JavaTokenType::PlusPlus => "++",
            JavaTokenType::MinusMinus => "--",
            JavaTokenType::Quest => "?",
            JavaTokenType::Colon => ":",
            JavaTokenType::Dot => ".",
            JavaTokenType::Comma => ",",
            JavaTokenType::Semicolon => ";",
            JavaTokenType::Arrow => "->",
            JavaTokenType::DoubleColon => "::",
            JavaTokenType::Ellipsis => "...",
            JavaTokenType::At => "@",
        }
    }

    /// The binary operator a compound assignment applies (`&=` → `&`).
    #[must_use]
    pub const fn compound_base(self) -> Option<JavaTokenType> {
        let base = match self {
            JavaTokenType::PlusEq => JavaTokenType::Plus,
            JavaTokenType::MinusEq => JavaTokenType::Minus,
            JavaTokenType::AsteriskEq => JavaTokenType::Asterisk,
            JavaTokenType::DivEq => JavaTokenType::Div,
            JavaTokenType::PercEq => JavaTokenType::Perc,
            JavaTokenType::GtGtEq => JavaTokenType::GtGt,
            JavaTokenType::LtLtEq => JavaTokenType::LtLt,
            JavaTokenType::GtGtGtEq => JavaTokenType::GtGtGt,
            JavaTokenType::XorEq => JavaTokenType::Xor,
            JavaTokenType::AndEq => JavaTokenType::And,
            JavaTokenType::OrEq => JavaTokenType::Or,
            _ => return None,
        };
        Some(base)
    }

    #[must_use]
    pub const fn is_compound_assignment(self) -> bool {
        self.compound_base().is_some()
    }

    fn unimplemented(self) -> Unimplemented {
        tracing::debug!(
            target: "nova.j2k.operators",
            token = self.spelling(),
            "unhandled Java operator token"
        );
        Unimplemented::new("Java operator token", self.spelling())
    }
}

impl fmt::Display for JavaTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Kotlin tokens that keep a symbolic spelling after translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KtTokenType {
    Div,
    Minus,
    AndAnd,
    OrOr,
    Plus,
    Mul,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Perc,
    Eq,
    EqEq,
    ExclEq,
    PlusEq,
    MinusEq,
    MultEq,
    DivEq,
    PercEq,
    PlusPlus,
    MinusMinus,
    Excl,
    Elvis,
    EqEqEq,
    ExclEqEqEq,
}

impl KtTokenType {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            KtTokenType::Div => "/",
            KtTokenType::Minus => "-",
            KtTokenType::AndAnd => "&&",
            KtTokenType::OrOr => "||",
            KtTokenType::Plus => "+",
            KtTokenType::Mul => "*",
            KtTokenType::Gt => ">",
            KtTokenType::GtEq => ">=",
            KtTokenType::Lt => "<",
            KtTokenType::LtEq => "<=",
            KtTokenType::Perc => "%",
            KtTokenType::Eq => "=",
            KtTokenType::EqEq => "==",
            KtTokenType::ExclEq => "!=",
            KtTokenType::PlusEq => "+=",
            KtTokenType::MinusEq => "-=",
            KtTokenType::MultEq => "*=",
            KtTokenType::DivEq => "/=",
            KtTokenType::PercEq => "%=",
            KtTokenType::PlusPlus => "++",
            KtTokenType::MinusMinus => "--",
            KtTokenType::Excl => "!",
            KtTokenType::Elvis => "?:",
            KtTokenType::EqEqEq => "===",
            KtTokenType::ExclEqEqEq => "!==",
        }
    }

    #[must_use]
    pub const fn is_compound_assignment(self) -> bool {
        matches!(
            self,
            KtTokenType::PlusEq
                | KtTokenType::MinusEq
                | KtTokenType::MultEq
                | KtTokenType::DivEq
                | KtTokenType::PercEq
        )
    }
}

/// Kotlin infix functions that stand in for Java's bitwise and shift
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordOperator {
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Ushr,
}

impl WordOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            WordOperator::And => "and",
            WordOperator::Or => "or",
            WordOperator::Xor => "xor",
            WordOperator::Shl => "shl",
            WordOperator::Shr => "shr",
            WordOperator::Ushr => "ushr",
        }
    }
}

/// Separator between the receiver and selector of a qualified expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qualifier {
    /// Java member access, `a.b`.
    JavaDot,
    KotlinDot,
    /// Kotlin safe call, `a?.b`.
    KotlinSafeAccess,
}

impl Qualifier {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Qualifier::JavaDot | Qualifier::KotlinDot => ".",
            Qualifier::KotlinSafeAccess => "?.",
        }
    }

    #[must_use]
    pub const fn is_java(self) -> bool {
        matches!(self, Qualifier::JavaDot)
    }

    /// Java `.` becomes Kotlin `.`; Kotlin qualifiers are returned unchanged.
    #[must_use]
    pub const fn to_kotlin(self) -> Self {
        match self {
            Qualifier::JavaDot => Qualifier::KotlinDot,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KtOperatorToken {
    SingleValue(KtTokenType),
    Word(WordOperator),
}

impl KtOperatorToken {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            KtOperatorToken::SingleValue(token) => token.text(),
            KtOperatorToken::Word(word) => word.text(),
        }
    }
}

/// Spelling-independent identity of an operator of either dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorToken {
    Java(JavaTokenType),
    Kotlin(KtOperatorToken),
}

impl OperatorToken {
    #[must_use]
    pub fn is_java(self) -> bool {
        matches!(self, OperatorToken::Java(_))
    }
}

impl From<JavaTokenType> for OperatorToken {
    fn from(token: JavaTokenType) -> Self {
        OperatorToken::Java(token)
    }
}

impl From<KtOperatorToken> for OperatorToken {
    fn from(token: KtOperatorToken) -> Self {
        OperatorToken::Kotlin(token)
    }
}

impl From<KtTokenType> for OperatorToken {
    fn from(token: KtTokenType) -> Self {
        OperatorToken::Kotlin(KtOperatorToken::SingleValue(token))
    }
}

impl From<WordOperator> for OperatorToken {
    fn from(word: WordOperator) -> Self {
        OperatorToken::Kotlin(KtOperatorToken::Word(word))
    }
}

pub const MULTIPLICATIVE_PRECEDENCE: u8 = 3;
pub const ADDITIVE_PRECEDENCE: u8 = 4;
/// Infix function calls and everything without a dedicated band.
pub const SIMPLE_NAME_PRECEDENCE: u8 = 6;
pub const SHIFT_PRECEDENCE: u8 = 7;
pub const RELATIONAL_PRECEDENCE: u8 = 9;
pub const EQUALITY_PRECEDENCE: u8 = 10;
pub const LOGICAL_AND_PRECEDENCE: u8 = 11;
pub const LOGICAL_OR_PRECEDENCE: u8 = 12;

pub fn precedence_of(token: impl Into<OperatorToken>) -> Result<u8, Unimplemented> {
    let precedence = match token.into() {
        OperatorToken::Java(token) => {
            if !token.is_operation() {
                return Err(token.unimplemented());
            }
            match token {
                JavaTokenType::Asterisk | JavaTokenType::Div | JavaTokenType::Perc => {
                    MULTIPLICATIVE_PRECEDENCE
                }
                JavaTokenType::Plus | JavaTokenType::Minus => ADDITIVE_PRECEDENCE,
                JavaTokenType::GtGtGt | JavaTokenType::GtGt | JavaTokenType::LtLt => {
                    SHIFT_PRECEDENCE
                }
                JavaTokenType::Gt | JavaTokenType::Lt | JavaTokenType::Ge | JavaTokenType::Le => {
                    RELATIONAL_PRECEDENCE
                }
                JavaTokenType::EqEq | JavaTokenType::Ne => EQUALITY_PRECEDENCE,
                JavaTokenType::AndAnd => LOGICAL_AND_PRECEDENCE,
                JavaTokenType::OrOr => LOGICAL_OR_PRECEDENCE,
                _ => SIMPLE_NAME_PRECEDENCE,
            }
        }
        OperatorToken::Kotlin(KtOperatorToken::SingleValue(token)) => match token {
            KtTokenType::Mul | KtTokenType::Div | KtTokenType::Perc => MULTIPLICATIVE_PRECEDENCE,
            KtTokenType::Plus | KtTokenType::Minus => ADDITIVE_PRECEDENCE,
            KtTokenType::Elvis => SHIFT_PRECEDENCE,
            KtTokenType::Gt | KtTokenType::Lt | KtTokenType::GtEq | KtTokenType::LtEq => {
                RELATIONAL_PRECEDENCE
            }
            KtTokenType::EqEq
            | KtTokenType::ExclEq
            | KtTokenType::EqEqEq
            | KtTokenType::ExclEqEqEq => EQUALITY_PRECEDENCE,
            KtTokenType::AndAnd => LOGICAL_AND_PRECEDENCE,
            KtTokenType::OrOr => LOGICAL_OR_PRECEDENCE,
            _ => SIMPLE_NAME_PRECEDENCE,
        },
        OperatorToken::Kotlin(KtOperatorToken::Word(_)) => SIMPLE_NAME_PRECEDENCE,
    };
    Ok(precedence)
}

/// Text the printer emits for `token`. Java bitwise and shift operators are
/// already shown in their Kotlin word form.
pub fn display_text_of(token: impl Into<OperatorToken>) -> Result<&'static str, Unimplemented> {
    let token = match token.into() {
        OperatorToken::Kotlin(token) => return Ok(token.text()),
        OperatorToken::Java(token) => token,
    };
    let text = match token {
        JavaTokenType::Eq
        | JavaTokenType::EqEq
        | JavaTokenType::Ne
        | JavaTokenType::AndAnd
        | JavaTokenType::OrOr
        | JavaTokenType::Gt
        | JavaTokenType::Lt
        | JavaTokenType::Ge
        | JavaTokenType::Le
        | JavaTokenType::Excl
        | JavaTokenType::Plus
        | JavaTokenType::Minus
        | JavaTokenType::Asterisk
        | JavaTokenType::Div
        | JavaTokenType::Perc
        | JavaTokenType::PlusEq
        | JavaTokenType::MinusEq
        | JavaTokenType::AsteriskEq
        | JavaTokenType::DivEq
        | JavaTokenType::PercEq
        | JavaTokenType::PlusPlus
        | JavaTokenType::MinusMinus => token.spelling(),
        JavaTokenType::GtGt | JavaTokenType::GtGtEq => WordOperator::Shr.text(),
        JavaTokenType::LtLt | JavaTokenType::LtLtEq => WordOperator::Shl.text(),
        JavaTokenType::Xor | JavaTokenType::XorEq => WordOperator::Xor.text(),
        JavaTokenType::And | JavaTokenType::AndEq => WordOperator::And.text(),
        JavaTokenType::Or | JavaTokenType::OrEq => WordOperator::Or.text(),
        JavaTokenType::GtGtGt | JavaTokenType::GtGtGtEq => WordOperator::Ushr.text(),
        _ => return Err(token.unimplemented()),
    };
    Ok(text)
}

/// Java → Kotlin token translation.
///
/// Compound bitwise and shift assignments map to the plain word operator
/// (`&=` → `and`); the assignment node keeps track of the compound form.
pub fn translate(token: JavaTokenType) -> Result<KtOperatorToken, Unimplemented> {
    use KtOperatorToken::{SingleValue, Word};

    let translated = match token {
        JavaTokenType::Div => SingleValue(KtTokenType::Div),
        JavaTokenType::Minus => SingleValue(KtTokenType::Minus),
        JavaTokenType::AndAnd => SingleValue(KtTokenType::AndAnd),
        JavaTokenType::OrOr => SingleValue(KtTokenType::OrOr),
        JavaTokenType::Plus => SingleValue(KtTokenType::Plus),
        JavaTokenType::Asterisk => SingleValue(KtTokenType::Mul),
        JavaTokenType::Gt => SingleValue(KtTokenType::Gt),
        JavaTokenType::Ge => SingleValue(KtTokenType::GtEq),
        JavaTokenType::Lt => SingleValue(KtTokenType::Lt),
        JavaTokenType::Le => SingleValue(KtTokenType::LtEq),
        JavaTokenType::Perc => SingleValue(KtTokenType::Perc),

        JavaTokenType::Eq => SingleValue(KtTokenType::Eq),
        JavaTokenType::EqEq => SingleValue(KtTokenType::EqEq),
        JavaTokenType::Ne => SingleValue(KtTokenType::ExclEq),
        JavaTokenType::PlusEq => SingleValue(KtTokenType::PlusEq),
        JavaTokenType::MinusEq => SingleValue(KtTokenType::MinusEq),
        JavaTokenType::AsteriskEq => SingleValue(KtTokenType::MultEq),
        JavaTokenType::DivEq => SingleValue(KtTokenType::DivEq),
        JavaTokenType::PercEq => SingleValue(KtTokenType::PercEq),
        JavaTokenType::PlusPlus => SingleValue(KtTokenType::PlusPlus),
        JavaTokenType::MinusMinus => SingleValue(KtTokenType::MinusMinus),
        JavaTokenType::Excl => SingleValue(KtTokenType::Excl),

        JavaTokenType::And | JavaTokenType::AndEq => Word(WordOperator::And),
        JavaTokenType::Or | JavaTokenType::OrEq => Word(WordOperator::Or),
        JavaTokenType::Xor | JavaTokenType::XorEq => Word(WordOperator::Xor),
        JavaTokenType::GtGtGt | JavaTokenType::GtGtGtEq => Word(WordOperator::Ushr),
        JavaTokenType::GtGt | JavaTokenType::GtGtEq => Word(WordOperator::Shr),
        JavaTokenType::LtLt | JavaTokenType::LtLtEq => Word(WordOperator::Shl),

        _ => return Err(token.unimplemented()),
    };
    Ok(translated)
}

/// An operator value: token identity plus its precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    token: OperatorToken,
    precedence: u8,
}

impl Operator {
    /// Fails for tokens outside the Java operation set.
    pub fn new(token: impl Into<OperatorToken>) -> Result<Self, Unimplemented> {
        let token = token.into();
        Ok(Self {
            token,
            precedence: precedence_of(token)?,
        })
    }

    pub fn java(token: JavaTokenType) -> Result<Self, Unimplemented> {
        Self::new(token)
    }

    #[must_use]
    pub fn kotlin(token: impl Into<KtOperatorToken>) -> Self {
        let token = OperatorToken::Kotlin(token.into());
        // Every Kotlin token has a precedence.
        let precedence = precedence_of(token).unwrap_or(SIMPLE_NAME_PRECEDENCE);
        Self { token, precedence }
    }

    #[must_use]
    pub fn token(&self) -> OperatorToken {
        self.token
    }

    #[must_use]
    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn text(&self) -> Result<&'static str, Unimplemented> {
        display_text_of(self.token)
    }

    #[must_use]
    pub fn is_java(&self) -> bool {
        self.token.is_java()
    }

    #[must_use]
    pub fn is_compound_assignment(&self) -> bool {
        match self.token {
            OperatorToken::Java(token) => token.is_compound_assignment(),
            OperatorToken::Kotlin(KtOperatorToken::SingleValue(token)) => {
                token.is_compound_assignment()
            }
            OperatorToken::Kotlin(KtOperatorToken::Word(_)) => false,
        }
    }

    /// Kotlin form of this operator; Kotlin operators are returned unchanged.
    pub fn to_kotlin(&self) -> Result<Self, Unimplemented> {
        match self.token {
            OperatorToken::Java(token) => Ok(Self::kotlin(translate(token)?)),
            OperatorToken::Kotlin(_) => Ok(*self),
        }
    }
}

impl From<KtTokenType> for KtOperatorToken {
    fn from(token: KtTokenType) -> Self {
        KtOperatorToken::SingleValue(token)
    }
}

impl From<WordOperator> for KtOperatorToken {
    fn from(word: WordOperator) -> Self {
        KtOperatorToken::Word(word)
    }
}
