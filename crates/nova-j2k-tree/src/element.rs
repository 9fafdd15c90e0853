//! The node catalog.
//!
//! Every node kind is a plain struct. Child links are private `NodeId` fields
//! (one per slot, `Vec<NodeId>` for list slots) so they can only change
//! through the slot API on [`Tree`](crate::Tree); flat attributes are public.
//! The `slots!` declarations below are the single source of truth for slot
//! order, shape and accepted category.

use nova_j2k_types::{ClassSymbol, FieldSymbol, JkType, LiteralType, MethodSymbol};
use smol_str::SmolStr;

use crate::error::ContractViolation;
use crate::operators::{Operator, Qualifier};
use crate::tree::NodeId;

/// Name of a child slot. The same name may be single in one kind and a list
/// in another; [`SlotDecl`] says which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Declarations,
    Name,
    TypeParameterList,
    ClassBody,
    AnnotationList,
    Type,
    Initializer,
    ReturnType,
    Parameters,
    Block,
    ThrowsList,
    Arguments,
    Annotations,
    UpperBounds,
    TypeParameters,
    TypeArguments,
    Expressions,
    Statements,
    Expression,
    Condition,
    Description,
    Updaters,
    Body,
    Cases,
    Label,
    Exception,
    ResourceDeclarations,
    TryBlock,
    FinallyBlock,
    CatchSections,
    Parameter,
    IndexExpression,
    Receiver,
    Selector,
    Left,
    Right,
    TypeArgumentList,
    Operands,
    Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotShape {
    Single,
    List,
}

/// Class of elements a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Any node.
    Element,
    Declaration,
    Expression,
    AssignableExpression,
    Statement,
    Block,
    NameIdentifier,
    TypeElement,
    Annotation,
    AnnotationList,
    Parameter,
    TypeParameter,
    TypeParameterList,
    TypeArgumentList,
    ExpressionList,
    ClassBody,
    SwitchCase,
    CatchSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDecl {
    pub slot: Slot,
    pub shape: SlotShape,
    pub category: Category,
}

impl SlotDecl {
    const fn single(slot: Slot, category: Category) -> Self {
        Self {
            slot,
            shape: SlotShape::Single,
            category,
        }
    }

    const fn list(slot: Slot, category: Category) -> Self {
        Self {
            slot,
            shape: SlotShape::List,
            category,
        }
    }
}

/// Borrowed view of one slot's occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRef<'a> {
    Single(NodeId),
    List(&'a [NodeId]),
}

impl<'a> SlotRef<'a> {
    #[must_use]
    pub fn shape(&self) -> SlotShape {
        match self {
            SlotRef::Single(_) => SlotShape::Single,
            SlotRef::List(_) => SlotShape::List,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        match self {
            SlotRef::Single(id) => std::slice::from_ref(id),
            SlotRef::List(ids) => ids,
        }
    }
}

pub(crate) enum SlotMut<'a> {
    Single(&'a mut NodeId),
    List(&'a mut Vec<NodeId>),
}

pub(crate) trait SlotField {
    fn as_slot_ref(&self) -> SlotRef<'_>;
    fn as_slot_mut(&mut self) -> SlotMut<'_>;
}

impl SlotField for NodeId {
    fn as_slot_ref(&self) -> SlotRef<'_> {
        SlotRef::Single(*self)
    }

    fn as_slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Single(self)
    }
}

impl SlotField for Vec<NodeId> {
    fn as_slot_ref(&self) -> SlotRef<'_> {
        SlotRef::List(self)
    }

    fn as_slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::List(self)
    }
}

pub(crate) trait HasSlots {
    const SLOTS: &'static [SlotDecl];

    fn slot_ref(&self, slot: Slot) -> Option<SlotRef<'_>>;
    fn slot_mut(&mut self, slot: Slot) -> Option<SlotMut<'_>>;
}

macro_rules! slot_getter {
    (single $field:ident) => {
        #[must_use]
        pub fn $field(&self) -> NodeId {
            self.$field
        }
    };
    (list $field:ident) => {
        #[must_use]
        pub fn $field(&self) -> &[NodeId] {
            &self.$field
        }
    };
}

macro_rules! slots {
    ($kind:ident { $($field:ident: $shape:ident $slot:ident($category:ident)),* $(,)? }) => {
        impl $kind {
            $(slot_getter!($shape $field);)*
        }

        impl HasSlots for $kind {
            const SLOTS: &'static [SlotDecl] = &[$(SlotDecl::$shape(Slot::$slot, Category::$category)),*];

            #[allow(unreachable_patterns)]
            fn slot_ref(&self, slot: Slot) -> Option<SlotRef<'_>> {
                match slot {
                    $(Slot::$slot => Some(SlotField::as_slot_ref(&self.$field)),)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns)]
            fn slot_mut(&mut self, slot: Slot) -> Option<SlotMut<'_>> {
                match slot {
                    $(Slot::$slot => Some(SlotField::as_slot_mut(&mut self.$field)),)*
                    _ => None,
                }
            }
        }
    };
}

/// Which surface syntax a node kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Produced by the Java front-end; must be lowered before printing.
    Java,
    /// Shared by both dialects.
    Common,
}

/// Typed access to one kind's struct inside an [`Element`].
pub trait ElementData: Sized + Into<Element> {
    const KIND: ElementKind;

    fn cast(element: &Element) -> Option<&Self>;
    fn cast_mut(element: &mut Element) -> Option<&mut Self>;
}

macro_rules! elements {
    ($($kind:ident: $dialect:ident [$($category:ident),*]),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ElementKind {
            $($kind,)*
        }

        impl ElementKind {
            pub const ALL: &'static [ElementKind] = &[$(ElementKind::$kind,)*];

            /// Declared slots, in traversal order.
            #[must_use]
            pub fn slots(self) -> &'static [SlotDecl] {
                match self {
                    $(ElementKind::$kind => <$kind as HasSlots>::SLOTS,)*
                }
            }

            #[must_use]
            pub const fn dialect(self) -> Dialect {
                match self {
                    $(ElementKind::$kind => Dialect::$dialect,)*
                }
            }

            /// Categories beyond [`Category::Element`], which every kind has.
            #[must_use]
            pub fn categories(self) -> &'static [Category] {
                match self {
                    $(ElementKind::$kind => &[$(Category::$category),*],)*
                }
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Element {
            $($kind($kind),)*
        }

        impl Element {
            #[must_use]
            pub fn kind(&self) -> ElementKind {
                match self {
                    $(Element::$kind(_) => ElementKind::$kind,)*
                }
            }

            pub(crate) fn slot_ref(&self, slot: Slot) -> Option<SlotRef<'_>> {
                match self {
                    $(Element::$kind(data) => data.slot_ref(slot),)*
                }
            }

            pub(crate) fn slot_mut(&mut self, slot: Slot) -> Option<SlotMut<'_>> {
                match self {
                    $(Element::$kind(data) => data.slot_mut(slot),)*
                }
            }
        }

        $(
            impl From<$kind> for Element {
                fn from(data: $kind) -> Self {
                    Element::$kind(data)
                }
            }

            impl ElementData for $kind {
                const KIND: ElementKind = ElementKind::$kind;

                fn cast(element: &Element) -> Option<&Self> {
                    match element {
                        Element::$kind(data) => Some(data),
                        _ => None,
                    }
                }

                fn cast_mut(element: &mut Element) -> Option<&mut Self> {
                    match element {
                        Element::$kind(data) => Some(data),
                        _ => None,
                    }
                }
            }
        )*
    };
}

elements! {
    File: Common [],
    Class: Common [Declaration],
    ClassBody: Common [ClassBody],
    EmptyClassBody: Common [ClassBody],
    Parameter: Common [Parameter, Declaration],
    LocalVariable: Common [Declaration],
    NameIdentifier: Common [NameIdentifier],
    TypeElement: Common [TypeElement],
    Annotation: Common [Annotation],
    AnnotationList: Common [AnnotationList],
    TypeParameter: Common [TypeParameter],
    TypeParameterList: Common [TypeParameterList],
    TypeArgumentList: Common [TypeArgumentList],
    ExpressionList: Common [ExpressionList],
    Block: Common [Block],
    BodyStub: Common [Block],

    EmptyStatement: Common [Statement],
    ExpressionStatement: Common [Statement],
    DeclarationStatement: Common [Statement],
    BlockStatement: Common [Statement],
    ReturnStatement: Common [Statement],

    StubExpression: Common [Expression],
    FieldAccessExpression: Common [Expression, AssignableExpression],
    ArrayAccessExpression: Common [Expression, AssignableExpression],
    QualifiedExpression: Common [Expression, AssignableExpression],
    ParenthesizedExpression: Common [Expression],
    BinaryExpression: Common [Expression],
    PrefixExpression: Common [Expression],
    PostfixExpression: Common [Expression],

    JavaField: Java [Declaration],
    JavaMethod: Java [Declaration],
    JavaMethodCallExpression: Java [Expression],
    JavaLiteralExpression: Java [Expression],
    JavaNewExpression: Java [Expression],
    JavaDefaultNewExpression: Java [Expression],
    JavaNewEmptyArray: Java [Expression],
    JavaNewArray: Java [Expression],
    JavaPolyadicExpression: Java [Expression],
    JavaAssignmentExpression: Java [Expression],
    JavaSwitchStatement: Java [Statement],
    JavaLabelSwitchCase: Java [SwitchCase],
    JavaDefaultSwitchCase: Java [SwitchCase],
    JavaTryStatement: Java [Statement],
    JavaTryCatchSection: Java [CatchSection],
    JavaForLoopStatement: Java [Statement],
    JavaThrowStatement: Java [Statement],
    JavaAssertStatement: Java [Statement],
}

impl ElementKind {
    #[must_use]
    pub fn is(self, category: Category) -> bool {
        category == Category::Element || self.categories().contains(&category)
    }

    #[must_use]
    pub fn is_java(self) -> bool {
        self.dialect() == Dialect::Java
    }

    /// Kinds that may carry a source origin.
    #[must_use]
    pub fn is_origin_owner(self) -> bool {
        self.is_java() || self == ElementKind::ReturnStatement
    }

    #[must_use]
    pub fn slot_decl(self, slot: Slot) -> Option<SlotDecl> {
        self.slots().iter().copied().find(|decl| decl.slot == slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
    PackagePrivate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Open,
    Final,
    Abstract,
    Override,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Mutable,
    Immutable,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraModifier {
    Static,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Const,
    Inner,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

// Structural kinds.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    declarations: Vec<NodeId>,
}

impl File {
    pub fn new(declarations: Vec<NodeId>) -> Self {
        Self { declarations }
    }
}

slots!(File { declarations: list Declarations(Declaration) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: NodeId,
    type_parameter_list: NodeId,
    class_body: NodeId,
    annotation_list: NodeId,
    pub class_kind: ClassKind,
    pub visibility: Visibility,
    pub modality: Modality,
    pub extra_modifiers: Vec<ExtraModifier>,
}

impl Class {
    /// A package-private, non-final class without extra modifiers.
    pub fn new(
        name: NodeId,
        type_parameter_list: NodeId,
        class_body: NodeId,
        annotation_list: NodeId,
        class_kind: ClassKind,
    ) -> Self {
        Self {
            name,
            type_parameter_list,
            class_body,
            annotation_list,
            class_kind,
            visibility: Visibility::PackagePrivate,
            modality: Modality::Open,
            extra_modifiers: Vec::new(),
        }
    }
}

slots!(Class {
    name: single Name(NameIdentifier),
    type_parameter_list: single TypeParameterList(TypeParameterList),
    class_body: single ClassBody(ClassBody),
    annotation_list: single AnnotationList(AnnotationList),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody {
    declarations: Vec<NodeId>,
}

impl ClassBody {
    pub fn new(declarations: Vec<NodeId>) -> Self {
        Self { declarations }
    }
}

slots!(ClassBody { declarations: list Declarations(Declaration) });

/// Stands in for an absent class body. Its declaration list is always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyClassBody {
    declarations: Vec<NodeId>,
}

impl EmptyClassBody {
    pub fn new() -> Self {
        Self::default()
    }
}

slots!(EmptyClassBody { declarations: list Declarations(Declaration) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    ty: NodeId,
    name: NodeId,
    annotation_list: NodeId,
    pub is_vararg: bool,
}

impl Parameter {
    pub fn new(ty: NodeId, name: NodeId, annotation_list: NodeId, is_vararg: bool) -> Self {
        Self {
            ty,
            name,
            annotation_list,
            is_vararg,
        }
    }
}

slots!(Parameter {
    ty: single Type(TypeElement),
    name: single Name(NameIdentifier),
    annotation_list: single AnnotationList(AnnotationList),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    ty: NodeId,
    name: NodeId,
    initializer: NodeId,
    pub mutability: Mutability,
}

impl LocalVariable {
    pub fn new(ty: NodeId, name: NodeId, initializer: NodeId, mutability: Mutability) -> Self {
        Self {
            ty,
            name,
            initializer,
            mutability,
        }
    }
}

slots!(LocalVariable {
    ty: single Type(TypeElement),
    name: single Name(NameIdentifier),
    initializer: single Initializer(Expression),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIdentifier {
    pub value: SmolStr,
}

impl NameIdentifier {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

slots!(NameIdentifier {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeElement {
    pub ty: JkType,
}

impl TypeElement {
    pub fn new(ty: JkType) -> Self {
        Self { ty }
    }
}

slots!(TypeElement {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub class_symbol: ClassSymbol,
    arguments: Vec<NodeId>,
}

impl Annotation {
    pub fn new(class_symbol: ClassSymbol, arguments: Vec<NodeId>) -> Self {
        Self {
            class_symbol,
            arguments,
        }
    }
}

slots!(Annotation { arguments: list Arguments(Expression) });

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationList {
    annotations: Vec<NodeId>,
}

impl AnnotationList {
    pub fn new(annotations: Vec<NodeId>) -> Self {
        Self { annotations }
    }
}

slots!(AnnotationList { annotations: list Annotations(Annotation) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    name: NodeId,
    upper_bounds: Vec<NodeId>,
}

impl TypeParameter {
    pub fn new(name: NodeId, upper_bounds: Vec<NodeId>) -> Self {
        Self { name, upper_bounds }
    }
}

slots!(TypeParameter {
    name: single Name(NameIdentifier),
    upper_bounds: list UpperBounds(TypeElement),
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeParameterList {
    type_parameters: Vec<NodeId>,
}

impl TypeParameterList {
    pub fn new(type_parameters: Vec<NodeId>) -> Self {
        Self { type_parameters }
    }
}

slots!(TypeParameterList { type_parameters: list TypeParameters(TypeParameter) });

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeArgumentList {
    type_arguments: Vec<NodeId>,
}

impl TypeArgumentList {
    pub fn new(type_arguments: Vec<NodeId>) -> Self {
        Self { type_arguments }
    }
}

slots!(TypeArgumentList { type_arguments: list TypeArguments(TypeElement) });

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionList {
    expressions: Vec<NodeId>,
}

impl ExpressionList {
    pub fn new(expressions: Vec<NodeId>) -> Self {
        Self { expressions }
    }
}

slots!(ExpressionList { expressions: list Expressions(Expression) });

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    statements: Vec<NodeId>,
}

impl Block {
    pub fn new(statements: Vec<NodeId>) -> Self {
        Self { statements }
    }
}

slots!(Block { statements: list Statements(Statement) });

/// Stands in for an absent block (abstract methods, missing `finally`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStub;

slots!(BodyStub {});

// Statements.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyStatement;

slots!(EmptyStatement {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    expression: NodeId,
}

impl ExpressionStatement {
    pub fn new(expression: NodeId) -> Self {
        Self { expression }
    }
}

slots!(ExpressionStatement { expression: single Expression(Expression) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationStatement {
    declarations: Vec<NodeId>,
}

impl DeclarationStatement {
    pub fn new(declarations: Vec<NodeId>) -> Self {
        Self { declarations }
    }
}

slots!(DeclarationStatement { declarations: list Declarations(Declaration) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    block: NodeId,
}

impl BlockStatement {
    pub fn new(block: NodeId) -> Self {
        Self { block }
    }
}

slots!(BlockStatement { block: single Block(Block) });

/// `return expr;`; a bare `return` holds a [`StubExpression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    expression: NodeId,
}

impl ReturnStatement {
    pub fn new(expression: NodeId) -> Self {
        Self { expression }
    }
}

slots!(ReturnStatement { expression: single Expression(Expression) });

// Expressions.

/// Stands in for an absent expression or initializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubExpression;

slots!(StubExpression {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessExpression {
    pub identifier: FieldSymbol,
}

impl FieldAccessExpression {
    pub fn new(identifier: FieldSymbol) -> Self {
        Self { identifier }
    }
}

slots!(FieldAccessExpression {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayAccessExpression {
    expression: NodeId,
    index_expression: NodeId,
}

impl ArrayAccessExpression {
    pub fn new(expression: NodeId, index_expression: NodeId) -> Self {
        Self {
            expression,
            index_expression,
        }
    }
}

slots!(ArrayAccessExpression {
    expression: single Expression(Expression),
    index_expression: single IndexExpression(Expression),
});

/// `receiver.selector`, or `receiver?.selector` once lowered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedExpression {
    receiver: NodeId,
    selector: NodeId,
    pub qualifier: Qualifier,
}

impl QualifiedExpression {
    pub fn new(receiver: NodeId, selector: NodeId, qualifier: Qualifier) -> Self {
        Self {
            receiver,
            selector,
            qualifier,
        }
    }
}

slots!(QualifiedExpression {
    receiver: single Receiver(Expression),
    selector: single Selector(Expression),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedExpression {
    expression: NodeId,
}

impl ParenthesizedExpression {
    pub fn new(expression: NodeId) -> Self {
        Self { expression }
    }
}

slots!(ParenthesizedExpression { expression: single Expression(Expression) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    left: NodeId,
    right: NodeId,
    pub operator: Operator,
}

impl BinaryExpression {
    pub fn new(left: NodeId, right: NodeId, operator: Operator) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }
}

slots!(BinaryExpression {
    left: single Left(Expression),
    right: single Right(Expression),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    expression: NodeId,
    pub operator: Operator,
}

impl PrefixExpression {
    pub fn new(expression: NodeId, operator: Operator) -> Self {
        Self {
            expression,
            operator,
        }
    }
}

slots!(PrefixExpression { expression: single Expression(Expression) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixExpression {
    expression: NodeId,
    pub operator: Operator,
}

impl PostfixExpression {
    pub fn new(expression: NodeId, operator: Operator) -> Self {
        Self {
            expression,
            operator,
        }
    }
}

slots!(PostfixExpression { expression: single Expression(Expression) });

// Java-flavored kinds.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaField {
    ty: NodeId,
    name: NodeId,
    initializer: NodeId,
    annotation_list: NodeId,
    pub extra_modifiers: Vec<ExtraModifier>,
    pub visibility: Visibility,
    pub modality: Modality,
    pub mutability: Mutability,
}

impl JavaField {
    pub fn new(ty: NodeId, name: NodeId, initializer: NodeId, annotation_list: NodeId) -> Self {
        Self {
            ty,
            name,
            initializer,
            annotation_list,
            extra_modifiers: Vec::new(),
            visibility: Visibility::PackagePrivate,
            modality: Modality::Final,
            mutability: Mutability::Unknown,
        }
    }
}

slots!(JavaField {
    ty: single Type(TypeElement),
    name: single Name(NameIdentifier),
    initializer: single Initializer(Expression),
    annotation_list: single AnnotationList(AnnotationList),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    return_type: NodeId,
    name: NodeId,
    parameters: Vec<NodeId>,
    block: NodeId,
    type_parameter_list: NodeId,
    annotation_list: NodeId,
    throws_list: Vec<NodeId>,
    pub extra_modifiers: Vec<ExtraModifier>,
    pub visibility: Visibility,
    pub modality: Modality,
}

impl JavaMethod {
    pub fn new(
        return_type: NodeId,
        name: NodeId,
        parameters: Vec<NodeId>,
        block: NodeId,
        type_parameter_list: NodeId,
        annotation_list: NodeId,
        throws_list: Vec<NodeId>,
    ) -> Self {
        Self {
            return_type,
            name,
            parameters,
            block,
            type_parameter_list,
            annotation_list,
            throws_list,
            extra_modifiers: Vec::new(),
            visibility: Visibility::PackagePrivate,
            modality: Modality::Open,
        }
    }
}

slots!(JavaMethod {
    return_type: single ReturnType(TypeElement),
    name: single Name(NameIdentifier),
    parameters: list Parameters(Parameter),
    block: single Block(Block),
    type_parameter_list: single TypeParameterList(TypeParameterList),
    annotation_list: single AnnotationList(AnnotationList),
    throws_list: list ThrowsList(TypeElement),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethodCallExpression {
    pub identifier: MethodSymbol,
    arguments: NodeId,
    type_argument_list: NodeId,
}

impl JavaMethodCallExpression {
    pub fn new(identifier: MethodSymbol, arguments: NodeId, type_argument_list: NodeId) -> Self {
        Self {
            identifier,
            arguments,
            type_argument_list,
        }
    }
}

slots!(JavaMethodCallExpression {
    arguments: single Arguments(ExpressionList),
    type_argument_list: single TypeArgumentList(TypeArgumentList),
});

/// A Java literal. Only the kinds in [`LiteralType::JAVA`] are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaLiteralExpression {
    literal: String,
    ty: LiteralType,
}

impl JavaLiteralExpression {
    pub fn new(literal: impl Into<String>, ty: LiteralType) -> Result<Self, ContractViolation> {
        if !ty.is_java_literal() {
            return Err(ContractViolation::JavaLiteralKind { ty });
        }
        Ok(Self {
            literal: literal.into(),
            ty,
        })
    }

    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[must_use]
    pub fn ty(&self) -> LiteralType {
        self.ty
    }
}

slots!(JavaLiteralExpression {});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaNewExpression {
    pub class_symbol: ClassSymbol,
    arguments: NodeId,
    type_argument_list: NodeId,
    class_body: NodeId,
}

impl JavaNewExpression {
    pub fn new(
        class_symbol: ClassSymbol,
        arguments: NodeId,
        type_argument_list: NodeId,
        class_body: NodeId,
    ) -> Self {
        Self {
            class_symbol,
            arguments,
            type_argument_list,
            class_body,
        }
    }
}

slots!(JavaNewExpression {
    arguments: single Arguments(ExpressionList),
    type_argument_list: single TypeArgumentList(TypeArgumentList),
    class_body: single ClassBody(ClassBody),
});

/// `new Foo()` calling the implicit default constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaDefaultNewExpression {
    pub class_symbol: ClassSymbol,
}

impl JavaDefaultNewExpression {
    pub fn new(class_symbol: ClassSymbol) -> Self {
        Self { class_symbol }
    }
}

slots!(JavaDefaultNewExpression {});

/// `new T[n][m]`; the initializer holds the dimension expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaNewEmptyArray {
    ty: NodeId,
    initializer: Vec<NodeId>,
}

impl JavaNewEmptyArray {
    pub fn new(ty: NodeId, initializer: Vec<NodeId>) -> Self {
        Self { ty, initializer }
    }
}

slots!(JavaNewEmptyArray {
    ty: single Type(TypeElement),
    initializer: list Initializer(Expression),
});

/// `new T[] { a, b }`; the initializer holds the elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaNewArray {
    ty: NodeId,
    initializer: Vec<NodeId>,
}

impl JavaNewArray {
    pub fn new(ty: NodeId, initializer: Vec<NodeId>) -> Self {
        Self { ty, initializer }
    }
}

slots!(JavaNewArray {
    ty: single Type(TypeElement),
    initializer: list Initializer(Expression),
});

/// `a + b - c`: N operands separated by N - 1 operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaPolyadicExpression {
    operands: Vec<NodeId>,
    pub tokens: Vec<Operator>,
}

impl JavaPolyadicExpression {
    pub fn new(operands: Vec<NodeId>, tokens: Vec<Operator>) -> Self {
        Self { operands, tokens }
    }

    /// The operator written right before `operand`. `None` for the first
    /// operand and for nodes that are not operands of this expression.
    #[must_use]
    pub fn token_before_operand(&self, operand: NodeId) -> Option<&Operator> {
        let index = self.operands.iter().position(|&id| id == operand)?;
        if index < 1 {
            return None;
        }
        self.tokens.get(index - 1)
    }
}

slots!(JavaPolyadicExpression { operands: list Operands(Expression) });

/// `target op= value`.
///
/// Whether the assignment is compound is decided once, from the operator it
/// was built with. Translating `&=` yields the plain `and` operator, so the
/// flag is what keeps the compound form visible to later passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaAssignmentExpression {
    field: NodeId,
    expression: NodeId,
    pub operator: Operator,
    compound: bool,
}

impl JavaAssignmentExpression {
    pub fn new(field: NodeId, expression: NodeId, operator: Operator) -> Self {
        Self {
            field,
            expression,
            compound: operator.is_compound_assignment(),
            operator,
        }
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.compound
    }

    /// Rewrites the operator to its Kotlin form.
    pub fn translate_operator(&mut self) -> Result<(), nova_j2k_types::Unimplemented> {
        self.operator = self.operator.to_kotlin()?;
        Ok(())
    }
}

slots!(JavaAssignmentExpression {
    field: single Field(AssignableExpression),
    expression: single Expression(Expression),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSwitchStatement {
    expression: NodeId,
    cases: Vec<NodeId>,
}

impl JavaSwitchStatement {
    pub fn new(expression: NodeId, cases: Vec<NodeId>) -> Self {
        Self { expression, cases }
    }
}

slots!(JavaSwitchStatement {
    expression: single Expression(Expression),
    cases: list Cases(SwitchCase),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaLabelSwitchCase {
    label: NodeId,
    statements: Vec<NodeId>,
}

impl JavaLabelSwitchCase {
    pub fn new(label: NodeId, statements: Vec<NodeId>) -> Self {
        Self { label, statements }
    }
}

slots!(JavaLabelSwitchCase {
    label: single Label(Expression),
    statements: list Statements(Statement),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaDefaultSwitchCase {
    statements: Vec<NodeId>,
}

impl JavaDefaultSwitchCase {
    pub fn new(statements: Vec<NodeId>) -> Self {
        Self { statements }
    }
}

slots!(JavaDefaultSwitchCase { statements: list Statements(Statement) });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTryStatement {
    resource_declarations: Vec<NodeId>,
    try_block: NodeId,
    finally_block: NodeId,
    catch_sections: Vec<NodeId>,
}

impl JavaTryStatement {
    pub fn new(
        resource_declarations: Vec<NodeId>,
        try_block: NodeId,
        finally_block: NodeId,
        catch_sections: Vec<NodeId>,
    ) -> Self {
        Self {
            resource_declarations,
            try_block,
            finally_block,
            catch_sections,
        }
    }
}

slots!(JavaTryStatement {
    resource_declarations: list ResourceDeclarations(Declaration),
    try_block: single TryBlock(Block),
    finally_block: single FinallyBlock(Block),
    catch_sections: list CatchSections(CatchSection),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTryCatchSection {
    parameter: NodeId,
    block: NodeId,
}

impl JavaTryCatchSection {
    pub fn new(parameter: NodeId, block: NodeId) -> Self {
        Self { parameter, block }
    }
}

slots!(JavaTryCatchSection {
    parameter: single Parameter(Parameter),
    block: single Block(Block),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaForLoopStatement {
    initializer: NodeId,
    condition: NodeId,
    updaters: Vec<NodeId>,
    body: NodeId,
}

impl JavaForLoopStatement {
    pub fn new(initializer: NodeId, condition: NodeId, updaters: Vec<NodeId>, body: NodeId) -> Self {
        Self {
            initializer,
            condition,
            updaters,
            body,
        }
    }
}

slots!(JavaForLoopStatement {
    initializer: single Initializer(Statement),
    condition: single Condition(Expression),
    updaters: list Updaters(Statement),
    body: single Body(Statement),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaThrowStatement {
    exception: NodeId,
}

impl JavaThrowStatement {
    pub fn new(exception: NodeId) -> Self {
        Self { exception }
    }
}

slots!(JavaThrowStatement { exception: single Exception(Expression) });

/// `assert condition : description;`; a missing description is a
/// [`StubExpression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaAssertStatement {
    condition: NodeId,
    description: NodeId,
}

impl JavaAssertStatement {
    pub fn new(condition: NodeId, description: NodeId) -> Self {
        Self {
            condition,
            description,
        }
    }
}

slots!(JavaAssertStatement {
    condition: single Condition(Expression),
    description: single Description(Expression),
});
