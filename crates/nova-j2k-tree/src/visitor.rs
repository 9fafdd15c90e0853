//! Double dispatch over the node catalog.
//!
//! Passes implement [`Visitor`] (read-only) or [`VisitorMut`] and override the
//! `visit_*` methods for the kinds they care about; everything else falls
//! back to `visit_element`. [`Tree::accept`] picks the method with one
//! exhaustive `match` over [`ElementKind`].

use crate::element::ElementKind;
use crate::error::Result;
use crate::tree::{NodeId, Tree};

macro_rules! visitors {
    ($($kind:ident => $method:ident),* $(,)?) => {
        pub trait Visitor<D = ()> {
            type Output;

            /// Fallback for every kind without a dedicated override.
            fn visit_element(&mut self, tree: &Tree, id: NodeId, data: D) -> Self::Output;

            $(
                fn $method(&mut self, tree: &Tree, id: NodeId, data: D) -> Self::Output {
                    self.visit_element(tree, id, data)
                }
            )*
        }

        pub trait VisitorMut<D = ()> {
            type Output;

            fn visit_element(&mut self, tree: &mut Tree, id: NodeId, data: D) -> Self::Output;

            $(
                fn $method(&mut self, tree: &mut Tree, id: NodeId, data: D) -> Self::Output {
                    self.visit_element(tree, id, data)
                }
            )*
        }

        fn dispatch<V, D>(kind: ElementKind, visitor: &mut V, tree: &Tree, id: NodeId, data: D) -> V::Output
        where
            V: Visitor<D> + ?Sized,
        {
            match kind {
                $(ElementKind::$kind => visitor.$method(tree, id, data),)*
            }
        }

        fn dispatch_mut<V, D>(
            kind: ElementKind,
            visitor: &mut V,
            tree: &mut Tree,
            id: NodeId,
            data: D,
        ) -> V::Output
        where
            V: VisitorMut<D> + ?Sized,
        {
            match kind {
                $(ElementKind::$kind => visitor.$method(tree, id, data),)*
            }
        }
    };
}

visitors! {
    File => visit_file,
    Class => visit_class,
    ClassBody => visit_class_body,
    EmptyClassBody => visit_empty_class_body,
    Parameter => visit_parameter,
    LocalVariable => visit_local_variable,
    NameIdentifier => visit_name_identifier,
    TypeElement => visit_type_element,
    Annotation => visit_annotation,
    AnnotationList => visit_annotation_list,
    TypeParameter => visit_type_parameter,
    TypeParameterList => visit_type_parameter_list,
    TypeArgumentList => visit_type_argument_list,
    ExpressionList => visit_expression_list,
    Block => visit_block,
    BodyStub => visit_body_stub,
    EmptyStatement => visit_empty_statement,
    ExpressionStatement => visit_expression_statement,
    DeclarationStatement => visit_declaration_statement,
    BlockStatement => visit_block_statement,
    ReturnStatement => visit_return_statement,
    StubExpression => visit_stub_expression,
    FieldAccessExpression => visit_field_access_expression,
    ArrayAccessExpression => visit_array_access_expression,
    QualifiedExpression => visit_qualified_expression,
    ParenthesizedExpression => visit_parenthesized_expression,
    BinaryExpression => visit_binary_expression,
    PrefixExpression => visit_prefix_expression,
    PostfixExpression => visit_postfix_expression,
    JavaField => visit_java_field,
    JavaMethod => visit_java_method,
    JavaMethodCallExpression => visit_java_method_call_expression,
    JavaLiteralExpression => visit_java_literal_expression,
    JavaNewExpression => visit_java_new_expression,
    JavaDefaultNewExpression => visit_java_default_new_expression,
    JavaNewEmptyArray => visit_java_new_empty_array,
    JavaNewArray => visit_java_new_array,
    JavaPolyadicExpression => visit_java_polyadic_expression,
    JavaAssignmentExpression => visit_java_assignment_expression,
    JavaSwitchStatement => visit_java_switch_statement,
    JavaLabelSwitchCase => visit_java_label_switch_case,
    JavaDefaultSwitchCase => visit_java_default_switch_case,
    JavaTryStatement => visit_java_try_statement,
    JavaTryCatchSection => visit_java_try_catch_section,
    JavaForLoopStatement => visit_java_for_loop_statement,
    JavaThrowStatement => visit_java_throw_statement,
    JavaAssertStatement => visit_java_assert_statement,
}

impl Tree {
    /// Calls the `visit_*` method matching the kind of `id`.
    pub fn accept<V, D>(&self, id: NodeId, visitor: &mut V, data: D) -> Result<V::Output>
    where
        V: Visitor<D> + ?Sized,
    {
        let kind = self.kind(id)?;
        Ok(dispatch(kind, visitor, self, id, data))
    }

    pub fn accept_mut<V, D>(&mut self, id: NodeId, visitor: &mut V, data: D) -> Result<V::Output>
    where
        V: VisitorMut<D> + ?Sized,
    {
        let kind = self.kind(id)?;
        Ok(dispatch_mut(kind, visitor, self, id, data))
    }
}

/// Visits every child of `id` in slot order.
pub fn walk_children<V, D>(visitor: &mut V, tree: &Tree, id: NodeId, data: D) -> Result<Vec<V::Output>>
where
    V: Visitor<D> + ?Sized,
    D: Clone,
{
    let mut out = Vec::new();
    for child in tree.child_nodes(id)? {
        out.push(tree.accept(child, visitor, data.clone())?);
    }
    Ok(out)
}

/// Like [`walk_children`], for passes that rewrite the tree. The child list
/// is captured before the first visit, so nodes swapped in by the visitor
/// are not visited.
pub fn walk_children_mut<V, D>(
    visitor: &mut V,
    tree: &mut Tree,
    id: NodeId,
    data: D,
) -> Result<Vec<V::Output>>
where
    V: VisitorMut<D> + ?Sized,
    D: Clone,
{
    let mut out = Vec::new();
    for child in tree.child_nodes(id)? {
        out.push(tree.accept_mut(child, visitor, data.clone())?);
    }
    Ok(out)
}
