//! Shorthands the front-end uses to build common shapes.
//!
//! They fill absent parts with sentinel nodes (empty lists, [`BodyStub`],
//! [`StubExpression`], [`EmptyClassBody`]) and take declaration defaults from
//! the tree's [`ConverterSettings`](crate::ConverterSettings).

use nova_j2k_types::{ClassSymbol, JkType, LiteralType, MethodSymbol};
use smol_str::SmolStr;

use crate::element::{
    AnnotationList, BodyStub, Class, ClassBody, ClassKind, EmptyClassBody, ExpressionList,
    JavaField, JavaLiteralExpression, JavaMethod, JavaMethodCallExpression, JavaNewExpression,
    Modality, NameIdentifier, StubExpression, TypeArgumentList, TypeElement, TypeParameterList,
};
use crate::error::Result;
use crate::tree::{NodeId, Tree};

impl Tree {
    pub fn name_identifier(&mut self, value: impl Into<SmolStr>) -> Result<NodeId> {
        self.alloc(NameIdentifier::new(value))
    }

    pub fn type_element(&mut self, ty: JkType) -> Result<NodeId> {
        self.alloc(TypeElement::new(ty))
    }

    pub fn stub_expression(&mut self) -> Result<NodeId> {
        self.alloc(StubExpression)
    }

    pub fn body_stub(&mut self) -> Result<NodeId> {
        self.alloc(BodyStub)
    }

    pub fn empty_class_body(&mut self) -> Result<NodeId> {
        self.alloc(EmptyClassBody::new())
    }

    pub fn empty_annotation_list(&mut self) -> Result<NodeId> {
        self.alloc(AnnotationList::default())
    }

    pub fn empty_type_parameter_list(&mut self) -> Result<NodeId> {
        self.alloc(TypeParameterList::default())
    }

    pub fn empty_type_argument_list(&mut self) -> Result<NodeId> {
        self.alloc(TypeArgumentList::default())
    }

    /// Fails with a contract violation for `BOOLEAN` and `NULL`.
    pub fn java_literal(&mut self, literal: impl Into<String>, ty: LiteralType) -> Result<NodeId> {
        let literal = JavaLiteralExpression::new(literal, ty)?;
        self.alloc(literal)
    }

    /// An array of `element` with the configured default nullability.
    #[must_use]
    pub fn array_type(&self, element: JkType) -> JkType {
        JkType::array_of(element, self.settings().default_nullability())
    }

    #[must_use]
    pub fn class_type(&self, symbol: ClassSymbol, parameters: Vec<JkType>) -> JkType {
        JkType::class(symbol, parameters, self.settings().default_nullability())
    }

    /// `receiver.method<type_arguments>(arguments)`; no type arguments means an
    /// empty list.
    pub fn method_call(
        &mut self,
        symbol: MethodSymbol,
        arguments: Vec<NodeId>,
        type_arguments: Option<NodeId>,
    ) -> Result<NodeId> {
        let arguments = self.alloc(ExpressionList::new(arguments))?;
        let type_arguments = match type_arguments {
            Some(list) => list,
            None => self.empty_type_argument_list()?,
        };
        self.alloc(JavaMethodCallExpression::new(symbol, arguments, type_arguments))
    }

    /// `new C(arguments) { body }`; without a body the expression gets an
    /// [`EmptyClassBody`].
    pub fn new_instance(
        &mut self,
        class_symbol: ClassSymbol,
        arguments: Vec<NodeId>,
        type_arguments: Option<NodeId>,
        class_body: Option<NodeId>,
    ) -> Result<NodeId> {
        let arguments = self.alloc(ExpressionList::new(arguments))?;
        let type_arguments = match type_arguments {
            Some(list) => list,
            None => self.empty_type_argument_list()?,
        };
        let class_body = match class_body {
            Some(body) => body,
            None => self.empty_class_body()?,
        };
        self.alloc(JavaNewExpression::new(
            class_symbol,
            arguments,
            type_arguments,
            class_body,
        ))
    }

    /// A field with no annotations whose visibility and modality come from
    /// the settings. A missing initializer becomes a [`StubExpression`].
    pub fn java_field(
        &mut self,
        ty: JkType,
        name: impl Into<SmolStr>,
        initializer: Option<NodeId>,
    ) -> Result<NodeId> {
        let ty = self.type_element(ty)?;
        let name = self.name_identifier(name)?;
        let initializer = match initializer {
            Some(expr) => expr,
            None => self.stub_expression()?,
        };
        let annotations = self.empty_annotation_list()?;

        let mut field = JavaField::new(ty, name, initializer, annotations);
        field.visibility = self.settings().default_visibility();
        field.modality = self.settings().default_modality();
        self.alloc(field)
    }

    /// A method without type parameters, annotations or throws clause. A
    /// missing body becomes a [`BodyStub`] and makes the method abstract.
    pub fn java_method(
        &mut self,
        return_type: JkType,
        name: impl Into<SmolStr>,
        parameters: Vec<NodeId>,
        body: Option<NodeId>,
    ) -> Result<NodeId> {
        let return_type = self.type_element(return_type)?;
        let name = self.name_identifier(name)?;
        let (block, modality) = match body {
            Some(block) => (block, self.settings().default_modality()),
            None => (self.body_stub()?, Modality::Abstract),
        };
        let type_parameters = self.empty_type_parameter_list()?;
        let annotations = self.empty_annotation_list()?;

        let mut method = JavaMethod::new(
            return_type,
            name,
            parameters,
            block,
            type_parameters,
            annotations,
            Vec::new(),
        );
        method.visibility = self.settings().default_visibility();
        method.modality = modality;
        self.alloc(method)
    }

    pub fn class_declaration(
        &mut self,
        name: impl Into<SmolStr>,
        class_kind: ClassKind,
        declarations: Vec<NodeId>,
    ) -> Result<NodeId> {
        let name = self.name_identifier(name)?;
        let type_parameters = self.empty_type_parameter_list()?;
        let body = self.alloc(ClassBody::new(declarations))?;
        let annotations = self.empty_annotation_list()?;

        let mut class = Class::new(name, type_parameters, body, annotations, class_kind);
        class.visibility = self.settings().default_visibility();
        class.modality = self.settings().default_modality();
        self.alloc(class)
    }
}
