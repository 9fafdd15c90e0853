use nova_j2k_tree::element::{
    BinaryExpression, Block, BlockStatement, DeclarationStatement, ExpressionStatement,
    FieldAccessExpression, JavaDefaultSwitchCase, JavaForLoopStatement, JavaLabelSwitchCase,
    JavaPolyadicExpression, JavaSwitchStatement, JavaTryCatchSection, JavaTryStatement,
    LocalVariable, Parameter, PostfixExpression, QualifiedExpression, ReturnStatement,
    TypeElement,
};
use nova_j2k_tree::types::{
    type_for_keyword, ClassSymbol, FieldSymbol, JkType, LiteralType, Nullability, PrimitiveType,
    Span,
};
use nova_j2k_tree::{
    Category, ContractViolation, Dialect, ElementKind, J2kError, JavaTokenType, Mutability,
    Operator, Qualifier, Slot, SlotShape, SourceOrigin, Tree, WordOperator,
};
use pretty_assertions::assert_eq;

#[test]
fn java_literals_accept_only_java_kinds() {
    let mut tree = Tree::new();
    for ty in LiteralType::JAVA {
        let id = tree.java_literal("0", ty).unwrap();
        assert_eq!(tree.kind(id).unwrap(), ElementKind::JavaLiteralExpression);
    }
    for ty in [LiteralType::Boolean, LiteralType::Null] {
        assert_eq!(
            tree.java_literal("x", ty).unwrap_err(),
            J2kError::Contract(ContractViolation::JavaLiteralKind { ty })
        );
    }
}

#[test]
fn polyadic_operators_line_up_with_operands() {
    let mut tree = Tree::new();
    let [a, b, c, stranger] =
        ["1", "2", "3", "4"].map(|text| tree.java_literal(text, LiteralType::Int).unwrap());
    let t1 = Operator::java(JavaTokenType::Plus).unwrap();
    let t2 = Operator::java(JavaTokenType::Asterisk).unwrap();
    let expr = tree
        .alloc(JavaPolyadicExpression::new(vec![a, b, c], vec![t1, t2]))
        .unwrap();

    let data = tree.get::<JavaPolyadicExpression>(expr).unwrap();
    assert_eq!(data.token_before_operand(a), None);
    assert_eq!(data.token_before_operand(b), Some(&t1));
    assert_eq!(data.token_before_operand(c), Some(&t2));
    assert_eq!(data.token_before_operand(stranger), None);
}

#[test]
fn void_type_elements_stay_not_null() {
    let mut tree = Tree::new();
    let void = tree.type_element(type_for_keyword("void").unwrap()).unwrap();

    tree.update::<TypeElement, _>(void, |element| {
        element.ty.set_nullability(Nullability::Nullable)
    })
    .unwrap();

    let ty = &tree.get::<TypeElement>(void).unwrap().ty;
    assert_eq!(ty, &JkType::Void);
    assert_eq!(ty.nullability(), Nullability::NotNull);
}

#[test]
fn kinds_report_dialect_and_categories() {
    assert_eq!(ElementKind::JavaSwitchStatement.dialect(), Dialect::Java);
    assert_eq!(ElementKind::BinaryExpression.dialect(), Dialect::Common);
    assert!(ElementKind::JavaLabelSwitchCase.is(Category::SwitchCase));
    assert!(!ElementKind::JavaLabelSwitchCase.is(Category::Statement));
    assert!(ElementKind::FieldAccessExpression.is(Category::AssignableExpression));

    let mut java_kinds = 0;
    for &kind in ElementKind::ALL {
        assert_eq!(kind.is_origin_owner(), kind.is_java() || kind == ElementKind::ReturnStatement);
        if kind.is_java() {
            java_kinds += 1;
        }
    }
    assert_eq!(java_kinds, 18);
}

#[test]
fn switch_cases_are_checked() {
    let mut tree = Tree::new();
    let subject = tree.alloc(FieldAccessExpression::new(FieldSymbol::new(None, "mode"))).unwrap();
    let label = tree.java_literal("1", LiteralType::Int).unwrap();
    let body = tree.stub_expression().unwrap();
    let body = tree.alloc(ExpressionStatement::new(body)).unwrap();
    let labelled = tree.alloc(JavaLabelSwitchCase::new(label, vec![body])).unwrap();
    let default = tree.alloc(JavaDefaultSwitchCase::new(vec![])).unwrap();
    let stray = tree.alloc(Block::default()).unwrap();

    let err = tree
        .alloc(JavaSwitchStatement::new(subject, vec![labelled, stray]))
        .unwrap_err();
    assert!(matches!(
        err,
        J2kError::Contract(ContractViolation::SlotCategory {
            expected: Category::SwitchCase,
            ..
        })
    ));

    let switch = tree
        .alloc(JavaSwitchStatement::new(subject, vec![labelled, default]))
        .unwrap();
    assert_eq!(
        tree.children(switch, Slot::Cases).unwrap(),
        &[labelled, default]
    );
    assert_eq!(tree.child(labelled, Slot::Label).unwrap(), label);
}

#[test]
fn try_statement_layout() {
    let mut tree = Tree::new();
    let io = ClassSymbol::new("java.io.IOException");
    let state = ClassSymbol::new("java.lang.IllegalStateException");
    let caught = JkType::disjunction(
        vec![
            tree.class_type(io, vec![]),
            tree.class_type(state, vec![]),
        ],
        Nullability::NotNull,
    );
    let caught = tree.type_element(caught).unwrap();
    let name = tree.name_identifier("e").unwrap();
    let annotations = tree.empty_annotation_list().unwrap();
    let parameter = tree
        .alloc(Parameter::new(caught, name, annotations, false))
        .unwrap();
    let handler = tree.alloc(Block::default()).unwrap();
    let catch = tree
        .alloc(JavaTryCatchSection::new(parameter, handler))
        .unwrap();
    let body = tree.alloc(Block::default()).unwrap();
    let finally = tree.body_stub().unwrap();

    let stmt = tree
        .alloc(JavaTryStatement::new(vec![], body, finally, vec![catch]))
        .unwrap();

    let layout: Vec<(Slot, SlotShape, usize)> = tree
        .slots(stmt)
        .unwrap()
        .into_iter()
        .map(|(decl, occupants)| (decl.slot, decl.shape, occupants.as_slice().len()))
        .collect();
    assert_eq!(
        layout,
        vec![
            (Slot::ResourceDeclarations, SlotShape::List, 0),
            (Slot::TryBlock, SlotShape::Single, 1),
            (Slot::FinallyBlock, SlotShape::Single, 1),
            (Slot::CatchSections, SlotShape::List, 1),
        ]
    );
    assert_eq!(tree.kind(finally).unwrap(), ElementKind::BodyStub);
    assert_eq!(tree.descendants(stmt).unwrap().len(), 8);
}

#[test]
fn for_loop_keeps_its_java_shape() {
    let mut tree = Tree::new();
    let int = tree.type_element(PrimitiveType::Int.into()).unwrap();
    let name = tree.name_identifier("i").unwrap();
    let zero = tree.java_literal("0", LiteralType::Int).unwrap();
    let local = tree
        .alloc(LocalVariable::new(int, name, zero, Mutability::Mutable))
        .unwrap();
    let init = tree.alloc(DeclarationStatement::new(vec![local])).unwrap();

    let i = FieldSymbol::new(None, "i");
    let lhs = tree.alloc(FieldAccessExpression::new(i.clone())).unwrap();
    let ten = tree.java_literal("10", LiteralType::Int).unwrap();
    let lt = Operator::java(JavaTokenType::Lt).unwrap();
    let condition = tree.alloc(BinaryExpression::new(lhs, ten, lt)).unwrap();

    let counter = tree.alloc(FieldAccessExpression::new(i)).unwrap();
    let inc = Operator::java(JavaTokenType::PlusPlus).unwrap();
    let inc = tree.alloc(PostfixExpression::new(counter, inc)).unwrap();
    let update = tree.alloc(ExpressionStatement::new(inc)).unwrap();

    let block = tree.alloc(Block::default()).unwrap();
    let body = tree.alloc(BlockStatement::new(block)).unwrap();

    let stmt = tree
        .alloc(JavaForLoopStatement::new(init, condition, vec![update], body))
        .unwrap();
    assert_eq!(
        tree.child_nodes(stmt).unwrap(),
        vec![init, condition, update, body]
    );
    assert_eq!(
        tree.get::<BinaryExpression>(condition).unwrap().operator.precedence(),
        9
    );
}

#[test]
fn java_flavored_nodes_track_lowering_progress() {
    let mut tree = Tree::new();
    let one = tree.java_literal("1", LiteralType::Int).unwrap();
    let x = tree.alloc(FieldAccessExpression::new(FieldSymbol::new(None, "x"))).unwrap();
    let and = Operator::java(JavaTokenType::And).unwrap();
    let masked = tree.alloc(BinaryExpression::new(x, one, and)).unwrap();
    let ret = tree.alloc(ReturnStatement::new(masked)).unwrap();
    let block = tree.alloc(Block::new(vec![ret])).unwrap();

    assert_eq!(tree.java_flavored_nodes(block).unwrap(), vec![masked, one]);

    tree.update::<BinaryExpression, _>(masked, |expr| {
        expr.operator = Operator::kotlin(WordOperator::And);
    })
    .unwrap();
    let stub = tree.stub_expression().unwrap();
    tree.replace_child(masked, Slot::Right, stub).unwrap();

    assert!(tree.java_flavored_nodes(block).unwrap().is_empty());
}

#[test]
fn origins_attach_to_java_nodes() {
    let mut tree = Tree::new();
    let field = tree
        .java_field(PrimitiveType::Long.into(), "count", None)
        .unwrap();
    let origin = SourceOrigin::new(Span::new(4, 20));
    tree.set_origin(field, origin).unwrap();
    assert_eq!(tree.origin(field).unwrap(), Some(origin));

    let name = tree.name_identifier("n").unwrap();
    assert!(matches!(
        tree.set_origin(name, origin).unwrap_err(),
        J2kError::Contract(ContractViolation::NotOriginOwner {
            kind: ElementKind::NameIdentifier
        })
    ));
}

#[test]
fn qualified_expressions_lower_their_qualifier() {
    let mut tree = Tree::new();
    let receiver = tree
        .alloc(FieldAccessExpression::new(FieldSymbol::new(None, "outer")))
        .unwrap();
    let selector = tree
        .alloc(FieldAccessExpression::new(FieldSymbol::new(None, "inner")))
        .unwrap();
    let qualified = tree
        .alloc(QualifiedExpression::new(receiver, selector, Qualifier::JavaDot))
        .unwrap();
    let stmt = tree.alloc(ExpressionStatement::new(qualified)).unwrap();

    assert_eq!(tree.child_nodes(qualified).unwrap(), vec![receiver, selector]);
    assert_eq!(tree.java_flavored_nodes(stmt).unwrap(), vec![qualified]);

    tree.update::<QualifiedExpression, _>(qualified, |expr| {
        expr.qualifier = expr.qualifier.to_kotlin();
    })
    .unwrap();

    let data = tree.get::<QualifiedExpression>(qualified).unwrap();
    assert_eq!(data.qualifier, Qualifier::KotlinDot);
    assert_eq!(data.qualifier.text(), ".");
    assert!(tree.java_flavored_nodes(stmt).unwrap().is_empty());
}
