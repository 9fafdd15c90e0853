use nova_j2k_tree::element::{
    Block, BlockStatement, ClassBody, EmptyStatement, ExpressionStatement, JavaAssertStatement,
    JavaAssignmentExpression, StubExpression,
};
use nova_j2k_tree::types::LiteralType;
use nova_j2k_tree::{
    Category, ContractViolation, ElementKind, J2kError, JavaTokenType, NodeId, Operator, Slot,
    Tree,
};
use pretty_assertions::assert_eq;

fn statements(tree: &mut Tree, n: usize) -> Vec<NodeId> {
    (0..n).map(|_| tree.alloc(EmptyStatement).unwrap()).collect()
}

#[test]
fn replacing_a_single_slot_moves_the_parent_link() {
    let mut tree = Tree::new();
    let first = tree.stub_expression().unwrap();
    let stmt = tree.alloc(ExpressionStatement::new(first)).unwrap();
    let second = tree.java_literal("1", LiteralType::Int).unwrap();

    let old = tree.replace_child(stmt, Slot::Expression, second).unwrap();

    assert_eq!(old, first);
    assert_eq!(tree.parent(first).unwrap(), None);
    assert_eq!(tree.parent(second).unwrap(), Some(stmt));
    assert_eq!(tree.child(stmt, Slot::Expression).unwrap(), second);
    assert!(!tree.child_nodes(stmt).unwrap().contains(&first));
    assert!(!tree.is_ancestor(stmt, first).unwrap());
}

#[test]
fn replacing_with_the_current_occupant_is_a_no_op() {
    let mut tree = Tree::new();
    let expr = tree.stub_expression().unwrap();
    let stmt = tree.alloc(ExpressionStatement::new(expr)).unwrap();

    assert_eq!(tree.replace_child(stmt, Slot::Expression, expr).unwrap(), expr);
    assert_eq!(tree.parent(expr).unwrap(), Some(stmt));
}

#[test]
fn replacement_is_local_to_the_named_slot() {
    let mut tree = Tree::new();
    let condition = tree.stub_expression().unwrap();
    let description = tree.stub_expression().unwrap();
    let assert = tree
        .alloc(JavaAssertStatement::new(condition, description))
        .unwrap();
    let replacement = tree.java_literal("0", LiteralType::Int).unwrap();

    tree.replace_child(assert, Slot::Condition, replacement).unwrap();

    assert_eq!(tree.child(assert, Slot::Description).unwrap(), description);
    assert_eq!(tree.parent(description).unwrap(), Some(assert));
    assert_eq!(tree.child_nodes(assert).unwrap(), vec![replacement, description]);
}

#[test]
fn shrinking_a_list_detaches_the_dropped_elements() {
    let mut tree = Tree::new();
    let stmts = statements(&mut tree, 3);
    let (a, b, c) = (stmts[0], stmts[1], stmts[2]);
    let block = tree.alloc(Block::new(stmts.clone())).unwrap();

    let removed = tree
        .replace_children(block, Slot::Statements, vec![c, a])
        .unwrap();

    assert_eq!(removed, vec![b]);
    assert_eq!(tree.parent(b).unwrap(), None);
    assert_eq!(tree.children(block, Slot::Statements).unwrap(), &[c, a]);
    assert_eq!(tree.parent(a).unwrap(), Some(block));
    assert_eq!(tree.parent(c).unwrap(), Some(block));
}

#[test]
fn list_replacement_accepts_detached_nodes() {
    let mut tree = Tree::new();
    let old = statements(&mut tree, 2);
    let block = tree.alloc(Block::new(old.clone())).unwrap();
    let fresh = tree.alloc(EmptyStatement).unwrap();

    let removed = tree
        .replace_children(block, Slot::Statements, vec![old[1], fresh])
        .unwrap();

    assert_eq!(removed, vec![old[0]]);
    assert_eq!(tree.slot_of(fresh).unwrap(), Some((block, Slot::Statements)));
}

#[test]
fn failed_list_replacement_leaves_the_tree_unchanged() {
    let mut tree = Tree::new();
    let stmts = statements(&mut tree, 2);
    let block = tree.alloc(Block::new(stmts.clone())).unwrap();
    let fresh = tree.alloc(EmptyStatement).unwrap();
    let wrong = tree.stub_expression().unwrap();

    let err = tree
        .replace_children(block, Slot::Statements, vec![fresh, wrong])
        .unwrap_err();

    assert_eq!(
        err,
        J2kError::Contract(ContractViolation::SlotCategory {
            kind: ElementKind::Block,
            slot: Slot::Statements,
            expected: Category::Statement,
            child: wrong,
            child_kind: ElementKind::StubExpression,
        })
    );
    assert_eq!(tree.children(block, Slot::Statements).unwrap(), stmts.as_slice());
    assert_eq!(tree.parent(fresh).unwrap(), None);
    for id in &stmts {
        assert_eq!(tree.parent(*id).unwrap(), Some(block));
    }
}

#[test]
fn attached_nodes_must_be_detached_first() {
    let mut tree = Tree::new();
    let stmts = statements(&mut tree, 1);
    let first = tree.alloc(Block::new(stmts.clone())).unwrap();
    let second = tree.alloc(Block::default()).unwrap();

    let err = tree
        .insert_child(second, Slot::Statements, 0, stmts[0])
        .unwrap_err();
    assert_eq!(
        err,
        J2kError::Contract(ContractViolation::AlreadyAttached {
            node: stmts[0],
            parent: first,
        })
    );

    tree.detach(stmts[0]).unwrap();
    tree.insert_child(second, Slot::Statements, 0, stmts[0]).unwrap();
    assert_eq!(tree.parent(stmts[0]).unwrap(), Some(second));
    assert!(tree.children(first, Slot::Statements).unwrap().is_empty());
}

#[test]
fn cycles_are_rejected() {
    let mut tree = Tree::new();
    let inner = tree.alloc(Block::default()).unwrap();
    let outer = tree.alloc(BlockStatement::new(inner)).unwrap();

    let err = tree
        .insert_child(inner, Slot::Statements, 0, outer)
        .unwrap_err();
    assert_eq!(
        err,
        J2kError::Contract(ContractViolation::Cycle {
            node: outer,
            parent: inner,
        })
    );

    let err = tree
        .replace_children(inner, Slot::Statements, vec![outer])
        .unwrap_err();
    assert!(matches!(
        err,
        J2kError::Contract(ContractViolation::Cycle { .. })
    ));
    assert!(tree.children(inner, Slot::Statements).unwrap().is_empty());
    assert_eq!(tree.parent(outer).unwrap(), None);
}

#[test]
fn assignment_targets_must_be_assignable() {
    let mut tree = Tree::new();
    let target = tree.java_literal("1", LiteralType::Int).unwrap();
    let value = tree.java_literal("2", LiteralType::Int).unwrap();
    let op = Operator::java(JavaTokenType::Eq).unwrap();

    let err = tree
        .alloc(JavaAssignmentExpression::new(target, value, op))
        .unwrap_err();
    assert_eq!(
        err,
        J2kError::Contract(ContractViolation::SlotCategory {
            kind: ElementKind::JavaAssignmentExpression,
            slot: Slot::Field,
            expected: Category::AssignableExpression,
            child: target,
            child_kind: ElementKind::JavaLiteralExpression,
        })
    );
    assert_eq!(tree.parent(value).unwrap(), None);
}

#[test]
fn empty_class_body_stays_empty() {
    let mut tree = Tree::new();
    let body = tree.empty_class_body().unwrap();
    let field = tree
        .java_field(nova_j2k_tree::types::PrimitiveType::Int.into(), "x", None)
        .unwrap();

    let err = tree
        .insert_child(body, Slot::Declarations, 0, field)
        .unwrap_err();
    assert_eq!(err, J2kError::Contract(ContractViolation::EmptyClassBodyDeclarations));

    let err = tree
        .replace_children(body, Slot::Declarations, vec![field])
        .unwrap_err();
    assert_eq!(err, J2kError::Contract(ContractViolation::EmptyClassBodyDeclarations));

    assert_eq!(
        tree.replace_children(body, Slot::Declarations, vec![]).unwrap(),
        Vec::<NodeId>::new()
    );
    assert_eq!(tree.parent(field).unwrap(), None);

    // A regular class body takes the field.
    let real = tree.alloc(ClassBody::new(vec![field])).unwrap();
    assert_eq!(tree.parent(field).unwrap(), Some(real));
}

#[test]
fn single_slots_cannot_be_emptied() {
    let mut tree = Tree::new();
    let expr = tree.alloc(StubExpression).unwrap();
    let stmt = tree.alloc(ExpressionStatement::new(expr)).unwrap();

    assert!(matches!(
        tree.detach(expr).unwrap_err(),
        J2kError::Contract(ContractViolation::DetachFromSingleSlot { .. })
    ));
    assert_eq!(tree.child(stmt, Slot::Expression).unwrap(), expr);
}
