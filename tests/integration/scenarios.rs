//! 端到端场景 - 源码到核心语法树

use quill::frontend::simplify::ast::{
    Assignment, BinaryOperator, Expression, IfStatement, Node, Statement,
};
use quill::{check, parse_source, simplify, tokenize};

fn lower(source: &str) -> Vec<Node> {
    let tokens = tokenize(source).unwrap();
    simplify(quill::parse(tokens).unwrap()).body
}

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

fn method_call(
    receiver: &str,
    method: &str,
) -> Expression {
    Expression::call(Expression::selector(ident(receiver), method), vec![])
}

#[test]
fn test_constant_expression_folds() {
    assert_eq!(lower("1 + 2 * 3"), vec![Node::Expression(Expression::Integer(7))]);
}

#[test]
fn test_assignment_of_folded_value() {
    assert_eq!(
        lower("a = 1 + 2"),
        vec![Assignment::to_name("a", Expression::Integer(3)).into()]
    );
}

#[test]
fn test_unless_lowering() {
    let expected = Statement::If(IfStatement {
        setup: None,
        condition: Expression::not(ident("x")),
        body: vec![Assignment::to_name("y", Expression::Integer(1)).into()],
        else_body: vec![],
    });
    assert_eq!(lower("unless x\n  y = 1\nend"), vec![expected.into()]);
}

#[test]
fn test_for_lowering() {
    let body = lower("for a, b in src\n  f(a,b)\nend");
    let [Node::Statement(Statement::While { condition, body })] = body.as_slice() else {
        panic!("Expected a single while loop, got {:?}", body);
    };
    assert_eq!(*condition, method_call("src", "has_next"));

    let tmp = match &body[0] {
        Node::Statement(Statement::Assignment(Assignment {
            target: quill::frontend::simplify::ast::Assignable::Identifier(name),
            value,
        })) => {
            assert_eq!(*value, method_call("src", "next"));
            name.clone()
        }
        other => panic!("Expected temporary binding, got {:?}", other),
    };
    assert!(tmp.starts_with("____simplify_"));

    assert_eq!(
        body[1..],
        [
            Assignment::to_name("a", Expression::index(ident(&tmp), Expression::Integer(0))).into(),
            Assignment::to_name("b", Expression::index(ident(&tmp), Expression::Integer(1))).into(),
            Node::Expression(Expression::call(ident("f"), vec![ident("a"), ident("b")])),
        ]
    );
}

#[test]
fn test_switch_lowering() {
    let body = lower("switch k\ncase 1, 2\n  p()\ncase 3\n  q()\ndefault\n  r()\nend");
    let [Node::Statement(Statement::If(outer))] = body.as_slice() else {
        panic!("Expected a single if, got {:?}", body);
    };

    let setup = outer.setup.as_ref().expect("switch setup");
    assert_eq!(setup.value, ident("k"));
    let tmp = Expression::from(setup.target.clone());

    let equals = |value| Expression::binary(tmp.clone(), BinaryOperator::Equals, value);
    assert_eq!(
        outer.condition,
        Expression::binary(
            equals(Expression::Integer(1)),
            BinaryOperator::Or,
            equals(Expression::Integer(2))
        )
    );
    assert_eq!(outer.body, vec![Node::Expression(Expression::call(ident("p"), vec![]))]);

    let inner = Statement::If(IfStatement {
        setup: None,
        condition: equals(Expression::Integer(3)),
        body: vec![Node::Expression(Expression::call(ident("q"), vec![]))],
        else_body: vec![Node::Expression(Expression::call(ident("r"), vec![]))],
    });
    assert_eq!(outer.else_body, vec![inner.into()]);
}

#[test]
fn test_multi_value_return() {
    assert_eq!(
        lower("return a, b"),
        vec![Statement::Return(Some(Expression::Tuple(vec![ident("a"), ident("b")]))).into()]
    );
}

#[test]
fn test_use_check_counts() {
    let report = check(&parse_source("return\nreturn 1\nreturn 2\nreturn 3").unwrap());
    assert_eq!(report.invalid_function_nodes, 4);

    let report = check(&parse_source("break\nbreak\nbreak\nbreak\nbreak").unwrap());
    assert_eq!(report.invalid_loop_nodes, 5);
}
