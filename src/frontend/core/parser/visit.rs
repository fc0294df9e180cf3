//! Rich tree traversal
//!
//! [`walk_program`] visits every node depth first, in source order, calling
//! the enter hook before a node's children and the leave hook after them.
//! `Begin` and `End` bodies are walked before and after the main body.

use crate::frontend::core::parser::ast::*;

/// Hooks invoked by the walk functions; every hook defaults to a no-op
pub trait Visitor {
    fn enter_statement(
        &mut self,
        _statement: &Statement,
    ) {
    }

    fn leave_statement(
        &mut self,
        _statement: &Statement,
    ) {
    }

    fn enter_expression(
        &mut self,
        _expression: &Expression,
    ) {
    }

    fn leave_expression(
        &mut self,
        _expression: &Expression,
    ) {
    }

    /// Called for `def`/`generator` statements and interface methods alike
    fn enter_function(
        &mut self,
        _function: &FunctionDefinition,
        _generator: bool,
    ) {
    }

    fn leave_function(
        &mut self,
        _function: &FunctionDefinition,
        _generator: bool,
    ) {
    }
}

pub fn walk_program<V: Visitor + ?Sized>(
    visitor: &mut V,
    program: &Program,
) {
    if let Some(begin) = &program.begin {
        walk_body(visitor, &begin.body);
    }
    walk_body(visitor, &program.body);
    if let Some(end) = &program.end {
        walk_body(visitor, &end.body);
    }
}

pub fn walk_body<V: Visitor + ?Sized>(
    visitor: &mut V,
    body: &[Node],
) {
    for node in body {
        walk_node(visitor, node);
    }
}

pub fn walk_node<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &Node,
) {
    match node {
        Node::Expression(expression) => walk_expression(visitor, expression),
        Node::Statement(statement) => walk_statement(visitor, statement),
    }
}

fn walk_expressions<'a, V: Visitor + ?Sized>(
    visitor: &mut V,
    expressions: impl IntoIterator<Item = &'a Expression>,
) {
    for expression in expressions {
        walk_expression(visitor, expression);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    statement: &Statement,
) {
    visitor.enter_statement(statement);

    match statement {
        Statement::Assign { left, right, .. } => {
            walk_expression(visitor, left);
            walk_expression(visitor, right);
        }
        Statement::Return(results) | Statement::Yield(results) => {
            walk_expressions(visitor, results);
        }
        Statement::Continue | Statement::Break | Statement::Redo | Statement::Pass => {}
        Statement::Raise(expression) => walk_expression(visitor, expression),
        Statement::If(conditional) | Statement::Unless(conditional) => {
            walk_expression(visitor, &conditional.condition);
            walk_body(visitor, &conditional.body);
            for elif in &conditional.elif_blocks {
                walk_expression(visitor, &elif.condition);
                walk_body(visitor, &elif.body);
            }
            walk_body(visitor, &conditional.else_body);
        }
        Statement::Switch(switch) => {
            walk_expression(visitor, &switch.target);
            for case in &switch.case_blocks {
                walk_expressions(visitor, &case.cases);
                walk_body(visitor, &case.body);
            }
            walk_body(visitor, &switch.default_body);
        }
        Statement::While(looping) | Statement::Until(looping) => {
            walk_expression(visitor, &looping.condition);
            walk_body(visitor, &looping.body);
        }
        Statement::DoWhile(looping) => {
            walk_body(visitor, &looping.body);
            walk_expression(visitor, &looping.condition);
        }
        Statement::For(for_statement) => {
            walk_expression(visitor, &for_statement.source);
            walk_body(visitor, &for_statement.body);
        }
        Statement::Module(module) => walk_body(visitor, &module.body),
        Statement::FunctionDefinition(function) => walk_function(visitor, function, false),
        Statement::GeneratorDefinition(function) => walk_function(visitor, function, true),
        Statement::Interface(interface) => {
            walk_expressions(visitor, &interface.bases);
            for method in &interface.methods {
                walk_function(visitor, method, false);
            }
        }
        Statement::Class(class) => {
            walk_expressions(visitor, &class.bases);
            walk_body(visitor, &class.body);
        }
        Statement::Try(try_statement) => {
            walk_body(visitor, &try_statement.body);
            for except in &try_statement.except_blocks {
                walk_expressions(visitor, &except.targets);
                walk_body(visitor, &except.body);
            }
            walk_body(visitor, &try_statement.else_body);
            walk_body(visitor, &try_statement.finally_body);
        }
    }

    visitor.leave_statement(statement);
}

pub fn walk_function<V: Visitor + ?Sized>(
    visitor: &mut V,
    function: &FunctionDefinition,
    generator: bool,
) {
    visitor.enter_function(function, generator);
    walk_body(visitor, &function.body);
    visitor.leave_function(function, generator);
}

pub fn walk_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    expression: &Expression,
) {
    visitor.enter_expression(expression);

    match expression {
        Expression::Identifier(_) | Expression::BasicLiteral(_) => {}
        Expression::Parentheses(inner)
        | Expression::Super(inner)
        | Expression::Require(inner)
        | Expression::Delete(inner) => walk_expression(visitor, inner),
        Expression::Array(values) | Expression::Tuple(values) => walk_expressions(visitor, values),
        Expression::Hash(entries) => {
            for entry in entries {
                walk_expression(visitor, &entry.key);
                walk_expression(visitor, &entry.value);
            }
        }
        Expression::Binary { left, right, .. } => {
            walk_expression(visitor, left);
            walk_expression(visitor, right);
        }
        Expression::Unary { operand, .. } => walk_expression(visitor, operand),
        Expression::Selector { receiver, .. } => walk_expression(visitor, receiver),
        Expression::Index { receiver, index } => {
            walk_expression(visitor, receiver);
            walk_expression(visitor, index);
        }
        Expression::MethodInvocation { callee, arguments } => {
            walk_expression(visitor, callee);
            walk_expressions(visitor, arguments);
        }
        Expression::Lambda { result, .. } => walk_expression(visitor, result),
        Expression::Generator {
            operation, source, ..
        } => {
            walk_expression(visitor, source);
            walk_expression(visitor, operation);
        }
        Expression::IfOneLiner(one_liner) | Expression::UnlessOneLiner(one_liner) => {
            walk_expression(visitor, &one_liner.condition);
            walk_expression(visitor, &one_liner.result);
            if let Some(else_result) = &one_liner.else_result {
                walk_expression(visitor, else_result);
            }
        }
    }

    visitor.leave_expression(expression);
}
