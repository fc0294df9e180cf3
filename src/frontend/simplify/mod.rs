//! 简化器
//!
//! 把富语法树降级为核心语法树：展开语法糖（unless、until、for、switch、
//! 复合赋值、interface），解析字面量并折叠常量二元运算。
//! 一次遍历生成一棵新树，匿名标识符由简化器自身的计数器生成。

pub mod ast;
pub mod literal;


use crate::frontend::config::{EscapeMode, FrontendConfig, DEFAULT_ANONYMOUS_PREFIX};
use crate::frontend::core::lexer::tokens::{DirectValue, Token};
use crate::frontend::core::parser::ast as rich;

use self::ast::{
    Assignable, Assignment, BinaryOperator, ExceptBlock, Expression, Function, IfStatement, Node,
    Program, Statement, UnaryOperator,
};

/// 简化器状态
#[derive(Debug, Clone)]
pub struct Simplifier {
    /// 已生成的匿名标识符数量
    counter: usize,
    prefix: String,
    escape_mode: EscapeMode,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self {
            counter: 0,
            prefix: DEFAULT_ANONYMOUS_PREFIX.to_string(),
            escape_mode: EscapeMode::default(),
        }
    }
}

impl Simplifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &FrontendConfig) -> Self {
        Self {
            counter: 0,
            prefix: config.anonymous_prefix.clone(),
            escape_mode: config.escape_mode,
        }
    }

    /// Number of anonymous identifiers generated so far
    pub fn anonymous_count(&self) -> usize {
        self.counter
    }

    /// Next anonymous identifier
    pub fn fresh_name(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.counter);
        self.counter += 1;
        name
    }

    /// `BEGIN` body, main body and `END` body, in that order
    pub fn simplify_program(
        &mut self,
        program: rich::Program,
    ) -> Program {
        let rich::Program { begin, end, body } = program;

        let mut nodes = Vec::new();
        if let Some(begin) = begin {
            nodes.extend(self.simplify_body(begin.body));
        }
        nodes.extend(self.simplify_body(body));
        if let Some(end) = end {
            nodes.extend(self.simplify_body(end.body));
        }

        Program { body: nodes }
    }

    pub fn simplify_body(
        &mut self,
        body: Vec<rich::Node>,
    ) -> Vec<Node> {
        body.into_iter()
            .map(|node| self.simplify_node(node))
            .collect()
    }

    pub fn simplify_node(
        &mut self,
        node: rich::Node,
    ) -> Node {
        match node {
            // standalone require/delete are statements of the core tree
            rich::Node::Expression(rich::Expression::Require(module)) => {
                Statement::Require(self.simplify_expression(*module)).into()
            }
            rich::Node::Expression(rich::Expression::Delete(target)) => {
                Statement::Delete(assignable(self.simplify_expression(*target))).into()
            }
            rich::Node::Expression(expression) => self.simplify_expression(expression).into(),
            rich::Node::Statement(statement) => self.simplify_statement(statement),
        }
    }

    pub fn simplify_statement(
        &mut self,
        statement: rich::Statement,
    ) -> Node {
        let statement = match statement {
            rich::Statement::Assign {
                left,
                operator,
                right,
            } => Statement::Assignment(self.simplify_assign(left, &operator, right)),
            rich::Statement::Return(results) => Statement::Return(self.simplify_results(results)),
            rich::Statement::Yield(results) => Statement::Yield(self.simplify_results(results)),
            rich::Statement::Continue => Statement::Continue,
            rich::Statement::Break => Statement::Break,
            rich::Statement::Redo => Statement::Redo,
            rich::Statement::Pass => Statement::Pass,
            rich::Statement::Raise(error) => Statement::Raise(self.simplify_expression(error)),
            rich::Statement::If(conditional) => self.simplify_conditional(conditional, false),
            rich::Statement::Unless(conditional) => self.simplify_conditional(conditional, true),
            rich::Statement::Switch(switch) => return self.simplify_switch(switch),
            rich::Statement::While(rich::LoopStatement { condition, body }) => Statement::While {
                condition: self.simplify_expression(condition),
                body: self.simplify_body(body),
            },
            rich::Statement::Until(rich::LoopStatement { condition, body }) => Statement::While {
                condition: Expression::not(self.simplify_expression(condition)),
                body: self.simplify_body(body),
            },
            rich::Statement::DoWhile(rich::LoopStatement { condition, body }) => {
                let body = self.simplify_body(body);
                Statement::DoWhile {
                    body,
                    condition: self.simplify_expression(condition),
                }
            }
            rich::Statement::For(for_statement) => return self.simplify_for(for_statement),
            rich::Statement::Module(module) => Statement::Module {
                name: module.name.name().to_string(),
                body: self.simplify_body(module.body),
            },
            rich::Statement::FunctionDefinition(function) => {
                Statement::FunctionDefinition(self.simplify_function(function))
            }
            rich::Statement::GeneratorDefinition(function) => {
                Statement::GeneratorDefinition(self.simplify_function(function))
            }
            rich::Statement::Interface(interface) => Statement::Class {
                name: interface.name.name().to_string(),
                bases: self.simplify_expressions(interface.bases),
                body: interface
                    .methods
                    .into_iter()
                    .map(|method| Statement::FunctionDefinition(self.simplify_function(method)).into())
                    .collect(),
            },
            rich::Statement::Class(class) => Statement::Class {
                name: class.name.name().to_string(),
                bases: self.simplify_expressions(class.bases),
                body: self.simplify_body(class.body),
            },
            rich::Statement::Try(try_statement) => self.simplify_try(try_statement),
        };

        statement.into()
    }

    /// `lhs op= rhs` becomes `lhs = lhs op rhs`
    fn simplify_assign(
        &mut self,
        left: rich::Expression,
        operator: &Token,
        right: rich::Expression,
    ) -> Assignment {
        let target = self.simplify_expression(left);
        let value = self.simplify_expression(right);

        let value = match BinaryOperator::from_assignment(operator.value) {
            Some(binary) => fold_or_build(target.clone(), binary, value),
            None => value,
        };

        Assignment {
            target: assignable(target),
            value,
        }
    }

    fn simplify_results(
        &mut self,
        results: Vec<rich::Expression>,
    ) -> Option<Expression> {
        let mut results = self.simplify_expressions(results);
        match results.len() {
            0 => None,
            1 => results.pop(),
            _ => Some(Expression::Tuple(results)),
        }
    }

    /// `if`/`elif`/`else` chains nest through `else_body`
    fn simplify_conditional(
        &mut self,
        conditional: rich::Conditional,
        negate: bool,
    ) -> Statement {
        let rich::Conditional {
            condition,
            body,
            elif_blocks,
            else_body,
        } = conditional;

        let condition = self.simplify_expression(condition);
        let condition = if negate {
            Expression::not(condition)
        } else {
            condition
        };
        let body = self.simplify_body(body);
        let elifs: Vec<(Expression, Vec<Node>)> = elif_blocks
            .into_iter()
            .map(|elif| {
                let condition = self.simplify_expression(elif.condition);
                (condition, self.simplify_body(elif.body))
            })
            .collect();
        let mut else_body = self.simplify_body(else_body);

        for (condition, body) in elifs.into_iter().rev() {
            let nested = Statement::If(IfStatement {
                setup: None,
                condition,
                body,
                else_body,
            });
            else_body = vec![nested.into()];
        }

        Statement::If(IfStatement {
            setup: None,
            condition,
            body,
            else_body,
        })
    }

    /// `switch` becomes an `if` cascade over a fresh binding of the target
    fn simplify_switch(
        &mut self,
        switch: rich::SwitchStatement,
    ) -> Node {
        let rich::SwitchStatement {
            target,
            case_blocks,
            default_body,
        } = switch;

        let target = self.simplify_expression(target);
        let name = self.fresh_name();
        let setup = Assignment::to_name(name.clone(), target);

        let cases: Vec<(Expression, Vec<Node>)> = case_blocks
            .into_iter()
            .map(|case| {
                let condition = case
                    .cases
                    .into_iter()
                    .map(|value| {
                        Expression::binary(
                            Expression::identifier(name.clone()),
                            BinaryOperator::Equals,
                            self.simplify_expression(value),
                        )
                    })
                    .reduce(|chain, next| Expression::binary(chain, BinaryOperator::Or, next))
                    .unwrap_or(Expression::False);
                (condition, self.simplify_body(case.body))
            })
            .collect();
        let default_body = self.simplify_body(default_body);

        let mut cases = cases.into_iter();
        let Some((head_condition, head_body)) = cases.next() else {
            let mut block: Vec<Node> = vec![setup.into()];
            block.extend(default_body);
            return Statement::Block(block).into();
        };

        let mut else_body = default_body;
        for (condition, body) in cases.rev() {
            let nested = Statement::If(IfStatement {
                setup: None,
                condition,
                body,
                else_body,
            });
            else_body = vec![nested.into()];
        }

        Statement::If(IfStatement {
            setup: Some(setup),
            condition: head_condition,
            body: head_body,
            else_body,
        })
        .into()
    }

    /// `for r in S` becomes a `has_next`/`next` loop
    fn simplify_for(
        &mut self,
        for_statement: rich::ForStatement,
    ) -> Node {
        let rich::ForStatement {
            receivers,
            source,
            body,
        } = for_statement;

        let source = self.simplify_expression(source);
        let (source, binding) = match source {
            Expression::Identifier(name) => (Expression::Identifier(name), None),
            other => {
                let name = self.fresh_name();
                (
                    Expression::identifier(name.clone()),
                    Some(Assignment::to_name(name, other)),
                )
            }
        };

        let next = Expression::call(Expression::selector(source.clone(), "next"), Vec::new());
        let mut loop_body: Vec<Node> = Vec::new();
        match receivers.as_slice() {
            [receiver] => loop_body.push(Assignment::to_name(receiver.name(), next).into()),
            _ => {
                let tuple = self.fresh_name();
                loop_body.push(Assignment::to_name(tuple.clone(), next).into());
                for (position, receiver) in receivers.iter().enumerate() {
                    let element = Expression::index(
                        Expression::identifier(tuple.clone()),
                        Expression::Integer(position as i64),
                    );
                    loop_body.push(Assignment::to_name(receiver.name(), element).into());
                }
            }
        }
        loop_body.extend(self.simplify_body(body));

        let condition = Expression::call(Expression::selector(source, "has_next"), Vec::new());
        let while_loop = Statement::While {
            condition,
            body: loop_body,
        };

        match binding {
            Some(binding) => Statement::Block(vec![binding.into(), while_loop.into()]).into(),
            None => while_loop.into(),
        }
    }

    fn simplify_function(
        &mut self,
        function: rich::FunctionDefinition,
    ) -> Function {
        Function {
            name: function.name.name().to_string(),
            arguments: names(&function.arguments),
            body: self.simplify_body(function.body),
        }
    }

    fn simplify_try(
        &mut self,
        try_statement: rich::TryStatement,
    ) -> Statement {
        let rich::TryStatement {
            body,
            except_blocks,
            else_body,
            finally_body,
        } = try_statement;

        let body = self.simplify_body(body);
        let except_blocks = except_blocks
            .into_iter()
            .map(|except| ExceptBlock {
                targets: self.simplify_expressions(except.targets),
                receiver: except.receiver.map(|receiver| receiver.name().to_string()),
                body: self.simplify_body(except.body),
            })
            .collect();

        Statement::Try {
            body,
            except_blocks,
            else_body: self.simplify_body(else_body),
            finally_body: self.simplify_body(finally_body),
        }
    }

    fn simplify_expressions(
        &mut self,
        expressions: Vec<rich::Expression>,
    ) -> Vec<Expression> {
        expressions
            .into_iter()
            .map(|expression| self.simplify_expression(expression))
            .collect()
    }

    pub fn simplify_expression(
        &mut self,
        expression: rich::Expression,
    ) -> Expression {
        match expression {
            rich::Expression::Identifier(identifier) => {
                Expression::Identifier(identifier.name().to_string())
            }
            rich::Expression::BasicLiteral(token) => self.simplify_literal(&token),
            rich::Expression::Parentheses(inner) => self.simplify_expression(*inner),
            rich::Expression::Array(elements) => {
                Expression::Array(self.simplify_expressions(elements))
            }
            rich::Expression::Tuple(elements) => {
                Expression::Tuple(self.simplify_expressions(elements))
            }
            rich::Expression::Hash(entries) => Expression::Hash(
                entries
                    .into_iter()
                    .map(|entry| {
                        let key = self.simplify_expression(entry.key);
                        (key, self.simplify_expression(entry.value))
                    })
                    .collect(),
            ),
            rich::Expression::Binary {
                left,
                operator,
                right,
            } => {
                let binary = match BinaryOperator::from_direct_value(operator.value) {
                    Some(binary) => binary,
                    None => panic!("'{}' is not a binary operator", operator.text),
                };
                let left = self.simplify_expression(*left);
                let right = self.simplify_expression(*right);
                fold_or_build(left, binary, right)
            }
            rich::Expression::Unary { operator, operand } => {
                let unary = match UnaryOperator::from_direct_value(operator.value) {
                    Some(unary) => unary,
                    None => panic!("'{}' is not a unary operator", operator.text),
                };
                Expression::Unary {
                    operand: Box::new(self.simplify_expression(*operand)),
                    operator: unary,
                }
            }
            rich::Expression::Selector {
                receiver,
                identifier,
            } => Expression::selector(self.simplify_expression(*receiver), identifier.name()),
            rich::Expression::Index { receiver, index } => {
                let source = self.simplify_expression(*receiver);
                Expression::index(source, self.simplify_expression(*index))
            }
            rich::Expression::MethodInvocation { callee, arguments } => {
                let callee = self.simplify_expression(*callee);
                Expression::call(callee, self.simplify_expressions(arguments))
            }
            rich::Expression::Lambda { arguments, result } => Expression::Lambda {
                arguments: names(&arguments),
                result: Box::new(self.simplify_expression(*result)),
            },
            rich::Expression::Generator {
                operation,
                receivers,
                source,
            } => Expression::Generator {
                operation: Box::new(self.simplify_expression(*operation)),
                receivers: names(&receivers),
                source: Box::new(self.simplify_expression(*source)),
            },
            rich::Expression::IfOneLiner(one_liner) => self.simplify_one_liner(one_liner, false),
            rich::Expression::UnlessOneLiner(one_liner) => {
                self.simplify_one_liner(one_liner, true)
            }
            rich::Expression::Super(inner) => {
                Expression::Super(Box::new(self.simplify_expression(*inner)))
            }
            rich::Expression::Require(module) => {
                Expression::Require(Box::new(self.simplify_expression(*module)))
            }
            rich::Expression::Delete(target) => {
                Expression::Delete(Box::new(assignable(self.simplify_expression(*target))))
            }
        }
    }

    fn simplify_one_liner(
        &mut self,
        one_liner: rich::OneLiner,
        negate: bool,
    ) -> Expression {
        let result = self.simplify_expression(*one_liner.result);
        let condition = self.simplify_expression(*one_liner.condition);
        let condition = if negate {
            Expression::not(condition)
        } else {
            condition
        };
        let else_result = one_liner
            .else_result
            .map(|else_result| Box::new(self.simplify_expression(*else_result)));

        Expression::IfOneLiner {
            condition: Box::new(condition),
            result: Box::new(result),
            else_result,
        }
    }

    /// Resolve a literal token to its value
    pub fn simplify_literal(
        &self,
        token: &Token,
    ) -> Expression {
        let value = token.value;
        if value.is_integer() {
            return Expression::Integer(literal::parse_integer(&token.text));
        }
        if value.is_float() {
            return Expression::Float(literal::parse_float(&token.text));
        }

        match value {
            DirectValue::SingleQuoteString | DirectValue::DoubleQuoteString => {
                Expression::String(self.expand(token))
            }
            DirectValue::ByteString => Expression::Bytes(self.expand(token)),
            DirectValue::CommandOutput => Expression::Command(self.expand(token)),
            DirectValue::True => Expression::True,
            DirectValue::False => Expression::False,
            DirectValue::None => Expression::None,
            _ => panic!("'{}' is not a literal token", token.text),
        }
    }

    fn expand(
        &self,
        token: &Token,
    ) -> Vec<u8> {
        literal::expand_escapes(literal::unquote(&token.text, token.value), self.escape_mode)
    }
}

/// Fold literal operands, otherwise keep the binary node
fn fold_or_build(
    left: Expression,
    operator: BinaryOperator,
    right: Expression,
) -> Expression {
    match literal::fold_binary(operator, &left, &right) {
        Some(folded) => folded,
        None => Expression::binary(left, operator, right),
    }
}

/// The parser only builds assignments and deletes over assignable targets
fn assignable(expression: Expression) -> Assignable {
    match Assignable::try_from(expression) {
        Ok(target) => target,
        Err(other) => panic!("unassignable target reached the simplifier: {:?}", other),
    }
}

fn names(identifiers: &[rich::Identifier]) -> Vec<String> {
    identifiers
        .iter()
        .map(|identifier| identifier.name().to_string())
        .collect()
}

/// Simplify a program with default settings
pub fn simplify(program: rich::Program) -> Program {
    let mut simplifier = Simplifier::new();
    let simplified = simplifier.simplify_program(program);
    tracing::debug!(
        nodes = simplified.body.len(),
        anonymous = simplifier.anonymous_count(),
        "simplified program"
    );
    simplified
}
