//! Core syntax tree
//!
//! The small canonical vocabulary the simplifier lowers the rich tree into.
//! Names are plain strings; literals carry their resolved values.

use crate::frontend::core::lexer::tokens::DirectValue;

/// Canonical binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Pow,
    Mod,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    ShiftLeft,
    ShiftRight,
    Equals,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    In,
    And,
    Or,
    Xor,
}

impl BinaryOperator {
    /// Operator named by a binary operator or comparator token
    pub fn from_direct_value(value: DirectValue) -> Option<Self> {
        let operator = match value {
            DirectValue::Add => Self::Add,
            DirectValue::Sub => Self::Sub,
            DirectValue::Star => Self::Mul,
            DirectValue::Div => Self::Div,
            DirectValue::FloorDiv => Self::FloorDiv,
            DirectValue::PowerOf => Self::Pow,
            DirectValue::Modulus => Self::Mod,
            DirectValue::BitwiseOr => Self::BitwiseOr,
            DirectValue::BitwiseXor => Self::BitwiseXor,
            DirectValue::BitwiseAnd => Self::BitwiseAnd,
            DirectValue::BitwiseLeft => Self::ShiftLeft,
            DirectValue::BitwiseRight => Self::ShiftRight,
            DirectValue::Equals => Self::Equals,
            DirectValue::NotEqual => Self::NotEqual,
            DirectValue::LessThan => Self::LessThan,
            DirectValue::LessOrEqualThan => Self::LessOrEqual,
            DirectValue::GreaterThan => Self::GreaterThan,
            DirectValue::GreaterOrEqualThan => Self::GreaterOrEqual,
            DirectValue::In => Self::In,
            DirectValue::And => Self::And,
            DirectValue::Or => Self::Or,
            DirectValue::Xor => Self::Xor,
            _ => return None,
        };
        Some(operator)
    }

    /// Operator a compound assignment applies; `None` for plain `=`
    pub fn from_assignment(value: DirectValue) -> Option<Self> {
        let operator = match value {
            DirectValue::AddAssign => Self::Add,
            DirectValue::SubAssign => Self::Sub,
            DirectValue::StarAssign => Self::Mul,
            DirectValue::DivAssign => Self::Div,
            DirectValue::FloorDivAssign => Self::FloorDiv,
            DirectValue::PowerOfAssign => Self::Pow,
            DirectValue::ModulusAssign => Self::Mod,
            DirectValue::BitwiseOrAssign => Self::BitwiseOr,
            DirectValue::BitwiseXorAssign => Self::BitwiseXor,
            DirectValue::BitwiseAndAssign => Self::BitwiseAnd,
            DirectValue::BitwiseLeftAssign => Self::ShiftLeft,
            DirectValue::BitwiseRightAssign => Self::ShiftRight,
            _ => return None,
        };
        Some(operator)
    }

    /// Source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Pow => "**",
            Self::Mod => "%",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseAnd => "&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Equals => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::In => "in",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

/// Canonical unary operator; `!` and `not` both become `Not`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    NegateBits,
    Positive,
    Negative,
}

impl UnaryOperator {
    pub fn from_direct_value(value: DirectValue) -> Option<Self> {
        match value {
            DirectValue::Not | DirectValue::SignNot => Some(Self::Not),
            DirectValue::NegateBits => Some(Self::NegateBits),
            DirectValue::Add => Some(Self::Positive),
            DirectValue::Sub => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::NegateBits => "~",
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

/// Core expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(String),
    Integer(i64),
    Float(f64),
    String(Vec<u8>),
    Bytes(Vec<u8>),
    /// Backtick command string
    Command(Vec<u8>),
    True,
    False,
    None,
    Array(Vec<Expression>),
    Tuple(Vec<Expression>),
    Hash(Vec<(Expression, Expression)>),
    Binary {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: BinaryOperator,
    },
    Unary {
        operand: Box<Expression>,
        operator: UnaryOperator,
    },
    Selector {
        receiver: Box<Expression>,
        identifier: String,
    },
    Index {
        source: Box<Expression>,
        index: Box<Expression>,
    },
    FunctionCall {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Lambda {
        arguments: Vec<String>,
        result: Box<Expression>,
    },
    Generator {
        operation: Box<Expression>,
        receivers: Vec<String>,
        source: Box<Expression>,
    },
    IfOneLiner {
        condition: Box<Expression>,
        result: Box<Expression>,
        else_result: Option<Box<Expression>>,
    },
    Super(Box<Expression>),
    /// `require` nested inside a larger expression
    Require(Box<Expression>),
    /// `delete` nested inside a larger expression
    Delete(Box<Assignable>),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn binary(
        left: Expression,
        operator: BinaryOperator,
        right: Expression,
    ) -> Self {
        Expression::Binary {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        }
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Unary {
            operand: Box::new(operand),
            operator: UnaryOperator::Not,
        }
    }

    pub fn selector(
        receiver: Expression,
        identifier: impl Into<String>,
    ) -> Self {
        Expression::Selector {
            receiver: Box::new(receiver),
            identifier: identifier.into(),
        }
    }

    pub fn index(
        source: Expression,
        index: Expression,
    ) -> Self {
        Expression::Index {
            source: Box::new(source),
            index: Box::new(index),
        }
    }

    pub fn call(
        callee: Expression,
        arguments: Vec<Expression>,
    ) -> Self {
        Expression::FunctionCall {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Literal nodes, the only operands constant folding looks at
    ///
    /// Command strings are left out: their value only exists once run.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::Integer(_)
                | Expression::Float(_)
                | Expression::String(_)
                | Expression::Bytes(_)
                | Expression::True
                | Expression::False
                | Expression::None
        )
    }
}

/// Expression shapes that may be assigned to or deleted
#[derive(Debug, Clone, PartialEq)]
pub enum Assignable {
    Identifier(String),
    Selector {
        receiver: Box<Expression>,
        identifier: String,
    },
    Index {
        source: Box<Expression>,
        index: Box<Expression>,
    },
}

impl TryFrom<Expression> for Assignable {
    type Error = Expression;

    fn try_from(expression: Expression) -> Result<Self, Self::Error> {
        match expression {
            Expression::Identifier(name) => Ok(Assignable::Identifier(name)),
            Expression::Selector {
                receiver,
                identifier,
            } => Ok(Assignable::Selector {
                receiver,
                identifier,
            }),
            Expression::Index { source, index } => Ok(Assignable::Index { source, index }),
            other => Err(other),
        }
    }
}

impl From<Assignable> for Expression {
    fn from(assignable: Assignable) -> Self {
        match assignable {
            Assignable::Identifier(name) => Expression::Identifier(name),
            Assignable::Selector {
                receiver,
                identifier,
            } => Expression::Selector {
                receiver,
                identifier,
            },
            Assignable::Index { source, index } => Expression::Index { source, index },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Assignable,
    pub value: Expression,
}

impl Assignment {
    /// `name = value`
    pub fn to_name(
        name: impl Into<String>,
        value: Expression,
    ) -> Self {
        Self {
            target: Assignable::Identifier(name.into()),
            value,
        }
    }
}

/// `if`, optionally preceded by the switch-setup binding its condition reads
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub setup: Option<Assignment>,
    pub condition: Expression,
    pub body: Vec<Node>,
    pub else_body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<String>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptBlock {
    pub targets: Vec<Expression>,
    pub receiver: Option<String>,
    pub body: Vec<Node>,
}

/// Core statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    DoWhile {
        body: Vec<Node>,
        condition: Expression,
    },
    While {
        condition: Expression,
        body: Vec<Node>,
    },
    If(IfStatement),
    Module {
        name: String,
        body: Vec<Node>,
    },
    FunctionDefinition(Function),
    GeneratorDefinition(Function),
    Class {
        name: String,
        bases: Vec<Expression>,
        body: Vec<Node>,
    },
    Try {
        body: Vec<Node>,
        except_blocks: Vec<ExceptBlock>,
        else_body: Vec<Node>,
        finally_body: Vec<Node>,
    },
    Return(Option<Expression>),
    Yield(Option<Expression>),
    Continue,
    Break,
    Redo,
    Pass,
    Raise(Expression),
    Require(Expression),
    Delete(Assignable),
    Block(Vec<Node>),
}

/// Any node of the core tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Expression(Expression),
    Statement(Statement),
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

impl From<Assignment> for Node {
    fn from(assignment: Assignment) -> Self {
        Node::Statement(Statement::Assignment(assignment))
    }
}

/// Root of the core tree; `BEGIN` and `END` bodies are already spliced in
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}
