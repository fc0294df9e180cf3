//! Abstract Syntax Tree types
//!
//! The rich tree keeps every surface construct. Expressions and statements are
//! two disjoint families joined by [`Node`].

use crate::frontend::core::lexer::tokens::{DirectValue, Token};

/// Any node of the rich tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Expression(Expression),
    Statement(Statement),
}

impl Node {
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Node::Expression(expression) => Some(expression),
            Node::Statement(_) => None,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Node::Statement(statement) => Some(statement),
            Node::Expression(_) => None,
        }
    }
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

/// Identifier with the token it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn name(&self) -> &str {
        &self.token.text
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    /// Literal token; its kind and direct value select the literal category
    BasicLiteral(Token),
    Parentheses(Box<Expression>),
    Array(Vec<Expression>),
    Tuple(Vec<Expression>),
    Hash(Vec<KeyValue>),
    Binary {
        left: Box<Expression>,
        operator: Token,
        right: Box<Expression>,
    },
    Unary {
        operator: Token,
        operand: Box<Expression>,
    },
    Selector {
        receiver: Box<Expression>,
        identifier: Identifier,
    },
    /// `receiver[index]`; slices carry a two-element `Tuple` index
    Index {
        receiver: Box<Expression>,
        index: Box<Expression>,
    },
    MethodInvocation {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Lambda {
        arguments: Vec<Identifier>,
        result: Box<Expression>,
    },
    Generator {
        operation: Box<Expression>,
        receivers: Vec<Identifier>,
        source: Box<Expression>,
    },
    IfOneLiner(OneLiner),
    UnlessOneLiner(OneLiner),
    Super(Box<Expression>),
    /// `require module`
    Require(Box<Expression>),
    /// `delete target`; the parser only admits assignable targets
    Delete(Box<Expression>),
}

impl Expression {
    /// Identifier, selector and index expressions may be assigned to or deleted
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::Selector { .. } | Expression::Index { .. }
        )
    }

    pub fn literal_value(&self) -> Option<DirectValue> {
        match self {
            Expression::BasicLiteral(token) => Some(token.value),
            _ => None,
        }
    }
}

/// Hash entry
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Expression,
    pub value: Expression,
}

/// `result if condition [else else_result]`
#[derive(Debug, Clone, PartialEq)]
pub struct OneLiner {
    pub result: Box<Expression>,
    pub condition: Box<Expression>,
    pub else_result: Option<Box<Expression>>,
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign {
        left: Expression,
        operator: Token,
        right: Expression,
    },
    Return(Vec<Expression>),
    Yield(Vec<Expression>),
    Continue,
    Break,
    Redo,
    Pass,
    Raise(Expression),
    If(Conditional),
    Unless(Conditional),
    Switch(SwitchStatement),
    While(LoopStatement),
    Until(LoopStatement),
    DoWhile(LoopStatement),
    For(ForStatement),
    Module(ModuleStatement),
    FunctionDefinition(FunctionDefinition),
    GeneratorDefinition(FunctionDefinition),
    Interface(InterfaceStatement),
    Class(ClassStatement),
    Try(TryStatement),
}

/// `if`/`unless` with their `elif` chain and `else` body
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expression,
    pub body: Vec<Node>,
    pub elif_blocks: Vec<ElifBlock>,
    pub else_body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElifBlock {
    pub condition: Expression,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub target: Expression,
    pub case_blocks: Vec<CaseBlock>,
    pub default_body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseBlock {
    pub cases: Vec<Expression>,
    pub body: Vec<Node>,
}

/// `while`, `until` and `do ... while` share one shape
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub condition: Expression,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub receivers: Vec<Identifier>,
    pub source: Expression,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStatement {
    pub name: Identifier,
    pub body: Vec<Node>,
}

/// `def` and `generator` definitions
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: Identifier,
    pub arguments: Vec<Identifier>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceStatement {
    pub name: Identifier,
    pub bases: Vec<Expression>,
    pub methods: Vec<FunctionDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatement {
    pub name: Identifier,
    pub bases: Vec<Expression>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub body: Vec<Node>,
    pub except_blocks: Vec<ExceptBlock>,
    pub else_body: Vec<Node>,
    pub finally_body: Vec<Node>,
}

/// `except T1, T2 [as name]`; no targets catches everything
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptBlock {
    pub targets: Vec<Expression>,
    pub receiver: Option<Identifier>,
    pub body: Vec<Node>,
}

/// `BEGIN ... end`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeginStatement {
    pub body: Vec<Node>,
}

/// `END ... end`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndStatement {
    pub body: Vec<Node>,
}

/// Root of the rich tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub begin: Option<BeginStatement>,
    pub end: Option<EndStatement>,
    pub body: Vec<Node>,
}
