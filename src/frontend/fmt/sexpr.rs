//! S-expression printer for the core tree

use std::fmt::{self, Display};

use super::{join, Printer};
use crate::frontend::simplify::ast::{
    Assignable, Assignment, Expression, Function, IfStatement, Node, Program, Statement,
};

fn quoted(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    delimiter: char,
    bytes: &[u8],
) -> fmt::Result {
    write!(f, "{}{}{}{}", prefix, delimiter, bytes.escape_ascii(), delimiter)
}

impl Display for Expression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Integer(value) => write!(f, "{}", value),
            Expression::Float(value) => write!(f, "{:?}", value),
            Expression::String(bytes) => quoted(f, "", '"', bytes),
            Expression::Bytes(bytes) => quoted(f, "b", '"', bytes),
            Expression::Command(bytes) => quoted(f, "", '`', bytes),
            Expression::True => write!(f, "True"),
            Expression::False => write!(f, "False"),
            Expression::None => write!(f, "None"),
            Expression::Array(items) => write!(f, "(array {})", join(items, " ")),
            Expression::Tuple(items) => write!(f, "(tuple {})", join(items, " ")),
            Expression::Hash(entries) => {
                write!(f, "(hash")?;
                for (key, value) in entries {
                    write!(f, " ({} {})", key, value)?;
                }
                write!(f, ")")
            }
            Expression::Binary {
                left,
                right,
                operator,
            } => write!(f, "({} {} {})", operator.symbol(), left, right),
            Expression::Unary { operand, operator } => {
                write!(f, "({} {})", operator.symbol(), operand)
            }
            Expression::Selector {
                receiver,
                identifier,
            } => write!(f, "(. {} {})", receiver, identifier),
            Expression::Index { source, index } => write!(f, "(index {} {})", source, index),
            Expression::FunctionCall { callee, arguments } => {
                if arguments.is_empty() {
                    write!(f, "(call {})", callee)
                } else {
                    write!(f, "(call {} {})", callee, join(arguments, " "))
                }
            }
            Expression::Lambda { arguments, result } => {
                write!(f, "(lambda ({}) {})", arguments.join(" "), result)
            }
            Expression::Generator {
                operation,
                receivers,
                source,
            } => write!(
                f,
                "(generator {} ({}) {})",
                operation,
                receivers.join(" "),
                source
            ),
            Expression::IfOneLiner {
                condition,
                result,
                else_result,
            } => match else_result {
                Some(else_result) => write!(f, "(if-expr {} {} {})", condition, result, else_result),
                None => write!(f, "(if-expr {} {})", condition, result),
            },
            Expression::Super(inner) => write!(f, "(super {})", inner),
            Expression::Require(module) => write!(f, "(require {})", module),
            Expression::Delete(target) => write!(f, "(delete {})", target),
        }
    }
}

impl Display for Assignable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", Expression::from(self.clone()))
    }
}

impl Display for Assignment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "(= {} {})", self.target, self.value)
    }
}

fn print_nodes(
    nodes: &[Node],
    printer: &mut Printer,
) {
    printer.indent();
    for node in nodes {
        print_node(node, printer);
    }
    printer.dedent();
}

/// `(head` line, nested nodes, closing paren on the last line
fn print_form(
    head: &str,
    nodes: &[Node],
    printer: &mut Printer,
) {
    printer.line(&format!("({}", head));
    print_nodes(nodes, printer);
    printer.write_str(")");
}

fn print_node(
    node: &Node,
    printer: &mut Printer,
) {
    match node {
        Node::Expression(expression) => printer.line(&expression.to_string()),
        Node::Statement(statement) => print_statement(statement, printer),
    }
}

fn print_function(
    keyword: &str,
    function: &Function,
    printer: &mut Printer,
) {
    let head = format!("{} {} ({})", keyword, function.name, function.arguments.join(" "));
    print_form(&head, &function.body, printer);
}

fn print_if(
    statement: &IfStatement,
    printer: &mut Printer,
) {
    let head = match &statement.setup {
        Some(setup) => format!("if (setup {}) {}", setup, statement.condition),
        None => format!("if {}", statement.condition),
    };
    printer.line(&format!("({}", head));
    printer.indent();
    print_form("then", &statement.body, printer);
    if !statement.else_body.is_empty() {
        print_form("else", &statement.else_body, printer);
    }
    printer.dedent();
    printer.write_str(")");
}

fn print_statement(
    statement: &Statement,
    printer: &mut Printer,
) {
    match statement {
        Statement::Assignment(assignment) => printer.line(&assignment.to_string()),
        Statement::DoWhile { body, condition } => {
            print_form(&format!("do-while {}", condition), body, printer)
        }
        Statement::While { condition, body } => {
            print_form(&format!("while {}", condition), body, printer)
        }
        Statement::If(statement) => print_if(statement, printer),
        Statement::Module { name, body } => print_form(&format!("module {}", name), body, printer),
        Statement::FunctionDefinition(function) => print_function("def", function, printer),
        Statement::GeneratorDefinition(function) => print_function("generator-def", function, printer),
        Statement::Class { name, bases, body } => {
            print_form(&format!("class {} ({})", name, join(bases, " ")), body, printer)
        }
        Statement::Try {
            body,
            except_blocks,
            else_body,
            finally_body,
        } => {
            printer.line("(try");
            printer.indent();
            print_form("body", body, printer);
            for except in except_blocks {
                let head = match &except.receiver {
                    Some(receiver) => format!("except ({}) {}", join(&except.targets, " "), receiver),
                    None => format!("except ({})", join(&except.targets, " ")),
                };
                print_form(&head, &except.body, printer);
            }
            if !else_body.is_empty() {
                print_form("else", else_body, printer);
            }
            if !finally_body.is_empty() {
                print_form("finally", finally_body, printer);
            }
            printer.dedent();
            printer.write_str(")");
        }
        Statement::Return(result) => print_optional("return", result.as_ref(), printer),
        Statement::Yield(result) => print_optional("yield", result.as_ref(), printer),
        Statement::Continue => printer.line("(continue)"),
        Statement::Break => printer.line("(break)"),
        Statement::Redo => printer.line("(redo)"),
        Statement::Pass => printer.line("(pass)"),
        Statement::Raise(error) => printer.line(&format!("(raise {})", error)),
        Statement::Require(module) => printer.line(&format!("(require {})", module)),
        Statement::Delete(target) => printer.line(&format!("(delete {})", target)),
        Statement::Block(body) => print_form("block", body, printer),
    }
}

fn print_optional(
    keyword: &str,
    value: Option<&Expression>,
    printer: &mut Printer,
) {
    match value {
        Some(value) => printer.line(&format!("({} {})", keyword, value)),
        None => printer.line(&format!("({})", keyword)),
    }
}

impl Display for Statement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut printer = Printer::new();
        print_statement(self, &mut printer);
        write!(f, "{}", printer.finish())
    }
}

impl Display for Node {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Node::Expression(expression) => write!(f, "{}", expression),
            Node::Statement(statement) => write!(f, "{}", statement),
        }
    }
}

impl Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut printer = Printer::new();
        for node in &self.body {
            print_node(node, &mut printer);
        }
        write!(f, "{}", printer.finish())
    }
}
