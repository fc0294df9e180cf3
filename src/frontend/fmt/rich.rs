//! Source printer for the rich tree
//!
//! Output is canonical: one node per line, two-space indentation, blocks
//! closed by `end`. Parentheses kept by the parser are printed as written, so
//! re-parsing the output yields the same tree.

use std::fmt::{self, Display};

use super::{join, Printer};
use crate::frontend::core::lexer::tokens::{DirectValue, TokenKind};
use crate::frontend::core::parser::ast::{
    CaseBlock, Conditional, ExceptBlock, Expression, FunctionDefinition, Identifier, KeyValue,
    Node, OneLiner, Program, Statement,
};

impl Display for Identifier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for KeyValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl Display for Expression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::BasicLiteral(token) => write!(f, "{}", token.text),
            Expression::Parentheses(inner) => write!(f, "({})", inner),
            Expression::Array(items) => write!(f, "[{}]", join(items, ", ")),
            Expression::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Expression::Tuple(items) => write!(f, "({})", join(items, ", ")),
            Expression::Hash(entries) => write!(f, "{{{}}}", join(entries, ", ")),
            Expression::Binary {
                left,
                operator,
                right,
            } => write!(f, "{} {} {}", left, operator.text, right),
            Expression::Unary { operator, operand } => {
                let spaced = operator.text.chars().all(|c| c.is_ascii_alphabetic())
                    || matches!(**operand, Expression::Unary { .. });
                if spaced {
                    write!(f, "{} {}", operator.text, operand)
                } else {
                    write!(f, "{}{}", operator.text, operand)
                }
            }
            Expression::Selector {
                receiver,
                identifier,
            } => write!(f, "{}.{}", receiver, identifier),
            Expression::Index { receiver, index } => match slice_bounds(index) {
                Some((low, high)) => write!(f, "{}[{}:{}]", receiver, low, high),
                None => write!(f, "{}[{}]", receiver, index),
            },
            Expression::MethodInvocation { callee, arguments } => {
                write!(f, "{}({})", callee, join(arguments, ", "))
            }
            Expression::Lambda { arguments, result } if arguments.is_empty() => {
                write!(f, "lambda: {}", result)
            }
            Expression::Lambda { arguments, result } => {
                write!(f, "lambda {}: {}", join(arguments, ", "), result)
            }
            Expression::Generator {
                operation,
                receivers,
                source,
            } => write!(f, "({} for {} in {})", operation, join(receivers, ", "), source),
            Expression::IfOneLiner(one_liner) => write_one_liner(f, "if", one_liner),
            Expression::UnlessOneLiner(one_liner) => write_one_liner(f, "unless", one_liner),
            Expression::Super(inner) => match **inner {
                Expression::Parentheses(_) | Expression::Tuple(_) => write!(f, "super{}", inner),
                _ => write!(f, "super {}", inner),
            },
            Expression::Require(module) => write!(f, "require {}", module),
            Expression::Delete(target) => write!(f, "delete {}", target),
        }
    }
}

fn write_one_liner(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    one_liner: &OneLiner,
) -> fmt::Result {
    write!(f, "{} {} {}", one_liner.result, keyword, one_liner.condition)?;
    if let Some(else_result) = &one_liner.else_result {
        write!(f, " else {}", else_result)?;
    }
    Ok(())
}

fn is_none_literal(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::BasicLiteral(token) if token.is(TokenKind::NoneType, DirectValue::None)
    )
}

/// A two-element index with an open bound prints as `low:high`
fn slice_bounds(index: &Expression) -> Option<(String, String)> {
    let Expression::Tuple(items) = index else {
        return None;
    };
    let [low, high] = items.as_slice() else {
        return None;
    };
    if !is_none_literal(low) && !is_none_literal(high) {
        return None;
    }

    let bound = |expression: &Expression| {
        if is_none_literal(expression) {
            String::new()
        } else {
            expression.to_string()
        }
    };
    Some((bound(low), bound(high)))
}

fn print_body(
    body: &[Node],
    printer: &mut Printer,
) {
    printer.indent();
    for node in body {
        print_node(node, printer);
    }
    printer.dedent();
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

fn print_statement(
    statement: &Statement,
    printer: &mut Printer,
) {
    match statement {
        Statement::Assign {
            left,
            operator,
            right,
        } => printer.line(&format!("{} {} {}", left, operator.text, right)),
        Statement::Return(results) => print_results("return", results, printer),
        Statement::Yield(results) => print_results("yield", results, printer),
        Statement::Continue => printer.line("continue"),
        Statement::Break => printer.line("break"),
        Statement::Redo => printer.line("redo"),
        Statement::Pass => printer.line("pass"),
        Statement::Raise(error) => printer.line(&format!("raise {}", error)),
        Statement::If(conditional) => print_conditional("if", conditional, printer),
        Statement::Unless(conditional) => print_conditional("unless", conditional, printer),
        Statement::Switch(switch) => {
            printer.line(&format!("switch {}", switch.target));
            for CaseBlock { cases, body } in &switch.case_blocks {
                printer.line(&format!("case {}", join(cases, ", ")));
                print_body(body, printer);
            }
            if !switch.default_body.is_empty() {
                printer.line("default");
                print_body(&switch.default_body, printer);
            }
            printer.line("end");
        }
        Statement::While(loop_statement) => {
            print_block(&format!("while {}", loop_statement.condition), &loop_statement.body, printer)
        }
        Statement::Until(loop_statement) => {
            print_block(&format!("until {}", loop_statement.condition), &loop_statement.body, printer)
        }
        Statement::DoWhile(loop_statement) => {
            printer.line("do");
            print_body(&loop_statement.body, printer);
            printer.line(&format!("while {}", loop_statement.condition));
        }
        Statement::For(for_statement) => {
            let header = format!(
                "for {} in {}",
                join(&for_statement.receivers, ", "),
                for_statement.source
            );
            print_block(&header, &for_statement.body, printer);
        }
        Statement::Module(module) => {
            print_block(&format!("module {}", module.name), &module.body, printer)
        }
        Statement::FunctionDefinition(function) => print_function("def", function, printer),
        Statement::GeneratorDefinition(function) => {
            print_function("generator", function, printer)
        }
        Statement::Interface(interface) => {
            printer.line(&format!(
                "interface {}{}",
                interface.name,
                bases(&interface.bases)
            ));
            printer.indent();
            for method in &interface.methods {
                print_function("def", method, printer);
            }
            printer.dedent();
            printer.line("end");
        }
        Statement::Class(class) => {
            let header = format!("class {}{}", class.name, bases(&class.bases));
            print_block(&header, &class.body, printer);
        }
        Statement::Try(try_statement) => {
            printer.line("try");
            print_body(&try_statement.body, printer);
            for ExceptBlock {
                targets,
                receiver,
                body,
            } in &try_statement.except_blocks
            {
                let mut header = String::from("except");
                if !targets.is_empty() {
                    header.push(' ');
                    header.push_str(&join(targets, ", "));
                }
                if let Some(receiver) = receiver {
                    header.push_str(" as ");
                    header.push_str(receiver.name());
                }
                printer.line(&header);
                print_body(body, printer);
            }
            if !try_statement.else_body.is_empty() {
                printer.line("else");
                print_body(&try_statement.else_body, printer);
            }
            if !try_statement.finally_body.is_empty() {
                printer.line("finally");
                print_body(&try_statement.finally_body, printer);
            }
            printer.line("end");
        }
    }
}

fn print_results(
    keyword: &str,
    results: &[Expression],
    printer: &mut Printer,
) {
    if results.is_empty() {
        printer.line(keyword);
    } else {
        printer.line(&format!("{} {}", keyword, join(results, ", ")));
    }
}

fn print_block(
    header: &str,
    body: &[Node],
    printer: &mut Printer,
) {
    printer.line(header);
    print_body(body, printer);
    printer.line("end");
}

fn print_conditional(
    keyword: &str,
    conditional: &Conditional,
    printer: &mut Printer,
) {
    printer.line(&format!("{} {}", keyword, conditional.condition));
    print_body(&conditional.body, printer);
    for elif in &conditional.elif_blocks {
        printer.line(&format!("elif {}", elif.condition));
        print_body(&elif.body, printer);
    }
    if !conditional.else_body.is_empty() {
        printer.line("else");
        print_body(&conditional.else_body, printer);
    }
    printer.line("end");
}

fn print_function(
    keyword: &str,
    function: &FunctionDefinition,
    printer: &mut Printer,
) {
    let header = format!(
        "{} {}({})",
        keyword,
        function.name,
        join(&function.arguments, ", ")
    );
    print_block(&header, &function.body, printer);
}

fn bases(bases: &[Expression]) -> String {
    if bases.is_empty() {
        String::new()
    } else {
        format!("({})", join(bases, ", "))
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

        if let Some(begin) = &self.begin {
            print_block("BEGIN", &begin.body, &mut printer);
        }
        for node in &self.body {
            print_node(node, &mut printer);
        }
        if let Some(end) = &self.end {
            print_block("END", &end.body, &mut printer);
        }

        write!(f, "{}", printer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::core::parser::parse_source;
    use proptest::prelude::*;

    fn reprint(source: &str) -> String {
        parse_source(source).unwrap().to_string()
    }

    #[test]
    fn test_canonical_layout() {
        let source = "def f(a,b)\n    if a\n  return a+b\nelse\n b\n   end\nend\nx=1;y=[1,\n2]";
        assert_eq!(
            reprint(source),
            "def f(a, b)\n  if a\n    return a + b\n  else\n    b\n  end\nend\nx = 1\ny = [1, 2]"
        );
    }

    #[test]
    fn test_begin_and_end_printed_around_body() {
        let source = "a\nEND\n  c\nend\nBEGIN\n  b\nend";
        assert_eq!(reprint(source), "BEGIN\n  b\nend\na\nEND\n  c\nend");
    }

    #[test]
    fn test_expressions() {
        assert_eq!(reprint("(a+b)*c"), "(a + b) * c");
        assert_eq!(reprint("not  a"), "not a");
        assert_eq!(reprint("- -a"), "- -a");
        assert_eq!(reprint("(1,)"), "(1,)");
        assert_eq!(reprint("{'a':1,'b':2}"), "{'a': 1, 'b': 2}");
        assert_eq!(reprint("f(x)[1:][:2]"), "f(x)[1:][:2]");
        assert_eq!(reprint("lambda:1"), "lambda: 1");
        assert_eq!(reprint("(x for x,y in z)"), "(x for x, y in z)");
        assert_eq!(reprint("a unless b else c"), "a unless b else c");
        assert_eq!(reprint("super(a, b)"), "super(a, b)");
    }

    #[test]
    fn test_statements() {
        let source = "switch k\ncase 1,2\np()\ndefault\nq()\nend";
        assert_eq!(reprint(source), "switch k\ncase 1, 2\n  p()\ndefault\n  q()\nend");

        let source = "try\nf()\nexcept A,B as e\ng()\nexcept\nh()\nfinally\ni()\nend";
        assert_eq!(
            reprint(source),
            "try\n  f()\nexcept A, B as e\n  g()\nexcept\n  h()\nfinally\n  i()\nend"
        );

        let source = "interface I(A)\ndef m()\nend\nend\ndo\nx\nwhile y";
        assert_eq!(
            reprint(source),
            "interface I(A)\n  def m()\n  end\nend\ndo\n  x\nwhile y"
        );
    }

    const SNIPPETS: &[&str] = &[
        "x = 1 + 2 * 3",
        "y += a[1:] if b else c",
        "z = {'k': [1, 2, (3,)], 2: lambda a, b: a ** b}",
        "print(f(x).y, -z, not w)",
        "if a\n  b\nelif c\n  d\nelse\n  e\nend",
        "unless a\n  pass\nend",
        "while i < 10\n  i += 1\n  continue\nend",
        "until done\n  step()\nend",
        "do\n  x = next()\nwhile x",
        "for k, v in h.items()\n  print(k)\nend",
        "switch t\ncase 1, 2\n  a()\ndefault\n  b()\nend",
        "def f(a, b)\n  return a, b\nend",
        "generator g()\n  yield (x * 2 for x in xs)\nend",
        "class C(Base)\n  def m()\n    return super(1)\n  end\nend",
        "interface I\n  def m()\n  end\nend",
        "module m\n  require 'os'\nend",
        "try\n  raise E()\nexcept E as e\n  delete a.b\nelse\n  pass\nfinally\n  redo\nend",
        "s = 'a\\n' + \"b\" + b'c' + `ls`",
        "n = 0xFF | 0b1 & 0o7 ^ 1_000 << 2.5e3",
    ];

    proptest! {
        #[test]
        fn prop_printer_fixpoint(picked in prop::sample::subsequence(SNIPPETS, 1..SNIPPETS.len())) {
            let source = picked.join("\n");
            let once = reprint(&source);
            let program = parse_source(&once).unwrap();
            prop_assert_eq!(&program, &parse_source(&source).unwrap());
            prop_assert_eq!(program.to_string(), once);
        }
    }
}
