//! 程序结构测试 - BEGIN/END、顶层分隔符、token 序列入口、遍历顺序

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::visit::{walk_program, Visitor};
use crate::frontend::core::parser::{parse, parse_source};

/// Records hook calls as short labels
#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

impl Visitor for Trace {
    fn enter_statement(
        &mut self,
        statement: &Statement,
    ) {
        let label = match statement {
            Statement::Assign { .. } => "assign",
            Statement::Return(_) => "return",
            Statement::While(_) => "while",
            Statement::Break => "break",
            Statement::Interface(_) => "interface",
            _ => "statement",
        };
        self.events.push(format!("+{}", label));
    }

    fn leave_statement(
        &mut self,
        _statement: &Statement,
    ) {
        self.events.push("-".to_string());
    }

    fn enter_expression(
        &mut self,
        expression: &Expression,
    ) {
        if let Expression::Identifier(identifier) = expression {
            self.events.push(identifier.name().to_string());
        }
    }

    fn enter_function(
        &mut self,
        function: &FunctionDefinition,
        generator: bool,
    ) {
        let kind = if generator { "gen" } else { "fn" };
        self.events.push(format!("{}:{}", kind, function.name.name()));
    }
}

#[cfg(test)]
mod program_tests {
    use super::*;

    #[test]
    fn test_empty_program() {
        let program = parse_source("").unwrap();
        assert!(program.body.is_empty());
        assert!(program.begin.is_none());
        assert!(program.end.is_none());

        let program = parse_source("\n\n  # only a comment\n;\n").unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_begin_and_end_blocks() {
        let source = "BEGIN\n  a = 1\nend\nb = 2\nEND\n  c = 3\n  d = 4\nend\n";
        let program = parse_source(source).unwrap();

        assert_eq!(program.begin.as_ref().map(|b| b.body.len()), Some(1));
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.end.as_ref().map(|e| e.body.len()), Some(2));
    }

    #[test]
    fn test_top_level_separators() {
        let program = parse_source("a = 1; b = 2\n\nc").unwrap();
        assert_eq!(program.body.len(), 3);
        assert!(program.body[2].as_expression().is_some());
    }

    #[test]
    fn test_line_continuation() {
        let program = parse_source("a = 1 + \\\n  2").unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_parse_token_sequence() {
        let tokens = tokenize("x = 1\ny = 2").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(program.body.len(), 2);

        // A sequence without the trailing Eof parses the same way
        let mut tokens = tokenize("x = 1").unwrap();
        tokens.pop();
        let program = parse(tokens).unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_parse_matches_parse_source() {
        let source = "def f(a)\n  return a * 2\nend\nprint(f(3))";
        let eager = parse(tokenize(source).unwrap()).unwrap();
        let lazy = parse_source(source).unwrap();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_walk_order() {
        let source = "BEGIN\n  a = b\nend\nwhile c\n  break\nend\nEND\n  return d\nend";
        let program = parse_source(source).unwrap();

        let mut trace = Trace::default();
        walk_program(&mut trace, &program);

        assert_eq!(
            trace.events,
            vec!["+assign", "a", "b", "-", "+while", "c", "+break", "-", "-", "+return", "d", "-"]
        );
    }

    #[test]
    fn test_walk_visits_interface_methods_as_functions() {
        let source = "interface I\n  def m()\n    return x\n  end\nend\ngenerator g()\nend";
        let program = parse_source(source).unwrap();

        let mut trace = Trace::default();
        walk_program(&mut trace, &program);

        assert_eq!(
            trace.events,
            vec!["+interface", "fn:m", "+return", "x", "-", "-", "+statement", "gen:g", "-"]
        );
    }
}
