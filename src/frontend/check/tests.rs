//! 使用检查测试

use super::*;
use crate::frontend::core::parser::parse_source;

fn report(source: &str) -> CheckReport {
    check(&parse_source(source).unwrap())
}

#[test]
fn test_bare_returns_counted() {
    let report = report("return\nreturn 1\nreturn a, b\nreturn");
    assert_eq!(report.invalid_function_nodes, 4);
    assert_eq!(report.invalid_generator_nodes, 0);
    assert_eq!(report.invalid_loop_nodes, 0);
    assert!(!report.is_clean());
}

#[test]
fn test_bare_breaks_counted() {
    let report = report("break\nbreak\nif x\n  break\nend\nbreak\nbreak");
    assert_eq!(report.invalid_loop_nodes, 5);
    assert_eq!(report.total(), 5);
}

#[test]
fn test_valid_program_is_clean() {
    let source = "def f(xs)\n  for x in xs\n    if x\n      continue\n    end\n    redo\n  end\n  return 1\nend\n\
                  generator g()\n  while True\n    yield 1\n    break\n  end\nend\n\
                  do\n  break\nwhile x";
    let report = report(source);
    assert!(report.is_clean(), "{}", report);
}

#[test]
fn test_yield_outside_generator() {
    let report = report("yield 1\ndef f()\n  yield 2\nend");
    assert_eq!(report.invalid_generator_nodes, 2);
}

#[test]
fn test_return_inside_generator_is_misplaced() {
    let report = report("generator g()\n  return 1\nend");
    assert_eq!(report.invalid_function_nodes, 1);
}

#[test]
fn test_loop_context_reaches_nested_function() {
    let report = report("while x\n  def f()\n    break\n  end\n  break\nend");
    assert_eq!(report.invalid_loop_nodes, 0);

    let report = self::report("def f()\n  break\nend\nwhile x\n  pass\nend");
    assert_eq!(report.invalid_loop_nodes, 1);
}

#[test]
fn test_generator_context_reaches_nested_function() {
    let report = report("generator g()\n  def h()\n    yield 1\n  end\nend");
    assert_eq!(report.invalid_generator_nodes, 0);
    assert!(report.is_clean());
}

#[test]
fn test_class_body_keeps_function_context() {
    let source = "def outer()\n  class C\n    return 1\n    def m()\n      return 2\n    end\n  end\n  return 3\nend\nclass D\n  return 4\nend";
    let report = report(source);
    assert_eq!(report.invalid_function_nodes, 1);
}

#[test]
fn test_interface_methods_are_functions() {
    let report = report("interface I\n  def m()\n    return 1\n  end\nend");
    assert!(report.is_clean());
}

#[test]
fn test_begin_and_end_blocks_checked() {
    let report = report("BEGIN\n  return\nend\nEND\n  continue\nend");
    assert_eq!(report.invalid_function_nodes, 1);
    assert_eq!(report.invalid_loop_nodes, 1);
}

#[test]
fn test_loop_depth_restored_after_loop() {
    let report = report("while x\n  while y\n    break\n  end\n  break\nend\nbreak");
    assert_eq!(report.invalid_loop_nodes, 1);
}

#[test]
fn test_report_display() {
    let report = CheckReport {
        invalid_function_nodes: 1,
        invalid_generator_nodes: 2,
        invalid_loop_nodes: 3,
    };
    assert_eq!(
        report.to_string(),
        "1 misplaced return, 2 misplaced yield, 3 misplaced loop control"
    );
}
