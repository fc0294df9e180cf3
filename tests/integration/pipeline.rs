//! 完整前端流程测试

use quill::util::logger::{self, LogLevel};
use quill::{compile, EscapeMode, Frontend, FrontendConfig, FrontendError, ParseError};

const SCRIPT: &str = r#"
BEGIN
  require 'io'
end

def area(shape)
  switch shape.kind
  case 'square'
    return shape.side ** 2
  case 'rect'
    return shape.w * shape.h
  default
    raise Unknown(shape)
  end
end

for s in shapes
  total += area(s)
end

END
  print(total)
end
"#;

#[test]
fn test_compile_script() {
    logger::init_with_level(LogLevel::Debug);

    let compilation = compile(SCRIPT).unwrap();
    assert!(compilation.report.is_clean());

    let printed = compilation.program.to_string();
    assert!(printed.starts_with("(require \"io\")"), "{}", printed);
    assert!(printed.contains("(def area (shape)"), "{}", printed);
    assert!(printed.contains("(setup (= ____simplify_0 (. shape kind)))"), "{}", printed);
    assert!(printed.contains("(while (call (. shapes has_next))"), "{}", printed);
    assert!(printed.ends_with("(call print total)"), "{}", printed);
}

#[test]
fn test_rich_printer_round_trip() {
    let program = quill::parse_source(SCRIPT).unwrap();
    let printed = program.to_string();
    assert_eq!(quill::parse_source(&printed).unwrap(), program);
    assert_eq!(quill::parse_source(&printed).unwrap().to_string(), printed);
}

#[test]
fn test_parse_error_reports_construct_and_position() {
    let err = compile("def f()\n  x = (1 +\n").unwrap_err();
    match err {
        FrontendError::Parse(parse_error) => {
            assert!(parse_error.position().is_some());
            assert!(parse_error.construct().is_some());
        }
        other => panic!("Expected parse error, got {:?}", other),
    }

    let err = compile("BEGIN\nend\nBEGIN\nend").unwrap_err();
    assert!(matches!(
        err,
        FrontendError::Parse(ParseError::BeginRepeated { .. })
    ));
}

#[test]
fn test_escape_modes() {
    let source = "s = '\\x41'";

    let hex = compile(source).unwrap();
    assert_eq!(hex.program.to_string(), "(= s \"A\")");

    let config = FrontendConfig::default().with_escape_mode(EscapeMode::Compatible);
    let compatible = Frontend::new(config).compile(source).unwrap();
    assert_eq!(compatible.program.to_string(), "(= s \"q\")");
}

#[test]
fn test_misplaced_control_flow_rejected() {
    let err = compile("def f()\n  yield 1\nend").unwrap_err();
    match err {
        FrontendError::MisplacedControlFlow(report) => {
            assert_eq!(report.invalid_generator_nodes, 1);
        }
        other => panic!("Expected misplaced control flow, got {:?}", other),
    }
}
