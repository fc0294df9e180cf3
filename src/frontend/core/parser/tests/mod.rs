//! Parser tests module
//!
//! Organized test modules for better maintainability:
//! - state: ParserState 单元测试
//! - expressions: 表达式解析测试（优先级、后缀、括号形式）
//! - statements: 语句解析测试（块语句、声明、跳转）
//! - program: 程序结构测试（BEGIN/END、分隔符、遍历）
//! - errors: 错误处理测试

mod program;
mod state;
