//! Lexer tests module
//!
//! Organized test modules for better maintainability:
//! - basic: 基础测试（标识符、换行、EOF、位置）
//! - literals: 字面量测试（整数、浮点、字符串、字节串、命令输出）
//! - operators: 运算符与赋值符测试（最长匹配）
//! - keywords: 关键字测试
//! - comments: 注释与续行测试
//! - errors: 错误处理测试
//! - properties: proptest 不变量测试

mod basic;
mod comments;
mod literals;
mod operators;
