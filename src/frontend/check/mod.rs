//! 控制流使用检查
//!
//! 统计出现在非法上下文中的跳转语句：
//! - 函数之外的 `return`
//! - 生成器之外的 `yield`
//! - 循环之外的 `break` / `continue` / `redo`
//!
//! 只计数、不报错，也不修改语法树。

use std::fmt;

use crate::frontend::core::parser::ast::{FunctionDefinition, Program, Statement};
use crate::frontend::core::parser::visit::{walk_program, Visitor};

/// 检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckReport {
    /// 函数之外的 `return` 数量
    pub invalid_function_nodes: usize,
    /// 生成器之外的 `yield` 数量
    pub invalid_generator_nodes: usize,
    /// 循环之外的 `break`/`continue`/`redo` 数量
    pub invalid_loop_nodes: usize,
}

impl CheckReport {
    /// 是否没有任何非法节点
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.invalid_function_nodes + self.invalid_generator_nodes + self.invalid_loop_nodes
    }
}

impl fmt::Display for CheckReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} misplaced return, {} misplaced yield, {} misplaced loop control",
            self.invalid_function_nodes, self.invalid_generator_nodes, self.invalid_loop_nodes
        )
    }
}

/// 使用检查器
///
/// 三个深度计数器分别在进入函数、生成器和循环时加一，离开时减一。
#[derive(Debug, Default)]
pub struct UseChecker {
    function_depth: usize,
    generator_depth: usize,
    loop_depth: usize,
    report: CheckReport,
}

impl UseChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查整个程序并返回计数
    pub fn check(
        mut self,
        program: &Program,
    ) -> CheckReport {
        walk_program(&mut self, program);
        self.report
    }
}

fn is_loop(statement: &Statement) -> bool {
    matches!(
        statement,
        Statement::While(_) | Statement::Until(_) | Statement::DoWhile(_) | Statement::For(_)
    )
}

impl Visitor for UseChecker {
    fn enter_statement(
        &mut self,
        statement: &Statement,
    ) {
        match statement {
            Statement::Return(_) if self.function_depth == 0 => {
                self.report.invalid_function_nodes += 1;
            }
            Statement::Yield(_) if self.generator_depth == 0 => {
                self.report.invalid_generator_nodes += 1;
            }
            Statement::Break | Statement::Continue | Statement::Redo if self.loop_depth == 0 => {
                self.report.invalid_loop_nodes += 1;
            }
            _ if is_loop(statement) => self.loop_depth += 1,
            _ => {}
        }
    }

    fn leave_statement(
        &mut self,
        statement: &Statement,
    ) {
        if is_loop(statement) {
            self.loop_depth = self.loop_depth.saturating_sub(1);
        }
    }

    fn enter_function(
        &mut self,
        _function: &FunctionDefinition,
        generator: bool,
    ) {
        if generator {
            self.generator_depth += 1;
        } else {
            self.function_depth += 1;
        }
    }

    fn leave_function(
        &mut self,
        _function: &FunctionDefinition,
        generator: bool,
    ) {
        let depth = if generator {
            &mut self.generator_depth
        } else {
            &mut self.function_depth
        };
        *depth = depth.saturating_sub(1);
    }
}

/// 检查程序中跳转语句的使用位置
pub fn check(program: &Program) -> CheckReport {
    let report = UseChecker::new().check(program);
    tracing::debug!(
        function = report.invalid_function_nodes,
        generator = report.invalid_generator_nodes,
        loops = report.invalid_loop_nodes,
        "use check finished"
    );
    report
}

#[cfg(test)]
mod tests;
