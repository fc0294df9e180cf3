//! 编译流水线
//!
//! 依次执行词法分析、语法分析、使用检查与简化，记录各阶段状态与耗时。

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use super::check::{self, CheckReport};
use super::config::{ConfigError, FrontendConfig};
use super::core::lexer::{self, LexError};
use super::core::parser::{self, ParseError};
use super::simplify::{ast as core_ast, Simplifier};

/// 前端错误
#[derive(Debug, Error)]
pub enum FrontendError {
    /// 词法错误
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    /// 语法错误
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// 使用检查发现越界的 return/yield/循环控制
    #[error("misplaced control flow: {0}")]
    MisplacedControlFlow(CheckReport),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// 流水线阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// 空闲状态
    #[default]
    Idle,
    /// 词法分析中
    Lexing,
    /// 语法分析中
    Parsing,
    /// 使用检查中
    Checking,
    /// 简化中
    Simplifying,
    /// 编译完成
    Completed,
    /// 编译失败
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Lexing => write!(f, "lexing"),
            PipelineState::Parsing => write!(f, "parsing"),
            PipelineState::Checking => write!(f, "checking"),
            PipelineState::Simplifying => write!(f, "simplifying"),
            PipelineState::Completed => write!(f, "completed"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// 编译结果
#[derive(Debug, Clone)]
pub struct Compilation {
    /// 使用检查报告；未执行检查时为空报告
    pub report: CheckReport,
    /// 核心语法树
    pub program: core_ast::Program,
    /// 各阶段耗时
    pub phase_durations: Vec<(PipelineState, Duration)>,
}

impl Compilation {
    /// 全部阶段总耗时
    pub fn total_duration(&self) -> Duration {
        self.phase_durations.iter().map(|(_, duration)| *duration).sum()
    }
}

/// 前端驱动
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    /// 当前状态
    state: PipelineState,
    /// 配置
    config: FrontendConfig,
}

impl Frontend {
    /// 创建新流水线
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            state: PipelineState::Idle,
            config,
        }
    }

    /// 从 JSON 配置创建流水线
    pub fn from_json(json: &str) -> Result<Self, FrontendError> {
        Ok(Self::new(FrontendConfig::from_json(json)?))
    }

    /// 获取当前状态
    #[inline]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// 获取配置
    #[inline]
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// 重置流水线状态
    pub fn reset(&mut self) {
        self.state = PipelineState::Idle;
    }

    /// 运行完整前端流程
    pub fn compile(
        &mut self,
        source: &str,
    ) -> Result<Compilation, FrontendError> {
        let result = self.run(source);
        self.state = match &result {
            Ok(_) => PipelineState::Completed,
            Err(_) => PipelineState::Failed,
        };
        result
    }

    fn run(
        &mut self,
        source: &str,
    ) -> Result<Compilation, FrontendError> {
        let mut phase_durations = Vec::new();
        debug!("compiling {} bytes", source.len());

        // 词法分析
        let start = self.enter(PipelineState::Lexing);
        let tokens = lexer::tokenize(source)?;
        phase_durations.push((PipelineState::Lexing, start.elapsed()));

        // 语法分析
        let start = self.enter(PipelineState::Parsing);
        let rich = parser::parse(tokens)?;
        phase_durations.push((PipelineState::Parsing, start.elapsed()));

        // 使用检查
        let report = if self.config.check_uses {
            let start = self.enter(PipelineState::Checking);
            let report = check::check(&rich);
            phase_durations.push((PipelineState::Checking, start.elapsed()));
            if !report.is_clean() {
                return Err(FrontendError::MisplacedControlFlow(report));
            }
            report
        } else {
            CheckReport::default()
        };

        // 简化
        let start = self.enter(PipelineState::Simplifying);
        let mut simplifier = Simplifier::with_config(&self.config);
        let program = simplifier.simplify_program(rich);
        phase_durations.push((PipelineState::Simplifying, start.elapsed()));

        debug!(
            nodes = program.body.len(),
            anonymous = simplifier.anonymous_count(),
            "compilation completed"
        );

        Ok(Compilation {
            report,
            program,
            phase_durations,
        })
    }

    fn enter(
        &mut self,
        state: PipelineState,
    ) -> Instant {
        debug!("entering phase: {}", state);
        self.state = state;
        Instant::now()
    }
}
