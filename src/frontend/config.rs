//! 前端配置
//!
//! 管理前端选项：匿名标识符前缀、转义解码模式、是否执行使用检查。

use serde::{Deserialize, Serialize};

use crate::frontend::core::lexer::literals::{is_identifier_char, is_identifier_start};

/// `\x` / `\u` 转义的解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// 按位置直接组合数字字符的原始字节值（兼容旧行为）
    Compatible,
    /// 标准十六进制解码
    #[default]
    Hex,
}

impl std::fmt::Display for EscapeMode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            EscapeMode::Compatible => write!(f, "compatible"),
            EscapeMode::Hex => write!(f, "hex"),
        }
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid frontend config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("anonymous prefix '{0}' is not an identifier")]
    InvalidPrefix(String),
}

pub const DEFAULT_ANONYMOUS_PREFIX: &str = "____simplify_";

fn default_anonymous_prefix() -> String {
    DEFAULT_ANONYMOUS_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

/// 前端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// 简化器生成的匿名标识符前缀
    #[serde(default = "default_anonymous_prefix")]
    pub anonymous_prefix: String,

    /// 字符串转义解码模式
    #[serde(default)]
    pub escape_mode: EscapeMode,

    /// 编译时是否执行使用检查并拒绝非法跳转
    #[serde(default = "default_true")]
    pub check_uses: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            anonymous_prefix: default_anonymous_prefix(),
            escape_mode: EscapeMode::default(),
            check_uses: true,
        }
    }
}

impl FrontendConfig {
    /// 创建默认配置
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 加载配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 匿名前缀必须能拼出合法标识符
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bytes = self.anonymous_prefix.as_bytes();
        let valid = match bytes.split_first() {
            Some((first, rest)) => {
                is_identifier_start(*first) && rest.iter().all(|b| is_identifier_char(*b))
            }
            None => false,
        };
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidPrefix(self.anonymous_prefix.clone()))
        }
    }

    #[inline]
    pub fn with_escape_mode(
        mut self,
        escape_mode: EscapeMode,
    ) -> Self {
        self.escape_mode = escape_mode;
        self
    }

    #[inline]
    pub fn with_anonymous_prefix(
        mut self,
        prefix: impl Into<String>,
    ) -> Self {
        self.anonymous_prefix = prefix.into();
        self
    }

    #[inline]
    pub fn with_check_uses(
        mut self,
        check_uses: bool,
    ) -> Self {
        self.check_uses = check_uses;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontendConfig::default();
        assert_eq!(config.anonymous_prefix, "____simplify_");
        assert_eq!(config.escape_mode, EscapeMode::Hex);
        assert!(config.check_uses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = FrontendConfig::from_json(r#"{"escape_mode": "compatible"}"#).unwrap();
        assert_eq!(config.escape_mode, EscapeMode::Compatible);
        assert_eq!(config.anonymous_prefix, DEFAULT_ANONYMOUS_PREFIX);
        assert!(config.check_uses);

        let config = FrontendConfig::from_json("{}").unwrap();
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            FrontendConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            FrontendConfig::from_json(r#"{"escape_mode": "octal"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            FrontendConfig::from_json(r#"{"anonymous_prefix": "1tmp"}"#),
            Err(ConfigError::InvalidPrefix(_))
        ));
        assert!(matches!(
            FrontendConfig::from_json(r#"{"anonymous_prefix": ""}"#),
            Err(ConfigError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FrontendConfig::new()
            .with_anonymous_prefix("__t")
            .with_escape_mode(EscapeMode::Compatible)
            .with_check_uses(false);
        let json = config.to_json().unwrap();
        assert_eq!(FrontendConfig::from_json(&json).unwrap(), config);
    }
}
