//! template-render 错误类型

use serde::Serialize;
use thiserror::Error;

/// 解析错误
///
/// 解析为全函数, 错误作为片段保留在解析树中, 不会中断解析.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// 开括号在行内的字符偏移
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ParseErrorKind {
    #[error("Unclosed token")]
    UnclosedToken,
}

/// 填充错误
///
/// 填充始终产出完整字符串, 取值缺陷作为错误随结果一并返回.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}, position {position}: {kind}")]
pub struct RenderError {
    pub kind: RenderErrorKind,

    /// 行号 (0 起始)
    pub line: usize,

    /// 开括号在行内的字符偏移
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RenderErrorKind {
    /// Schema 无 transform 且 values 中缺少对应键
    #[error("Missing value: {0}")]
    MissingValue(String),

    /// Schema 无 transform 且对应值不是字符串 (降级为 JSON 序列化)
    #[error("Non-string value: {0}")]
    NonStringValue(String),
}

/// 校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}, position {position}: {kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,

    /// 行号 (0 起始)
    pub line: usize,

    /// 开括号在行内的字符偏移
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationErrorKind {
    #[error("Unclosed token")]
    UnclosedToken,

    #[error("Unknown token: {0}")]
    UnknownToken(String),
}

impl From<&ParseError> for ValidationErrorKind {
    fn from(err: &ParseError) -> Self {
        match err.kind {
            ParseErrorKind::UnclosedToken => Self::UnclosedToken,
        }
    }
}
