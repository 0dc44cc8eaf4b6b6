//! 模板片段

use serde::Serialize;

use crate::error::ParseError;

/// 单行的解析结果, 片段顺序即原文从左到右的顺序
pub type Line = Vec<Segment>;

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// 文本 (已去除转义)
    Text(String),

    /// 花括号 Token
    Token(Token),

    /// 解析错误
    Error(ParseError),
}

/// 花括号 Token
///
/// argument 为 None 表示没有参数, Some("") 表示空参数,
/// 以区分 {x} 与 {x }.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub name: String,
    pub argument: Option<String>,

    /// 开括号在原始行内的字符偏移
    pub position: usize,
}

impl Token {
    /// 从括号内容创建 Token
    ///
    /// 在第一个空白字符处拆分名称与参数, 参数原样保留 (含空白).
    pub(crate) fn from_content(content: &[char], position: usize) -> Self {
        match content.iter().position(|c| c.is_whitespace()) {
            None => Self {
                name: content.iter().collect(),
                argument: None,
                position,
            },

            Some(split) => Self {
                name: content[..split].iter().collect(),
                argument: Some(content[split + 1..].iter().collect()),
                position,
            },
        }
    }

    /// 还原 Token 的原始语法
    ///
    /// 由解析出的名称与参数重建, 不保留内部转义.
    pub fn reserialize(&self) -> String {
        match &self.argument {
            Some(argument) => format!("{{{} {}}}", self.name, argument),
            None => format!("{{{}}}", self.name),
        }
    }
}
