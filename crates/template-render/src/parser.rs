//! 模板字符串解析

use serde::Serialize;

use crate::{error::*, segment::*};

/// 模板解析树
///
/// 按行保存解析出的片段序列, 行以 \n 切分, Token 不跨行.
/// 填充与校验均消费同一棵解析树.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template(Vec<Line>);

impl Template {
    /// 解析模板字符串
    ///
    /// 全函数: 格式问题作为 Error 片段保留, 永不失败.
    pub fn parse(template: &str) -> Self {
        Self(template.split('\n').map(parse_line).collect())
    }

    /// 解析结果, 每行一个片段序列
    pub fn lines(&self) -> &[Line] {
        &self.0
    }
}

/// 解析单行
///
/// 单趟扫描, 游标从左到右推进.
fn parse_line(line: &str) -> Line {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        // 查找下一个未转义的 {
        let open = match find_delimiter(&chars, cursor, '{') {
            Some(v) => v,
            None => {
                segments.push(Segment::Text(unescape(&chars[cursor..])));
                break;
            }
        };

        // 查找对应的未转义 }
        let close = match find_delimiter(&chars, open + 1, '}') {
            Some(v) => v,
            None => {
                // 未闭合: 游标之后整体作为单个文本保留 (含孤立的 {), 并附加错误
                segments.push(Segment::Text(unescape(&chars[cursor..])));
                segments.push(Segment::Error(ParseError {
                    kind: ParseErrorKind::UnclosedToken,
                    position: open,
                }));
                break;
            }
        };

        // 处理 Token 之前的文本
        if open > cursor {
            segments.push(Segment::Text(unescape(&chars[cursor..open])));
        }

        segments.push(Segment::Token(Token::from_content(
            &chars[open + 1..close],
            open,
        )));

        cursor = close + 1;
    }

    segments
}

/// 查找下一个未转义的定界符, 返回字符偏移
///
/// 紧跟在 \ 之后的定界符视为普通字符跳过.
fn find_delimiter(chars: &[char], from: usize, delimiter: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == delimiter && (i == 0 || chars[i - 1] != '\\'))
}

/// 去除转义: \{ 与 \} 还原为字面括号
///
/// 不定义其它转义序列, 其余反斜杠原样保留.
fn unescape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && matches!(chars.get(i + 1), Some('{' | '}')) {
            i += 1;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
