//! 模板填充

use serde_json::Value;

use crate::{error::*, parser::Template, schema::*, segment::*};

impl Template {
    /// 填充模板, 以 \n 连接各行
    ///
    /// 始终产出完整字符串, 取值缺陷作为错误一并返回.
    pub fn render(&self, schema: &Schema, values: &Values) -> (String, Vec<RenderError>) {
        self.render_with_delimiter(schema, values, "\n")
    }

    /// 填充模板, 以指定分隔符连接各行
    pub fn render_with_delimiter(
        &self,
        schema: &Schema,
        values: &Values,
        delimiter: &str,
    ) -> (String, Vec<RenderError>) {
        let mut errors = Vec::new();

        let text = self
            .lines()
            .iter()
            .enumerate()
            .map(|(line, segments)| {
                segments
                    .iter()
                    .map(|segment| {
                        let (text, err) = render_segment(segment, schema, values, line);
                        errors.extend(err);
                        text
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(delimiter);

        (text, errors)
    }
}

/// 一次性填充模板
pub fn render(template: &str, schema: &Schema, values: &Values) -> (String, Vec<RenderError>) {
    Template::parse(template).render(schema, values)
}

/// 填充单个片段
fn render_segment(
    segment: &Segment,
    schema: &Schema,
    values: &Values,
    line: usize,
) -> (String, Option<RenderError>) {
    match segment {
        Segment::Text(text) => (text.clone(), None),

        // 解析错误降级为可见文本, 填充始终完成
        Segment::Error(err) => (format!("ERROR: {}", err.kind), None),

        Segment::Token(token) => render_token(token, schema, values, line),
    }
}

/// 解析 Token 取值
fn render_token(
    token: &Token,
    schema: &Schema,
    values: &Values,
    line: usize,
) -> (String, Option<RenderError>) {
    // 未知 Token 原样保留, 重解析后保持不变
    let def = match schema.get(&token.name) {
        Some(def) => def,
        None => return (token.reserialize(), None),
    };

    if let Some(transform) = &def.transform {
        return (transform(values), None);
    }

    let error = |kind| {
        Some(RenderError {
            kind,
            line,
            position: token.position,
        })
    };

    match values.get(&token.name) {
        Some(Value::String(text)) => (text.clone(), None),

        // 非字符串值降级为 JSON 序列化
        Some(value) => (
            value.to_string(),
            error(RenderErrorKind::NonStringValue(token.name.clone())),
        ),

        None => (
            String::new(),
            error(RenderErrorKind::MissingValue(token.name.clone())),
        ),
    }
}
