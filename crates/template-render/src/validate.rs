//! 模板校验

use crate::{error::*, parser::Template, schema::Schema, segment::Segment};

impl Template {
    /// 校验模板
    ///
    /// 收集整个模板的错误, 不短路; 顺序为行序, 行内从左到右.
    /// 空结果表示模板对给定 Schema 完全合法.
    pub fn validate(&self, schema: &Schema) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (line, segments) in self.lines().iter().enumerate() {
            for segment in segments {
                match segment {
                    Segment::Error(err) => errors.push(ValidationError {
                        kind: err.into(),
                        line,
                        position: err.position,
                    }),

                    Segment::Token(token) if !schema.contains(&token.name) => {
                        errors.push(ValidationError {
                            kind: ValidationErrorKind::UnknownToken(token.name.clone()),
                            line,
                            position: token.position,
                        })
                    }

                    _ => {}
                }
            }
        }

        errors
    }
}

/// 一次性校验模板
pub fn validate(template: &str, schema: &Schema) -> Vec<ValidationError> {
    Template::parse(template).validate(schema)
}
