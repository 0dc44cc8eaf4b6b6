//! 行级模板格式化
//!
//! 提供 Template 完成模板字符串的解析, 填充与校验.
//!
//! 模板为按 \n 分行的文本, 其中以 {name argument} 形式嵌入 Token.
//! 填充与校验共享同一棵解析树, 对片段边界与错误位置的判断完全一致.

mod error;
mod parser;
mod render;
mod schema;
mod segment;
mod validate;

pub use error::*;
pub use parser::Template;
pub use render::render;
pub use schema::*;
pub use segment::*;
pub use validate::validate;
