//! Schema 与取值集合

use std::collections::HashMap;

/// 填充取值集合
///
/// 调用方提供的 JSON 对象 (通常由表单等外层解码而来), 核心不做修改.
pub type Values = serde_json::Map<String, serde_json::Value>;

/// Token 变换函数
///
/// 接收完整的取值集合而非单个字段, 以便组合多个字段 (如格式化日期).
pub type Transform = Box<dyn Fn(&Values) -> String>;

/// Token 定义
#[derive(Default)]
pub struct TokenDef {
    pub transform: Option<Transform>,
}

impl TokenDef {
    /// 创建带变换函数的定义
    pub fn with_transform<F>(transform: F) -> Self
    where
        F: Fn(&Values) -> String + 'static,
    {
        Self {
            transform: Some(Box::new(transform)),
        }
    }
}

/// Token 名称到定义的映射
///
/// 未收录的名称即未知 Token.
#[derive(Default)]
pub struct Schema(HashMap<String, TokenDef>);

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Token 定义
    pub fn insert(&mut self, name: impl Into<String>, def: TokenDef) {
        self.0.insert(name.into(), def);
    }

    pub fn get(&self, name: &str) -> Option<&TokenDef> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}
