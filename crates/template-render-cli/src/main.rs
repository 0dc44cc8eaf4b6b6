//! template-render 命令行终端

mod utils;

use std::fs;

use anyhow::Context;
use template_render::{Schema, Template, TokenDef, Values};

use crate::utils::*;

const GIT_REPOSITORY: &str = "https://github.com/fltLi/template-render";

/// 演示 Schema
///
/// date 通过变换函数从整组取值格式化, 其余 Token 直接取同名字符串.
fn demo_schema() -> Schema {
    let mut schema = Schema::new();

    schema.insert("name", TokenDef::default());
    schema.insert("place", TokenDef::default());
    schema.insert("tag1", TokenDef::default());
    schema.insert("tag2", TokenDef::default());

    schema.insert(
        "date",
        TokenDef::with_transform(|values| {
            // 取 2024-05-17 形式的日期串, 展示为斜杠分隔
            match values.get("date").and_then(|v| v.as_str()) {
                Some(date) => date.replace('-', "/"),
                None => String::new(),
            }
        }),
    );

    schema
}

/// 单次工作
fn run() -> anyhow::Result<()> {
    println!();

    let template_path = readln! {"template"};
    let values_path = readln! {"values"};

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template: {template_path}"))?;

    let values: Values = serde_json::from_str(
        &fs::read_to_string(&values_path)
            .with_context(|| format!("failed to read values: {values_path}"))?,
    )
    .context("values should be a json object")?;

    let schema = demo_schema();
    let parsed = Template::parse(&template);

    // 校验
    println!("validating...");
    try_show_errors(parsed.validate(&schema));

    println!();
    flush! {};

    // 填充
    println!("rendering...");
    let (text, errors) = parsed.render(&schema, &values);
    try_show_errors(errors);

    println!("result:\n{text}");

    pause! {};
    Ok(())
}

fn main() {
    println!("template-render-cli\n{GIT_REPOSITORY}");
    flush! {};

    loop {
        if let Err(e) = run() {
            println!("error: {e:#}");
            flush! {};
        }
    }
}
