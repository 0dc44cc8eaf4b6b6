//! 测试模板填充

use serde_json::json;
use template_render::*;

/// 从 JSON 字面量构造取值集合
fn values_of(value: serde_json::Value) -> Values {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expect json object"),
    }
}

/// 构造无变换函数的 Schema
fn schema_of(names: &[&str]) -> Schema {
    let mut schema = Schema::new();
    for name in names {
        schema.insert(*name, TokenDef::default());
    }
    schema
}

//////////////// test ////////////////

#[test]
fn test_end_to_end() {
    let template = "Hello {name John Doe}, welcome to {place the world}!\n\
                    This is line 2 with {tag1 arg1} and {tag2 arg2 with spaces}.";
    let schema = schema_of(&["name", "place", "tag1", "tag2"]);
    let values = values_of(json!({
        "name": "Alice",
        "place": "Wonderland",
        "tag1": "TagOne",
        "tag2": "TagTwo",
    }));

    let (text, errors) = render(template, &schema, &values);
    assert!(errors.is_empty());
    assert_eq!(
        text,
        "Hello Alice, welcome to Wonderland!\nThis is line 2 with TagOne and TagTwo."
    );
}

#[test]
fn test_string_value_verbatim() {
    let (text, errors) = render(
        "hi {name}",
        &schema_of(&["name"]),
        &values_of(json!({"name": "Alice"})),
    );

    assert!(errors.is_empty());
    assert_eq!(text, "hi Alice");
}

#[test]
fn test_unknown_token_passthrough() {
    let schema = Schema::new();
    let values = Values::new();
    let template = "keep {x} and {y some arg}";

    let (text, errors) = render(template, &schema, &values);
    assert!(errors.is_empty());
    assert_eq!(text, template);

    // 原样保留的 Token 重解析后保持不变
    let (again, _) = render(&text, &schema, &values);
    assert_eq!(again, text);
}

#[test]
fn test_transform_combines_values() {
    let mut schema = Schema::new();
    schema.insert(
        "date",
        TokenDef::with_transform(|values| {
            format!("{}-{}-{}", values["year"], values["month"], values["day"])
        }),
    );

    // 变换函数接收完整取值集合, 可组合多个字段
    let values = values_of(json!({"year": 2024, "month": 5, "day": 17}));
    let (text, errors) = render("today: {date}", &schema, &values);

    assert!(errors.is_empty());
    assert_eq!(text, "today: 2024-5-17");
}

#[test]
fn test_missing_value_reported() {
    let (text, errors) = render("hi {name}", &schema_of(&["name"]), &Values::new());

    // 缺失取值: 输出空串, 同时上报错误
    assert_eq!(text, "hi ");
    assert_eq!(
        errors,
        vec![RenderError {
            kind: RenderErrorKind::MissingValue("name".to_string()),
            line: 0,
            position: 3,
        }]
    );
}

#[test]
fn test_non_string_value_stringified() {
    let (text, errors) = render(
        "{count} items",
        &schema_of(&["count"]),
        &values_of(json!({"count": 3})),
    );

    // 非字符串取值: 降级为 JSON 序列化, 同时上报错误
    assert_eq!(text, "3 items");
    assert_eq!(
        errors,
        vec![RenderError {
            kind: RenderErrorKind::NonStringValue("count".to_string()),
            line: 0,
            position: 0,
        }]
    );
}

#[test]
fn test_error_segment_inline() {
    let (text, errors) = render("bad {oops", &Schema::new(), &Values::new());

    // 解析错误内联为可见文本, 不中断填充
    assert_eq!(text, "bad {oopsERROR: Unclosed token");
    assert!(errors.is_empty());
}

#[test]
fn test_custom_delimiter() {
    let template = Template::parse("a\nb\nc");
    let (text, _) = template.render_with_delimiter(&Schema::new(), &Values::new(), " | ");

    assert_eq!(text, "a | b | c");
}

#[test]
fn test_escaped_braces_render_as_text() {
    let (text, errors) = render(
        r"\{name\}",
        &schema_of(&["name"]),
        &values_of(json!({"name": "Alice"})),
    );

    // 转义括号是文本, 不参与取值
    assert!(errors.is_empty());
    assert_eq!(text, "{name}");
}
