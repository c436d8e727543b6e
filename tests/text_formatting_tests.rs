mod common;

use common::fixtures::*;
use common::*;
use mathtext::{Primitive, RenderOptions, StyleValue, Transform};
use serde_json::json;

fn translate_y(run: &Primitive) -> Option<f32> {
    match style_of(run).get("transform") {
        Some(StyleValue::Transform(ops)) => ops.iter().find_map(|op| match op {
            Transform::TranslateY(y) => Some(*y),
            _ => None,
        }),
        _ => None,
    }
}

#[test]
fn test_superscript_and_subscript() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([
        text("x"),
        element("sup", vec![text("2")]),
        text("a"),
        element("sub", vec![text("i")]),
    ]));
    let runs = root_children(&root);
    assert_eq!(runs.len(), 4);

    let base = style_of(&runs[0]).font_size().unwrap();
    let sup = style_of(&runs[1]).font_size().unwrap();
    let sub = style_of(&runs[3]).font_size().unwrap();
    assert!(sup < base);
    assert_eq!(sup, sub);
    assert_eq!(sup, 14.0);

    let up = translate_y(&runs[1]).unwrap();
    let down = translate_y(&runs[3]).unwrap();
    assert!(up < 0.0);
    assert!(down > 0.0);
    assert_ne!(up.abs(), down.abs());
    assert!((up - -9.8).abs() < 1e-4);
    assert!((down - 5.6).abs() < 1e-4);
    assert_eq!(translate_y(&runs[0]), None);
}

#[test]
fn test_script_size_has_a_floor() {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = RenderOptions::default().with_font_size(5.0);
    let root = render_with(
        json!([element("sup", vec![text("n")])]),
        options,
        ios_metrics(),
    );
    assert_eq!(style_of(&root_children(&root)[0]).font_size(), Some(8.0));
}

#[test]
fn test_isolated_newline_skipped() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([text("a"), text("\n"), text("b")]));
    assert_eq!(run_texts(&root), vec!["a", "b"]);
}

#[test]
fn test_isolated_newline_kept_when_disabled() {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = RenderOptions::default().with_skip_isolated_newline(false);
    let root = render_with(json!([text("\n")]), options, ios_metrics());
    assert_eq!(run_texts(&root), vec![" "]);
}

#[test]
fn test_isolated_newline_kept_inside_pre() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([element("pre", vec![text("\n")])]));
    assert_eq!(run_texts(&root), vec!["\n"]);
}

#[test]
fn test_entities_are_decoded() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([text("x &lt; y &amp;&amp; 5&nbsp;cm &#8804; z")]));
    assert_eq!(run_texts(&root), vec!["x < y && 5\u{a0}cm \u{2264} z"]);
}

#[test]
fn test_tag_defaults() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cases = [
        ("u", "textDecorationLine", StyleValue::from("underline")),
        ("ins", "textDecorationLine", StyleValue::from("underline")),
        ("s", "textDecorationLine", StyleValue::from("line-through")),
        ("del", "textDecorationLine", StyleValue::from("line-through")),
        ("strong", "fontWeight", StyleValue::from("bold")),
        ("em", "fontStyle", StyleValue::from("italic")),
        ("cite", "fontStyle", StyleValue::from("italic")),
        ("dfn", "fontStyle", StyleValue::from("italic")),
        ("mark", "backgroundColor", StyleValue::from("yellow")),
        ("small", "fontSize", StyleValue::Number(10.0)),
    ];
    for (tag, property, expected) in cases {
        let root = render(json!([element(tag, vec![text("t")])]));
        let run = &root_children(&root)[0];
        assert_eq!(style_of(run).get(property), Some(&expected), "<{}>", tag);
    }
}

#[test]
fn test_block_style_does_not_leak_into_runs() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([styled(
        "div",
        "padding: 10px; border-width: 1px; color: teal; height: 50%",
        vec![text("inside")]
    )]));
    let style = style_of(&root_children(&root)[0]);
    assert_eq!(style.get("color"), Some(&StyleValue::from("teal")));
    assert!(!style.contains_key("padding"));
    assert!(!style.contains_key("borderWidth"));
    assert!(!style.contains_key("height"));
}

#[test]
fn test_line_break_run() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([text("a"), line_break(), text("b")]));
    let runs = root_children(&root);
    assert_eq!(runs[1].as_text(), Some("\n"));
    let style = style_of(&runs[1]);
    assert_eq!(style.get("width"), Some(&StyleValue::from("100%")));
    assert_eq!(style.get("overflow"), Some(&StyleValue::from("hidden")));
    assert_eq!(style.get("height"), Some(&StyleValue::Number(0.0)));
}

#[test]
fn test_nested_paragraph_children_are_flex_items() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([paragraph(vec![
        text("one  two"),
        element("span", vec![text("three")]),
    ])]));
    let paragraph = &root_children(&root)[0];
    assert_eq!(paragraph.kind(), "flow-container");
    assert_eq!(run_texts(paragraph), vec!["one two", "three"]);
}
