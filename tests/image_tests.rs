mod common;

use common::fixtures::*;
use common::*;
use mathtext::{ImageWidget, Primitive, RenderOptions, SharedMetrics};
use serde_json::json;

fn render_image(src: &str, style: Option<&str>, metrics: SharedMetrics) -> ImageWidget {
    let root = render_with(json!([image(src, style)]), RenderOptions::default(), metrics);
    match &root_children(&root)[0] {
        Primitive::Image(widget) => widget.clone(),
        other => panic!("expected image, got {:?}", other),
    }
}

#[test]
fn test_wide_image_is_clamped_with_aspect_ratio() {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_image("a.png", Some("width: 600px; height: 300px"), ios_metrics());
    assert_eq!(widget.width, 300.0);
    assert_eq!(widget.height, Some(150.0));
    assert_eq!(widget.src.as_deref(), Some("a.png"));
}

#[test]
fn test_fallback_width() {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_image("a.png", None, ios_metrics());
    assert_eq!(widget.width, 243.75);
    assert_eq!(widget.height, None);
}

#[test]
fn test_percentage_width_uses_viewport() {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_image("a.png", Some("width: 40%"), android_metrics(500.0, 900.0, 24.0));
    assert_eq!(widget.width, 200.0);
}

#[test]
fn test_web_uses_reference_width() {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_image("a.png", Some("width: 100%"), web_metrics());
    assert_eq!(widget.width, 300.0);
}

#[test]
fn test_inch_width() {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_image("a.png", Some("width: 1.5in; height: 1in"), ios_metrics());
    assert_eq!(widget.width, 144.0);
    assert_eq!(widget.height, Some(96.0));
}

#[test]
fn test_missing_src() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = render(json!([{ "kind": "image", "attributes": {} }]));
    match &root_children(&root)[0] {
        Primitive::Image(widget) => assert_eq!(widget.src, None),
        other => panic!("expected image, got {:?}", other),
    }
}
