mod common;

use common::fixtures::*;
use common::*;
use mathtext::{Primitive, RenderOptions, VectorGraphic, svg_dimensions};
use serde_json::json;

fn render_math(svg: &str, options: RenderOptions) -> VectorGraphic {
    let root = render_with(json!([math(svg)]), options, ios_metrics());
    match &root_children(&root)[0] {
        Primitive::VectorGraphic(graphic) => graphic.clone(),
        other => panic!("expected vector graphic, got {:?}", other),
    }
}

#[test]
fn test_formula_is_scaled_and_recolored() {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = RenderOptions::default().with_color("#336699");
    let graphic = render_math(formula_svg(), options);

    let dims = svg_dimensions(&graphic.svg);
    assert!((dims.width - 1.294 * 14.0).abs() < 1e-3);
    assert!((dims.height - 1.025 * 14.0).abs() < 1e-3);
    assert!(graphic.svg.contains(r##"stroke="#336699" fill="#336699""##));
    assert!(!graphic.svg.contains("currentColor"));
    assert!(graphic.svg.contains(r#"stroke-width="0""#));
    assert!(graphic.horizontal_scroll);
}

#[test]
fn test_font_family_is_stripped() {
    let _ = env_logger::builder().is_test(true).try_init();

    let svg = r#"<svg width="1ex" height="1ex" font-family="MJXZERO"><text font-family="serif">x</text></svg>"#;
    let graphic = render_math(svg, RenderOptions::default());
    assert!(!graphic.svg.contains("font-family"));
    assert!(graphic.svg.contains("<text >x</text>"));
}

#[test]
fn test_missing_dimensions_default_to_zero() {
    let _ = env_logger::builder().is_test(true).try_init();

    let svg = r#"<svg viewBox="0 0 10 10"><path/></svg>"#;
    let dims = svg_dimensions(svg);
    assert_eq!(dims.width, 0.0);
    assert_eq!(dims.height, 0.0);

    let graphic = render_math(svg, RenderOptions::default());
    assert_eq!(graphic.svg, svg);
}

#[test]
fn test_scale_follows_font_size() {
    let _ = env_logger::builder().is_test(true).try_init();

    let svg = r#"<svg width="2ex" height="0ex"></svg>"#;
    let graphic = render_math(svg, RenderOptions::default().with_font_size(9.0));
    assert_eq!(graphic.svg, r#"<svg width="18ex" height="0"></svg>"#);
}
