use serde_json::{Value, json};

/// A text node
pub fn text(value: &str) -> Value {
    json!({ "kind": "text", "value": value })
}

/// A generic element with children
pub fn element(tag: &str, children: Vec<Value>) -> Value {
    json!({ "kind": "element", "tag": tag, "children": children })
}

/// A generic element with an inline style declaration
pub fn styled(tag: &str, css: &str, children: Vec<Value>) -> Value {
    json!({ "kind": "element", "tag": tag, "style": css, "children": children })
}

pub fn paragraph(children: Vec<Value>) -> Value {
    element("p", children)
}

pub fn line_break() -> Value {
    json!({ "kind": "line-break" })
}

pub fn comment(value: &str) -> Value {
    json!({ "kind": "comment", "value": value })
}

/// An image, optionally with a style attribute
pub fn image(src: &str, style: Option<&str>) -> Value {
    let mut attributes = json!({ "src": src });
    if let Some(css) = style {
        attributes["style"] = json!(css);
    }
    json!({ "kind": "image", "attributes": attributes })
}

pub fn table(children: Vec<Value>) -> Value {
    json!({ "kind": "table", "children": children })
}

pub fn thead(rows: Vec<Value>) -> Value {
    element("thead", rows)
}

pub fn tbody(rows: Vec<Value>) -> Value {
    element("tbody", rows)
}

/// A row of `td` cells holding plain text
pub fn table_row(cells: &[&str]) -> Value {
    element("tr", cells.iter().map(|c| element("td", vec![text(c)])).collect())
}

pub fn math(svg: &str) -> Value {
    json!({ "kind": "math-container", "svg": svg })
}

/// A typical inline formula fragment
pub fn formula_svg() -> &'static str {
    r##"<svg style="vertical-align: -0.025ex;" xmlns="http://www.w3.org/2000/svg" width="1.294ex" height="1.025ex" role="img" focusable="false" viewBox="0 -442 572 453" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><path id="MJX-1-TEX-I-1D465" d="M52 289Q59 331"></path></defs><g stroke="currentColor" fill="currentColor" stroke-width="0" transform="scale(1,-1)"><g data-mml-node="math"><g data-mml-node="mi"><use data-c="1D465" xlink:href="#MJX-1-TEX-I-1D465"></use></g></g></g></svg>"##
}
