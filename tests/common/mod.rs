pub mod fixtures;

use mathtext::{
    FixedMetrics, MarkupRenderer, Node, Platform, Primitive, RenderOptions, SharedMetrics,
    StyleMap, TypesetOptions, Typesetter, Viewport,
};
use serde_json::Value;
use std::sync::Mutex;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The reference device: an iPhone-sized portrait viewport.
pub fn ios_metrics() -> SharedMetrics {
    FixedMetrics::new(Platform::Ios, Viewport::new(375.0, 812.0)).shared()
}

pub fn android_metrics(width: f32, height: f32, status_bar: f32) -> SharedMetrics {
    FixedMetrics::new(
        Platform::Android,
        Viewport::new(width, height).with_status_bar(status_bar),
    )
    .shared()
}

pub fn web_metrics() -> SharedMetrics {
    FixedMetrics::headless(Platform::Web).shared()
}

#[derive(Debug, thiserror::Error)]
#[error("malformed markup: {0}")]
pub struct TypesetFailure(pub String);

/// Stands in for the math engine: returns a canned node tree and records
/// the markup it was handed. Markup containing `\fail` is rejected.
#[derive(Debug)]
pub struct StubTypesetter {
    nodes: Vec<Node>,
    pub calls: Mutex<Vec<(String, TypesetOptions)>>,
}

impl StubTypesetter {
    pub fn new(nodes: Value) -> Self {
        Self {
            nodes: serde_json::from_value(nodes).unwrap(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_markup(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(m, _)| m.clone())
    }
}

impl Typesetter for &StubTypesetter {
    type Error = TypesetFailure;

    fn typeset(&self, markup: &str, options: &TypesetOptions) -> Result<Vec<Node>, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((markup.to_string(), options.clone()));
        if markup.contains("\\fail") {
            return Err(TypesetFailure(markup.to_string()));
        }
        Ok(self.nodes.clone())
    }
}

/// Render a JSON node array on the reference device with default options
pub fn render(nodes: Value) -> Primitive {
    render_with(nodes, RenderOptions::default(), ios_metrics())
}

pub fn render_with(nodes: Value, options: RenderOptions, metrics: SharedMetrics) -> Primitive {
    let nodes: Vec<Node> = serde_json::from_value(nodes).unwrap();
    MarkupRenderer::new(mathtext::JsonNodeTypesetter, metrics)
        .with_options(options)
        .render_nodes(&nodes)
}

/// Children of the root container
pub fn root_children(root: &Primitive) -> &[Primitive] {
    match root {
        Primitive::FlowContainer { children, .. } => children,
        other => panic!("expected root flow container, got {:?}", other),
    }
}

pub fn style_of(primitive: &Primitive) -> &StyleMap {
    primitive
        .style()
        .unwrap_or_else(|| panic!("{} has no style", primitive.kind()))
}

/// Text of every run in document order
pub fn run_texts(root: &Primitive) -> Vec<String> {
    root.text_runs()
        .iter()
        .filter_map(|p| p.as_text())
        .map(str::to_string)
        .collect()
}
