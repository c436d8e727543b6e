//! The recursive renderer from markup nodes to output primitives.
//!
//! Nodes are visited depth-first in document order. Each element hands its
//! resolved style down to its children as their inherited style; there is
//! no further cascade.

use crate::image::ImageSizer;
use crate::math_svg::MathSvgAdapter;
use crate::options::RenderOptions;
use crate::table::TableExtractor;
use crate::text::normalize_text;
use log::{debug, trace};
use mathtext_idf::{Element, Node, Primitive, VectorGraphic};
use mathtext_style::{DeclarationParser, StyleMap, StyleSanitizer, Transform};

/// Smallest base size a superscript or subscript is drawn at.
pub const MIN_SCRIPT_FONT_SIZE: f32 = 8.0;
/// Superscript shift as a fraction of the script size (upwards).
pub const SUPERSCRIPT_SHIFT: f32 = -0.7;
/// Subscript shift as a fraction of the script size (downwards).
pub const SUBSCRIPT_SHIFT: f32 = 0.4;

/// Built-in styles of formatting tags. Declared CSS wins over these.
pub fn tag_default_style(tag: &str) -> StyleMap {
    match tag {
        "u" | "ins" => StyleMap::new().with("textDecorationLine", "underline"),
        "s" | "del" => StyleMap::new().with("textDecorationLine", "line-through"),
        "b" | "strong" => StyleMap::new().with("fontWeight", "bold"),
        "i" | "em" | "cite" | "dfn" => StyleMap::new().with("fontStyle", "italic"),
        "mark" => StyleMap::new().with("backgroundColor", "yellow"),
        "small" => StyleMap::new().with("fontSize", 10.0),
        _ => StyleMap::new(),
    }
}

/// Style of the run emitted for `<br>`: full width, zero height.
pub fn line_break_style() -> StyleMap {
    StyleMap::new()
        .with("width", "100%")
        .with("overflow", "hidden")
        .with("height", 0.0)
}

/// What a node inherits from its ancestors.
#[derive(Debug, Clone, Default)]
struct RenderContext {
    /// Resolved style of the nearest element ancestor.
    style: StyleMap,
    /// Whether any ancestor is a `pre`.
    in_pre: bool,
}

impl RenderContext {
    fn child(&self, style: StyleMap, tag: &str) -> Self {
        Self {
            style,
            in_pre: self.in_pre || tag == "pre",
        }
    }
}

pub struct DocumentTreeWalker<'a> {
    options: &'a RenderOptions,
    sanitizer: StyleSanitizer<'a>,
    declarations: &'a dyn DeclarationParser,
}

impl<'a> DocumentTreeWalker<'a> {
    pub fn new(
        options: &'a RenderOptions,
        sanitizer: StyleSanitizer<'a>,
        declarations: &'a dyn DeclarationParser,
    ) -> Self {
        Self {
            options,
            sanitizer,
            declarations,
        }
    }

    /// Renders a sequence of top-level nodes.
    pub fn walk(&self, nodes: &[Node]) -> Vec<Primitive> {
        let mut out = Vec::new();
        let root = RenderContext::default();
        for node in nodes {
            self.render_node(node, &root, &mut out);
        }
        out
    }

    fn render_node(&self, node: &Node, ctx: &RenderContext, out: &mut Vec<Primitive>) {
        trace!("Rendering {} node {:?}", node.kind(), node.tag());
        match node {
            Node::Text { value } => {
                if let Some(text) = normalize_text(value, ctx.in_pre, self.options) {
                    out.push(Primitive::text_run(text, self.text_style(&ctx.style)));
                }
            }
            Node::LineBreak => {
                let style = self.options.base_text_style().merged(&line_break_style());
                out.push(Primitive::text_run("\n", style));
            }
            Node::Image { attributes } => {
                let sizer = ImageSizer::new(self.sanitizer.responsive(), self.declarations);
                out.push(Primitive::Image(sizer.resolve(attributes)));
            }
            Node::Table { children } => {
                let table = TableExtractor.extract(children);
                out.push(Primitive::Table(table.into_widget()));
            }
            Node::MathContainer { svg } => {
                let adapter = MathSvgAdapter::new(self.options.font_size, &self.options.color);
                out.push(Primitive::VectorGraphic(VectorGraphic {
                    svg: adapter.adapt(svg),
                    horizontal_scroll: true,
                }));
            }
            Node::Comment { .. } => {}
            Node::Element(element) => {
                let tag = element.tag_name();
                match tag.as_str() {
                    "br" | "img" | "table" => {
                        let routed = Node::from_element(element.clone());
                        self.render_node(&routed, ctx, out);
                    }
                    "p" => out.push(self.render_paragraph(element, ctx)),
                    _ => self.render_element(element, &tag, ctx, out),
                }
            }
        }
    }

    /// Text runs start from the base text style; the inherited style is
    /// restricted to text-safe properties so block styles never leak into a
    /// run.
    fn text_style(&self, inherited: &StyleMap) -> StyleMap {
        self.options
            .base_text_style()
            .merged(&self.sanitizer.text_safe(inherited))
    }

    /// The element's own CSS and its tag defaults, sanitized for its tag.
    fn resolve_style(&self, element: &Element, tag: &str) -> StyleMap {
        let declared = element
            .style
            .as_deref()
            .map(|css| self.declarations.parse_declarations(css))
            .unwrap_or_default();
        let merged = tag_default_style(tag).merged(&declared);
        self.sanitizer.map_style(tag, &merged)
    }

    /// A paragraph becomes a wrapping, baseline-aligned row whose children
    /// are laid out as its flex items.
    fn render_paragraph(&self, element: &Element, ctx: &RenderContext) -> Primitive {
        let own = self.resolve_style(element, "p");
        let style = StyleMap::new()
            .with("flexDirection", "row")
            .with("flexWrap", "wrap")
            .with("alignItems", "baseline")
            .merged(&own);

        let child_ctx = ctx.child(own, "p");
        let mut children = Vec::new();
        for child in &element.children {
            self.render_node(child, &child_ctx, &mut children);
        }
        Primitive::container(style, children)
    }

    fn render_element(
        &self,
        element: &Element,
        tag: &str,
        ctx: &RenderContext,
        out: &mut Vec<Primitive>,
    ) {
        if element.children.is_empty() {
            debug!("Skipping empty <{}>", tag);
            return;
        }

        let mut style = self.resolve_style(element, tag);
        if let Some(shift) = script_shift(tag) {
            let size = self
                .sanitizer
                .scale_font(self.options.font_size.round().max(MIN_SCRIPT_FONT_SIZE));
            style.insert("fontSize", size);
            style.insert("transform", vec![Transform::TranslateY(size * shift)]);
        }

        let child_ctx = ctx.child(style, tag);
        for child in &element.children {
            self.render_node(child, &child_ctx, out);
        }
    }
}

fn script_shift(tag: &str) -> Option<f32> {
    match tag {
        "sup" => Some(SUPERSCRIPT_SHIFT),
        "sub" => Some(SUBSCRIPT_SHIFT),
        _ => None,
    }
}
