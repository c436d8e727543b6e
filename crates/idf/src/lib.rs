//! Intermediate Document Format (IDF)
//! This crate defines both trees the renderer works with: the parsed markup
//! tree handed over by the typesetter, and the tree of UI primitives handed
//! to the host surface.

use mathtext_style::StyleMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- Shared Types ---

/// A string type for the document.
pub type TextStr = String;

/// Attribute name → value, as delivered by the markup parser.
pub type Attributes = BTreeMap<TextStr, TextStr>;

// --- Input Tree ---

/// A generic markup element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: TextStr,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
    /// The raw CSS declaration string, if the element carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<TextStr>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, css: impl Into<TextStr>) -> Self {
        self.style = Some(css.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<TextStr>, value: impl Into<TextStr>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Lower-cased tag name.
    pub fn tag_name(&self) -> TextStr {
        self.tag.to_lowercase()
    }
}

/// A node of the parsed markup tree, discriminated by `kind`.
///
/// Only non-text nodes carry children or styles. Deserialized elements are
/// routed through [`Node::from_element`], so `{"kind": "element", "tag": "br"}`
/// arrives as a line break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", from = "WireNode")]
pub enum Node {
    /// A run of raw, possibly entity-encoded text.
    Text { value: TextStr },
    /// Any tag without a dedicated variant.
    Element(Element),
    /// `<br>`.
    LineBreak,
    /// `<img>`; `src` and `style` are read from the attributes.
    Image {
        #[serde(default)]
        attributes: Attributes,
    },
    /// `<table>`; children are row groups and/or rows.
    Table {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// A typeset math fragment, already laid out as SVG.
    MathContainer { svg: TextStr },
    Comment {
        #[serde(default)]
        value: TextStr,
    },
}

/// Deserialization shape of [`Node`] before tag routing.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum WireNode {
    Text {
        value: TextStr,
    },
    Element(Element),
    LineBreak,
    Image {
        #[serde(default)]
        attributes: Attributes,
    },
    Table {
        #[serde(default)]
        children: Vec<Node>,
    },
    MathContainer {
        svg: TextStr,
    },
    Comment {
        #[serde(default)]
        value: TextStr,
    },
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        match wire {
            WireNode::Text { value } => Node::Text { value },
            WireNode::Element(element) => Node::from_element(element),
            WireNode::LineBreak => Node::LineBreak,
            WireNode::Image { attributes } => Node::Image { attributes },
            WireNode::Table { children } => Node::Table { children },
            WireNode::MathContainer { svg } => Node::MathContainer { svg },
            WireNode::Comment { value } => Node::Comment { value },
        }
    }
}

impl Node {
    pub fn text(value: impl Into<TextStr>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn comment(value: impl Into<TextStr>) -> Self {
        Node::Comment {
            value: value.into(),
        }
    }

    pub fn math(svg: impl Into<TextStr>) -> Self {
        Node::MathContainer { svg: svg.into() }
    }

    pub fn image(src: impl Into<TextStr>) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert("src".to_string(), src.into());
        Node::Image { attributes }
    }

    /// Routes a parsed tag to its variant: `br`, `img` and `table` get their
    /// own kinds, everything else is a generic element.
    pub fn from_element(element: Element) -> Self {
        match element.tag_name().as_str() {
            "br" => Node::LineBreak,
            "img" => {
                let mut attributes = element.attributes;
                if let Some(style) = element.style {
                    attributes.entry("style".to_string()).or_insert(style);
                }
                Node::Image { attributes }
            }
            "table" => Node::Table {
                children: element.children,
            },
            _ => Node::Element(element),
        }
    }

    /// Shorthand for `Node::from_element(Element::new(tag).with_children(children))`.
    pub fn element(tag: impl Into<TextStr>, children: Vec<Node>) -> Self {
        Node::from_element(Element::new(tag).with_children(children))
    }

    /// The tag name for element-like nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(e) => Some(e.tag.as_str()),
            Node::LineBreak => Some("br"),
            Node::Image { .. } => Some("img"),
            Node::Table { .. } => Some("table"),
            Node::MathContainer { .. } => Some("mjx-container"),
            Node::Text { .. } | Node::Comment { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Table { children } => children,
            _ => &[],
        }
    }

    /// Returns a string identifier for the node kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Text { .. } => "text",
            Node::Element(_) => "element",
            Node::LineBreak => "line-break",
            Node::Image { .. } => "image",
            Node::Table { .. } => "table",
            Node::MathContainer { .. } => "math-container",
            Node::Comment { .. } => "comment",
        }
    }
}

// --- Output Tree ---

/// A self-sizing image: the host derives the height from the intrinsic
/// aspect ratio unless `height` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWidget {
    pub src: Option<TextStr>,
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// A fixed-column table inside a horizontal scroller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableWidget {
    pub header: Vec<TextStr>,
    pub rows: Vec<Vec<TextStr>>,
    pub column_widths: Vec<f32>,
    /// Sum of `column_widths`; the inner width of the scroller.
    pub total_width: f32,
    pub border_color: TextStr,
    pub header_background: TextStr,
    pub horizontal_scroll: bool,
}

/// An SVG fragment drawn by the host's vector-graphics primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorGraphic {
    pub svg: TextStr,
    pub horizontal_scroll: bool,
}

/// An output primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Primitive {
    /// Inline text.
    TextRun { text: TextStr, style: StyleMap },
    /// A layout box with ordered children.
    FlowContainer {
        style: StyleMap,
        children: Vec<Primitive>,
    },
    Image(ImageWidget),
    Table(TableWidget),
    VectorGraphic(VectorGraphic),
}

impl Primitive {
    pub fn text_run(text: impl Into<TextStr>, style: StyleMap) -> Self {
        Primitive::TextRun {
            text: text.into(),
            style,
        }
    }

    pub fn container(style: StyleMap, children: Vec<Primitive>) -> Self {
        Primitive::FlowContainer { style, children }
    }

    pub fn children(&self) -> &[Primitive] {
        match self {
            Primitive::FlowContainer { children, .. } => children,
            _ => &[],
        }
    }

    pub fn style(&self) -> Option<&StyleMap> {
        match self {
            Primitive::TextRun { style, .. } | Primitive::FlowContainer { style, .. } => {
                Some(style)
            }
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Primitive::TextRun { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Pre-order traversal including `self`.
    pub fn descendants(&self) -> Vec<&Primitive> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Every text run in document order.
    pub fn text_runs(&self) -> Vec<&Primitive> {
        self.descendants()
            .into_iter()
            .filter(|p| matches!(p, Primitive::TextRun { .. }))
            .collect()
    }

    /// Returns a string identifier for the primitive type.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::TextRun { .. } => "text-run",
            Primitive::FlowContainer { .. } => "flow-container",
            Primitive::Image(_) => "image",
            Primitive::Table(_) => "table",
            Primitive::VectorGraphic(_) => "vector-graphic",
        }
    }
}
