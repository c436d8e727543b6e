//! Tag classification and the property allow-lists that go with it.
//!
//! A host surface that separates inline text from layout boxes cannot accept
//! box properties on a text run. `StylePolicy` decides, per tag, which
//! properties survive.

use std::collections::HashSet;

/// Inline-text-safe properties.
pub const TEXT_SAFE_PROPERTIES: &[&str] = &[
    "color",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "fontVariant",
    "textShadowOffset",
    "textShadowRadius",
    "textShadowColor",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textAlignVertical",
    "includeFontPadding",
    "textDecoration",
    "textDecorationLine",
    "textDecorationStyle",
    "textDecorationColor",
    "textTransform",
    "writingDirection",
    "backgroundColor",
    "opacity",
    "marginLeft",
    "marginRight",
    "marginHorizontal",
    "paddingLeft",
    "paddingRight",
    "paddingHorizontal",
    "transform",
];

/// Box/layout properties. A few horizontal spacing properties and
/// `transform` appear in both lists; text-safety takes precedence.
pub const LAYOUT_PROPERTIES: &[&str] = &[
    "display",
    "width",
    "height",
    "start",
    "end",
    "top",
    "left",
    "right",
    "bottom",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "margin",
    "marginVertical",
    "marginHorizontal",
    "marginTop",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginStart",
    "marginEnd",
    "padding",
    "paddingVertical",
    "paddingHorizontal",
    "paddingTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingStart",
    "paddingEnd",
    "borderWidth",
    "borderTopWidth",
    "borderStartWidth",
    "borderEndWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "position",
    "flexDirection",
    "flexWrap",
    "justifyContent",
    "alignItems",
    "alignSelf",
    "alignContent",
    "overflow",
    "flex",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "aspectRatio",
    "zIndex",
    "direction",
    "shadowColor",
    "shadowOffset",
    "shadowOpacity",
    "shadowRadius",
    "transform",
    "transformMatrix",
    "decomposedMatrix",
    "scaleX",
    "scaleY",
    "rotation",
    "translateX",
    "translateY",
    "elevation",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderStartColor",
    "borderEndColor",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopStartRadius",
    "borderTopEndRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomStartRadius",
    "borderBottomEndRadius",
    "borderStyle",
];

/// Tags that may carry layout properties.
pub const BLOCK_TAGS: &[&str] = &[
    "div",
    "p",
    "section",
    "article",
    "header",
    "footer",
    "main",
    "aside",
    "nav",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "li",
    "table",
    "thead",
    "tbody",
    "tr",
    "td",
    "th",
    "figure",
    "figcaption",
    "blockquote",
    "pre",
];

/// Tags that must stay inline text.
pub const INLINE_TEXT_TAGS: &[&str] = &[
    "span", "b", "strong", "i", "em", "u", "s", "sub", "sup", "code", "small", "big", "a",
];

/// Properties that honour percentages on block containers.
pub const BLOCK_PERCENT_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "top",
    "bottom",
    "left",
    "right",
    "margin",
    "marginBottom",
    "marginTop",
    "marginLeft",
    "marginRight",
    "marginHorizontal",
    "marginVertical",
    "padding",
    "paddingBottom",
    "paddingTop",
    "paddingLeft",
    "paddingRight",
    "paddingHorizontal",
    "paddingVertical",
];

/// The style classification of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagPolicy {
    InlineText,
    BlockContainer,
    Unknown,
}

impl TagPolicy {
    /// Unknown tags get the inline policy, so only block containers may
    /// carry layout properties.
    pub fn allows_layout(&self) -> bool {
        matches!(self, TagPolicy::BlockContainer)
    }
}

/// Which partition of the property universe a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyClass {
    TextSafe,
    LayoutOnly,
    Unknown,
}

/// Injectable policy tables.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePolicy {
    block_tags: HashSet<String>,
    inline_tags: HashSet<String>,
    text_safe: HashSet<String>,
    layout: HashSet<String>,
    block_percent: HashSet<String>,
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            block_tags: to_set(BLOCK_TAGS),
            inline_tags: to_set(INLINE_TEXT_TAGS),
            text_safe: to_set(TEXT_SAFE_PROPERTIES),
            layout: to_set(LAYOUT_PROPERTIES),
            block_percent: to_set(BLOCK_PERCENT_PROPERTIES),
        }
    }
}

impl StylePolicy {
    /// Classifies a tag name, case-insensitively.
    pub fn classify(&self, tag: &str) -> TagPolicy {
        let tag = tag.trim().to_lowercase();
        if self.block_tags.contains(&tag) {
            TagPolicy::BlockContainer
        } else if self.inline_tags.contains(&tag) {
            TagPolicy::InlineText
        } else {
            TagPolicy::Unknown
        }
    }

    pub fn classify_property(&self, property: &str) -> PropertyClass {
        if self.text_safe.contains(property) {
            PropertyClass::TextSafe
        } else if self.layout.contains(property) {
            PropertyClass::LayoutOnly
        } else {
            PropertyClass::Unknown
        }
    }

    pub fn is_text_safe(&self, property: &str) -> bool {
        self.text_safe.contains(property)
    }

    /// Percentages are honoured only on block containers, and only for the
    /// block percentage allow-list.
    pub fn percent_allowed(&self, tag: &str, property: &str) -> bool {
        self.classify(tag).allows_layout() && self.block_percent.contains(property)
    }

    pub fn with_block_tag(mut self, tag: &str) -> Self {
        let tag = tag.to_lowercase();
        self.inline_tags.remove(&tag);
        self.block_tags.insert(tag);
        self
    }

    pub fn with_inline_tag(mut self, tag: &str) -> Self {
        let tag = tag.to_lowercase();
        self.block_tags.remove(&tag);
        self.inline_tags.insert(tag);
        self
    }
}
