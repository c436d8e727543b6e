//! The seam to the math typesetting engine.
//!
//! The engine parses markup, typesets the math it finds and hands back the
//! resulting node tree with every formula already laid out as SVG.

use crate::options::{FontCache, RenderOptions};
use mathtext_idf::Node;

/// An opening/closing math delimiter pair, e.g. `("$", "$")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Options forwarded to the typesetter on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct TypesetOptions {
    pub inline_delimiters: Vec<Delimiters>,
    pub display_delimiters: Vec<Delimiters>,
    /// Whether `\$` produces a literal dollar sign.
    pub process_escapes: bool,
    pub font_cache: FontCache,
}

impl Default for TypesetOptions {
    fn default() -> Self {
        Self {
            inline_delimiters: vec![Delimiters::new("$", "$"), Delimiters::new("\\(", "\\)")],
            display_delimiters: vec![Delimiters::new("$$", "$$"), Delimiters::new("\\[", "\\]")],
            process_escapes: true,
            font_cache: FontCache::None,
        }
    }
}

impl From<&RenderOptions> for TypesetOptions {
    fn from(options: &RenderOptions) -> Self {
        Self {
            font_cache: options.font_cache,
            ..Default::default()
        }
    }
}

/// Parses and typesets markup into a node tree.
///
/// Failures are the engine's own and are handed back to the caller as-is.
pub trait Typesetter {
    type Error: std::error::Error + Send + Sync + 'static;

    fn typeset(&self, markup: &str, options: &TypesetOptions) -> Result<Vec<Node>, Self::Error>;
}

/// A typesetter for input that was already typeset elsewhere and serialized
/// as a JSON node array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNodeTypesetter;

impl Typesetter for JsonNodeTypesetter {
    type Error = serde_json::Error;

    fn typeset(&self, markup: &str, _options: &TypesetOptions) -> Result<Vec<Node>, Self::Error> {
        serde_json::from_str(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_font_cache() {
        let options = RenderOptions::default().with_font_cache(FontCache::Local);
        let typeset = TypesetOptions::from(&options);
        assert_eq!(typeset.font_cache, FontCache::Local);
        assert_eq!(typeset.inline_delimiters[0], Delimiters::new("$", "$"));
        assert_eq!(typeset.display_delimiters[1], Delimiters::new("\\[", "\\]"));
        assert!(typeset.process_escapes);
    }

    #[test]
    fn test_json_typesetter() {
        let nodes = JsonNodeTypesetter
            .typeset(r#"[{ "kind": "text", "value": "hi" }]"#, &TypesetOptions::default())
            .unwrap();
        assert_eq!(nodes, vec![Node::text("hi")]);

        assert!(JsonNodeTypesetter.typeset("<p>", &TypesetOptions::default()).is_err());
    }
}
