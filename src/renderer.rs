//! The entry point: raw markup in, primitive tree out.

use crate::options::RenderOptions;
use crate::preprocess::preprocess_markup;
use crate::typesetter::{TypesetOptions, Typesetter};
use crate::walker::DocumentTreeWalker;
use log::debug;
use mathtext_idf::{Node, Primitive};
use mathtext_style::{CssDeclarationParser, DeclarationParser, StylePolicy, StyleSanitizer};
use mathtext_traits::SharedMetrics;

/// Renders markup through a typesetter into a single root flow container.
///
/// Every render builds a fresh tree and queries the metrics provider anew,
/// so viewport changes show up on the next call.
pub struct MarkupRenderer<T: Typesetter> {
    typesetter: T,
    metrics: SharedMetrics,
    options: RenderOptions,
    policy: StylePolicy,
    declarations: Box<dyn DeclarationParser>,
}

impl<T: Typesetter> MarkupRenderer<T> {
    pub fn new(typesetter: T, metrics: SharedMetrics) -> Self {
        Self {
            typesetter,
            metrics,
            options: RenderOptions::default(),
            policy: StylePolicy::default(),
            declarations: Box::new(CssDeclarationParser),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_policy(mut self, policy: StylePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_declaration_parser(mut self, parser: Box<dyn DeclarationParser>) -> Self {
        self.declarations = parser;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Preprocesses and typesets `markup`, then renders the result.
    ///
    /// Empty markup renders an empty root without invoking the typesetter.
    /// Typesetter failures are returned unchanged.
    pub fn render(&self, markup: &str) -> Result<Primitive, T::Error> {
        if markup.is_empty() {
            return Ok(Primitive::container(self.options.root_style(), Vec::new()));
        }

        let cleaned = preprocess_markup(markup, &self.options);
        let nodes = self
            .typesetter
            .typeset(&cleaned, &TypesetOptions::from(&self.options))?;
        debug!("Typesetter returned {} top-level nodes", nodes.len());
        Ok(self.render_nodes(&nodes))
    }

    /// Renders an already typeset node tree.
    pub fn render_nodes(&self, nodes: &[Node]) -> Primitive {
        debug!(
            "Rendering {} nodes against {} ({:?})",
            nodes.len(),
            self.metrics.name(),
            self.metrics.platform()
        );
        let sanitizer = StyleSanitizer::new(
            &self.policy,
            self.metrics.as_ref(),
            self.options.responsive_font_size,
        );
        let walker = DocumentTreeWalker::new(&self.options, sanitizer, self.declarations.as_ref());
        Primitive::container(self.options.root_style(), walker.walk(nodes))
    }
}
