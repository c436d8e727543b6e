//! Renders typeset markup trees into sanitized trees of UI primitives for
//! hosts that separate inline text from layout boxes.

pub mod error;
pub mod image;
pub mod math_svg;
pub mod options;
pub mod preprocess;
pub mod renderer;
pub mod table;
pub mod text;
pub mod typesetter;
pub mod walker;

pub use error::PipelineError;
pub use image::ImageSizer;
pub use math_svg::{MathSvgAdapter, SvgDimensions, svg_dimensions};
pub use options::{FontCache, RenderOptions};
pub use preprocess::preprocess_markup;
pub use renderer::MarkupRenderer;
pub use table::{ExtractedTable, TableExtractor};
pub use text::{decode_entities, normalize_text};
pub use typesetter::{Delimiters, JsonNodeTypesetter, TypesetOptions, Typesetter};
pub use walker::DocumentTreeWalker;

pub use mathtext_idf::{Attributes, Element, ImageWidget, Node, Primitive, TableWidget, VectorGraphic};
pub use mathtext_style::{
    CssDeclarationParser, DeclarationParser, ResponsiveMetrics, StyleMap, StylePolicy,
    StyleSanitizer, StyleValue, TagPolicy, Transform,
};
pub use mathtext_traits::{FixedMetrics, MetricsProvider, SharedMetrics};
pub use mathtext_types::{Platform, Size, Viewport};
