pub mod declarations;
pub mod font;
pub mod parsers;
pub mod policy;
pub mod responsive;
pub mod sanitizer;
pub mod value;

pub use declarations::{CssDeclarationParser, DeclarationParser};
pub use font::{normalize_font_size, normalize_font_size_str};
pub use parsers::{Length, LengthUnit, StyleParseError};
pub use policy::{PropertyClass, StylePolicy, TagPolicy};
pub use responsive::{ResponsiveMetrics, REFERENCE_SIZE};
pub use sanitizer::StyleSanitizer;
pub use value::{StyleMap, StyleValue, Transform};
