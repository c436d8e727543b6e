//! Image sizing against the current viewport.

use log::debug;
use mathtext_idf::{Attributes, ImageWidget};
use mathtext_style::parsers::{parse_length, run_parser};
use mathtext_style::{DeclarationParser, LengthUnit, ResponsiveMetrics, StyleValue};

/// Widest an image may be, as a percentage of the viewport width.
pub const MAX_WIDTH_PERCENT: f32 = 80.0;
/// Width used when the markup declares none.
pub const FALLBACK_WIDTH_PERCENT: f32 = 65.0;
pub const PX_PER_INCH: f32 = 96.0;

#[derive(Debug, Clone, Copy)]
pub struct ImageSizer<'a> {
    responsive: ResponsiveMetrics<'a>,
    declarations: &'a dyn DeclarationParser,
}

impl<'a> ImageSizer<'a> {
    pub fn new(responsive: ResponsiveMetrics<'a>, declarations: &'a dyn DeclarationParser) -> Self {
        Self {
            responsive,
            declarations,
        }
    }

    /// Converts a declared dimension to pixels. Percentages are taken of the
    /// viewport width, inches at 96 px each; other units count as pixels.
    pub fn to_px(&self, value: &StyleValue) -> Option<f32> {
        let px = match value {
            StyleValue::Number(n) => *n,
            StyleValue::Text(raw) => {
                let length = run_parser(parse_length, raw).ok()?;
                match length.unit {
                    Some(LengthUnit::Percent) => self.responsive.scale_width(length.value),
                    Some(LengthUnit::In) => length.value * PX_PER_INCH,
                    _ => length.value,
                }
            }
            StyleValue::Transform(_) => return None,
        };
        (px.is_finite() && px > 0.0).then_some(px)
    }

    /// Builds the image widget for an `<img>` node's attributes.
    ///
    /// A declared width wider than the maximum is clamped and a declared
    /// height follows by the same ratio. Without a usable width the fallback
    /// width applies and the host derives the height.
    pub fn resolve(&self, attributes: &Attributes) -> ImageWidget {
        let src = attributes.get("src").cloned();
        if src.is_none() {
            debug!("<img> without src");
        }

        let style = attributes
            .get("style")
            .map(|css| self.declarations.parse_declarations(css))
            .unwrap_or_default();
        let declared_width = style.get("width").and_then(|v| self.to_px(v));
        let declared_height = style.get("height").and_then(|v| self.to_px(v));

        let Some(mut width) = declared_width else {
            return ImageWidget {
                src,
                width: self.responsive.scale_width(FALLBACK_WIDTH_PERCENT),
                height: None,
            };
        };

        let mut height = declared_height;
        let max_width = self.responsive.scale_width(MAX_WIDTH_PERCENT);
        if width > max_width {
            let ratio = max_width / width;
            debug!("Clamping image width {} to {}", width, max_width);
            width = max_width;
            height = height.map(|h| h * ratio);
        }

        ImageWidget { src, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathtext_style::CssDeclarationParser;
    use mathtext_traits::FixedMetrics;
    use mathtext_types::{Platform, Viewport};

    fn attrs(src: &str, style: Option<&str>) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("src".to_string(), src.to_string());
        if let Some(style) = style {
            attributes.insert("style".to_string(), style.to_string());
        }
        attributes
    }

    fn sizer_test(check: impl FnOnce(ImageSizer<'_>)) {
        let metrics = FixedMetrics::new(Platform::Ios, Viewport::new(400.0, 800.0));
        let parser = CssDeclarationParser;
        check(ImageSizer::new(ResponsiveMetrics::new(&metrics), &parser));
    }

    #[test]
    fn test_clamps_preserving_aspect_ratio() {
        sizer_test(|sizer| {
            let image = sizer.resolve(&attrs("a.png", Some("width: 640px; height: 480px")));
            assert_eq!(image.width, 320.0);
            assert_eq!(image.height, Some(240.0));
            assert_eq!(image.src.as_deref(), Some("a.png"));
        });
    }

    #[test]
    fn test_units() {
        sizer_test(|sizer| {
            assert_eq!(sizer.resolve(&attrs("a", Some("width: 2in"))).width, 192.0);
            assert_eq!(sizer.resolve(&attrs("a", Some("width: 50%"))).width, 200.0);
            assert_eq!(sizer.resolve(&attrs("a", Some("width: 100"))).width, 100.0);
            assert_eq!(sizer.resolve(&attrs("a", Some("width: 12em"))).width, 12.0);
        });
    }

    #[test]
    fn test_fallback_width() {
        sizer_test(|sizer| {
            let image = sizer.resolve(&attrs("a", None));
            assert_eq!(image.width, 260.0);
            assert_eq!(image.height, None);

            let auto = sizer.resolve(&attrs("a", Some("width: auto; height: 10px")));
            assert_eq!(auto.width, 260.0);
            assert_eq!(auto.height, None);

            let zero = sizer.resolve(&attrs("a", Some("width: 0")));
            assert_eq!(zero.width, 260.0);
        });
    }

    #[test]
    fn test_max_width_is_not_clamped() {
        sizer_test(|sizer| {
            let image = sizer.resolve(&attrs("a", Some("width: 320px; height: 10px")));
            assert_eq!(image.width, 320.0);
            assert_eq!(image.height, Some(10.0));
        });
    }
}
