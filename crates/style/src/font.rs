//! Font-size normalization: CSS keywords, pixel strings and bare numbers all
//! collapse to a single numeric size.

use crate::parsers::{StyleParseError, parse_number, parse_px, run_parser};
use crate::value::StyleValue;

/// Fixed keyword → size table. `None` marks keywords that carry no usable
/// size and cause the property to be dropped.
pub const FONT_SIZE_KEYWORDS: &[(&str, Option<f32>)] = &[
    ("medium", Some(14.0)),
    ("xx-small", Some(8.5)),
    ("x-small", Some(10.0)),
    ("small", Some(12.0)),
    ("large", Some(17.0)),
    ("x-large", Some(20.0)),
    ("xx-large", Some(24.0)),
    ("smaller", Some(13.3)),
    ("larger", Some(16.0)),
    ("length", None),
    ("initial", None),
    ("inherit", None),
    ("unset", None),
];

/// Looks up a font-size keyword. The outer `Option` is "is this a keyword",
/// the inner one is "does it carry a size".
pub fn font_size_keyword(keyword: &str) -> Option<Option<f32>> {
    FONT_SIZE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, size)| *size)
}

/// Resolves a raw font-size value to points.
///
/// Resolution order for strings: keyword table, `<n>px`, bare number.
/// Numbers pass through unchanged. Anything else resolves to `None`.
pub fn normalize_font_size(value: Option<&StyleValue>) -> Option<f32> {
    match value? {
        StyleValue::Number(n) => Some(*n),
        StyleValue::Text(raw) => normalize_font_size_str(raw),
        StyleValue::Transform(_) => None,
    }
}

/// String form of [`normalize_font_size`].
pub fn normalize_font_size_str(raw: &str) -> Option<f32> {
    parse_font_size(raw).ok()
}

/// Like [`normalize_font_size_str`], but reports why a value was rejected.
pub fn parse_font_size(raw: &str) -> Result<f32, StyleParseError> {
    let invalid = || StyleParseError::InvalidValue {
        property: "fontSize".to_string(),
        value: raw.to_string(),
    };
    let lower = raw.trim().to_lowercase();
    if let Some(size) = font_size_keyword(&lower) {
        return size.ok_or_else(invalid);
    }
    if let Ok(px) = run_parser(parse_px, &lower) {
        return Ok(px);
    }
    parse_number(&lower).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(normalize_font_size(Some(&StyleValue::Number(16.0))), Some(16.0));
        assert_eq!(normalize_font_size(None), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(normalize_font_size_str("large"), Some(17.0));
        assert_eq!(normalize_font_size_str(" X-Small "), Some(10.0));
        assert_eq!(normalize_font_size_str("smaller"), Some(13.3));
        for dropped in ["length", "initial", "inherit", "unset"] {
            assert_eq!(normalize_font_size_str(dropped), None, "{dropped}");
        }
    }

    #[test]
    fn test_pixel_and_bare_strings() {
        assert_eq!(normalize_font_size_str("16px"), Some(16.0));
        assert_eq!(normalize_font_size_str("16PX"), Some(16.0));
        assert_eq!(normalize_font_size_str("18"), Some(18.0));
        assert_eq!(normalize_font_size_str("1.2em"), None);
        assert_eq!(normalize_font_size_str(""), None);
    }

    #[test]
    fn test_transform_is_not_a_size() {
        assert_eq!(normalize_font_size(Some(&StyleValue::Transform(vec![]))), None);
    }

    #[test]
    fn test_rejections_name_the_value() {
        assert_eq!(
            parse_font_size("inherit"),
            Err(StyleParseError::InvalidValue {
                property: "fontSize".to_string(),
                value: "inherit".to_string(),
            })
        );
        assert!(parse_font_size("").is_err());
        assert_eq!(parse_font_size(" 16PX "), Ok(16.0));
    }
}
