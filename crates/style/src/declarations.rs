//! Turns a raw `style="..."` declaration string into a flat `StyleMap`.

use crate::parsers::{parse_length, run_parser};
use crate::value::{StyleMap, StyleValue};
use std::fmt::Debug;

/// The CSS-string-to-map seam. Implementations must be total: declarations
/// they cannot understand are skipped, never reported.
pub trait DeclarationParser: Send + Sync + Debug {
    fn parse_declarations(&self, css: &str) -> StyleMap;
}

/// Default declaration parser.
///
/// - property names are converted from kebab-case to camelCase
///   (`-webkit-user-select` becomes `WebkitUserSelect`)
/// - unitless numbers and `px` lengths become numbers
/// - everything else (keywords, percentages, other units) stays a string
#[derive(Debug, Clone, Copy, Default)]
pub struct CssDeclarationParser;

impl DeclarationParser for CssDeclarationParser {
    fn parse_declarations(&self, css: &str) -> StyleMap {
        let mut style = StyleMap::new();
        for declaration in css.split(';') {
            let Some((key, raw_value)) = declaration.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let raw_value = strip_important(raw_value.trim());
            if key.is_empty() || raw_value.is_empty() {
                continue;
            }
            style.insert(camel_case(key), parse_value(raw_value));
        }
        style
    }
}

fn strip_important(value: &str) -> &str {
    match value.to_ascii_lowercase().rfind("!important") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

fn parse_value(raw: &str) -> StyleValue {
    match run_parser(parse_length, raw) {
        Ok(length) if length.is_plain_number() => StyleValue::Number(length.value),
        _ => StyleValue::Text(raw.to_string()),
    }
}

/// `font-size` → `fontSize`, `-webkit-box` → `WebkitBox`.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.trim().chars() {
        if c == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("font-size"), "fontSize");
        assert_eq!(camel_case("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(camel_case("color"), "color");
        assert_eq!(camel_case("-webkit-user-select"), "WebkitUserSelect");
        assert_eq!(camel_case("Font-Weight"), "fontWeight");
    }

    #[test]
    fn test_parse_declarations() {
        let style = CssDeclarationParser
            .parse_declarations("color: red; font-size: 16px; width: 50%; line-height: 1.5");
        assert_eq!(style.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(style.get("fontSize"), Some(&StyleValue::Number(16.0)));
        assert_eq!(style.get("width"), Some(&StyleValue::from("50%")));
        assert_eq!(style.get("lineHeight"), Some(&StyleValue::Number(1.5)));
    }

    #[test]
    fn test_skips_malformed_declarations() {
        let style = CssDeclarationParser.parse_declarations(";;color;: red; margin-left:  ; font-weight: bold !important");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("fontWeight"), Some(&StyleValue::from("bold")));
    }

    #[test]
    fn test_other_units_stay_strings() {
        let style = CssDeclarationParser.parse_declarations("font-size: 1.2em; margin-top: 2in");
        assert_eq!(style.get("fontSize"), Some(&StyleValue::from("1.2em")));
        assert_eq!(style.get("marginTop"), Some(&StyleValue::from("2in")));
    }
}
