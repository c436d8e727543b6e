//! Text node decoding and whitespace normalization.

use crate::options::RenderOptions;
use log::trace;
use quick_xml::escape::unescape_with;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("BUG: invalid NEWLINE_RE regex literal"));

static HORIZONTAL_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\f\v]+").expect("BUG: invalid HORIZONTAL_RUN_RE regex literal")
});

static ONLY_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\r?\n)+$").expect("BUG: invalid ONLY_NEWLINES_RE regex literal"));

/// Named entities recognised besides numeric character references.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", "\u{a0}"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("thinsp", "\u{2009}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("hellip", "\u{2026}"),
    ("bull", "\u{2022}"),
    ("middot", "\u{b7}"),
    ("copy", "\u{a9}"),
    ("reg", "\u{ae}"),
    ("trade", "\u{2122}"),
    ("deg", "\u{b0}"),
    ("plusmn", "\u{b1}"),
    ("times", "\u{d7}"),
    ("divide", "\u{f7}"),
    ("minus", "\u{2212}"),
    ("le", "\u{2264}"),
    ("ge", "\u{2265}"),
    ("ne", "\u{2260}"),
    ("infin", "\u{221e}"),
    ("sup2", "\u{b2}"),
    ("sup3", "\u{b3}"),
    ("frac12", "\u{bd}"),
    ("euro", "\u{20ac}"),
    ("pound", "\u{a3}"),
    ("laquo", "\u{ab}"),
    ("raquo", "\u{bb}"),
];

fn resolve_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, replacement)| *replacement)
}

/// Longest `&...;` sequence worth trying to decode.
const MAX_ENTITY_LEN: usize = 32;

/// Decodes character references. Sequences that do not form a known entity
/// are kept verbatim, so a stray `&` never loses the surrounding text.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let end = candidate
            .char_indices()
            .skip(1)
            .take(MAX_ENTITY_LEN)
            .find(|(_, c)| *c == ';' || *c == '&' || c.is_whitespace())
            .filter(|(_, c)| *c == ';')
            .map(|(idx, _)| idx);

        match end.map(|idx| &candidate[..=idx]) {
            Some(entity) => match unescape_with(entity, resolve_entity) {
                Ok(decoded) => {
                    out.push_str(&decoded);
                    rest = &candidate[entity.len()..];
                }
                Err(e) => {
                    trace!("Keeping undecodable entity {:?}: {}", entity, e);
                    out.push_str(entity);
                    rest = &candidate[entity.len()..];
                }
            },
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// `\r\n` and `\n` become a single space each.
pub fn collapse_newlines(text: &str) -> Cow<'_, str> {
    NEWLINE_RE.replace_all(text, " ")
}

/// Runs of spaces, tabs, form feeds and vertical tabs become one space.
pub fn collapse_horizontal_runs(text: &str) -> Cow<'_, str> {
    HORIZONTAL_RUN_RE.replace_all(text, " ")
}

/// Decodes and normalizes a raw text node value.
///
/// Returns `None` when the node renders nothing: an empty value, an isolated
/// newline that should be skipped, or text that normalizes away. Inside a
/// `pre` ancestor the decoded text is returned untouched.
pub fn normalize_text(raw: &str, in_pre: bool, options: &RenderOptions) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let decoded = decode_entities(raw);
    if in_pre {
        return Some(decoded.into_owned());
    }

    if options.skip_isolated_newline && ONLY_NEWLINES_RE.is_match(&decoded) {
        trace!("Skipping isolated newline text node");
        return None;
    }

    let mut text = decoded.into_owned();
    if options.collapse_text_newlines {
        text = collapse_newlines(&text).into_owned();
    }
    if options.collapse_whitespace_runs {
        text = collapse_horizontal_runs(&text).into_owned();
    }

    if text.is_empty() { None } else { Some(text) }
}
