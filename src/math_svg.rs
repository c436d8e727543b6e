//! Rescales and recolors the SVG fragment emitted for a typeset formula.
//!
//! Only the attributes of the root `<svg>` start tag are parsed; the rest of
//! the fragment is treated as opaque text.

use log::{debug, warn};
use mathtext_style::parsers::parse_f32;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::opt;
use nom::multi::many0;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static FONT_FAMILY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)font-family="[^"]*""#).expect("BUG: invalid FONT_FAMILY_RE regex literal")
});

static CURRENT_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)currentColor").expect("BUG: invalid CURRENT_COLOR_RE regex literal")
});

/// The declared size of a formula, in `ex`/`px` units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgDimensions {
    pub width: f32,
    pub height: f32,
}

/// One attribute of the root tag. `value` borrows from the parsed input so
/// its position can be recovered for in-place rewriting.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Attribute<'a> {
    name: &'a str,
    value: Option<&'a str>,
}

/// A dimension split into its number and its unit (`"2.262ex"`).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dimension<'a> {
    value: f32,
    unit: &'a str,
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\'')
}

fn attribute_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        take_while1(|c: char| !c.is_whitespace() && c != '>'),
    ))
    .parse(input)
}

fn attribute(input: &str) -> IResult<&str, Attribute<'_>> {
    let (input, name) = preceded(multispace1, take_while1(is_name_char)).parse(input)?;
    let (input, value) = opt(preceded(
        (multispace0, char('='), multispace0),
        attribute_value,
    ))
    .parse(input)?;
    Ok((input, Attribute { name, value }))
}

/// Parses `<svg attr="..." ...` up to, but not including, the closing `>`.
fn svg_start_tag(input: &str) -> IResult<&str, Vec<Attribute<'_>>> {
    let (input, _) = tag_no_case("<svg").parse(input)?;
    let (input, attributes) = many0(attribute).parse(input)?;
    let (input, _) = (multispace0, opt(char('/')), char('>')).parse(input)?;
    Ok((input, attributes))
}

fn dimension(input: &str) -> IResult<&str, Dimension<'_>> {
    let (input, value) = parse_f32(input)?;
    let (input, unit) = alt((tag_no_case("ex"), tag_no_case("px"))).parse(input)?;
    Ok((input, Dimension { value, unit }))
}

fn parse_dimension(raw: &str) -> Option<Dimension<'_>> {
    match dimension(raw.trim()) {
        Ok(("", dim)) => Some(dim),
        _ => None,
    }
}

/// Locates the root `<svg` start tag and parses its attributes.
fn root_tag(svg: &str) -> Option<Vec<Attribute<'_>>> {
    let start = svg.to_ascii_lowercase().find("<svg")?;
    let (_, attributes) = svg_start_tag(&svg[start..]).ok()?;
    Some(attributes)
}

/// Reads the root tag's declared `width`/`height`. Missing or unparseable
/// dimensions are reported as zero.
pub fn svg_dimensions(svg: &str) -> SvgDimensions {
    let Some(attributes) = root_tag(svg) else {
        return SvgDimensions::default();
    };
    let read = |name: &str| {
        attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .and_then(|a| a.value)
            .and_then(parse_dimension)
            .map_or(0.0, |d| d.value)
    };
    SvgDimensions {
        width: read("width"),
        height: read("height"),
    }
}

/// Scaled dimensions keep three decimals, the precision the typesetter
/// emits.
fn format_dimension(value: f32, factor: f32, unit: &str) -> String {
    let scaled = (f64::from(value) * f64::from(factor) * 1000.0).round() / 1000.0;
    if scaled == 0.0 {
        "0".to_string()
    } else {
        format!("{}{}", scaled, unit)
    }
}

/// Multiplies the root tag's `width`/`height` by `factor`, keeping units.
/// A zero dimension is written as a bare `0`.
fn scale_root_dimensions(svg: &str, factor: f32) -> String {
    let Some(attributes) = root_tag(svg) else {
        warn!("Math fragment has no parseable <svg> root tag; leaving it unscaled");
        return svg.to_string();
    };

    let mut edits: Vec<(usize, usize, String)> = attributes
        .iter()
        .filter(|a| a.name.eq_ignore_ascii_case("width") || a.name.eq_ignore_ascii_case("height"))
        .filter_map(|a| {
            let raw = a.value?;
            let dim = parse_dimension(raw)?;
            let offset = raw.as_ptr() as usize - svg.as_ptr() as usize;
            Some((offset, raw.len(), format_dimension(dim.value, factor, dim.unit)))
        })
        .collect();
    edits.sort_by_key(|(offset, _, _)| *offset);

    let mut out = String::with_capacity(svg.len() + 16);
    let mut cursor = 0;
    for (offset, len, replacement) in edits {
        out.push_str(&svg[cursor..offset]);
        out.push_str(&replacement);
        cursor = offset + len;
    }
    out.push_str(&svg[cursor..]);
    out
}

/// Adapts math fragments to the surrounding text.
#[derive(Debug, Clone, Copy)]
pub struct MathSvgAdapter<'a> {
    font_size: f32,
    color: &'a str,
}

impl<'a> MathSvgAdapter<'a> {
    pub fn new(font_size: f32, color: &'a str) -> Self {
        Self { font_size, color }
    }

    /// Drops `font-family` attributes, scales the root dimensions by the
    /// font size and substitutes `currentColor` with the text color.
    pub fn adapt(&self, svg: &str) -> String {
        let stripped = FONT_FAMILY_RE.replace_all(svg, "");
        debug!(
            "Scaling math fragment {:?} by {}",
            svg_dimensions(&stripped),
            self.font_size
        );
        let scaled = scale_root_dimensions(&stripped, self.font_size);
        CURRENT_COLOR_RE
            .replace_all(&scaled, NoExpand(self.color))
            .into_owned()
    }
}
