//! Low-level nom parser functions for CSS-like style values.
//!
//! This module provides composable parser functions for parsing style values
//! like numbers, lengths with units, and pixel sizes.

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1};
use nom::combinator::{map_res, opt, recognize, value};
use nom::sequence::pair;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Float parse error: {0}")]
    FloatParse(String),
}

/// CSS units the renderer knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Pt,
    In,
    Em,
    Ex,
    Percent,
}

/// A number with an optional unit, e.g. `12px`, `1.5in`, `50%`, `3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: Option<LengthUnit>,
}

impl Length {
    pub fn is_percent(&self) -> bool {
        self.unit == Some(LengthUnit::Percent)
    }

    /// True for unitless numbers and pixel lengths, the two forms a host
    /// surface accepts as plain numbers.
    pub fn is_plain_number(&self) -> bool {
        matches!(self.unit, None | Some(LengthUnit::Px))
    }
}

// --- Helper Parsers ---

/// Parses a signed decimal number (`12`, `-3.5`, `.25`, `+4`).
pub fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Px, tag_no_case("px")),
        value(LengthUnit::Pt, tag_no_case("pt")),
        value(LengthUnit::In, tag_no_case("in")),
        value(LengthUnit::Em, tag_no_case("em")),
        value(LengthUnit::Ex, tag_no_case("ex")),
        value(LengthUnit::Percent, char('%')),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12px", "1in", "50%").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let (input, value) = parse_f32(input)?;
    let (input, unit) = opt(parse_unit).parse(input)?;
    Ok((input, Length { value, unit }))
}

/// Parses a pixel length that must carry the `px` suffix (e.g., "16px").
pub fn parse_px(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, _) = tag_no_case("px").parse(input)?;
    Ok((input, value))
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses a bare number the way a lenient host would: surrounding whitespace
/// is ignored, exponents are accepted, and non-finite results are rejected.
pub fn parse_number(input: &str) -> Result<f32, StyleParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(StyleParseError::FloatParse(format!(
            "Invalid number: '{}'",
            input
        ))),
    }
}
