//! Raw markup clean-up applied before the typesetter sees the input.

use crate::options::RenderOptions;
use crate::text::{collapse_horizontal_runs, collapse_newlines};
use regex::Regex;
use std::sync::LazyLock;

static PRE_WRAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)white\s*-\s*space\s*:\s*pre-wrap\s*;?")
        .expect("BUG: invalid PRE_WRAP_RE regex literal")
});

/// Strips `white-space: pre-wrap` declarations and flattens the markup onto
/// a single line, each step guarded by its option.
pub fn preprocess_markup(markup: &str, options: &RenderOptions) -> String {
    let mut out = markup.to_string();

    if options.strip_pre_wrap {
        out = PRE_WRAP_RE.replace_all(&out, "").into_owned();
    }

    if options.force_single_line {
        out = collapse_newlines(&out).into_owned();
        out = collapse_horizontal_runs(&out).into_owned();
    }

    out
}
