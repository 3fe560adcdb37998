//! Article text normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[0-9]*\]").expect("reference marker pattern"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Lowercase `raw_text`, replace bracketed reference markers such as `[12]`
/// with a space, and collapse whitespace runs to a single space.
///
/// Leading and trailing whitespace is collapsed, not trimmed.
///
/// ```ignore
/// assert_eq!(normalize("Le CAC 40[3]  recule"), "le cac 40 recule");
/// ```
pub fn normalize(raw_text: &str) -> String {
    let lowered = raw_text.to_lowercase();
    let unmarked = REFERENCE_MARKER.replace_all(&lowered, " ");
    WHITESPACE_RUN.replace_all(&unmarked, " ").into_owned()
}
