//! Numeric extraction from noisy coordinate text.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize_text;

/// Optional sign, digits, optional fractional part. Searched, not anchored,
/// so embedded units and stray characters are tolerated.
static FLOAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("invalid float regex"));

/// Extract the first decimal number from `raw`, or `None` when the text
/// contains no number at all. The input is normalized before matching.
#[must_use]
pub fn extract_float(raw: &str) -> Option<f64> {
    let text = normalize_text(raw);
    let matched = FLOAT_REGEX.find(&text)?;
    matched.as_str().parse::<f64>().ok()
}
