use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix accepted by the form's text fields
    /// Matches: optional sign + (Infinity | digits with optional fraction | fraction only)
    /// + optional exponent. Anything after the prefix is ignored.
    /// Examples: "1.8", "-0", ".5", "1e3", "+Infinity", "5 ft" (-> "5"), "1e" (-> "1")
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

fn is_leading_space(c: char) -> bool {
    // NEL is Unicode whitespace but not skipped by the form's parser; BOM is
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim_leading(s: &str) -> &str {
    s.trim_start_matches(is_leading_space)
}

/// Return the numeric prefix of a text field value, if any
pub fn numeric_prefix(s: &str) -> Option<&str> {
    NUMERIC_PREFIX.find(trim_leading(s)).map(|m| m.as_str())
}

/// Whether anything besides trailing whitespace follows the numeric prefix
fn has_trailing_text(s: &str, prefix: &str) -> bool {
    prefix.len() != trim_leading(s).trim_end().len()
}

/// Leniently parse user-entered text as a number.
///
/// Leading whitespace is skipped and only the longest numeric prefix is read, so
/// `"1.8m"` is `1.8` and `"5 ft"` is `5`. Text with no numeric prefix (empty,
/// `"abc"`, `"."`) yields `None` rather than a NaN sentinel.
pub fn parse_number(s: &str) -> Option<f64> {
    let prefix = numeric_prefix(s)?;

    let (negative, digits) = match prefix.as_bytes()[0] {
        b'-' => (true, &prefix[1..]),
        b'+' => (false, &prefix[1..]),
        _ => (false, prefix),
    };

    let magnitude = if digits == "Infinity" {
        f64::INFINITY
    } else {
        digits.parse::<f64>().ok()?
    };

    if has_trailing_text(s, prefix) {
        log::debug!("Parsed '{}' from '{}', ignoring trailing text", prefix, s);
    }

    Some(if negative { -magnitude } else { magnitude })
}
