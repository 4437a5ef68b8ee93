//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Suffix appended to text that has been shortened by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Converts HTML entities into their single-character equivalents.
///
/// For example, WordPress returns "&" as "&amp;" and curly quotes as
/// "&#8217;" in post titles; this function will convert those HTML
/// entities into single, human-readable characters.
///
/// Leading and trailing whitespace will also be trimmed from the string.
///
/// # Examples
///
/// ```
/// use bylines::text::convert_html_entities;
/// let raw = "&lt;This &amp; That&gt;";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "<This & That>");
/// ```
///
/// ```
/// use bylines::text::convert_html_entities;
/// let raw = "  &lt;This &amp; That&gt;  ";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "<This & That>");
/// ```
///
/// ```
/// use bylines::text::convert_html_entities;
/// let raw = "A Plaintext Post";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, raw);
/// ```
pub fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}

/// Shortens `text` to at most `width` characters.
///
/// Text longer than `width` is cut and ends with an [`ELLIPSIS`], which
/// counts toward the width. Text that already fits is returned unchanged.
///
/// # Examples
///
/// ```
/// use bylines::text::truncate;
/// assert_eq!(truncate("Short title", 50), "Short title");
/// assert_eq!(truncate("A rather long title", 10), "A rathe...");
/// ```
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let keep = width.saturating_sub(ELLIPSIS.len());
        text.chars().take(keep).collect::<String>() + ELLIPSIS
    }
}

/// Formats an integer with commas between groups of three digits.
///
/// # Examples
///
/// ```
/// use bylines::text::separate_thousands;
/// assert_eq!(separate_thousands(0), "0");
/// assert_eq!(separate_thousands(999), "999");
/// assert_eq!(separate_thousands(1234567), "1,234,567");
/// ```
pub fn separate_thousands(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Rounds a number to a whole number, then formats it like
/// [`separate_thousands`].
///
/// Halves round to the nearest even number.
///
/// # Examples
///
/// ```
/// use bylines::text::separate_thousands_f64;
/// assert_eq!(separate_thousands_f64(2500.0), "2,500");
/// assert_eq!(separate_thousands_f64(1333.3333), "1,333");
/// assert_eq!(separate_thousands_f64(-1234.6), "-1,235");
/// ```
pub fn separate_thousands_f64(n: f64) -> String {
    let rounded = format!("{n:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&rounded),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
