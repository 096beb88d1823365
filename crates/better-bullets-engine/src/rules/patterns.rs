use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::span::Span;

/// A double-quoted span with no embedded quote: `"..."`.
pub fn quoted() -> &'static Regex {
    static QUOTED_REGEX: OnceLock<Regex> = OnceLock::new();
    QUOTED_REGEX.get_or_init(|| Regex::new(r#""[^"]+""#).expect("Invalid quote regex"))
}

/// A parenthesized span with no embedded closing paren: `(...)`.
pub fn parenthetical() -> &'static Regex {
    static PAREN_REGEX: OnceLock<Regex> = OnceLock::new();
    PAREN_REGEX.get_or_init(|| Regex::new(r"\([^)]+\)").expect("Invalid parenthesis regex"))
}

/// A standalone four-digit number.
///
/// Word boundaries are ASCII-only: letters outside ASCII, such as `é` or
/// `年`, count as separators.
pub fn year() -> &'static Regex {
    static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
    YEAR_REGEX.get_or_init(|| {
        Regex::new(r"(?-u:\b)[0-9]{4}(?-u:\b)").expect("Invalid year regex")
    })
}

/// Spans of all non-overlapping matches, left to right.
pub fn find_spans<'a>(regex: &'a Regex, text: &'a str) -> impl Iterator<Item = Span> + 'a {
    regex
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| Span::new(m.start(), m.end()))
}
