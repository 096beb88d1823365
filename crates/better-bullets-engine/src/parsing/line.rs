use std::sync::OnceLock;

use regex::Regex;

use super::{indent::normalize_indent, span::Span};

/// The character that opens a bullet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dash,
    Asterisk,
    Plus,
}

impl Marker {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Marker::Dash),
            '*' => Some(Marker::Asterisk),
            '+' => Some(Marker::Plus),
            _ => None,
        }
    }
}

/// A line that matched the bullet grammar, split into its components.
///
/// All string fields borrow from the source line. Offsets are bytes from the
/// start of the line.
///
/// # Invariants
///
/// - `indent_str`, the marker, `separator` and `raw_text` concatenate back to
///   the line (minus a trailing `\r`)
/// - `text` is `raw_text` with surrounding whitespace removed and starts at
///   byte `trim_offset` of `raw_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLine<'a> {
    /// Raw leading whitespace.
    pub indent_str: &'a str,
    /// Indent in columns with tabs expanded.
    pub indent: usize,
    pub marker: Marker,
    /// The single whitespace character after the marker.
    pub separator: &'a str,
    /// Everything after the separator.
    pub raw_text: &'a str,
    /// `raw_text` with surrounding whitespace stripped.
    pub text: &'a str,
    /// Bytes stripped from the front of `raw_text` to produce `text`.
    pub trim_offset: usize,
}

impl BulletLine<'_> {
    /// Span of the marker character; the bullet glyph replaces exactly this.
    #[must_use]
    pub fn marker_span(&self) -> Span {
        let start = self.indent_str.len();
        Span::new(start, start + 1)
    }

    /// Byte offset where `raw_text` begins.
    #[must_use]
    pub fn raw_text_start(&self) -> usize {
        self.marker_span().end + self.separator.len()
    }

    /// Span of the trimmed text within the line.
    #[must_use]
    pub fn text_span(&self) -> Span {
        let start = self.raw_text_start() + self.trim_offset;
        Span::new(start, start + self.text.len())
    }
}

fn bullet_regex() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX
        .get_or_init(|| Regex::new(r"^(\s*)([-*+])(\s)(.*)$").expect("Invalid bullet regex"))
}

/// Classifies a line as a bullet line.
///
/// A bullet line is optional leading whitespace, one of `-`, `*` or `+`,
/// exactly one whitespace character, then the (possibly empty) rest of the
/// line. Returns `None` for every other line.
///
/// A single trailing `\r` is ignored so CRLF documents parse the same as LF
/// documents; offsets are unaffected because the `\r` sits at the end.
pub fn parse_bullet_line(line: &str, tab_width: usize) -> Option<BulletLine<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = bullet_regex().captures(line)?;

    let indent_str = caps.get(1)?.as_str();
    let marker = caps.get(2)?.as_str().chars().next().and_then(Marker::from_char)?;
    let separator = caps.get(3)?.as_str();
    let raw_text = caps.get(4)?.as_str();

    let leading_trimmed = raw_text.trim_start();
    let trim_offset = raw_text.len() - leading_trimmed.len();

    Some(BulletLine {
        indent_str,
        indent: normalize_indent(indent_str, tab_width),
        marker,
        separator,
        raw_text,
        text: leading_trimmed.trim_end(),
        trim_offset,
    })
}
