//! Document snapshot handed to the engine by the host.
//!
//! A document is an ordered list of lines. The offset of a line is the sum of
//! the lengths of all previous lines plus one newline per line, measured in
//! the document's [`OffsetEncoding`].

/// Unit in which document offsets are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetEncoding {
    /// UTF-8 bytes, Rust's native string indexing.
    #[default]
    Utf8,
    /// UTF-16 code units, as used by most editor hosts.
    Utf16,
}

impl OffsetEncoding {
    /// Length of `text` in this unit.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetEncoding::Utf8 => text.len(),
            OffsetEncoding::Utf16 => text.encode_utf16().count(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    encoding: OffsetEncoding,
}

impl Document {
    /// Splits `text` on `\n`. A trailing newline yields a final empty line.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            encoding: OffsetEncoding::default(),
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: OffsetEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total length including the newlines between lines.
    pub fn len(&self) -> usize {
        let text: usize = self.lines.iter().map(|l| self.encoding.measure(l)).sum();
        text + self.lines.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the first character of every line.
    pub fn line_starts(&self) -> Vec<usize> {
        let mut offset = 0;
        self.lines
            .iter()
            .map(|line| {
                let start = offset;
                offset += self.encoding.measure(line) + 1;
                start
            })
            .collect()
    }

    /// Index of the line containing `offset`.
    pub fn line_at(&self, offset: usize) -> Option<usize> {
        let starts = self.line_starts();
        starts
            .partition_point(|&start| start <= offset)
            .checked_sub(1)
    }

    /// Maps a byte column within `line` to a document offset.
    ///
    /// Columns past the end or inside a character are measured as bytes.
    pub fn offset_of(&self, line_start: usize, line: &str, byte_column: usize) -> usize {
        line_start
            + line
                .get(..byte_column)
                .map_or(byte_column, |prefix| self.encoding.measure(prefix))
    }

    /// The full text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Text between two document offsets, clamped to the document.
    pub fn slice(&self, from: usize, to: usize) -> String {
        let text = self.text();
        match self.encoding {
            OffsetEncoding::Utf8 => {
                let to = to.min(text.len());
                text.get(from.min(to)..to).unwrap_or_default().to_string()
            }
            OffsetEncoding::Utf16 => {
                let units: Vec<u16> = text.encode_utf16().collect();
                let to = to.min(units.len());
                String::from_utf16_lossy(&units[from.min(to)..to])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_keeps_trailing_empty_line() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.lines(), ["a", "b", ""]);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn line_starts_count_one_newline_per_line() {
        let doc = Document::from_text("- one\n\n  - two");
        assert_eq!(doc.line_starts(), vec![0, 6, 7]);
        assert_eq!(doc.line_at(0), Some(0));
        assert_eq!(doc.line_at(6), Some(1));
        assert_eq!(doc.line_at(9), Some(2));
    }

    #[test]
    fn utf16_offsets_count_code_units() {
        let doc = Document::from_text("é😀\n- x").with_encoding(OffsetEncoding::Utf16);
        // é is one unit, the emoji is a surrogate pair.
        assert_eq!(doc.line_starts(), vec![0, 4]);
        assert_eq!(doc.slice(4, 7), "- x");
        assert_eq!(doc.slice(1, 3), "😀");
    }

    #[test]
    fn offset_of_converts_byte_columns() {
        let line = "- «x»";
        let utf8 = Document::default();
        let utf16 = Document::default().with_encoding(OffsetEncoding::Utf16);
        let column = line.find('x').unwrap();
        assert_eq!(utf8.offset_of(10, line, column), 10 + column);
        assert_eq!(utf16.offset_of(10, line, column), 13);
    }

    #[test]
    fn empty_document_has_zero_length() {
        let doc = Document::from_lines(Vec::<String>::new());
        assert!(doc.is_empty());
        assert_eq!(doc.line_at(0), None);
    }
}
