use crate::style::Style;

/// What the renderer draws in place of a bullet marker.
///
/// Plain data: the renderer decides how a glyph and its style become visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletType {
    pub symbol: String,
    /// Style for the glyph itself, `None` when nothing applies.
    pub style: Option<Style>,
}

impl BulletType {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            style: None,
        }
    }

    /// The combined style as a `prop: value; ...` string.
    pub fn style_string(&self) -> Option<String> {
        self.style.as_ref().map(Style::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationKind {
    /// Replace the covered text with a bullet glyph.
    Replace(BulletType),
    /// Apply an inline style to the covered text.
    Style(Style),
}

/// A half-open `[from, to)` range over document offsets with its effect.
///
/// Offsets are in the unit of the document's
/// [`OffsetEncoding`](crate::document::OffsetEncoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub kind: DecorationKind,
}

impl Decoration {
    #[must_use]
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_replace(&self) -> bool {
        matches!(self.kind, DecorationKind::Replace(_))
    }

    /// The inline style, if this is a style decoration.
    pub fn style(&self) -> Option<&Style> {
        match &self.kind {
            DecorationKind::Style(style) => Some(style),
            DecorationKind::Replace(_) => None,
        }
    }
}
