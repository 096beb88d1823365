//! CSS-like inline style descriptors.
//!
//! The engine never renders anything; it hands the renderer an ordered list of
//! `property: value` declarations. Setting a property that is already present
//! replaces its value in place, so layering styles behaves like a cascade where
//! the later layer wins.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const FONT_WEIGHT: &str = "font-weight";
pub const FONT_STYLE: &str = "font-style";
pub const FONT_SIZE: &str = "font-size";
pub const TEXT_DECORATION: &str = "text-decoration";
pub const COLOR: &str = "color";
pub const BACKGROUND_COLOR: &str = "background-color";

/// An ordered set of style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any existing value without moving it.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Builder form of [`Style::set`].
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with(FONT_WEIGHT, "bold")
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.with(FONT_STYLE, "italic")
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with(TEXT_DECORATION, "underline")
    }

    #[must_use]
    pub fn color(self, color: &str) -> Self {
        self.with(COLOR, color)
    }

    #[must_use]
    pub fn background(self, color: &str) -> Self {
        self.with(BACKGROUND_COLOR, color)
    }

    /// Font size as an `em` multiplier, e.g. `1.2em`.
    #[must_use]
    pub fn font_size(self, multiplier: f64) -> Self {
        self.with(FONT_SIZE, format!("{multiplier}em"))
    }

    /// Applies every declaration of `other` on top of this style.
    pub fn layer(&mut self, other: &Style) {
        for (property, value) in &other.declarations {
            self.set(*property, value.as_str());
        }
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Per-level text style preset chosen in the settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    None,
    Bold,
    Italic,
    BoldItalic,
    Underline,
    BoldUnderline,
}

impl TextStyle {
    /// Adds the preset's declarations to `style`.
    pub fn apply(self, style: &mut Style) {
        let (bold, italic, underline) = match self {
            TextStyle::None => (false, false, false),
            TextStyle::Bold => (true, false, false),
            TextStyle::Italic => (false, true, false),
            TextStyle::BoldItalic => (true, true, false),
            TextStyle::Underline => (false, false, true),
            TextStyle::BoldUnderline => (true, false, true),
        };
        if bold {
            style.set(FONT_WEIGHT, "bold");
        }
        if italic {
            style.set(FONT_STYLE, "italic");
        }
        if underline {
            style.set(TEXT_DECORATION, "underline");
        }
    }
}
