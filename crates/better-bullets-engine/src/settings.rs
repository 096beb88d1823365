//! Formatting options consumed read-only by the engine.
//!
//! Settings are owned by the host. They are validated once at the
//! configuration boundary with [`Settings::validate`]; the engine assumes a
//! validated value and never mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::TextStyle;

/// Glyph used when no level is configured at all.
pub const DEFAULT_LEAF_SYMBOL: &str = "-";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("expected between 1 and {max} hierarchy levels, found {found}")]
    LevelCount { found: usize, max: usize },

    #[error("font size for level {level} must be a positive number, found {value}")]
    FontSize { level: usize, value: f64 },

    #[error("symbol for {name} must not be empty")]
    EmptySymbol { name: String },

    #[error("exclamation text color must not be empty")]
    EmptyColor,
}

/// Glyph and text presets for one hierarchy depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStyle {
    pub symbol: String,
    /// `em` multiplier; only applied to non-leaf depths.
    pub font_size: f64,
    #[serde(default)]
    pub text_style: TextStyle,
}

impl LevelStyle {
    pub fn new(symbol: impl Into<String>, font_size: f64) -> Self {
        Self {
            symbol: symbol.into(),
            font_size,
            text_style: TextStyle::None,
        }
    }
}

/// How bullets at indent 0 take part in hierarchy computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelBullets {
    /// Indent-0 lines are skipped entirely: they are always leaves and never
    /// close a deeper chain.
    #[default]
    Transparent,
    /// Indent-0 bullets are ranked like any other bullet and close chains.
    /// Non-bullet lines stay transparent.
    Participate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bold_non_leaf_text: bool,
    pub use_definition_symbol: bool,
    pub exclamation_text_color: String,
    pub definition_highlight: String,
    pub note_symbol: String,
    pub definition_symbol: String,
    pub important_symbol: String,
    pub top_level_bullets: TopLevelBullets,
    /// One entry per depth, leaf first. Deeper depths reuse the last entry.
    pub levels: Vec<LevelStyle>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bold_non_leaf_text: true,
            use_definition_symbol: false,
            exclamation_text_color: "#773757".to_string(),
            definition_highlight: "var(--text-highlight-bg)".to_string(),
            note_symbol: "*".to_string(),
            definition_symbol: "@".to_string(),
            important_symbol: "!".to_string(),
            top_level_bullets: TopLevelBullets::Transparent,
            levels: vec![
                LevelStyle::new("-", 1.0),
                LevelStyle::new("→", 1.2),
                LevelStyle::new("⇒", 1.4),
            ],
        }
    }
}

impl Settings {
    pub const MAX_LEVELS: usize = 10;

    /// Returns the preset for `depth`, reusing the deepest one past the end.
    pub fn level(&self, depth: usize) -> Option<&LevelStyle> {
        self.levels.get(depth).or_else(|| self.levels.last())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.levels.is_empty() || self.levels.len() > Self::MAX_LEVELS {
            return Err(SettingsError::LevelCount {
                found: self.levels.len(),
                max: Self::MAX_LEVELS,
            });
        }

        for (level, preset) in self.levels.iter().enumerate() {
            if !preset.font_size.is_finite() || preset.font_size <= 0.0 {
                return Err(SettingsError::FontSize {
                    level,
                    value: preset.font_size,
                });
            }
            if preset.symbol.is_empty() {
                return Err(SettingsError::EmptySymbol {
                    name: format!("level {level}"),
                });
            }
        }

        for (name, symbol) in [
            ("note", &self.note_symbol),
            ("definition", &self.definition_symbol),
            ("important", &self.important_symbol),
        ] {
            if symbol.is_empty() {
                return Err(SettingsError::EmptySymbol {
                    name: name.to_string(),
                });
            }
        }

        if self.exclamation_text_color.trim().is_empty() {
            return Err(SettingsError::EmptyColor);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn deep_levels_reuse_last_preset() {
        let settings = Settings::default();
        assert_eq!(settings.level(0).unwrap().symbol, "-");
        assert_eq!(settings.level(2).unwrap().symbol, "⇒");
        assert_eq!(settings.level(7).unwrap().symbol, "⇒");
    }

    #[test]
    fn rejects_level_count_out_of_range() {
        let settings = Settings {
            levels: vec![],
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::LevelCount { found: 0, max: 10 })
        );

        let settings = Settings {
            levels: vec![LevelStyle::new("-", 1.0); 11],
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::LevelCount { found: 11, .. })
        ));
    }

    #[test]
    fn rejects_bad_font_sizes() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut settings = Settings::default();
            settings.levels[1].font_size = bad;
            assert!(
                matches!(settings.validate(), Err(SettingsError::FontSize { level: 1, .. })),
                "font size {bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_symbols_and_color() {
        let settings = Settings {
            note_symbol: String::new(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::EmptySymbol {
                name: "note".to_string()
            })
        );

        let settings = Settings {
            exclamation_text_color: "  ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyColor));
    }
}
