//! UniFFI bindings for editor hosts
//!
//! Exposes the decoration engine to hosts written in Kotlin, Swift or
//! Python. Hosts pass the whole document text and get back a flat list of
//! decorations with offsets in UTF-16 code units, the unit their editor
//! buffers index by.

use better_bullets_engine::{
    Decoration, DecorationKind, Document, LevelStyle, OffsetEncoding, Settings, TextStyle,
    TopLevelBullets, decorate,
};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },
}

fn validated(settings: SettingsDto) -> Result<Settings, FfiError> {
    let settings = Settings::from(settings);
    settings
        .validate()
        .map_err(|e| FfiError::InvalidSettings {
            reason: e.to_string(),
        })?;
    Ok(settings)
}

fn run(text: &str, tab_width: u32, settings: &Settings) -> Vec<DecorationDto> {
    let doc = Document::from_text(text).with_encoding(OffsetEncoding::Utf16);
    decorate(&doc, tab_width as usize, settings)
        .into_iter()
        .map(DecorationDto::from_engine)
        .collect()
}

// ============ Decorator Handle ============

/// Holds validated settings so hosts only convert them when they change.
#[derive(uniffi::Object)]
pub struct Decorator {
    settings: Mutex<Settings>,
}

#[uniffi::export]
impl Decorator {
    #[uniffi::constructor]
    pub fn new(settings: SettingsDto) -> Result<Self, FfiError> {
        Ok(Self {
            settings: Mutex::new(validated(settings)?),
        })
    }

    /// Replace the settings. The previous ones stay in place on error.
    pub fn set_settings(&self, settings: SettingsDto) -> Result<(), FfiError> {
        let settings = validated(settings)?;
        // Recover from poisoned mutex (another thread panicked while holding lock)
        *self.settings.lock().unwrap_or_else(|e| e.into_inner()) = settings;
        Ok(())
    }

    /// Recompute decorations for the full document text.
    pub fn decorate(&self, text: String, tab_width: u32) -> Vec<DecorationDto> {
        let settings = self.settings.lock().unwrap_or_else(|e| e.into_inner());
        run(&text, tab_width, &settings)
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TextStyleDto {
    None,
    Bold,
    Italic,
    BoldItalic,
    Underline,
    BoldUnderline,
}

impl From<TextStyleDto> for TextStyle {
    fn from(dto: TextStyleDto) -> Self {
        match dto {
            TextStyleDto::None => TextStyle::None,
            TextStyleDto::Bold => TextStyle::Bold,
            TextStyleDto::Italic => TextStyle::Italic,
            TextStyleDto::BoldItalic => TextStyle::BoldItalic,
            TextStyleDto::Underline => TextStyle::Underline,
            TextStyleDto::BoldUnderline => TextStyle::BoldUnderline,
        }
    }
}

impl From<TextStyle> for TextStyleDto {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::None => TextStyleDto::None,
            TextStyle::Bold => TextStyleDto::Bold,
            TextStyle::Italic => TextStyleDto::Italic,
            TextStyle::BoldItalic => TextStyleDto::BoldItalic,
            TextStyle::Underline => TextStyleDto::Underline,
            TextStyle::BoldUnderline => TextStyleDto::BoldUnderline,
        }
    }
}

/// Glyph and text presets for one hierarchy depth.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct LevelStyleDto {
    pub symbol: String,
    /// `em` multiplier applied to non-leaf depths
    pub font_size: f64,
    pub text_style: TextStyleDto,
}

/// Formatting options, mirroring the engine settings.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SettingsDto {
    /// One entry per depth, leaf first (1 to 10 entries)
    pub levels: Vec<LevelStyleDto>,
    pub bold_non_leaf_text: bool,
    pub use_definition_symbol: bool,
    pub exclamation_text_color: String,
    pub definition_highlight: String,
    pub note_symbol: String,
    pub definition_symbol: String,
    pub important_symbol: String,
    /// When true, bullets at indent 0 are ranked and close deeper chains
    pub top_level_bullets_participate: bool,
}

impl From<SettingsDto> for Settings {
    fn from(dto: SettingsDto) -> Self {
        Self {
            bold_non_leaf_text: dto.bold_non_leaf_text,
            use_definition_symbol: dto.use_definition_symbol,
            exclamation_text_color: dto.exclamation_text_color,
            definition_highlight: dto.definition_highlight,
            note_symbol: dto.note_symbol,
            definition_symbol: dto.definition_symbol,
            important_symbol: dto.important_symbol,
            top_level_bullets: if dto.top_level_bullets_participate {
                TopLevelBullets::Participate
            } else {
                TopLevelBullets::Transparent
            },
            levels: dto
                .levels
                .into_iter()
                .map(|level| LevelStyle {
                    symbol: level.symbol,
                    font_size: level.font_size,
                    text_style: level.text_style.into(),
                })
                .collect(),
        }
    }
}

impl From<Settings> for SettingsDto {
    fn from(settings: Settings) -> Self {
        Self {
            levels: settings
                .levels
                .into_iter()
                .map(|level| LevelStyleDto {
                    symbol: level.symbol,
                    font_size: level.font_size,
                    text_style: level.text_style.into(),
                })
                .collect(),
            bold_non_leaf_text: settings.bold_non_leaf_text,
            use_definition_symbol: settings.use_definition_symbol,
            exclamation_text_color: settings.exclamation_text_color,
            definition_highlight: settings.definition_highlight,
            note_symbol: settings.note_symbol,
            definition_symbol: settings.definition_symbol,
            important_symbol: settings.important_symbol,
            top_level_bullets_participate: settings.top_level_bullets
                == TopLevelBullets::Participate,
        }
    }
}

/// A single decoration over the document text.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct DecorationDto {
    /// Start offset in UTF-16 code units
    pub from: u64,
    /// End offset (exclusive) in UTF-16 code units
    pub to: u64,
    /// Decoration type: "replace" or "style"
    pub kind: String,
    /// Replacement glyph, only for "replace"
    pub symbol: Option<String>,
    /// CSS-like `prop: value; ...` declarations, if any
    pub style: Option<String>,
}

impl DecorationDto {
    fn from_engine(decoration: Decoration) -> Self {
        let (kind, symbol, style) = match decoration.kind {
            DecorationKind::Replace(bullet) => {
                let style = bullet.style_string();
                ("replace".to_string(), Some(bullet.symbol), style)
            }
            DecorationKind::Style(style) => ("style".to_string(), None, Some(style.to_string())),
        };

        Self {
            from: decoration.from as u64,
            to: decoration.to as u64,
            kind,
            symbol,
            style,
        }
    }
}

// ============ Standalone Functions ============

/// The default formatting options.
#[uniffi::export]
pub fn default_settings() -> SettingsDto {
    Settings::default().into()
}

/// Validate `settings` and recompute decorations for `text`.
///
/// `tab_width` is the editor's tab size; 0 selects the default of 4.
#[uniffi::export]
pub fn decorate_text(
    text: String,
    tab_width: u32,
    settings: SettingsDto,
) -> Result<Vec<DecorationDto>, FfiError> {
    let settings = validated(settings)?;
    let decorations = run(&text, tab_width, &settings);
    log::debug!("returning {} decorations across FFI", decorations.len());
    Ok(decorations)
}
