//! # better-bullets engine
//!
//! Turns plain-text lines with markdown bullet markers into decorations: a
//! replacement glyph per bullet that reflects its nesting depth, and inline
//! style ranges driven by structure and content patterns.
//!
//! The pipeline is pure and recomputes from the full document every time:
//!
//! 1. [`parsing`] classifies lines and normalizes indents
//! 2. [`hierarchy`] derives a level per bullet line from indentation
//! 3. [`rules`] picks a symbol and style ranges per line
//! 4. [`assemble`] merges everything into one sorted, non-overlapping sequence
//!
//! Identical documents and settings always produce identical output.

pub mod assemble;
pub mod decoration;
pub mod document;
pub mod hierarchy;
pub mod parsing;
pub mod rules;
pub mod settings;
pub mod snapshot;
pub mod style;

// Re-export key types for easier usage
pub use assemble::{DecoratedLine, analyze, decorate};
pub use decoration::{BulletType, Decoration, DecorationKind};
pub use document::{Document, OffsetEncoding};
pub use settings::{LevelStyle, Settings, SettingsError, TopLevelBullets};
pub use style::{Style, TextStyle};
