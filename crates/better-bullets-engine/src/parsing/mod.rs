//! # Line Parsing
//!
//! Per-line facts that feed the hierarchy calculator and the rule engine.
//!
//! - **`line`**: classifies a line as a bullet line and splits it into
//!   indent, marker, separator and text
//! - **`indent`**: expands tabs so indents of different lines compare
//! - **`span`**: byte ranges relative to the start of a line

pub mod indent;
pub mod line;
pub mod span;

pub use indent::{DEFAULT_TAB_WIDTH, normalize_indent};
pub use line::{BulletLine, Marker, parse_bullet_line};
pub use span::Span;
