//! # Snapshot Testing Support
//!
//! Utilities for testing the engine via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: renders decorations as stable, human-readable lines for
//!   `insta` snapshots
//! - **`invariants`**: runtime checks for the output contract (in bounds,
//!   non-empty, sorted, non-overlapping)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
