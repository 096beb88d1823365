//! # Hierarchy Levels
//!
//! Assigns every bullet line a nesting level from the indentation of the
//! lines that follow it.
//!
//! ## Algorithm
//!
//! 1. Every bullet line starts at level 1, every other line at 0.
//! 2. Walking from the last line to the first, each line scans forward:
//!    transparent lines are skipped, strictly deeper bullets raise the level to
//!    `1 + level[j]`, and the first bullet at the same or a shallower indent
//!    ends the scan.
//!
//! A line's level is therefore one more than the deepest chain of increasingly
//! indented bullets that follows it before the indentation closes. Lines need
//! not form a well-formed outline. The forward scan is quadratic for a strictly
//! increasing indent ladder.

use crate::settings::TopLevelBullets;

/// Computes a level per line from `(is bullet, normalized indent)` facts.
///
/// `indents[i]` is `None` for non-bullet lines. The result has one entry per
/// input line: 0 for non-bullet lines, at least 1 for bullet lines.
pub fn compute_levels(indents: &[Option<usize>], top_level: TopLevelBullets) -> Vec<usize> {
    let mut levels: Vec<usize> = indents.iter().map(|i| usize::from(i.is_some())).collect();

    // Lines that neither start a scan nor stop one.
    let scan_indents: Vec<Option<usize>> = indents
        .iter()
        .map(|&indent| match (indent, top_level) {
            (Some(0), TopLevelBullets::Transparent) => None,
            _ => indent,
        })
        .collect();

    for i in (0..scan_indents.len()).rev() {
        let Some(current) = scan_indents[i] else {
            continue;
        };

        for j in i + 1..scan_indents.len() {
            let Some(next) = scan_indents[j] else {
                continue;
            };
            if next <= current {
                break;
            }
            levels[i] = levels[i].max(1 + levels[j]);
        }
    }

    levels
}

/// Depth used for decoration: 0 = leaf, 1 = parent, 2+ = grandparent or deeper.
///
/// Returns `None` for level 0 (non-bullet lines).
#[must_use]
pub fn depth(level: usize) -> Option<usize> {
    level.checked_sub(1)
}
