use crate::{decoration::Decoration, document::Document};

/// Validates the decoration output contract.
///
/// Asserts that:
/// - Every decoration is non-empty and within document bounds
/// - Start offsets strictly increase
/// - No two decorations overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document, decorations: &[Decoration]) {
    let n = doc.len();
    for d in decorations {
        assert!(
            !d.is_empty() && d.to <= n,
            "decoration out of bounds or empty: {}..{} (document len: {})",
            d.from,
            d.to,
            n
        );
    }
    for pair in decorations.windows(2) {
        assert!(
            pair[0].from < pair[1].from,
            "decorations not ordered: {}..{} before {}..{}",
            pair[0].from,
            pair[0].to,
            pair[1].from,
            pair[1].to
        );
        assert!(
            pair[0].to <= pair[1].from,
            "decorations overlap: {}..{} and {}..{}",
            pair[0].from,
            pair[0].to,
            pair[1].from,
            pair[1].to
        );
    }
}
