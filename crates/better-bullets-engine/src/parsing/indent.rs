/// Tab width used when the host does not configure one.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Resolves the host's tab width, treating 0 as "not configured".
#[must_use]
pub fn effective_tab_width(tab_width: usize) -> usize {
    if tab_width == 0 {
        DEFAULT_TAB_WIDTH
    } else {
        tab_width
    }
}

/// Converts a leading-whitespace string into a comparable column count.
///
/// Every tab expands to `tab_width` columns; any other whitespace character
/// counts as one column.
#[must_use]
pub fn normalize_indent(indent: &str, tab_width: usize) -> usize {
    let tab_width = effective_tab_width(tab_width);
    indent
        .chars()
        .map(|ch| if ch == '\t' { tab_width } else { 1 })
        .sum()
}
