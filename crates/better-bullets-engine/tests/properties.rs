use better_bullets_engine::{
    Decoration, DecorationKind, Document, Settings, TopLevelBullets, analyze, decorate,
    snapshot::invariants,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn symbols(doc: &Document, settings: &Settings) -> Vec<(usize, String)> {
    analyze(doc, 4, settings)
        .into_iter()
        .map(|line| (line.line, line.bullet.symbol))
        .collect()
}

fn depths(text: &str, settings: &Settings) -> Vec<(usize, usize)> {
    analyze(&Document::from_text(text), 4, settings)
        .into_iter()
        .map(|line| (line.line, line.depth))
        .collect()
}

/// The style of the decoration covering exactly `needle` on the document.
fn style_of(doc: &Document, decorations: &[Decoration], needle: &str) -> String {
    decorations
        .iter()
        .find(|d| !d.is_replace() && doc.slice(d.from, d.to) == needle)
        .and_then(Decoration::style)
        .map(ToString::to_string)
        .unwrap_or_else(|| panic!("no style decoration covering {needle:?}"))
}

#[rstest]
#[case("")]
#[case("- single")]
#[case("no bullets here\nat all")]
#[case("- a\n  - b\n    - c\n  - d\n- e")]
#[case("  - Parent \"quoted (nested 2024) text\" (aside \"q\") 1999!\n    - Note: child | def!")]
#[case("\t- tab\n\t\t- deeper\r\n\t\t\t- deepest \"x\"\r\n")]
#[case("- Term | Definition (1999) \"2000\"\n      - Note: \"a\" (b) 2001")]
fn output_is_sorted_and_disjoint(#[case] text: &str) {
    let doc = Document::from_text(text);
    let decorations = decorate(&doc, 4, &Settings::default());
    invariants(&doc, &decorations);
}

#[test]
fn non_bullet_lines_never_decorated() {
    let doc = Document::from_text("Intro \"quoted\" 1999 (paren)!\n- item\nNote: outro | def");
    let decorations = decorate(&doc, 4, &Settings::default());
    let lines: Vec<usize> = decorations
        .iter()
        .filter_map(|d| doc.line_at(d.from))
        .collect();
    assert_eq!(lines, vec![1]);
}

#[test]
fn isolated_bullet_is_leaf() {
    let doc = Document::from_text("Some text\n    - lonely\nMore text");
    assert_eq!(symbols(&doc, &Settings::default()), vec![(1, "-".to_string())]);
    assert_eq!(depths("Some text\n    - lonely\nMore text", &Settings::default()), vec![(1, 0)]);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(6)]
fn increasing_chain_depths(#[case] k: usize) {
    let text = (1..=k)
        .map(|i| format!("{}- level {i}", "  ".repeat(i)))
        .collect::<Vec<_>>()
        .join("\n");
    let expected: Vec<(usize, usize)> = (0..k).map(|i| (i, k - 1 - i)).collect();
    assert_eq!(depths(&text, &Settings::default()), expected);
}

#[test]
fn blank_and_plain_lines_do_not_break_chain() {
    let text = "  - a\n\n  plain continuation\n    - b\n\n      - c";
    assert_eq!(
        depths(text, &Settings::default()),
        vec![(0, 2), (3, 1), (5, 0)]
    );
}

#[test]
fn sibling_stops_chain() {
    let text = "  - a\n    - b\n  - sibling\n      - deep";
    assert_eq!(
        depths(text, &Settings::default()),
        vec![(0, 1), (1, 0), (2, 1), (3, 0)]
    );
}

#[test]
fn tabs_expand_before_comparison() {
    // One tab at width 4 is deeper than 2 spaces and equal to 4 spaces.
    let text = "  - a\n\t- b\n    - c";
    assert_eq!(
        depths(text, &Settings::default()),
        vec![(0, 1), (1, 0), (2, 0)]
    );

    let doc = Document::from_text(" - a\n\t- b");
    let narrow: Vec<usize> = analyze(&doc, 1, &Settings::default())
        .into_iter()
        .map(|l| l.depth)
        .collect();
    assert_eq!(narrow, vec![0, 0]);
}

#[test]
fn top_level_bullets_are_leaves_by_default() {
    let text = "- root\n  - child\n    - grandchild";
    assert_eq!(
        depths(text, &Settings::default()),
        vec![(0, 0), (1, 1), (2, 0)]
    );

    let participate = Settings {
        top_level_bullets: TopLevelBullets::Participate,
        ..Settings::default()
    };
    assert_eq!(depths(text, &participate), vec![(0, 2), (1, 1), (2, 0)]);
}

#[test]
fn note_line() {
    let doc = Document::from_text("- Note: something");
    let decorations = decorate(&doc, 4, &Settings::default());
    assert_eq!(symbols(&doc, &Settings::default()), vec![(0, "*".to_string())]);
    assert_eq!(
        style_of(&doc, &decorations, "Note:"),
        "font-weight: bold; font-style: italic"
    );
    assert_eq!(style_of(&doc, &decorations, "something"), "font-style: italic");
}

#[test]
fn definition_line() {
    let settings = Settings {
        use_definition_symbol: true,
        ..Settings::default()
    };
    let doc = Document::from_text("- Term | Definition");
    let decorations = decorate(&doc, 4, &settings);
    assert_eq!(symbols(&doc, &settings), vec![(0, "@".to_string())]);
    assert_eq!(
        style_of(&doc, &decorations, "Term"),
        "font-weight: bold; background-color: var(--text-highlight-bg)"
    );
    assert_eq!(style_of(&doc, &decorations, "Definition"), "font-style: italic");
}

#[test]
fn exclamation_line_overrides_other_symbols() {
    let settings = Settings {
        use_definition_symbol: true,
        exclamation_text_color: "red".to_string(),
        ..Settings::default()
    };
    let doc = Document::from_text("- Urgent!\n- Note: act now!\n- Term | now!");
    let decorations = decorate(&doc, 4, &settings);
    assert_eq!(
        symbols(&doc, &settings),
        vec![
            (0, "!".to_string()),
            (1, "!".to_string()),
            (2, "!".to_string()),
        ]
    );
    assert_eq!(
        style_of(&doc, &decorations, "Urgent!"),
        "font-weight: bold; color: red"
    );

    let replaced = decorations.iter().find_map(|d| match &d.kind {
        DecorationKind::Replace(bullet) => bullet.style_string(),
        DecorationKind::Style(_) => None,
    });
    assert_eq!(replaced.as_deref(), Some("font-weight: bold; color: red"));
}

#[test]
fn exclamation_colors_whole_note_line() {
    let doc = Document::from_text("- Note: act now!");
    let decorations = decorate(&doc, 4, &Settings::default());
    assert_eq!(
        style_of(&doc, &decorations, "Note:"),
        "font-weight: bold; font-style: italic; color: #773757"
    );
    assert_eq!(
        style_of(&doc, &decorations, "act now!"),
        "font-style: italic; font-weight: bold; color: #773757"
    );
}

#[test]
fn quote_year_and_parenthetical_are_separate() {
    let doc = Document::from_text("- He said \"hello\" in 1999 (allegedly)");
    let decorations = decorate(&doc, 4, &Settings::default());
    let styles: Vec<(String, String)> = decorations
        .iter()
        .filter(|d| !d.is_replace())
        .map(|d| {
            (
                doc.slice(d.from, d.to),
                d.style().map(ToString::to_string).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        styles,
        vec![
            ("\"hello\"".to_string(), "font-style: italic".to_string()),
            ("1999".to_string(), "text-decoration: underline".to_string()),
            ("(allegedly)".to_string(), "font-style: italic".to_string()),
        ]
    );
}

#[test]
fn year_inside_quote_is_italic_and_underlined() {
    let doc = Document::from_text("- \"back in 1999\"");
    let decorations = decorate(&doc, 4, &Settings::default());
    invariants(&doc, &decorations);
    assert_eq!(style_of(&doc, &decorations, "\"back in "), "font-style: italic");
    assert_eq!(
        style_of(&doc, &decorations, "1999"),
        "font-style: italic; text-decoration: underline"
    );
    assert_eq!(style_of(&doc, &decorations, "\""), "font-style: italic");
}

#[rstest]
#[case("- 1999年に", "1999")]
#[case("- café1999", "1999")]
#[case("- 2024年", "2024")]
fn year_next_to_non_ascii_letter_is_underlined(#[case] text: &str, #[case] year: &str) {
    let doc = Document::from_text(text);
    let decorations = decorate(&doc, 4, &Settings::default());
    assert_eq!(style_of(&doc, &decorations, year), "text-decoration: underline");
}

#[test]
fn recompute_is_idempotent() {
    let doc = Document::from_text("- a\n  - b \"c\" 2020\n    - Note: d!\n\n  - e | f");
    let settings = Settings::default();
    let first = decorate(&doc, 4, &settings);
    let second = decorate(&doc, 4, &settings);
    assert_eq!(first, second);
}
