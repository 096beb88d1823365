use crate::{
    decoration::{Decoration, DecorationKind},
    document::Document,
};

/// Renders one line per decoration:
///
/// ```text
/// L1 8..9 replace `-` => `→` {font-size: 1.2em}
/// L1 10..16 style `Parent` {font-weight: bold}
/// ```
pub fn normalize(doc: &Document, decorations: &[Decoration]) -> Vec<String> {
    decorations
        .iter()
        .map(|d| {
            let line = doc.line_at(d.from).unwrap_or_default();
            let text = doc.slice(d.from, d.to);
            let effect = match &d.kind {
                DecorationKind::Replace(bullet) => match &bullet.style {
                    Some(style) => format!("replace `{text}` => `{}` {{{style}}}", bullet.symbol),
                    None => format!("replace `{text}` => `{}`", bullet.symbol),
                },
                DecorationKind::Style(style) => format!("style `{text}` {{{style}}}"),
            };
            format!("L{line} {}..{} {effect}", d.from, d.to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decoration::BulletType, style::Style};

    #[test]
    fn renders_replace_and_style() {
        let doc = Document::from_text("x\n- ok");
        let decorations = vec![
            Decoration {
                from: 2,
                to: 3,
                kind: DecorationKind::Replace(BulletType::new("→")),
            },
            Decoration {
                from: 4,
                to: 6,
                kind: DecorationKind::Style(Style::new().italic()),
            },
        ];
        assert_eq!(
            normalize(&doc, &decorations),
            vec![
                "L1 2..3 replace `-` => `→`".to_string(),
                "L1 4..6 style `ok` {font-style: italic}".to_string(),
            ]
        );
    }
}
