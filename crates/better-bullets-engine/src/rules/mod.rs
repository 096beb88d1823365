//! # Pattern Rules
//!
//! Turns one bullet line and its depth into a display symbol and a list of
//! style ranges.
//!
//! ## Rule Order
//!
//! 1. **Structural**: glyph by depth; non-leaf text gets a font size and weight
//! 2. **Note**: `Note: ` prefix
//! 3. **Definition**: `term | definition`
//! 4. **Important**: text ending in `!`
//! 5. **Quote**: `"..."` spans
//! 6. **Parenthetical**: `(...)` spans
//! 7. **Year**: standalone four-digit numbers
//!
//! Rules 1–4 may replace the symbol; the last one to fire wins, so the
//! important glyph beats note and definition. Ranges are emitted in rule order
//! and may overlap; the assembler resolves overlaps by layering later rules on
//! top of earlier ones.

pub mod patterns;

use regex::Regex;

use crate::{
    decoration::BulletType,
    parsing::{line::BulletLine, span::Span},
    settings::{DEFAULT_LEAF_SYMBOL, Settings},
    style::{FONT_WEIGHT, Style},
};

pub const NOTE_PREFIX: &str = "Note: ";
pub const DEFINITION_SEPARATOR: &str = " | ";
pub const IMPORTANT_SUFFIX: char = '!';

/// The bold+italic token at the start of a note: `Note:` without the space.
const NOTE_TOKEN_LEN: usize = NOTE_PREFIX.len() - 1;

/// Which rule produced a range. Ordered by precedence, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Structural,
    Note,
    Definition,
    Important,
    Quote,
    Parenthetical,
    Year,
}

/// A style over a span of the line, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRange {
    /// Byte span relative to the start of the line.
    pub span: Span,
    pub style: Style,
    pub rule: Rule,
}

/// Everything the rules decided for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRules {
    pub bullet: BulletType,
    /// Ranges in rule order; not sorted and possibly overlapping.
    pub ranges: Vec<StyledRange>,
}

/// Accumulates rule output for the trimmed text of one line.
struct RuleOutput<'a> {
    text: &'a str,
    /// Offset of `text` within the line.
    base: usize,
    symbol: String,
    symbol_style: Style,
    ranges: Vec<StyledRange>,
}

impl RuleOutput<'_> {
    /// Records `style` over `text[start..end]`; empty spans and styles are dropped.
    fn push(&mut self, rule: Rule, start: usize, end: usize, style: Style) {
        if start >= end || style.is_empty() {
            return;
        }
        self.ranges.push(StyledRange {
            span: Span::new(start, end).shift(self.base),
            style,
            rule,
        });
    }

    fn push_matches(&mut self, rule: Rule, regex: &Regex, style: &Style) {
        let spans: Vec<Span> = patterns::find_spans(regex, self.text).collect();
        for span in spans {
            self.push(rule, span.start, span.end, style.clone());
        }
    }
}

/// Applies all rules, in order, to one bullet line at the given depth.
pub fn apply_rules(line: &BulletLine<'_>, depth: usize, settings: &Settings) -> LineRules {
    let mut out = RuleOutput {
        text: line.text,
        base: line.text_span().start,
        symbol: String::new(),
        symbol_style: Style::new(),
        ranges: Vec::new(),
    };

    structural(&mut out, depth, settings);
    note(&mut out, settings);
    definition(&mut out, settings);
    important(&mut out, settings);

    let italic = Style::new().italic();
    out.push_matches(Rule::Quote, patterns::quoted(), &italic);
    out.push_matches(Rule::Parenthetical, patterns::parenthetical(), &italic);
    out.push_matches(Rule::Year, patterns::year(), &Style::new().underline());

    let style = (!out.symbol_style.is_empty()).then_some(out.symbol_style);
    LineRules {
        bullet: BulletType {
            symbol: out.symbol,
            style,
        },
        ranges: out.ranges,
    }
}

fn structural(out: &mut RuleOutput<'_>, depth: usize, settings: &Settings) {
    let level = settings.level(depth);
    out.symbol = level.map_or_else(|| DEFAULT_LEAF_SYMBOL.to_string(), |l| l.symbol.clone());

    let mut text_style = Style::new();
    if depth > 0 {
        let size = level.map_or(1.0, |l| l.font_size);
        out.symbol_style = Style::new().font_size(size);
        text_style = Style::new().font_size(size);

        if settings.bold_non_leaf_text {
            out.symbol_style.set(FONT_WEIGHT, "bold");
            text_style.set(FONT_WEIGHT, "bold");
        } else {
            text_style.set(FONT_WEIGHT, "normal");
        }
    }
    if let Some(level) = level {
        level.text_style.apply(&mut text_style);
    }

    let len = out.text.len();
    out.push(Rule::Structural, 0, len, text_style);
}

fn note(out: &mut RuleOutput<'_>, settings: &Settings) {
    if !out.text.starts_with(NOTE_PREFIX) {
        return;
    }
    out.symbol = settings.note_symbol.clone();

    let len = out.text.len();
    out.push(Rule::Note, 0, NOTE_TOKEN_LEN, Style::new().bold().italic());
    out.push(Rule::Note, NOTE_PREFIX.len(), len, Style::new().italic());
}

fn definition(out: &mut RuleOutput<'_>, settings: &Settings) {
    let Some(separator) = out.text.find(DEFINITION_SEPARATOR) else {
        return;
    };
    if settings.use_definition_symbol {
        out.symbol = settings.definition_symbol.clone();
    }

    let len = out.text.len();
    let term_style = Style::new()
        .bold()
        .background(&settings.definition_highlight);
    out.push(Rule::Definition, 0, separator, term_style);
    out.push(
        Rule::Definition,
        separator + DEFINITION_SEPARATOR.len(),
        len,
        Style::new().italic(),
    );
}

fn important(out: &mut RuleOutput<'_>, settings: &Settings) {
    if !out.text.ends_with(IMPORTANT_SUFFIX) {
        return;
    }
    out.symbol = settings.important_symbol.clone();

    let color = settings.exclamation_text_color.as_str();
    out.symbol_style.layer(&Style::new().bold().color(color));

    let len = out.text.len();
    out.push(Rule::Important, 0, len, Style::new().bold().color(color));
}
