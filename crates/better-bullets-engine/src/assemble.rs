//! # Decoration Assembly
//!
//! Runs the whole pipeline over a document and produces the final decoration
//! sequence.
//!
//! ## Output Invariant
//!
//! The sequence is strictly ordered by `from` and pairwise non-overlapping.
//! Rule ranges that overlap are cut at every boundary into disjoint segments;
//! each segment carries the styles of all ranges covering it, layered in rule
//! order so later rules win per property. Adjacent segments with equal styles
//! are merged back together.

use crate::{
    decoration::{BulletType, Decoration, DecorationKind},
    document::Document,
    hierarchy::{compute_levels, depth},
    parsing::{
        line::{BulletLine, parse_bullet_line},
        span::Span,
    },
    rules::{StyledRange, apply_rules},
    settings::Settings,
    style::Style,
};

/// The decorations produced for one bullet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedLine {
    /// 0-based line index.
    pub line: usize,
    /// 0 = leaf, 1 = parent, 2+ = grandparent or deeper.
    pub depth: usize,
    pub bullet: BulletType,
    /// This line's decorations in document offsets, sorted and disjoint.
    pub decorations: Vec<Decoration>,
}

/// Recomputes decorations for every bullet line of `doc`.
///
/// `tab_width` is the host's tab size (0 means the default of 4). Non-bullet
/// lines are skipped.
pub fn analyze(doc: &Document, tab_width: usize, settings: &Settings) -> Vec<DecoratedLine> {
    let parsed: Vec<Option<BulletLine<'_>>> = doc
        .lines()
        .iter()
        .map(|line| parse_bullet_line(line, tab_width))
        .collect();

    let indents: Vec<Option<usize>> = parsed
        .iter()
        .map(|bullet| bullet.as_ref().map(|b| b.indent))
        .collect();
    let levels = compute_levels(&indents, settings.top_level_bullets);

    let mut out = Vec::new();
    let starts = doc.line_starts();
    for (index, bullet) in parsed.iter().enumerate() {
        if let Some(bullet) = bullet
            && let Some(line_depth) = depth(levels[index])
        {
            out.push(decorate_line(
                doc,
                index,
                starts[index],
                bullet,
                line_depth,
                settings,
            ));
        }
    }

    log::debug!(
        "recomputed {} bullet lines out of {} lines",
        out.len(),
        doc.line_count()
    );
    out
}

/// Recomputes the flat, document-wide decoration sequence.
pub fn decorate(doc: &Document, tab_width: usize, settings: &Settings) -> Vec<Decoration> {
    let decorations: Vec<Decoration> = analyze(doc, tab_width, settings)
        .into_iter()
        .flat_map(|line| line.decorations)
        .collect();
    log::debug!("emitting {} decorations", decorations.len());
    decorations
}

fn decorate_line(
    doc: &Document,
    index: usize,
    line_start: usize,
    bullet: &BulletLine<'_>,
    depth: usize,
    settings: &Settings,
) -> DecoratedLine {
    let rules = apply_rules(bullet, depth, settings);

    let mut local: Vec<(Span, DecorationKind)> = flatten_ranges(&rules.ranges)
        .into_iter()
        .map(|(span, style)| (span, DecorationKind::Style(style)))
        .collect();
    local.push((
        bullet.marker_span(),
        DecorationKind::Replace(rules.bullet.clone()),
    ));
    local.sort_by_key(|(span, _)| span.start);

    let line = &doc.lines()[index];
    let decorations = local
        .into_iter()
        .map(|(span, kind)| Decoration {
            from: doc.offset_of(line_start, line, span.start),
            to: doc.offset_of(line_start, line, span.end),
            kind,
        })
        .collect();

    DecoratedLine {
        line: index,
        depth,
        bullet: rules.bullet,
        decorations,
    }
}

/// Cuts possibly-overlapping ranges into disjoint, sorted segments.
///
/// Each segment's style layers every covering range in input order. Segments
/// with no style are dropped and equal neighbours are merged.
pub fn flatten_ranges(ranges: &[StyledRange]) -> Vec<(Span, Style)> {
    let mut bounds: Vec<usize> = ranges
        .iter()
        .flat_map(|r| [r.span.start, r.span.end])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut segments: Vec<(Span, Style)> = Vec::new();
    for pair in bounds.windows(2) {
        let segment = Span::new(pair[0], pair[1]);

        let mut style = Style::new();
        for range in ranges.iter().filter(|r| r.span.contains(segment)) {
            style.layer(&range.style);
        }
        if style.is_empty() {
            continue;
        }

        match segments.last_mut() {
            Some((prev, prev_style)) if prev.end == segment.start && *prev_style == style => {
                prev.end = segment.end;
            }
            _ => segments.push((segment, style)),
        }
    }

    if segments.len() != ranges.len() {
        log::trace!(
            "split {} styled ranges into {} segments",
            ranges.len(),
            segments.len()
        );
    }
    segments
}
