// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Rect, Vec2};

use super::utils::{TestEnv, line_text};
use crate::line::{SegmentKind, TextLine};
use crate::style::HJustify;

#[test]
fn style_changes_split_segments() {
    let env = TestEnv::new();
    let line = env.line("A<$b>B<$>C");
    assert_eq!(line.segments().len(), 3, "regular, bold and regular runs");
    assert_eq!(line.advance(), 32.5, "bold glyphs are wider");
    assert_eq!(
        line.bounds(),
        Some(Rect::new(0.0, -10.0, 32.5, 0.0)),
        "ink spans all three runs"
    );
    assert_eq!(line.ascent(), 15.0, "ascent of the test face at size 20");
    assert_eq!(line.descent(), 5.0, "descent of the test face at size 20");
}

#[test]
fn same_style_forms_one_segment() {
    let env = TestEnv::new();
    let line = env.line("AB CD");
    assert_eq!(line.segments().len(), 1, "one style gives one run");
    let SegmentKind::Text { text, .. } = &line.segments()[0].kind else {
        panic!("expected a text segment");
    };
    assert_eq!(text, "AB CD", "the run keeps its spaces");
    assert_eq!(line.width(), 45.0, "four glyphs and a space");
}

#[test]
fn whitespace_has_advance_but_no_ink() {
    let env = TestEnv::new();
    let line = env.line("A  ");
    assert_eq!(line.advance(), 20.0, "spaces move the pen");
    assert_eq!(line.width(), 10.0, "trailing spaces do not widen the ink");

    let blank = env.line("   ");
    assert_eq!(blank.bounds(), None, "spaces alone have no ink");
    assert_eq!(blank.width(), 0.0, "a line without ink has no width");
}

#[test]
fn missing_faces_are_skipped() {
    let env = TestEnv::new();
    let line = env.line("<$Nope>A<$>B");
    assert_eq!(line.len(), 2, "characters are kept");
    assert_eq!(line.segments().len(), 1, "only B is drawn");
    assert_eq!(line.segments()[0].start, 0.0, "the skipped run takes no space");
    assert_eq!(line.advance(), 10.0, "only B advances the pen");

    // The test family has no bold italic face.
    let line = env.line("<$b i>X");
    assert!(line.segments().is_empty(), "no face means no segment");
    assert_eq!(line.bounds(), None, "no face means no ink");
}

#[test]
fn empty_line_takes_height_on_finish() {
    let env = TestEnv::new();
    let mut line = TextLine::new(1.0);
    assert_eq!(line.ascent() + line.descent(), 0.0, "a new line has no height");
    line.finish(&env.resources, &env.style());
    assert_eq!(line.ascent(), 15.0, "ascent comes from the finishing style");
    assert_eq!(line.descent(), 5.0, "descent comes from the finishing style");
    assert_eq!(line.bounds(), None, "a blank line still has no ink");

    let mut scaled = TextLine::new(2.0);
    scaled.finish(&env.resources, &env.style());
    assert_eq!(scaled.ascent() + scaled.descent(), 40.0, "height follows the font scale");
}

#[test]
fn font_scale_multiplies_sizes() {
    let env = TestEnv::new();
    let mut line = TextLine::new(0.5);
    line.append(&env.resources, &env.parse("AB"));
    assert_eq!(line.width(), 10.0, "font scale halves the width");
    assert_eq!(line.ascent(), 7.5, "font scale halves the ascent");

    let mut line = TextLine::new(1.0);
    line.append(&env.resources, &env.parse("<$50%>AB"));
    assert_eq!(line.width(), 10.0, "style scale also applies");
}

#[test]
fn snapshot_and_restore() {
    let env = TestEnv::new();
    let mut line = env.line("AB");
    let snapshot = line.snapshot();
    line.append(&env.resources, &env.parse("<$b>CD"));
    assert_eq!(line.len(), 4, "append adds characters");
    assert_eq!(line.segments().len(), 2, "bold text starts a new run");

    line.restore(snapshot);
    assert_eq!(line_text(&line), "AB", "characters are truncated");
    assert_eq!(line.segments().len(), 1, "segments are restored");
    assert_eq!(line.advance(), 20.0, "the pen position is restored");
    assert_eq!(
        line.bounds(),
        Some(Rect::new(0.0, -10.0, 20.0, 0.0)),
        "bounds are restored"
    );
}

#[test]
fn propose_leaves_line_untouched() {
    let env = TestEnv::new();
    let line = env.line("AB");
    let candidate = line.propose(&env.resources, &env.parse(" CD"));
    assert_eq!(line_text(&line), "AB", "the original keeps its characters");
    assert_eq!(line.width(), 20.0, "the original keeps its width");
    assert_eq!(line_text(&candidate), "AB CD", "the candidate has both parts");
    assert_eq!(candidate.width(), 45.0, "the candidate is measured in full");
}

#[test]
fn icon_fits_ascender() {
    let env = TestEnv::new();
    let line = env.line("A<@dot>B");
    assert_eq!(line.segments().len(), 3, "the icon is its own segment");
    let icon = &line.segments()[1];
    let SegmentKind::Icon { origin, scale, .. } = &icon.kind else {
        panic!("expected an icon segment");
    };
    // The 10x20 icon is scaled to the 15 unit ascent.
    assert_eq!(*scale, 0.75, "icon height matches the ascent");
    assert_eq!((origin.x, origin.y), (10.0, -15.0), "icon sits on the baseline");
    assert_eq!(
        icon.bounds,
        Some(Rect::new(10.0, -15.0, 17.5, 0.0)),
        "icon bounds are the placed rectangle"
    );
    assert_eq!(line.advance(), 27.5, "the icon advances by its scaled width");
}

#[test]
fn icon_natural_size_and_offset() {
    let env = TestEnv::new();
    let line = env.line("<$icon_fit:none><@dot>");
    assert_eq!(
        line.segments()[0].bounds,
        Some(Rect::new(0.0, -20.0, 10.0, 0.0)),
        "natural size is kept"
    );

    let line = env.line("<$icon_y:50%><@dot>");
    assert_eq!(
        line.segments()[0].bounds,
        Some(Rect::new(0.0, -7.5, 7.5, 7.5)),
        "icon_y moves the icon down by half its height"
    );
}

#[test]
fn unknown_icon_is_skipped() {
    let env = TestEnv::new();
    let line = env.line("A<@moon>B");
    assert_eq!(line.len(), 3, "the placeholder is kept");
    assert_eq!(line.segments().len(), 2, "the unknown icon draws nothing");
    assert_eq!(line.advance(), 20.0, "the unknown icon takes no space");
}

#[test]
fn touching_underlines_merge() {
    let env = TestEnv::new();
    let line = env.line("<$u>AB<$b>C<$>D<$>E");
    assert_eq!(line.segments().len(), 4, "each style change starts a run");
    let underlines = line.underlines();
    assert_eq!(underlines.len(), 1, "one rectangle across the styled run");
    assert_eq!(
        underlines[0].0,
        Rect::new(0.0, 4.0, 42.5, 5.0),
        "the underline ends at the descent"
    );
}

#[test]
fn separated_underlines_stay_apart() {
    let env = TestEnv::new();
    let line = env.line("<$u>A<$> B <$u underline:2>C");
    let underlines = line.underlines();
    assert_eq!(underlines.len(), 2, "plain text between breaks the underline");
    assert_eq!(underlines[0].0, Rect::new(0.0, 4.0, 10.0, 5.0), "default weight");
    assert_eq!(underlines[1].0, Rect::new(30.0, 3.0, 40.0, 5.0), "explicit weight");
}

#[test]
fn svg_has_one_group_per_drawn_segment() {
    let env = TestEnv::new();
    let line = env.line("<$#ff0000>A<$> <@dot><$u>B");
    let svg = line.to_svg(Vec2::new(1.0, 2.0));
    // "A", the space run and "B" are text; the space run draws nothing.
    assert_eq!(svg.matches("<path").count(), 2, "{svg}");
    assert_eq!(svg.matches("<circle").count(), 1, "{svg}");
    assert_eq!(svg.matches("<rect").count(), 1, "{svg}");
    assert!(svg.contains(r#"fill="rgb(255,0,0)""#), "{svg}");
    assert!(svg.contains(r#"transform="translate(1 2)""#), "{svg}");
}

#[test]
fn empty_line_renders_nothing() {
    let line = TextLine::new(1.0);
    assert!(line.to_svg(Vec2::ZERO).is_empty(), "no segments, no markup");
    assert!(line.underlines().is_empty(), "no segments, no underlines");
}

#[test]
fn justify_comes_from_first_character() {
    let env = TestEnv::new();
    assert_eq!(env.line("A<$r>B").h_justify(), None, "later styles do not count");
    assert_eq!(
        env.line("<$r>A<$>B").h_justify(),
        Some(HJustify::Right),
        "the first character decides"
    );
}
