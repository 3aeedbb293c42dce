// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word wrapping and placement of lines inside a box.

use core::iter::repeat_n;

use peniko::kurbo::{Rect, Vec2};

use crate::line::TextLine;
use crate::markup::{self, StyledChar};
use crate::resource::Resources;
use crate::style::{HJustify, Style, VJustify};

/// Tab stops are placed every this many characters.
const TAB_WIDTH: usize = 4;

/// A block of marked-up text wrapped to the width of a box.
///
/// Nothing is laid out until [`fit`](Self::fit) is called. Every call starts
/// from the raw text again, so the result only depends on the arguments of
/// the latest call.
#[derive(Clone, Debug)]
pub struct TextBox {
    text: String,
    style: Style,
    bounds: Rect,
    h_justify: HJustify,
    v_justify: VJustify,

    lines: Vec<TextLine>,
    offsets: Vec<Vec2>,
    fit_bounds: Option<Rect>,
    pad_top: f64,
    pad_bottom: f64,
    overflow: bool,
}

impl TextBox {
    /// Creates a box for `text`, drawn with `style` unless the markup says
    /// otherwise.
    ///
    /// The style's scale and underline are ignored: text always starts at a
    /// scale of 1 and without underline.
    pub fn new(text: impl Into<String>, style: Style, bounds: Rect) -> Self {
        Self {
            text: text.into(),
            style,
            bounds,
            h_justify: HJustify::default(),
            v_justify: VJustify::default(),
            lines: Vec::new(),
            offsets: Vec::new(),
            fit_bounds: None,
            pad_top: 0.0,
            pad_bottom: 0.0,
            overflow: false,
        }
    }

    /// Sets the justification of lines that do not request their own.
    #[must_use]
    pub fn with_h_justify(mut self, h_justify: HJustify) -> Self {
        self.h_justify = h_justify;
        self
    }

    /// Sets the vertical placement of the lines when they leave room.
    #[must_use]
    pub fn with_v_justify(mut self, v_justify: VJustify) -> Self {
        self.v_justify = v_justify;
        self
    }

    /// The marked-up source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The box the text is fitted into.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replaces the box the text is fitted into.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Lays the text out with all font sizes multiplied by `font_scale`.
    ///
    /// Returns whether the ink is wider or taller than the box.
    pub fn fit(&mut self, resources: &Resources, font_scale: f32) -> bool {
        let base = Style {
            scale: 1.0,
            underline: false,
            ..self.style.clone()
        };
        let chars = markup::parse(&self.text, &base);

        let mut breaker = LineBreaker::new(resources, self.bounds.width(), font_scale);
        let mut in_word = false;
        for c in &chars {
            match c.ch {
                '\r' => {}
                '\n' => {
                    breaker.flush();
                    breaker.end_line(&c.style);
                    in_word = false;
                }
                _ if c.is_whitespace() => {
                    if in_word {
                        breaker.flush();
                        in_word = false;
                    }
                    breaker.token.push(c.clone());
                }
                _ => {
                    breaker.token.push(c.clone());
                    in_word = true;
                }
            }
        }
        breaker.flush();
        if let Some(last) = chars.last() {
            breaker.end_line(&last.style);
        }

        self.lines = breaker.lines;
        self.place_lines();
        self.overflow = self.fit_bounds.is_some_and(|fit| {
            fit.width() > self.bounds.width() || fit.height() > self.bounds.height()
        });
        self.overflow
    }

    fn place_lines(&mut self) {
        self.offsets.clear();
        self.fit_bounds = None;

        let mut prev: Option<(f64, f64)> = None;
        for line in &self.lines {
            let baseline = match prev {
                Some((prev_baseline, prev_descent)) => prev_baseline + prev_descent + line.ascent(),
                // The first line's ink touches the top of the box.
                None => self.bounds.y0 - line.bounds().map_or(-line.ascent(), |b| b.y0),
            };
            prev = Some((baseline, line.descent()));

            let width = line.width();
            let ink_x0 = line.bounds().map_or(0.0, |b| b.x0);
            let left = match line.h_justify().unwrap_or(self.h_justify) {
                HJustify::Left => self.bounds.x0,
                HJustify::Center => self.bounds.x0 + (self.bounds.width() - width) * 0.5,
                HJustify::Right => self.bounds.x1 - width,
            };
            let offset = Vec2::new(left - ink_x0, baseline);
            self.offsets.push(offset);

            let extent = line
                .bounds()
                .unwrap_or_else(|| Rect::new(ink_x0, -line.ascent(), ink_x0, line.descent()))
                + offset;
            self.fit_bounds = Some(self.fit_bounds.map_or(extent, |fit| fit.union(extent)));
        }

        let Some(fit) = self.fit_bounds else {
            self.pad_top = 0.0;
            self.pad_bottom = 0.0;
            return;
        };

        let free = self.bounds.height() - fit.height();
        if free > 0.0 {
            let shift = Vec2::new(0.0, free * self.v_justify.factor());
            for offset in &mut self.offsets {
                *offset += shift;
            }
            self.fit_bounds = Some(fit + shift);
        }

        // Gaps between the nominal font box and the ink of the outer lines.
        self.pad_top = self
            .lines
            .first()
            .and_then(|line| Some(line.ascent() + line.bounds()?.y0))
            .unwrap_or(0.0);
        self.pad_bottom = self
            .lines
            .last()
            .and_then(|line| Some(line.descent() - line.bounds()?.y1))
            .unwrap_or(0.0);
    }

    /// The lines produced by the last fit.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Number of lines produced by the last fit.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Baseline origin of each line produced by the last fit.
    pub fn line_offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    /// Bounds of everything laid out by the last fit, or `None` when the text
    /// is empty.
    pub fn fit_bounds(&self) -> Option<Rect> {
        self.fit_bounds
    }

    /// Height of [`fit_bounds`](Self::fit_bounds), zero for empty text.
    pub fn fitted_height(&self) -> f64 {
        self.fit_bounds.map_or(0.0, |fit| fit.height())
    }

    /// Gap between the top of the first line's font box and its ink.
    pub fn pad_top(&self) -> f64 {
        self.pad_top
    }

    /// Gap between the ink of the last line and the bottom of its font box.
    pub fn pad_bottom(&self) -> f64 {
        self.pad_bottom
    }

    /// Whether the last fit overflowed the box.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Renders the lines of the last fit, moved by `offset`.
    pub fn to_svg(&self, offset: Vec2) -> String {
        let mut out = String::from("<g>");
        for (line, line_offset) in self.lines.iter().zip(&self.offsets) {
            out.push_str(&line.to_svg(*line_offset + offset));
        }
        out.push_str("</g>");
        out
    }
}

/// Greedy line breaking state for one fit.
struct LineBreaker<'a> {
    resources: &'a Resources,
    max_width: f64,
    font_scale: f32,
    lines: Vec<TextLine>,
    line: TextLine,
    /// Leading whitespace followed by the characters of one word.
    token: Vec<StyledChar>,
}

impl<'a> LineBreaker<'a> {
    fn new(resources: &'a Resources, max_width: f64, font_scale: f32) -> Self {
        Self {
            resources,
            max_width,
            font_scale,
            lines: Vec::new(),
            line: TextLine::new(font_scale),
            token: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if self.token.is_empty() {
            return;
        }
        let token = core::mem::take(&mut self.token);
        self.push_token(&token, false);
    }

    /// Appends a token, moving it to a new line when it does not fit.
    ///
    /// A token that does not fit on an empty line is kept there and allowed
    /// to overflow.
    fn push_token(&mut self, token: &[StyledChar], trim_whitespace: bool) {
        let chars = self.expand(token, trim_whitespace);
        let candidate = self.line.propose(self.resources, &chars);
        if self.line.is_empty() || candidate.width() <= self.max_width {
            self.line = candidate;
            return;
        }

        log::trace!(
            "wrapping after {} chars: {} > {}",
            self.line.len(),
            candidate.width(),
            self.max_width
        );
        self.end_line(&token[0].style);
        let chars = self.expand(token, true);
        self.line.append(self.resources, &chars);
    }

    /// Replaces tabs with spaces up to the next tab stop and NUL with a
    /// space, optionally dropping leading whitespace.
    fn expand(&self, token: &[StyledChar], trim_whitespace: bool) -> Vec<StyledChar> {
        let skip = if trim_whitespace {
            token.iter().take_while(|c| c.is_whitespace()).count()
        } else {
            0
        };
        let mut column = self.line.len();
        let mut out = Vec::with_capacity(token.len());
        for c in &token[skip..] {
            match c.ch {
                '\t' => {
                    let spaces = TAB_WIDTH - column % TAB_WIDTH;
                    out.extend(repeat_n(StyledChar::new(' ', c.style.clone()), spaces));
                    column += spaces;
                }
                '\0' => {
                    out.push(StyledChar::new(' ', c.style.clone()));
                    column += 1;
                }
                _ => {
                    out.push(c.clone());
                    column += 1;
                }
            }
        }
        out
    }

    fn end_line(&mut self, style: &Style) {
        let mut line = core::mem::replace(&mut self.line, TextLine::new(self.font_scale));
        line.finish(self.resources, style);
        self.lines.push(line);
    }
}
