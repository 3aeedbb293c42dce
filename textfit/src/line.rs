// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single line of styled text.

use core::fmt::Write as _;
use std::sync::Arc;

use peniko::kurbo::{BezPath, Point, Rect, Shape as _, Vec2};

use crate::markup::StyledChar;
use crate::resource::Resources;
use crate::style::{Color, HJustify, IconFit, Style};
use crate::svg::{Fill, Num, Translate, write_rect};

/// What a [`Segment`] draws.
#[derive(Clone, Debug)]
pub enum SegmentKind {
    /// A run of glyph outlines.
    Text {
        /// The characters of the run.
        text: String,
        /// Outlines in line coordinates: the baseline is at `y = 0`.
        path: BezPath,
    },
    /// An inline icon.
    Icon {
        /// The icon's SVG markup.
        svg: String,
        /// Top-left corner of the placed icon in line coordinates.
        origin: Point,
        /// Factor applied to the icon's natural size.
        scale: f64,
    },
}

/// A contiguous renderable part of a line.
#[derive(Clone, Debug)]
pub struct Segment {
    /// The drawing.
    pub kind: SegmentKind,
    /// The style the segment was built from.
    pub style: Arc<Style>,
    /// Pen position where the segment starts.
    pub start: f64,
    /// Pen position after the segment.
    pub end: f64,
    /// Ink bounds in line coordinates, `None` when nothing is drawn.
    pub bounds: Option<Rect>,
}

/// Saved line state used to undo appends.
#[derive(Clone, Debug)]
pub struct LineSnapshot {
    len: usize,
    bounds: Option<Rect>,
    segments: Vec<Segment>,
    ascent: f64,
    descent: f64,
    cursor: f64,
}

/// A line of styled characters laid out on a baseline at `y = 0`, starting at
/// `x = 0`.
///
/// The line keeps every character appended to it and rebuilds all segments
/// from scratch on each append, which keeps undoing an append trivial.
#[derive(Clone, Debug)]
pub struct TextLine {
    chars: Vec<StyledChar>,
    segments: Vec<Segment>,
    font_scale: f32,
    ascent: f64,
    descent: f64,
    bounds: Option<Rect>,
    cursor: f64,
}

impl TextLine {
    /// Creates an empty line whose font sizes are multiplied by `font_scale`.
    pub fn new(font_scale: f32) -> Self {
        Self {
            chars: Vec::new(),
            segments: Vec::new(),
            font_scale,
            ascent: 0.0,
            descent: 0.0,
            bounds: None,
            cursor: 0.0,
        }
    }

    /// Appends characters and lays the line out again.
    pub fn append(&mut self, resources: &Resources, chars: &[StyledChar]) {
        self.chars.extend_from_slice(chars);
        self.layout(resources);
    }

    /// Returns this line with `chars` appended, leaving `self` untouched.
    pub fn propose(&self, resources: &Resources, chars: &[StyledChar]) -> Self {
        let mut candidate = Self::new(self.font_scale);
        candidate.chars.reserve(self.chars.len() + chars.len());
        candidate.chars.extend_from_slice(&self.chars);
        candidate.chars.extend_from_slice(chars);
        candidate.layout(resources);
        candidate
    }

    /// Completes the line.
    ///
    /// A line without characters still takes the height of `style`, so that
    /// blank lines keep their space.
    pub fn finish(&mut self, resources: &Resources, style: &Style) {
        if !self.chars.is_empty() {
            return;
        }
        if let Some(face) = resources.face_for(style) {
            let size = style.scaled_size(self.font_scale);
            self.ascent = face.ascent(size);
            self.descent = face.descent(size);
        }
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> LineSnapshot {
        LineSnapshot {
            len: self.chars.len(),
            bounds: self.bounds,
            segments: self.segments.clone(),
            ascent: self.ascent,
            descent: self.descent,
            cursor: self.cursor,
        }
    }

    /// Returns to a state captured by [`snapshot`](Self::snapshot).
    pub fn restore(&mut self, snapshot: LineSnapshot) {
        self.chars.truncate(snapshot.len);
        self.bounds = snapshot.bounds;
        self.segments = snapshot.segments;
        self.ascent = snapshot.ascent;
        self.descent = snapshot.descent;
        self.cursor = snapshot.cursor;
    }

    /// The characters of the line.
    pub fn chars(&self) -> &[StyledChar] {
        &self.chars
    }

    /// Number of characters on the line.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the line has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The largest ascent of any face on the line.
    pub fn ascent(&self) -> f64 {
        self.ascent
    }

    /// The largest descent of any face on the line.
    pub fn descent(&self) -> f64 {
        self.descent
    }

    /// Ink bounds in line coordinates, or `None` if nothing is drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Horizontal ink extent.
    pub fn width(&self) -> f64 {
        self.bounds.map_or(0.0, |b| b.width())
    }

    /// Pen position after the last character.
    pub fn advance(&self) -> f64 {
        self.cursor
    }

    /// The justification requested by the first character, if any.
    pub fn h_justify(&self) -> Option<HJustify> {
        self.chars.first().and_then(|c| c.style.h_justify)
    }

    fn layout(&mut self, resources: &Resources) {
        self.segments.clear();
        self.ascent = 0.0;
        self.descent = 0.0;
        self.bounds = None;
        self.cursor = 0.0;

        let mut start = 0;
        while start < self.chars.len() {
            let style = self.chars[start].style.clone();
            let mut end = start + 1;
            while end < self.chars.len() && style.same_run(&self.chars[end].style) {
                end += 1;
            }
            let text: String = self.chars[start..end].iter().map(|c| c.ch).collect();
            self.push_segment(resources, style, text);
            start = end;
        }
    }

    fn push_segment(&mut self, resources: &Resources, style: Arc<Style>, text: String) {
        let size = style.scaled_size(self.font_scale);
        let face = resources.face_for(&style);
        if let Some(face) = face {
            self.ascent = self.ascent.max(face.ascent(size));
            self.descent = self.descent.max(face.descent(size));
        }

        let start = self.cursor;
        let icon = style.icon.as_deref().map(|name| resources.icon(name));
        let segment = match icon {
            Some(icon) => {
                let Some(icon) = icon else {
                    return;
                };
                if icon.height <= 0.0 {
                    return;
                }
                let height = match style.icon_fit {
                    IconFit::Ascender => match face {
                        Some(face) => face.ascent(size),
                        None => return,
                    },
                    IconFit::None => icon.height * f64::from(style.scale * self.font_scale),
                };
                let scale = height / icon.height;
                let width = icon.width * scale;
                let top = -height + f64::from(style.icon_y) * height;
                self.cursor += width;
                Segment {
                    kind: SegmentKind::Icon {
                        svg: icon.svg.clone(),
                        origin: Point::new(start, top),
                        scale,
                    },
                    bounds: Some(Rect::new(start, top, start + width, top + height)),
                    style,
                    start,
                    end: self.cursor,
                }
            }
            None => {
                let Some(face) = face else {
                    return;
                };
                let path = face.text_path(&text, Point::new(start, 0.0), size);
                self.cursor += f64::from(face.advance_width(&text, size));
                Segment {
                    bounds: ink_bounds(&path),
                    kind: SegmentKind::Text { text, path },
                    style,
                    start,
                    end: self.cursor,
                }
            }
        };

        if let Some(b) = segment.bounds {
            self.bounds = Some(self.bounds.map_or(b, |bounds| bounds.union(b)));
        }
        self.segments.push(segment);
    }

    /// Renders the line with its baseline origin at `offset`.
    ///
    /// Each segment becomes one `<g>`; neighbouring underlined segments share
    /// a single underline rectangle.
    pub fn to_svg(&self, offset: Vec2) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let fill = Fill(segment.style.color);
            // Writing to a `String` cannot fail.
            match &segment.kind {
                SegmentKind::Text { path, .. } if !path.elements().is_empty() => {
                    let _ = write!(
                        out,
                        r#"<g{}{fill}><path d="{}"/></g>"#,
                        Translate(offset),
                        path.to_svg()
                    );
                }
                SegmentKind::Text { .. } => {}
                SegmentKind::Icon { svg, origin, scale } => {
                    let at = offset + origin.to_vec2();
                    let _ = write!(
                        out,
                        r#"<g transform="translate({} {}) scale({})"{fill}>{svg}</g>"#,
                        Num(at.x),
                        Num(at.y),
                        Num(*scale)
                    );
                }
            }
        }
        for (rect, color) in self.underlines() {
            write_rect(&mut out, rect + offset, color);
        }
        out
    }

    /// Underline rectangles in line coordinates.
    ///
    /// Underlined segments that touch are merged; the merged rectangle takes
    /// the thickest weight and the color of its first segment.
    pub fn underlines(&self) -> Vec<(Rect, Color)> {
        let mut runs: Vec<(f64, f64, f64, Color)> = Vec::new();
        let mut open = false;
        for segment in &self.segments {
            let style = &segment.style;
            if !style.underline {
                open = false;
                continue;
            }
            let weight = f64::from(style.underline_weight * style.scale * self.font_scale);
            match runs.last_mut() {
                Some((_, end, thickest, _)) if open && (*end - segment.start).abs() < 1e-9 => {
                    *end = segment.end;
                    *thickest = thickest.max(weight);
                }
                _ => runs.push((segment.start, segment.end, weight, style.color)),
            }
            open = true;
        }
        runs.into_iter()
            .map(|(start, end, weight, color)| {
                let rect = Rect::new(start, self.descent - weight, end, self.descent);
                (rect, color)
            })
            .collect()
    }
}

fn ink_bounds(path: &BezPath) -> Option<Rect> {
    if path.elements().is_empty() {
        None
    } else {
        Some(path.bounding_box())
    }
}
