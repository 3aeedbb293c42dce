// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FontFace`] backed by an OpenType font.

use std::sync::Arc;

use peniko::kurbo::{BezPath, Point};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use super::{FaceMetrics, FontFace};
use crate::Error;

/// An OpenType face read with `skrifa`.
///
/// Glyphs are looked up through the character map one character at a time;
/// characters the font does not cover use the `.notdef` glyph. Outlines are
/// unhinted.
#[derive(Clone)]
pub struct SkrifaFace {
    data: Arc<[u8]>,
    index: u32,
    metrics: FaceMetrics,
}

impl core::fmt::Debug for SkrifaFace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkrifaFace")
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .field("index", &self.index)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl SkrifaFace {
    /// Reads the face at `index` in a font file or collection.
    pub fn new(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, Error> {
        let data = data.into();
        let font = FontRef::from_index(&data, index).map_err(Error::invalid_font)?;
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        let metrics = FaceMetrics {
            units_per_em: metrics.units_per_em,
            ascender: metrics.ascent,
            descender: metrics.descent,
        };
        Ok(Self {
            data,
            index,
            metrics,
        })
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }
}

impl FontFace for SkrifaFace {
    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn advance_width(&self, text: &str, size: f32) -> f32 {
        let Some(font) = self.font() else {
            return 0.0;
        };
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
        text.chars()
            .map(|ch| {
                let gid = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                glyph_metrics.advance_width(gid).unwrap_or(0.0)
            })
            .sum()
    }

    fn text_path(&self, text: &str, origin: Point, size: f32) -> BezPath {
        let mut path = BezPath::new();
        let Some(font) = self.font() else {
            return path;
        };
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(size), LocationRef::default());
        let outlines = font.outline_glyphs();

        let mut pen_x = origin.x;
        for ch in text.chars() {
            let gid = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            if let Some(glyph) = outlines.get(gid) {
                let mut pen = PathPen {
                    path: &mut path,
                    origin: Point::new(pen_x, origin.y),
                };
                let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
                if let Err(err) = glyph.draw(settings, &mut pen) {
                    log::debug!("skipping outline of {ch:?}: {err}");
                }
            }
            pen_x += f64::from(glyph_metrics.advance_width(gid).unwrap_or(0.0));
        }
        path
    }
}

/// Writes outlines into a path, flipping the y axis so that it points down.
struct PathPen<'a> {
    path: &'a mut BezPath,
    origin: Point,
}

impl PathPen<'_> {
    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + f64::from(x), self.origin.y - f64::from(y))
    }
}

impl OutlinePen for PathPen<'_> {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    #[inline]
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.point(cx0, cy0);
        let p = self.point(x, y);
        self.path.quad_to(c, p);
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c0 = self.point(cx0, cy0);
        let c1 = self.point(cx1, cy1);
        let p = self.point(x, y);
        self.path.curve_to(c0, c1, p);
    }

    #[inline]
    fn close(&mut self) {
        self.path.close_path();
    }
}
