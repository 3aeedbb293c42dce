// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A font face with predictable metrics.

use peniko::kurbo::{BezPath, Point};

use crate::resource::{FaceMetrics, FontFace};

/// Every glyph is a rectangle standing on the baseline, `ink_height` em tall
/// and as wide as its advance. Spaces advance by a quarter em and draw
/// nothing.
///
/// The metrics are powers of two so that sizes like 20 give exact results:
/// ascent 0.75 em, descent 0.25 em.
#[derive(Clone, Debug)]
pub(crate) struct BoxFace {
    advance: f32,
    ink_height: f32,
}

impl BoxFace {
    pub(crate) const UNITS_PER_EM: u16 = 1024;

    /// A face whose glyphs advance by half an em and are half an em tall.
    pub(crate) fn new() -> Self {
        Self {
            advance: 0.5,
            ink_height: 0.5,
        }
    }

    /// A face with a different glyph advance, in em.
    pub(crate) fn with_advance(advance: f32) -> Self {
        Self {
            advance,
            ..Self::new()
        }
    }

    fn char_advance(&self, ch: char, size: f32) -> f32 {
        if ch == ' ' {
            0.25 * size
        } else {
            self.advance * size
        }
    }
}

impl FontFace for BoxFace {
    fn metrics(&self) -> FaceMetrics {
        FaceMetrics {
            units_per_em: Self::UNITS_PER_EM,
            ascender: 768.0,
            descender: -256.0,
        }
    }

    fn advance_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.char_advance(ch, size)).sum()
    }

    fn text_path(&self, text: &str, origin: Point, size: f32) -> BezPath {
        let mut path = BezPath::new();
        let top = origin.y - f64::from(self.ink_height * size);
        let mut x = origin.x;
        for ch in text.chars() {
            let advance = f64::from(self.char_advance(ch, size));
            if ch != ' ' {
                path.move_to((x, origin.y));
                path.line_to((x + advance, origin.y));
                path.line_to((x + advance, top));
                path.line_to((x, top));
                path.close_path();
            }
            x += advance;
        }
        path
    }
}
