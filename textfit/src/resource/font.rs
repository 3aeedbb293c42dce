// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use peniko::kurbo::{BezPath, Point};

use crate::style::FaceVariant;

/// Vertical metrics of a face, in font units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceMetrics {
    /// Font units per em.
    pub units_per_em: u16,
    /// Distance from the baseline to the top of the em box. Positive.
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the em box. Negative.
    pub descender: f32,
}

impl FaceMetrics {
    /// The factor converting font units to output units at `size`.
    pub fn scale(&self, size: f32) -> f64 {
        if self.units_per_em == 0 {
            return 0.0;
        }
        f64::from(size) / f64::from(self.units_per_em)
    }
}

/// A single font face able to measure and outline text.
///
/// Shaping is left to the implementation: the layout engine only asks for
/// advances and outlines of whole runs of characters that share a style.
pub trait FontFace: Send + Sync + core::fmt::Debug {
    /// Vertical metrics in font units.
    fn metrics(&self) -> FaceMetrics;

    /// The horizontal advance of `text` at `size`, in output units.
    fn advance_width(&self, text: &str, size: f32) -> f32;

    /// The outlines of `text` at `size` with the pen starting on the baseline
    /// at `origin`. The y axis points down.
    fn text_path(&self, text: &str, origin: Point, size: f32) -> BezPath;

    /// The extent above the baseline at `size`, in output units.
    fn ascent(&self, size: f32) -> f64 {
        let metrics = self.metrics();
        f64::from(metrics.ascender) * metrics.scale(size)
    }

    /// The extent below the baseline at `size`, in output units.
    fn descent(&self, size: f32) -> f64 {
        let metrics = self.metrics();
        -f64::from(metrics.descender) * metrics.scale(size)
    }
}

/// The faces of one font family.
///
/// A face that is not provided is not substituted: text asking for it is
/// skipped during layout.
#[derive(Clone, Debug, Default)]
pub struct FontFamily {
    /// Upright, normal weight.
    pub regular: Option<Arc<dyn FontFace>>,
    /// Upright, bold weight.
    pub bold: Option<Arc<dyn FontFace>>,
    /// Italic, normal weight.
    pub italic: Option<Arc<dyn FontFace>>,
    /// Italic, bold weight.
    pub bold_italic: Option<Arc<dyn FontFace>>,
}

impl FontFamily {
    /// Creates a family with only a regular face.
    pub fn new(regular: impl FontFace + 'static) -> Self {
        Self {
            regular: Some(Arc::new(regular)),
            ..Self::default()
        }
    }

    /// Sets the face used for `variant`.
    #[must_use]
    pub fn with_face(mut self, variant: FaceVariant, face: impl FontFace + 'static) -> Self {
        let face: Arc<dyn FontFace> = Arc::new(face);
        match variant {
            FaceVariant::Regular => self.regular = Some(face),
            FaceVariant::Bold => self.bold = Some(face),
            FaceVariant::Italic => self.italic = Some(face),
            FaceVariant::BoldItalic => self.bold_italic = Some(face),
        }
        self
    }

    /// The face for `variant`, if the family has one.
    pub fn face(&self, variant: FaceVariant) -> Option<&dyn FontFace> {
        match variant {
            FaceVariant::Regular => self.regular.as_deref(),
            FaceVariant::Bold => self.bold.as_deref(),
            FaceVariant::Italic => self.italic.as_deref(),
            FaceVariant::BoldItalic => self.bold_italic.as_deref(),
        }
    }
}
