// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting several text boxes into one box at the largest common scale.

use peniko::kurbo::{Rect, Vec2};

use crate::resource::Resources;
use crate::style::VJustify;
use crate::text_box::TextBox;

/// Parameters of the scale search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitOptions {
    /// The first scale tried.
    pub initial_scale: f32,
    /// The search stops once the next candidate is closer than this to a
    /// confirmed scale.
    pub min_scale_step: f32,
    /// Hard limit on the number of layout trials.
    ///
    /// The default is large enough to grow from zero to `f32::MAX` and then
    /// bisect down to a step of 0.01, so it only cuts off searches that would
    /// not terminate otherwise.
    pub max_iterations: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            min_scale_step: 0.01,
            max_iterations: 2048,
        }
    }
}

/// Growth factor while no overflowing scale is known.
const GROWTH: f32 = 1.1;

/// Stacks text boxes ("sections") vertically in a shared box and finds the
/// largest font scale at which none of them overflow.
///
/// Overflow is assumed to be monotonic in the scale: if a scale overflows,
/// every larger scale does too. The search grows the scale until it finds an
/// overflowing one and then bisects between the largest fitting and the
/// smallest overflowing scale.
#[derive(Clone, Debug)]
pub struct TextFitter {
    bounds: Rect,
    v_justify: VJustify,
    sections: Vec<TextBox>,

    font_scale: f32,
    min_font_scale: Option<f32>,
    max_font_scale: Option<f32>,
    fit_iterations: u32,
    overflow: bool,
}

impl TextFitter {
    /// Creates a fitter for `bounds` without any sections.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            v_justify: VJustify::default(),
            sections: Vec::new(),
            font_scale: 1.0,
            min_font_scale: None,
            max_font_scale: None,
            fit_iterations: 0,
            overflow: false,
        }
    }

    /// Sets where the stacked sections sit when they leave room.
    #[must_use]
    pub fn with_v_justify(mut self, v_justify: VJustify) -> Self {
        self.v_justify = v_justify;
        self
    }

    /// Appends a section below the existing ones.
    ///
    /// The section is resized to the fitter's box.
    pub fn push_section(&mut self, mut section: TextBox) -> &mut Self {
        section.set_bounds(self.bounds);
        self.sections.push(section);
        self
    }

    /// The sections, top to bottom.
    pub fn sections(&self) -> &[TextBox] {
        &self.sections
    }

    /// The shared box.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Searches the scale starting at `initial_scale`, stopping once
    /// candidates get closer than `min_scale_step`.
    ///
    /// Returns the converged scale. All sections are left laid out at that
    /// scale.
    pub fn fit(&mut self, resources: &Resources, initial_scale: f32, min_scale_step: f32) -> f32 {
        self.fit_with_options(
            resources,
            FitOptions {
                initial_scale,
                min_scale_step,
                ..FitOptions::default()
            },
        )
    }

    /// Searches the scale with explicit options.
    pub fn fit_with_options(&mut self, resources: &Resources, options: FitOptions) -> f32 {
        self.min_font_scale = None;
        self.max_font_scale = None;
        self.fit_iterations = 0;

        let step = options.min_scale_step;
        let mut scale = options.initial_scale;
        loop {
            self.fit_iterations += 1;
            let overflow = self.layout(resources, scale);
            log::debug!("fit trial {}: scale {scale} overflow {overflow}", self.fit_iterations);

            let next = if overflow {
                self.max_font_scale = Some(scale);
                let min = self.min_font_scale.unwrap_or(0.0);
                if scale - min < step {
                    break;
                }
                (min + scale) * 0.5
            } else {
                self.min_font_scale = Some(scale);
                // Sections that take no space never overflow at any scale.
                if scale > 0.0 && !self.has_ink() {
                    break;
                }
                let next = match self.max_font_scale {
                    Some(max) => (scale + max) * 0.5,
                    // Small scales still grow by at least one step.
                    None => (scale * GROWTH).max(scale + step),
                };
                if !next.is_finite() || next - scale < step {
                    break;
                }
                next
            };

            if self.fit_iterations >= options.max_iterations {
                log::warn!(
                    "scale search stopped after {} trials between {:?} and {:?}",
                    self.fit_iterations,
                    self.min_font_scale,
                    self.max_font_scale
                );
                break;
            }
            scale = next;
        }

        // Settle on the largest scale known to fit. When nothing fits, keep
        // the smallest overflowing layout so the overflow stays visible.
        let settled = self.min_font_scale.or(self.max_font_scale).unwrap_or(scale);
        if settled != self.font_scale {
            self.layout(resources, settled);
        }
        self.font_scale
    }

    /// Lays out every section at `font_scale` and reports whether anything
    /// overflows.
    fn layout(&mut self, resources: &Resources, font_scale: f32) -> bool {
        self.font_scale = font_scale;
        let mut overflow = false;
        for section in &mut self.sections {
            overflow |= section.fit(resources, font_scale);
        }
        overflow |= self.stacked_height() > self.bounds.height();
        self.overflow = overflow;
        overflow
    }

    /// Whether any section takes up space, either with ink or with the
    /// nominal height of blank lines.
    fn has_ink(&self) -> bool {
        self.sections
            .iter()
            .filter_map(TextBox::fit_bounds)
            .any(|fit| fit.width() > 0.0 || fit.height() > 0.0)
    }

    /// Total height of the sections including the gaps between them.
    fn stacked_height(&self) -> f64 {
        let mut total = 0.0;
        let mut prev: Option<&TextBox> = None;
        for section in &self.sections {
            if let Some(prev) = prev {
                total += prev.pad_bottom() + section.pad_top();
            }
            total += section.fitted_height();
            prev = Some(section);
        }
        total
    }

    /// The translation that moves each section's layout to its stacked
    /// position, `None` for empty sections.
    fn placements(&self) -> Vec<Option<Vec2>> {
        let free = self.bounds.height() - self.stacked_height();
        let mut y = self.bounds.y0;
        if free > 0.0 {
            y += free * self.v_justify.factor();
        }

        let mut out = Vec::with_capacity(self.sections.len());
        let mut prev: Option<&TextBox> = None;
        for section in &self.sections {
            if let Some(prev) = prev {
                y += prev.pad_bottom() + section.pad_top();
            }
            out.push(section.fit_bounds().map(|fit| {
                let shift = Vec2::new(0.0, y - fit.y0);
                y += fit.height();
                shift
            }));
            prev = Some(section);
        }
        out
    }

    /// The converged scale, or the current candidate during a search.
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Number of layout trials in the last search.
    pub fn fit_iterations(&self) -> u32 {
        self.fit_iterations
    }

    /// Whether the final layout overflows.
    ///
    /// This is only the case when no tried scale fits, for example in a box
    /// with no height. The sections are then left at the smallest
    /// overflowing scale that was tried.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Bounds of each section as placed in the shared box, `None` for empty
    /// sections.
    pub fn section_bounds(&self) -> Vec<Option<Rect>> {
        self.sections
            .iter()
            .zip(self.placements())
            .map(|(section, shift)| Some(section.fit_bounds()? + shift?))
            .collect()
    }

    /// Renders all sections, stacked top to bottom.
    pub fn to_svg(&self) -> String {
        let mut out = String::from("<g>");
        for (section, shift) in self.sections.iter().zip(self.placements()) {
            if let Some(shift) = shift {
                out.push_str(&section.to_svg(shift));
            }
        }
        out.push_str("</g>");
        out
    }
}
