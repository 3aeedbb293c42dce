// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text markup, word wrapping and auto-fitting text boxes rendered to SVG.
//!
//! Text is annotated with inline directives (see [`markup`]) and laid out into
//! one or more [`TextBox`] sections. A [`TextFitter`] stacks the sections inside
//! a shared bounding box and searches for the largest uniform font scale at
//! which nothing overflows. The result is emitted as an SVG fragment of glyph
//! outlines, so the output does not depend on the viewer having any fonts.
//!
//! Fonts and icons are supplied up front through [`Resources`]; layout itself
//! never fails. Missing faces or icons simply contribute nothing.

pub use peniko;
pub use peniko::kurbo;
pub use skrifa;

mod error;
mod svg;

pub mod fitter;
pub mod line;
pub mod markup;
pub mod resource;
pub mod style;
pub mod text_box;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use fitter::{FitOptions, TextFitter};
pub use line::{LineSnapshot, Segment, SegmentKind, TextLine};
pub use markup::{StyledChar, parse};
pub use resource::{FaceMetrics, FontFace, FontFamily, Icon, Resources, SkrifaFace};
pub use style::{Color, FaceVariant, HJustify, IconFit, Style, VJustify};
pub use text_box::TextBox;
