// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved text styles.

use peniko::color::palette::css;

/// Color used for glyphs, icons and underlines.
pub type Color = peniko::Color;

/// Horizontal placement of a line inside its box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HJustify {
    /// Ink starts at the left edge.
    #[default]
    Left,
    /// Ink is centered between the edges.
    Center,
    /// Ink ends at the right edge.
    Right,
}

/// Vertical placement of a block of lines inside its box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VJustify {
    /// Ink starts at the top edge.
    #[default]
    Top,
    /// Ink is centered between the top and bottom edges.
    Center,
    /// Ink ends at the bottom edge.
    Bottom,
}

impl VJustify {
    /// The fraction of free space placed above the content.
    pub(crate) fn factor(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// How an inline icon is sized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IconFit {
    /// Scale the icon so its height matches the font ascender.
    #[default]
    Ascender,
    /// Keep the icon's natural height.
    None,
}

/// One of the four faces of a font family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceVariant {
    /// Upright, normal weight.
    Regular,
    /// Upright, bold weight.
    Bold,
    /// Italic, normal weight.
    Italic,
    /// Italic, bold weight.
    BoldItalic,
}

impl FaceVariant {
    /// Selects the face for the given bold and italic flags.
    pub fn new(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Regular,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }
}

/// A fully resolved style.
///
/// Every field has a value: directives in the markup produce a copy of the
/// enclosing style with some fields overridden, so a style never changes once
/// it has been attached to a character.
#[derive(Clone, PartialEq, Debug)]
pub struct Style {
    /// Font family name, looked up in [`Resources`](crate::Resources).
    pub font: String,
    /// Font size in output units, before any scaling.
    pub size: f32,
    /// Fill color.
    pub color: Color,
    /// Multiplier applied to `size`.
    pub scale: f32,
    /// Use the bold face.
    pub bold: bool,
    /// Use the italic face.
    pub italic: bool,
    /// Draw an underline.
    pub underline: bool,
    /// Underline thickness in output units at a scale of 1.
    pub underline_weight: f32,
    /// Justification requested for a line starting with this style.
    ///
    /// `None` defers to the owning box.
    pub h_justify: Option<HJustify>,
    /// Name of the icon drawn in place of the character.
    pub icon: Option<String>,
    /// Vertical icon offset as a fraction of the icon height.
    pub icon_y: f32,
    /// How inline icons are sized.
    pub icon_fit: IconFit,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: "sans-serif".into(),
            size: 16.0,
            color: css::BLACK,
            scale: 1.0,
            bold: false,
            italic: false,
            underline: false,
            underline_weight: 1.0,
            h_justify: None,
            icon: None,
            icon_y: 0.0,
            icon_fit: IconFit::Ascender,
        }
    }
}

impl Style {
    /// Creates a style for the given family and size with default values
    /// everywhere else.
    pub fn new(font: impl Into<String>, size: f32) -> Self {
        Self {
            font: font.into(),
            size,
            ..Self::default()
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The face this style selects within its family.
    pub fn variant(&self) -> FaceVariant {
        FaceVariant::new(self.bold, self.italic)
    }

    /// The rendered font size for a layout pass at `font_scale`.
    pub fn scaled_size(&self, font_scale: f32) -> f32 {
        self.size * self.scale * font_scale
    }

    /// Whether two characters with these styles can share a segment.
    ///
    /// Icons never merge: each placeholder is its own segment.
    pub(crate) fn same_run(&self, other: &Self) -> bool {
        self.icon.is_none() && other.icon.is_none() && self == other
    }
}
