// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers for writing SVG fragments.

use core::fmt::{self, Display, Write as _};

use peniko::kurbo::{Rect, Vec2};

use crate::style::Color;

/// A coordinate formatted with at most three decimals and no trailing zeros.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Num(pub(crate) f64);

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        // Avoid printing `-0`.
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        let text = format!("{rounded:.3}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        f.write_str(text)
    }
}

/// `fill` and `fill-opacity` attributes for `color`, with a leading space.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Fill(pub(crate) Color);

impl Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.0.to_rgba8();
        write!(f, r#" fill="rgb({},{},{})""#, rgba.r, rgba.g, rgba.b)?;
        let alpha = self.0.components[3];
        if alpha < 1.0 {
            write!(f, r#" fill-opacity="{}""#, Num(f64::from(alpha)))?;
        }
        Ok(())
    }
}

/// A `transform` attribute translating by `offset`, with a leading space.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Translate(pub(crate) Vec2);

impl Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#" transform="translate({} {})""#,
            Num(self.0.x),
            Num(self.0.y)
        )
    }
}

/// Writes a filled rectangle.
pub(crate) fn write_rect(out: &mut String, rect: Rect, color: Color) {
    // Writing to a `String` cannot fail.
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        Num(rect.x0),
        Num(rect.y0),
        Num(rect.width()),
        Num(rect.height()),
        Fill(color)
    );
}
