// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Error;

/// An SVG fragment that can be placed inline with text.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// The SVG markup, embedded verbatim into the output.
    pub svg: String,
    /// Natural width in output units.
    pub width: f64,
    /// Natural height in output units.
    pub height: f64,
}

impl Icon {
    /// Creates an icon from markup and its natural size.
    pub fn new(svg: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            svg: svg.into(),
            width,
            height,
        }
    }

    /// Creates an icon from a standalone SVG document, reading its natural
    /// size from the root `width` and `height` attributes or, failing that,
    /// from the `viewBox`.
    pub fn from_svg(svg: impl Into<String>) -> Result<Self, Error> {
        let svg = svg.into();
        let (width, height) = {
            let doc = roxmltree::Document::parse(&svg).map_err(Error::invalid_svg)?;
            let root = doc.root_element();
            let view_box = root.attribute("viewBox").and_then(parse_view_box);
            let width = root
                .attribute("width")
                .and_then(parse_length)
                .or(view_box.map(|(w, _)| w));
            let height = root
                .attribute("height")
                .and_then(parse_length)
                .or(view_box.map(|(_, h)| h));
            (width, height)
        };
        match (width, height) {
            (Some(width), Some(height)) if width > 0.0 && height > 0.0 => Ok(Self {
                svg,
                width,
                height,
            }),
            _ => Err(Error::invalid_icon("no width, height or viewBox on root")),
        }
    }
}

/// Parses a user unit or pixel length such as `24` or `24px`.
fn parse_length(text: &str) -> Option<f64> {
    let text = text.trim();
    text.strip_suffix("px").unwrap_or(text).trim().parse().ok()
}

/// Returns the width and height of a `viewBox` attribute.
fn parse_view_box(text: &str) -> Option<(f64, f64)> {
    let mut values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>);
    let _min_x = values.next()?.ok()?;
    let _min_y = values.next()?.ok()?;
    let width = values.next()?.ok()?;
    let height = values.next()?.ok()?;
    Some((width, height))
}
