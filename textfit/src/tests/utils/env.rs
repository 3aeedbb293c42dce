// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

use super::BoxFace;
use crate::markup::{self, StyledChar};
use crate::resource::{FontFamily, Icon, Resources};
use crate::style::{FaceVariant, Style};
use crate::{TextBox, TextLine};

/// Name of the synthetic family registered by [`TestEnv`].
pub(crate) const FAMILY: &str = "Box";

/// Size used by [`TestEnv::style`]: at this size a regular glyph is 10 wide
/// and 10 tall, a space is 5 wide, the ascent is 15 and the descent 5.
pub(crate) const SIZE: f32 = 20.0;

#[derive(Debug)]
pub(crate) struct TestEnv {
    pub(crate) resources: Resources,
}

impl TestEnv {
    /// Resources with the `Box` family (regular, bold and italic, but no
    /// bold italic face) and a 10x20 icon named `dot`.
    pub(crate) fn new() -> Self {
        let mut resources = Resources::new();
        let family = FontFamily::new(BoxFace::new())
            .with_face(FaceVariant::Bold, BoxFace::with_advance(0.625))
            .with_face(FaceVariant::Italic, BoxFace::new());
        resources.insert_font(FAMILY, family);
        resources.insert_icon("dot", Icon::new(r#"<circle cx="5" cy="10" r="5"/>"#, 10.0, 20.0));
        Self { resources }
    }

    pub(crate) fn style(&self) -> Style {
        Style::new(FAMILY, SIZE)
    }

    pub(crate) fn parse(&self, text: &str) -> Vec<StyledChar> {
        markup::parse(text, &self.style())
    }

    /// A line holding `text` at scale 1.
    pub(crate) fn line(&self, text: &str) -> TextLine {
        let mut line = TextLine::new(1.0);
        line.append(&self.resources, &self.parse(text));
        line
    }

    /// A box of the given size at the origin.
    pub(crate) fn text_box(&self, text: &str, width: f64, height: f64) -> TextBox {
        TextBox::new(text, self.style(), Rect::new(0.0, 0.0, width, height))
    }
}

/// The characters of a line as a string.
pub(crate) fn line_text(line: &TextLine) -> String {
    line.chars().iter().map(|c| c.ch).collect()
}
