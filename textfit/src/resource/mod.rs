// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts and icons available to layout.
//!
//! Resources are loaded by the caller before layout starts and are only read
//! afterwards, so one [`Resources`] can be shared between fitters running on
//! different threads.

mod font;
mod icon;
mod skrifa_face;

pub use font::{FaceMetrics, FontFace, FontFamily};
pub use icon::Icon;
pub use skrifa_face::SkrifaFace;

use hashbrown::HashMap;

use crate::style::{FaceVariant, Style};

/// Named font families and icons.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    fonts: HashMap<String, FontFamily>,
    icons: HashMap<String, Icon>,
}

impl Resources {
    /// Creates an empty set of resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font family, returning any family previously registered
    /// under `name`.
    pub fn insert_font(&mut self, name: impl Into<String>, family: FontFamily) -> Option<FontFamily> {
        self.fonts.insert(name.into(), family)
    }

    /// Registers an icon, returning any icon previously registered under
    /// `name`.
    pub fn insert_icon(&mut self, name: impl Into<String>, icon: Icon) -> Option<Icon> {
        self.icons.insert(name.into(), icon)
    }

    /// The family registered under `name`.
    pub fn family(&self, name: &str) -> Option<&FontFamily> {
        self.fonts.get(name)
    }

    /// The face of family `name` for `variant`.
    pub fn face(&self, name: &str, variant: FaceVariant) -> Option<&dyn FontFace> {
        self.family(name)?.face(variant)
    }

    /// The face selected by `style`.
    pub fn face_for(&self, style: &Style) -> Option<&dyn FontFace> {
        let face = self.face(&style.font, style.variant());
        if face.is_none() {
            log::debug!("no {:?} face for font {:?}", style.variant(), style.font);
        }
        face
    }

    /// The icon registered under `name`.
    pub fn icon(&self, name: &str) -> Option<&Icon> {
        let icon = self.icons.get(name);
        if icon.is_none() {
            log::debug!("no icon named {name:?}");
        }
        icon
    }
}
