// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a font or icon resource cannot be loaded.
///
/// Layout itself never fails; only turning raw bytes or SVG text into a
/// resource is fallible. The error carries a non-exhaustive [`ErrorKind`] and
/// a short human readable detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    detail: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Additional context reported by the underlying parser.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub(crate) fn invalid_font(detail: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::InvalidFont,
            detail: format!("{detail}"),
        }
    }

    pub(crate) fn invalid_svg(detail: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::InvalidSvg,
            detail: format!("{detail}"),
        }
    }

    pub(crate) fn invalid_icon(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidIcon,
            detail: detail.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidFont => write!(f, "invalid font data: {}", self.detail),
            ErrorKind::InvalidSvg => write!(f, "invalid icon svg: {}", self.detail),
            ErrorKind::InvalidIcon => write!(f, "icon has no usable size: {}", self.detail),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font bytes could not be parsed as an OpenType font.
    InvalidFont,

    /// The icon source is not well-formed XML.
    InvalidSvg,

    /// The icon document does not declare a positive width and height.
    InvalidIcon,
}
