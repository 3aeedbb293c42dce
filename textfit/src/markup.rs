// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style markup.
//!
//! Text may contain two kinds of directives:
//!
//! - `<$ param param ...>` pushes a style derived from the current one, and
//!   `<$>` pops it again. Params are the flags `b`, `i`, `u` (bold, italic,
//!   underline) and `l`, `c`, `r` (line justification), the pairs
//!   `icon_y:<percent>`, `icon_fit:<ascender|none>` and `underline:<weight>`,
//!   or a bare value: a hex color (`#rgb`, `#rrggbb`), a scale (`50%`), a
//!   point size (`12p`) or otherwise a font family name.
//! - `<@name ...>` inserts one inline icon per name.
//!
//! `<$$>` and `<@@>` produce a literal `<$` and `<@`. Anything else, including
//! unknown params and unterminated directives, is kept as text or ignored;
//! parsing never fails.

use std::sync::Arc;

use peniko::color::{Srgb, parse_color};

use crate::style::{HJustify, IconFit, Style};

/// The character emitted in place of an inline icon.
pub const ICON_PLACEHOLDER: char = '\u{FFFC}';

/// A character together with the style it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledChar {
    /// The character.
    pub ch: char,
    /// The resolved style, shared with the rest of its span.
    pub style: Arc<Style>,
}

impl StyledChar {
    /// Creates a styled character.
    pub fn new(ch: char, style: Arc<Style>) -> Self {
        Self { ch, style }
    }

    /// Whether this character is laid out as blank space.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.ch, ' ' | '\t' | '\0')
    }

    /// The icon name if this character is an icon placeholder.
    pub fn icon(&self) -> Option<&str> {
        self.style.icon.as_deref()
    }
}

/// Parses `text` into styled characters, starting from `base`.
///
/// Directives contribute no characters. Every character gets a style that is
/// `base` with the active directives applied on top; `base` itself is never
/// modified.
pub fn parse(text: &str, base: &Style) -> Vec<StyledChar> {
    let mut stack = StyleStack::new(base.clone());
    let mut chars: Vec<char> = Vec::with_capacity(text.len());
    let mut spans = vec![Span {
        start: 0,
        style: stack.top().clone(),
    }];

    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        chars.extend(rest[..pos].chars());
        let tail = &rest[pos..];
        let Some((directive, consumed)) = Directive::parse(tail) else {
            chars.push('<');
            rest = &tail[1..];
            continue;
        };
        rest = &tail[consumed..];
        match directive {
            Directive::Literal(literal) => chars.extend(literal.chars()),
            Directive::Push(params) => {
                stack.push(params);
                mark(&mut spans, chars.len(), stack.top().clone());
            }
            Directive::Pop => {
                if stack.pop() {
                    mark(&mut spans, chars.len(), stack.top().clone());
                }
            }
            Directive::Icons(names) => {
                for name in names.split_whitespace() {
                    let mut icon_style = (**stack.top()).clone();
                    icon_style.icon = Some(name.into());
                    mark(&mut spans, chars.len(), Arc::new(icon_style));
                    chars.push(ICON_PLACEHOLDER);
                    mark(&mut spans, chars.len(), stack.top().clone());
                }
            }
        }
    }
    chars.extend(rest.chars());

    let mut out = Vec::with_capacity(chars.len());
    for (idx, span) in spans.iter().enumerate() {
        let end = spans.get(idx + 1).map_or(chars.len(), |next| next.start);
        out.extend(
            chars[span.start..end]
                .iter()
                .map(|&ch| StyledChar::new(ch, span.style.clone())),
        );
    }
    out
}

/// Records that characters from `start` onwards use `style`.
fn mark(spans: &mut Vec<Span>, start: usize, style: Arc<Style>) {
    match spans.last_mut() {
        // The previous span never received a character.
        Some(last) if last.start == start => last.style = style,
        _ => spans.push(Span { start, style }),
    }
}

#[derive(Debug)]
struct Span {
    start: usize,
    style: Arc<Style>,
}

#[derive(Debug, PartialEq)]
enum Directive<'a> {
    Literal(&'static str),
    Push(&'a str),
    Pop,
    Icons(&'a str),
}

impl<'a> Directive<'a> {
    /// Recognizes a directive at the start of `text`, returning it and the
    /// number of bytes it spans.
    fn parse(text: &'a str) -> Option<(Self, usize)> {
        if text.starts_with("<$$>") {
            return Some((Self::Literal("<$"), 4));
        }
        if text.starts_with("<@@>") {
            return Some((Self::Literal("<@"), 4));
        }
        let is_style = text.starts_with("<$");
        if !is_style && !text.starts_with("<@") {
            return None;
        }
        let end = text.find('>')?;
        let body = &text[2..end];
        let directive = if !is_style {
            Self::Icons(body)
        } else if body.trim().is_empty() {
            Self::Pop
        } else {
            Self::Push(body)
        };
        Some((directive, end + 1))
    }
}

/// Stack of resolved styles.
///
/// Each entry is an immutable style node; pushing derives a new node from the
/// current top and popping discards the top. Characters hold their own
/// reference to the node that was current when they were read.
#[derive(Debug)]
pub(crate) struct StyleStack {
    nodes: Vec<Arc<Style>>,
}

impl StyleStack {
    pub(crate) fn new(base: Style) -> Self {
        Self {
            nodes: vec![Arc::new(base)],
        }
    }

    pub(crate) fn top(&self) -> &Arc<Style> {
        // The base node is never popped.
        &self.nodes[self.nodes.len() - 1]
    }

    /// Pushes the current style with `params` applied.
    pub(crate) fn push(&mut self, params: &str) {
        let mut style = (**self.top()).clone();
        for param in params.split_whitespace() {
            apply_param(&mut style, param);
        }
        self.nodes.push(Arc::new(style));
    }

    /// Pops the most recent push. Returns `false` at the base style.
    pub(crate) fn pop(&mut self) -> bool {
        if self.nodes.len() > 1 {
            self.nodes.pop();
            true
        } else {
            false
        }
    }
}

fn apply_param(style: &mut Style, param: &str) {
    match param {
        "b" => style.bold = true,
        "i" => style.italic = true,
        "u" => style.underline = true,
        "l" => style.h_justify = Some(HJustify::Left),
        "r" => style.h_justify = Some(HJustify::Right),
        "c" => style.h_justify = Some(HJustify::Center),
        _ => {
            if let Some((name, value)) = param.split_once(':') {
                apply_pair(style, name, value);
            } else if is_hex_color(param) {
                if let Ok(color) = parse_color(param) {
                    style.color = color.to_alpha_color::<Srgb>();
                }
            } else if let Some(percent) = param.strip_suffix('%').and_then(parse_number) {
                style.scale = percent / 100.0;
            } else if let Some(points) = param.strip_suffix('p').and_then(parse_number) {
                style.size = points;
            } else {
                style.font = param.into();
            }
        }
    }
}

fn apply_pair(style: &mut Style, name: &str, value: &str) {
    match name {
        "icon_y" => {
            let value = value.strip_suffix('%').unwrap_or(value);
            let (sign, digits) = match value.strip_prefix('-') {
                Some(digits) => (-1.0, digits),
                None => (1.0, value),
            };
            if let Some(percent) = parse_number(digits) {
                style.icon_y = sign * percent / 100.0;
            }
        }
        "icon_fit" => match value {
            "ascender" => style.icon_fit = IconFit::Ascender,
            "none" => style.icon_fit = IconFit::None,
            _ => {}
        },
        "underline" => {
            if let Some(weight) = parse_number(value) {
                style.underline = true;
                style.underline_weight = weight;
            }
        }
        _ => {}
    }
}

fn is_hex_color(param: &str) -> bool {
    param
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Parses an unsigned decimal such as `12` or `12.5`.
fn parse_number(text: &str) -> Option<f32> {
    let well_formed = !text.is_empty()
        && text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if well_formed {
        text.parse().ok()
    } else {
        None
    }
}
