//! Visual properties attached to view-tree nodes.

use crate::color::Color;

/// Absolute placement offsets within the overlay layer.
///
/// Any side left as `None` is unconstrained; hosts anchor the node against
/// the sides that are set (a popover pinned `left` + `top`, for example).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl Inset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }

    pub fn top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    pub fn right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    pub fn bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }
}

/// Style for a single node.
///
/// `opacity`, `scale` and the translate pair are the animated channels; the
/// rest is static decoration passed through to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub opacity: f32,
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: bool,
    pub inset: Option<Inset>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            background: None,
            foreground: None,
            bold: false,
            inset: None,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = value;
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = value;
        self
    }

    pub fn translate_x(mut self, value: f32) -> Self {
        self.translate_x = value;
        self
    }

    pub fn translate_y(mut self, value: f32) -> Self {
        self.translate_y = value;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn inset(mut self, inset: Inset) -> Self {
        self.inset = Some(inset);
        self
    }
}
