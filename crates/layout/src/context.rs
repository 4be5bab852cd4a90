//! State shared by every block of one render call, plus the palette.

use crate::config::PageGeometry;
use crate::labels::{Labels, Locale};
use warrant_render_core::{ColorTarget, DrawingSurface, Font, FontStyle, RenderError, TextOptions};
use warrant_types::{Color, Point};

pub(crate) mod palette {
    use warrant_types::Color;

    pub const INK: Color = Color::BLACK;
    pub const MUTED: Color = Color::gray(90);
    pub const RULE: Color = Color::gray(60);
    pub const BOX_FILL: Color = Color::gray(244);
    pub const BOX_EDGE: Color = Color::gray(170);
    pub const HEADER_FILL: Color = Color::rgb(38, 50, 72);
    pub const HEADER_TEXT: Color = Color::WHITE;
    pub const STRIPE: Color = Color::gray(236);
    pub const APPROVED: Color = Color::rgb(0, 100, 0);
    pub const REJECTED: Color = Color::rgb(150, 0, 0);
    pub const CANCELLED: Color = Color::gray(100);
}

/// A font paired with the color text is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextStyle {
    pub font: Font,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font: Font, color: Color) -> Self {
        Self { font, color }
    }

    pub const fn ink(font: Font) -> Self {
        Self::new(font, palette::INK)
    }
}

pub(crate) const BODY: TextStyle = TextStyle::ink(Font::times(FontStyle::Normal, 11.0));
pub(crate) const BODY_BOLD: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 11.0));

/// Read-only inputs of a single render.
pub(crate) struct RenderContext<'a> {
    pub geometry: &'a PageGeometry,
    pub labels: &'a Labels,
    pub locale: Locale,
    /// Display form of the warrant id.
    pub short_id: String,
}

impl RenderContext<'_> {
    pub fn left(&self) -> f32 {
        self.geometry.content_left()
    }

    pub fn right(&self) -> f32 {
        self.geometry.content_right()
    }
}

pub(crate) fn apply_style<S: DrawingSurface>(surface: &mut S, style: TextStyle) {
    surface.set_font(style.font);
    surface.set_color(ColorTarget::Text, style.color);
}

pub(crate) fn draw_text<S: DrawingSurface>(
    surface: &mut S,
    style: TextStyle,
    text: &str,
    x: f32,
    y: f32,
    options: TextOptions,
) -> Result<(), RenderError> {
    apply_style(surface, style);
    surface.draw_text(text, x, y, options)
}

/// A horizontal stroke at `y` from `x0` to `x1`.
pub(crate) fn draw_rule<S: DrawingSurface>(
    surface: &mut S,
    x0: f32,
    x1: f32,
    y: f32,
    width: f32,
    color: Color,
) -> Result<(), RenderError> {
    surface.set_color(ColorTarget::Stroke, color);
    surface.set_line_width(width);
    surface.draw_line(Point::new(x0, y), Point::new(x1, y))
}
