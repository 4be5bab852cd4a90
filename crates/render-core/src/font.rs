//! The standard PDF font families used by warrant documents.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Times,
    Helvetica,
    Courier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// A family, style and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::Times, FontStyle::Normal, 12.0)
    }
}

impl Font {
    pub const fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self { family, style, size }
    }

    pub const fn times(style: FontStyle, size: f32) -> Self {
        Self::new(FontFamily::Times, style, size)
    }

    pub const fn helvetica(style: FontStyle, size: f32) -> Self {
        Self::new(FontFamily::Helvetica, style, size)
    }

    pub const fn courier(style: FontStyle, size: f32) -> Self {
        Self::new(FontFamily::Courier, style, size)
    }

    /// PostScript name of the standard 14 face for this family and style.
    pub fn base_font_name(&self) -> &'static str {
        get_styled_font_name(self.family, self.style)
    }
}

/// Get the standard font name with style suffix
pub fn get_styled_font_name(family: FontFamily, style: FontStyle) -> &'static str {
    match (family, style) {
        (FontFamily::Times, FontStyle::Normal) => "Times-Roman",
        (FontFamily::Times, FontStyle::Bold) => "Times-Bold",
        (FontFamily::Times, FontStyle::Italic) => "Times-Italic",
        (FontFamily::Times, FontStyle::BoldItalic) => "Times-BoldItalic",
        (FontFamily::Helvetica, FontStyle::Normal) => "Helvetica",
        (FontFamily::Helvetica, FontStyle::Bold) => "Helvetica-Bold",
        (FontFamily::Helvetica, FontStyle::Italic) => "Helvetica-Oblique",
        (FontFamily::Helvetica, FontStyle::BoldItalic) => "Helvetica-BoldOblique",
        (FontFamily::Courier, FontStyle::Normal) => "Courier",
        (FontFamily::Courier, FontStyle::Bold) => "Courier-Bold",
        (FontFamily::Courier, FontStyle::Italic) => "Courier-Oblique",
        (FontFamily::Courier, FontStyle::BoldItalic) => "Courier-BoldOblique",
    }
}
