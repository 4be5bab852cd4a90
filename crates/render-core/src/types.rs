use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

impl PaintMode {
    pub fn fills(self) -> bool {
        matches!(self, PaintMode::Fill | PaintMode::FillStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, PaintMode::Stroke | PaintMode::FillStroke)
    }
}

/// Which of the three surface colors `set_color` changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Fill,
    Stroke,
    Text,
}

/// Placement options for a single `draw_text` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    pub align: TextAlign,
    /// Counter-clockwise rotation around the anchor point, in degrees.
    pub rotation: f32,
}

impl TextOptions {
    pub fn left() -> Self {
        Self::default()
    }

    pub fn centered() -> Self {
        Self {
            align: TextAlign::Center,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            align: TextAlign::Right,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rotated(self, degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..self
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }
}
