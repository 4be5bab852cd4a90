//! Page-space geometry in points, top-left origin, y growing downwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Shrinks the rectangle by `inset` on every side.
    pub fn inset(self, inset: f32) -> Self {
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: (self.width - 2.0 * inset).max(0.0),
            height: (self.height - 2.0 * inset).max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The drawing cursor threaded through block rendering.
///
/// Blocks take a cursor by value and hand back the advanced one; there is no
/// ambient position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub const fn at(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn down(self, dy: f32) -> Self {
        Self { y: self.y + dy, ..self }
    }

    #[must_use]
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }
}
