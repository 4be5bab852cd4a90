use crate::types::TextAlign;

/// Convert top-down layout Y coordinate to bottom-up page Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Offset from the anchor to the start of a string of `width`, along its baseline.
pub fn align_offset(align: TextAlign, width: f32) -> f32 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -width / 2.0,
        TextAlign::Right => -width,
    }
}

/// `[cos, sin, -sin, cos]` for a counter-clockwise rotation in degrees.
pub fn rotation_matrix(degrees: f32) -> [f32; 4] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [cos, sin, -sin, cos]
}
