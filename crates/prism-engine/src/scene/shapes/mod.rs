pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;

use crate::paint::Color;

/// Stroke drawn along a shape's outline.
///
/// The stroke lies inside the outline; it never grows the shape's geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
