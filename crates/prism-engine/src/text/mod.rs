//! Font loading and text measurement.
//!
//! Responsibilities:
//! - parse and own TrueType/OpenType fonts (`FontSystem`)
//! - hand out opaque `FontId` handles for draw commands
//! - measure laid-out text for the UI layer
//!
//! Rasterization lives in `render::shapes::text`; this module never touches
//! the GPU.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

/// Quantizes a window scale factor to 0.25 steps for glyph rasterization.
///
/// The text renderer rasterizes glyphs at `size * raster_scale(scale_factor)`
/// and positions them back in logical pixels. Layout measurement must use the
/// same value (see [`FontSystem::measure_text_scaled`]) or measured widths
/// drift from rendered glyph positions.
#[inline]
pub fn raster_scale(scale_factor: f32) -> f32 {
    ((scale_factor * 4.0).round() / 4.0).max(0.25)
}
