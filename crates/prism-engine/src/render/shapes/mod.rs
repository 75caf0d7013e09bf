//! 2D overlay shape renderers. Each consumes its own command type from the
//! draw list in paint order and draws instanced in a single pass.

mod common;

pub mod circle;
pub mod rect;
pub mod rounded_rect;
pub mod text;
