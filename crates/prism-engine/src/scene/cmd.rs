use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Only the 2D control overlay flows through this enum; the 3D mesh draws
/// through its own depth-tested pipeline (`mesh::MeshRenderer`).
///
/// Extending the overlay:
/// - add a shape module under `scene::shapes::*` with push helpers
/// - add a variant here
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
