//! Depth-tested 3D mesh rendering.
//!
//! Unlike the 2D shape renderers, the mesh pipeline is built from
//! runtime-supplied WGSL sources and positions vertices with a caller-provided
//! transform matrix instead of the viewport uniform. Shader compilation is
//! validated through wgpu error scopes; a failed compile disables the renderer
//! for the rest of the session without touching the 2D passes.

mod renderer;

pub use renderer::{MeshDraw, MeshRenderer, MeshVertex};
