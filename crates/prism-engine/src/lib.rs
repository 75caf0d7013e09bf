//! Prism engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by higher layers:
//! the winit event loop, wgpu device/surface lifecycle, pointer input, frame
//! timing, the retained 2D draw list with its instanced shape renderers, the
//! 3D colored-mesh renderer, and text shaping/rasterization.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod mesh;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
