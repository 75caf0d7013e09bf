//! Scene model for the spinning-prism viewer: geometry constants, the
//! accumulated view transform, and the typed control commands.
//!
//! This crate depends only on `glam`, so the scene model can be exercised by
//! plain unit tests without pulling in any GPU or windowing code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`command`] | `Command` and its fixed rotation table |
//! | [`mesh`] | front/back/side vertices and the color palettes |
//! | [`view`] | `ViewTransform` — projection, camera back-off, accumulated spin and zoom |

pub mod command;
pub mod mesh;
pub mod view;

pub use command::Command;
pub use view::ViewTransform;
