//! Built-in widgets.

pub mod button;
pub mod container;
pub mod flex;
pub mod radio;
pub mod text;
