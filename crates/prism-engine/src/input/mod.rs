//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. Runtime
//! code is responsible for translating platform events into `InputEvent`s.
//!
//! Scope is pointer-only: the viewer's control surface is mouse-driven, so
//! there is no keyboard, IME, or wheel plumbing here.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
