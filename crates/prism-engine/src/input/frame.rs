use std::collections::HashSet;

use super::types::MouseButton;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held buttons, pointer position).
/// `InputFrame` provides the transition sets for the current frame; the
/// runtime clears it after each frame callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }
}
