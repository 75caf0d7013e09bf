use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position. Per-frame
/// transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and
    /// writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the "down" set. Avoids stuck
                    // buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((x, y));
                self.modifiers = modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        let inserted = self.buttons_down.insert(button);
                        if inserted {
                            frame.buttons_pressed.insert(button);
                        }
                    }
                    MouseButtonState::Released => {
                        let removed = self.buttons_down.remove(&button);
                        if removed {
                            frame.buttons_released.insert(button);
                        }
                    }
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn release(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn press_and_release_record_one_transition_each() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 1.0, 2.0));
        assert!(state.button_down(MouseButton::Left));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));

        state.apply_event(&mut frame, release(MouseButton::Left, 1.0, 2.0));
        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
    }

    #[test]
    fn repeated_press_does_not_duplicate_the_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 0.0, 0.0));
        frame.clear();
        state.apply_event(&mut frame, press(MouseButton::Left, 0.0, 0.0));
        // Still held from the first press; no new transition recorded.
        assert!(frame.buttons_pressed.is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, release(MouseButton::Right, 0.0, 0.0));
        assert!(frame.buttons_released.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn pointer_left_clears_the_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 20.0 }),
        );
        assert_eq!(state.pointer_pos, Some((10.0, 20.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
