use std::collections::HashSet;

use crate::backend::BackendEvent;
use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{ButtonState, MouseButton};

/// Current pointer state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a host event and writes transitions to `frame`.
    ///
    /// Events that carry no input are ignored.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: &BackendEvent) {
        match *ev {
            BackendEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoid stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            BackendEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some(Vec2::new(x, y));
            }

            BackendEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            BackendEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                }
                ButtonState::Released => {
                    if self.buttons_down.remove(&button) {
                        frame.buttons_released.insert(button);
                    }
                }
            },

            BackendEvent::Resized { .. } | BackendEvent::CloseRequested => {}
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
