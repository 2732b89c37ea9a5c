use std::collections::HashSet;

use super::types::MouseButton;

/// Per-frame pointer transitions.
///
/// `InputState` holds what is currently down; `InputFrame` holds what changed
/// since the last `clear()`.
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
