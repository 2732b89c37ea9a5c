use crate::input::{ButtonState, MouseButton};

/// Host event drained by [`super::Backend::poll_events`].
///
/// Positions and sizes are in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BackendEvent {
    Resized { width: f32, height: f32 },
    CloseRequested,
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    PointerButton { button: MouseButton, state: ButtonState },
    Focused(bool),
}
