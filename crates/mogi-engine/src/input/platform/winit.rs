use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::window::Window;

use crate::backend::BackendEvent;
use crate::input::{ButtonState, MouseButton};

/// Translates a winit `WindowEvent` into a [`BackendEvent`].
///
/// Returns `None` for events the render context does not consume.
pub fn translate_window_event(window: &Window, event: &WindowEvent) -> Option<BackendEvent> {
    match event {
        WindowEvent::CloseRequested => Some(BackendEvent::CloseRequested),

        WindowEvent::Resized(size) => {
            let logical = size.to_logical::<f64>(window.scale_factor());
            Some(BackendEvent::Resized {
                width: logical.width as f32,
                height: logical.height as f32,
            })
        }

        WindowEvent::Focused(f) => Some(BackendEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(BackendEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(BackendEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let state = match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            Some(BackendEvent::PointerButton {
                button: map_mouse_button(*button),
                state,
            })
        }

        _ => None,
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
