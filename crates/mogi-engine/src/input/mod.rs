//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Backends translate platform events into [`crate::backend::BackendEvent`]s;
//! the render context folds them into [`InputState`] and [`InputFrame`].

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, MouseButton};
