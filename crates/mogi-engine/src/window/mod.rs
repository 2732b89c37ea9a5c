//! Window backend.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer and
//! the primitive renderer behind the [`crate::backend::Backend`] trait.

mod backend;

pub use backend::{WindowBackend, WindowConfig};
