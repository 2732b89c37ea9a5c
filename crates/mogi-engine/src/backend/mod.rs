//! Host graphics collaborator.
//!
//! The render context never talks to a window system or GPU directly. It owns
//! one value implementing [`Backend`] and hands it events to drain, textures to
//! create and a finished [`Frame`] to present.
//!
//! Implementations:
//! - [`crate::window::WindowBackend`]: winit window + wgpu surface
//! - [`HeadlessBackend`]: in-memory, for tests and offscreen tooling

mod event;
mod headless;

pub use event::BackendEvent;
pub use headless::{HeadlessBackend, RecordedFrame};

use crate::coords::{Projection, Viewport};
use crate::error::EngineError;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::texture::ImageData;

/// Handle to a texture owned by a backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Everything a backend needs to rasterize one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub clear: Color,
    pub viewport: Viewport,
    pub projection: &'a Projection,
    pub draw_list: &'a DrawList,
}

/// Host window/GPU collaborator driven by [`crate::core::RenderContext`].
pub trait Backend {
    /// Drains pending host events into `out`.
    fn poll_events(&mut self, out: &mut Vec<BackendEvent>);

    /// Whether the host asked to close.
    fn should_close(&self) -> bool;

    fn set_vsync(&mut self, enabled: bool);

    /// Current drawable size in logical pixels.
    fn drawable_size(&self) -> Viewport;

    /// Uploads `image` and returns a handle to it.
    fn create_texture(&mut self, image: &ImageData) -> Result<TextureId, EngineError>;

    /// Releases a texture. Unknown ids are ignored.
    fn destroy_texture(&mut self, id: TextureId);

    /// Rasterizes and shows `frame`.
    fn present(&mut self, frame: Frame<'_>) -> Result<(), EngineError>;
}
