//! Mogi engine crate.
//!
//! An immediate-mode 2D drawing layer. Shape and text requests made on a
//! [`RenderContext`] are tessellated into a per-frame draw list that a
//! [`Backend`] rasterizes: a winit + wgpu window, or an in-memory headless
//! backend for tests and offscreen tools.

pub mod backend;
pub mod coords;
pub mod core;
pub mod device;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod texture;
pub mod time;
pub mod window;

pub use backend::{Backend, HeadlessBackend, TextureId};
pub use coords::{Circle, Line, Rect, Vec2, Viewport};
pub use crate::core::{App, AppControl, RenderContext};
pub use error::EngineError;
pub use paint::{Color, Hsla};
pub use scene::shapes::RoundedRectSpec;
pub use text::{AtlasOptions, FontAtlas, FontCache};
pub use texture::{Texture, TextureCache};
pub use window::{WindowBackend, WindowConfig};
