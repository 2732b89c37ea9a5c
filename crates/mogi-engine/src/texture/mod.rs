//! CPU images and backend texture handles.
//!
//! [`ImageData`] is what backends upload. Decoding goes through the `image`
//! crate; raw buffers with 1 to 4 channels are expanded to RGBA8.

mod cache;
mod image;

pub use cache::TextureCache;
pub use image::{ImageData, PixelFormat};

use crate::backend::TextureId;
use crate::coords::Vec2;

/// A texture owned by the caller that loaded it.
///
/// Release it with [`crate::core::RenderContext::destroy_texture`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    #[inline]
    pub fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Pixel size as a vector, for drawing at natural size.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
