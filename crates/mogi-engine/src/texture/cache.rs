use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::core::RenderContext;
use crate::error::EngineError;

use super::Texture;

/// Textures loaded from disk, keyed by path.
///
/// The cache is owned by the caller. Textures load through the context on the
/// first request and are released through it on [`unload`] or [`destroy`].
///
/// [`unload`]: TextureCache::unload
/// [`destroy`]: TextureCache::destroy
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<PathBuf, Texture>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached texture for `path`, loading it on a miss.
    ///
    /// Failed loads are not cached.
    pub fn get_or_load<B: Backend>(&mut self, ctx: &mut RenderContext<B>, path: impl AsRef<Path>) -> Result<&Texture, EngineError> {
        let path = path.as_ref();
        if !self.textures.contains_key(path) {
            let texture = ctx.load_texture(path)?;
            log::debug!(target: "mogi", "texture cache: loaded {}", path.display());
            self.textures.insert(path.to_path_buf(), texture);
        }
        self.textures
            .get(path)
            .ok_or_else(|| EngineError::resource(format!("{}: missing from cache", path.display())))
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Texture> {
        self.textures.get(path.as_ref())
    }

    /// Releases the texture for `path`. Returns whether one was cached.
    pub fn unload<B: Backend>(&mut self, ctx: &mut RenderContext<B>, path: impl AsRef<Path>) -> bool {
        match self.textures.remove(path.as_ref()) {
            Some(texture) => {
                ctx.destroy_texture(texture);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Releases every cached texture.
    pub fn destroy<B: Backend>(mut self, ctx: &mut RenderContext<B>) {
        for (_, texture) in self.textures.drain() {
            ctx.destroy_texture(texture);
        }
    }
}
