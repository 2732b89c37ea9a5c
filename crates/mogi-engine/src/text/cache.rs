use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::core::RenderContext;
use crate::error::EngineError;

use super::atlas::FontAtlas;

/// Atlases keyed by font path and pixel height.
///
/// One font file at two sizes is two atlases. Owned by the caller; entries are
/// released through the context on [`unload`](FontCache::unload) or
/// [`destroy`](FontCache::destroy).
#[derive(Debug, Default)]
pub struct FontCache {
    atlases: HashMap<(PathBuf, u32), FontAtlas>,
}

#[inline]
fn key(path: &Path, pixel_height: f32) -> (PathBuf, u32) {
    (path.to_path_buf(), pixel_height.to_bits())
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the atlas for `(path, pixel_height)`, building it on a miss.
    ///
    /// Failed loads are not cached.
    pub fn get_or_load<B: Backend>(
        &mut self,
        ctx: &mut RenderContext<B>,
        path: impl AsRef<Path>,
        pixel_height: f32,
    ) -> Result<&FontAtlas, EngineError> {
        let k = key(path.as_ref(), pixel_height);
        if !self.atlases.contains_key(&k) {
            let atlas = ctx.load_font(&k.0, pixel_height)?;
            log::debug!(target: "mogi", "font cache: loaded {} at {pixel_height}px", k.0.display());
            self.atlases.insert(k.clone(), atlas);
        }
        self.atlases
            .get(&k)
            .ok_or_else(|| EngineError::resource(format!("{}: missing from cache", k.0.display())))
    }

    pub fn get(&self, path: impl AsRef<Path>, pixel_height: f32) -> Option<&FontAtlas> {
        self.atlases.get(&key(path.as_ref(), pixel_height))
    }

    /// Releases the atlas for `(path, pixel_height)`. Returns whether one was cached.
    pub fn unload<B: Backend>(&mut self, ctx: &mut RenderContext<B>, path: impl AsRef<Path>, pixel_height: f32) -> bool {
        match self.atlases.remove(&key(path.as_ref(), pixel_height)) {
            Some(atlas) => {
                ctx.destroy_font(atlas);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }

    /// Releases every cached atlas.
    pub fn destroy<B: Backend>(mut self, ctx: &mut RenderContext<B>) {
        for (_, atlas) in self.atlases.drain() {
            ctx.destroy_font(atlas);
        }
    }
}
