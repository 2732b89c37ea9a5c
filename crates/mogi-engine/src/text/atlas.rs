use crate::backend::{Backend, TextureId};
use crate::coords::Vec2;
use crate::error::{self, EngineError};
use crate::texture::{ImageData, PixelFormat};

use super::packer::ShelfPacker;
use super::source::{parse_font, GlyphSource, VerticalMetrics};

/// First packed codepoint (space).
pub const FIRST_CODEPOINT: u32 = 32;

/// Number of packed codepoints: printable ASCII `' '..='~'`.
pub const GLYPH_COUNT: usize = 95;

/// Atlas bitmap size and glyph spacing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AtlasOptions {
    pub width: u32,
    pub height: u32,
    /// Empty pixels between packed glyphs.
    pub padding: u32,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            padding: 1,
        }
    }
}

/// Placement and spacing of one packed glyph.
///
/// `offset` is the bitmap's top-left relative to the pen position on the
/// baseline, +Y down. UVs are normalized to the owning atlas.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphMetric {
    pub uv_min: Vec2,
    pub uv_max: Vec2,
    pub offset: Vec2,
    pub size: Vec2,
    pub advance: f32,
}

/// Output of the CPU packing stage, before upload.
#[derive(Debug, Clone)]
pub struct PackedAtlas {
    pub bitmap: ImageData,
    pub metrics: Vec<GlyphMetric>,
    pub vertical: VerticalMetrics,
    pub pixel_height: f32,
}

/// Index into the metric table for `ch`, if it is packed.
#[inline]
pub fn glyph_index(ch: char) -> Option<usize> {
    let cp = ch as u32;
    if (FIRST_CODEPOINT..FIRST_CODEPOINT + GLYPH_COUNT as u32).contains(&cp) {
        Some((cp - FIRST_CODEPOINT) as usize)
    } else {
        None
    }
}

/// Rasterizes printable ASCII from `source` and shelf-packs it into one
/// single-channel bitmap.
///
/// Zero-area glyphs take no atlas space. Fails if `pixel_height` is not a
/// positive finite number or the glyphs do not fit.
pub fn pack_atlas<S>(source: &S, pixel_height: f32, options: &AtlasOptions) -> Result<PackedAtlas, EngineError>
where
    S: GlyphSource + ?Sized,
{
    if !(pixel_height > 0.0 && pixel_height.is_finite()) {
        return Err(EngineError::resource(format!("invalid pixel height {pixel_height}")));
    }
    let AtlasOptions { width, height, padding } = *options;
    if width == 0 || height == 0 {
        return Err(EngineError::resource(format!("invalid atlas size {width}x{height}")));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| EngineError::allocation(format!("atlas {width}x{height} overflows usize")))?;
    let mut pixels = error::try_zeroed(len, "glyph atlas")?;

    let mut packer = ShelfPacker::new(width, height, padding);
    let mut metrics = Vec::with_capacity(GLYPH_COUNT);
    let (w_f, h_f) = (width as f32, height as f32);

    for cp in FIRST_CODEPOINT..FIRST_CODEPOINT + GLYPH_COUNT as u32 {
        let Some(ch) = char::from_u32(cp) else { continue };
        let glyph = source.rasterize(ch, pixel_height);

        let offset = Vec2::new(glyph.xmin as f32, -(glyph.ymin as f32 + glyph.height as f32));
        let size = Vec2::new(glyph.width as f32, glyph.height as f32);

        if glyph.width == 0 || glyph.height == 0 {
            metrics.push(GlyphMetric {
                offset,
                size,
                advance: glyph.advance,
                ..GlyphMetric::default()
            });
            continue;
        }

        if glyph.coverage.len() < glyph.width * glyph.height {
            return Err(EngineError::resource(format!(
                "glyph {ch:?} bitmap is {} bytes, expected {}",
                glyph.coverage.len(),
                glyph.width * glyph.height
            )));
        }

        let (gw, gh) = (glyph.width as u32, glyph.height as u32);
        let at = packer.place(gw, gh).ok_or_else(|| {
            EngineError::resource(format!(
                "glyphs at {pixel_height}px do not fit a {width}x{height} atlas (stopped at {ch:?})"
            ))
        })?;

        for row in 0..glyph.height {
            let dst = (at.y as usize + row) * width as usize + at.x as usize;
            let src = row * glyph.width;
            pixels[dst..dst + glyph.width].copy_from_slice(&glyph.coverage[src..src + glyph.width]);
        }

        metrics.push(GlyphMetric {
            uv_min: Vec2::new(at.x as f32 / w_f, at.y as f32 / h_f),
            uv_max: Vec2::new((at.x + gw) as f32 / w_f, (at.y + gh) as f32 / h_f),
            offset,
            size,
            advance: glyph.advance,
        });
    }

    let vertical = source
        .vertical_metrics(pixel_height)
        .unwrap_or_else(|| VerticalMetrics::fallback(pixel_height));

    log::debug!(
        target: "mogi",
        "packed {} glyphs at {pixel_height}px into {width}x{height} ({} rows used)",
        metrics.len(),
        packer.used_height()
    );

    Ok(PackedAtlas {
        bitmap: ImageData::new(width, height, PixelFormat::Alpha8, pixels)?,
        metrics,
        vertical,
        pixel_height,
    })
}

/// A font packed into a backend texture.
///
/// Owns the font bytes and the texture. Release it through the context that
/// loaded it so the texture is destroyed.
#[derive(Debug)]
pub struct FontAtlas {
    font_bytes: Vec<u8>,
    texture: TextureId,
    metrics: Vec<GlyphMetric>,
    pixel_height: f32,
    width: u32,
    height: u32,
    vertical: VerticalMetrics,
}

impl FontAtlas {
    /// Parses `font_bytes`, packs them and uploads the bitmap to `backend`.
    pub fn build<B>(backend: &mut B, font_bytes: Vec<u8>, pixel_height: f32, options: &AtlasOptions) -> Result<Self, EngineError>
    where
        B: Backend + ?Sized,
    {
        if font_bytes.is_empty() {
            return Err(EngineError::resource("font data is empty"));
        }
        let font = parse_font(&font_bytes).map_err(|e| EngineError::resource(format!("cannot parse font: {e}")))?;
        let packed = pack_atlas(&font, pixel_height, options)?;
        drop(font);
        Self::upload(backend, font_bytes, packed)
    }

    /// Uploads an already packed atlas. The CPU bitmap is dropped afterwards.
    pub fn upload<B>(backend: &mut B, font_bytes: Vec<u8>, packed: PackedAtlas) -> Result<Self, EngineError>
    where
        B: Backend + ?Sized,
    {
        let texture = backend.create_texture(&packed.bitmap)?;
        Ok(Self::from_packed(font_bytes, packed, texture))
    }

    /// Wraps a packed atlas whose bitmap already lives in `texture`.
    pub fn from_packed(font_bytes: Vec<u8>, packed: PackedAtlas, texture: TextureId) -> Self {
        Self {
            font_bytes,
            texture,
            width: packed.bitmap.width,
            height: packed.bitmap.height,
            metrics: packed.metrics,
            pixel_height: packed.pixel_height,
            vertical: packed.vertical,
        }
    }

    /// Destroys the texture; the font bytes drop with `self`.
    pub fn release<B>(self, backend: &mut B)
    where
        B: Backend + ?Sized,
    {
        backend.destroy_texture(self.texture);
    }

    /// Packed metric for `ch`, or `None` outside printable ASCII.
    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetric> {
        glyph_index(ch).and_then(|i| self.metrics.get(i))
    }

    #[inline]
    pub fn metrics(&self) -> &[GlyphMetric] {
        &self.metrics
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    #[inline]
    pub fn pixel_height(&self) -> f32 {
        self.pixel_height
    }

    /// Atlas bitmap size in pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn ascent(&self) -> f32 {
        self.vertical.ascent
    }

    #[inline]
    pub fn descent(&self) -> f32 {
        self.vertical.descent
    }

    #[inline]
    pub fn line_gap(&self) -> f32 {
        self.vertical.line_gap
    }

    #[inline]
    pub fn line_height(&self) -> f32 {
        self.vertical.line_height()
    }

    #[inline]
    pub fn font_bytes(&self) -> &[u8] {
        &self.font_bytes
    }
}
