use std::path::Path;

use image::DynamicImage;

use crate::error::{self, EngineError};

/// Pixel layout of an [`ImageData`] buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// One coverage byte per pixel (glyph atlases).
    Alpha8,
    /// Straight-alpha RGBA, four bytes per pixel.
    Rgba8,
}

impl PixelFormat {
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Alpha8 => 1,
            Self::Rgba8 => 4,
        }
    }
}

/// CPU-side pixel buffer handed to [`crate::backend::Backend::create_texture`].
///
/// Rows are tightly packed, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Wraps an existing buffer after checking its length.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::resource(format!("image has zero size ({width}x{height})")));
        }
        let expected = expected_len(width, height, format.bytes_per_pixel())?;
        if pixels.len() != expected {
            return Err(EngineError::resource(format!(
                "image buffer is {} bytes, expected {expected} for {width}x{height} {format:?}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, format, pixels })
    }

    /// Decodes a png, jpeg, bmp, gif, ico, tiff or webp file into RGBA8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| EngineError::resource(format!("cannot read image {}: {e}", path.display())))?;
        if bytes.is_empty() {
            return Err(EngineError::resource(format!("image file {} is empty", path.display())));
        }
        Self::decode(&bytes).map_err(|e| EngineError::resource(format!("{}: {e}", path.display())))
    }

    /// Decodes an encoded image held in memory.
    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| EngineError::resource(format!("cannot decode image: {e}")))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new(width, height, PixelFormat::Rgba8, rgba.into_raw())
    }

    /// Expands raw 8-bit pixels with 1 to 4 channels into RGBA8.
    ///
    /// 1 channel is gray, 2 is gray + alpha, 3 is RGB, 4 is RGBA.
    pub fn from_raw(bytes: &[u8], width: u32, height: u32, channels: u8) -> Result<Self, EngineError> {
        if !(1..=4).contains(&channels) {
            return Err(EngineError::resource(format!("unsupported channel count {channels}")));
        }
        if width == 0 || height == 0 {
            return Err(EngineError::resource(format!("image has zero size ({width}x{height})")));
        }
        let expected = expected_len(width, height, channels as usize)?;
        if bytes.len() < expected {
            return Err(EngineError::resource(format!(
                "raw image is {} bytes, expected {expected} for {width}x{height}x{channels}",
                bytes.len()
            )));
        }

        let mut raw = error::try_zeroed(expected, "raw image")?;
        raw.copy_from_slice(&bytes[..expected]);
        let buffer = match channels {
            1 => image::GrayImage::from_raw(width, height, raw).map(DynamicImage::ImageLuma8),
            2 => image::GrayAlphaImage::from_raw(width, height, raw).map(DynamicImage::ImageLumaA8),
            3 => image::RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
            _ => image::RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8),
        };
        let rgba = buffer
            .ok_or_else(|| EngineError::resource(format!("raw image does not fit {width}x{height}x{channels}")))?
            .to_rgba8();
        Self::new(width, height, PixelFormat::Rgba8, rgba.into_raw())
    }
}

fn expected_len(width: u32, height: u32, bpp: usize) -> Result<usize, EngineError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(bpp))
        .ok_or_else(|| EngineError::allocation(format!("image {width}x{height} overflows usize")))
}
