/// Vertical font metrics scaled to a pixel height.
///
/// `ascent` is positive above the baseline, `descent` negative below it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl VerticalMetrics {
    /// Used when a font carries no horizontal line metrics.
    pub fn fallback(pixel_height: f32) -> Self {
        Self {
            ascent: pixel_height,
            descent: 0.0,
            line_gap: 0.0,
        }
    }

    /// Distance between consecutive baselines.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }
}

/// A single rasterized glyph.
///
/// `xmin`/`ymin` locate the bitmap's bottom-left corner relative to the pen
/// position on the baseline, with +Y up (font convention). `coverage` holds
/// `width * height` bytes, top row first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RasterGlyph {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

/// Font outline collaborator used by the atlas builder.
pub trait GlyphSource {
    /// Line metrics at `pixel_height`, or `None` if the font has none.
    fn vertical_metrics(&self, pixel_height: f32) -> Option<VerticalMetrics>;

    /// Rasterizes `ch` at `pixel_height`.
    fn rasterize(&self, ch: char, pixel_height: f32) -> RasterGlyph;
}

impl GlyphSource for fontdue::Font {
    fn vertical_metrics(&self, pixel_height: f32) -> Option<VerticalMetrics> {
        self.horizontal_line_metrics(pixel_height).map(|m| VerticalMetrics {
            ascent: m.ascent,
            descent: m.descent,
            line_gap: m.line_gap,
        })
    }

    fn rasterize(&self, ch: char, pixel_height: f32) -> RasterGlyph {
        let (m, coverage) = fontdue::Font::rasterize(self, ch, pixel_height);
        RasterGlyph {
            width: m.width,
            height: m.height,
            xmin: m.xmin,
            ymin: m.ymin,
            advance: m.advance_width,
            coverage,
        }
    }
}

/// Parses TrueType/OpenType bytes with fontdue.
pub fn parse_font(bytes: &[u8]) -> Result<fontdue::Font, String> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(|e| e.to_string())
}

/// Glyph source drawing every printable character as a solid block.
///
/// Needs no font file, so headless tooling and tests can build atlases and
/// lay out text deterministically. Space rasterizes to an empty bitmap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockGlyphs {
    /// Whether [`GlyphSource::vertical_metrics`] reports line metrics.
    pub line_metrics: bool,
}

impl Default for BlockGlyphs {
    fn default() -> Self {
        Self { line_metrics: true }
    }
}

impl BlockGlyphs {
    pub const ASCENT: f32 = 0.8;
    pub const DESCENT: f32 = -0.2;
    pub const ADVANCE: f32 = 0.6;
    pub const SPACE_ADVANCE: f32 = 0.25;
}

impl GlyphSource for BlockGlyphs {
    fn vertical_metrics(&self, pixel_height: f32) -> Option<VerticalMetrics> {
        self.line_metrics.then(|| VerticalMetrics {
            ascent: pixel_height * Self::ASCENT,
            descent: pixel_height * Self::DESCENT,
            line_gap: 0.0,
        })
    }

    fn rasterize(&self, ch: char, pixel_height: f32) -> RasterGlyph {
        if ch.is_whitespace() {
            return RasterGlyph {
                advance: pixel_height * Self::SPACE_ADVANCE,
                ..RasterGlyph::default()
            };
        }
        let width = (pixel_height * 0.5).ceil() as usize;
        let height = (pixel_height * 0.75).ceil() as usize;
        RasterGlyph {
            width,
            height,
            xmin: 1,
            ymin: 0,
            advance: pixel_height * Self::ADVANCE,
            coverage: vec![255; width * height],
        }
    }
}
