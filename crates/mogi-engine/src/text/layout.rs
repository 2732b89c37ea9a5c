use crate::coords::{Rect, Vec2};

use super::atlas::FontAtlas;

/// Space advance for unpacked spaces, as a fraction of the pixel height.
pub const SPACE_ADVANCE: f32 = 0.3;

/// Tab advance in spaces.
pub const TAB_SPACES: f32 = 4.0;

/// Advance for any other unpacked character, as a fraction of the pixel height.
pub const UNKNOWN_ADVANCE: f32 = 0.5;

/// Heuristic advance for characters outside the packed range.
pub fn fallback_advance(ch: char, pixel_height: f32) -> f32 {
    match ch {
        ' ' => pixel_height * SPACE_ADVANCE,
        '\t' => pixel_height * SPACE_ADVANCE * TAB_SPACES,
        _ => pixel_height * UNKNOWN_ADVANCE,
    }
}

/// Horizontal cursor displacement for `ch`.
///
/// Render and measure both go through here so their totals agree.
#[inline]
pub fn advance(atlas: &FontAtlas, ch: char) -> f32 {
    match atlas.glyph(ch) {
        Some(m) => m.advance,
        None => fallback_advance(ch, atlas.pixel_height()),
    }
}

/// A positioned glyph quad in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub rect: Rect,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// Lays out `text` starting at `origin` (top of the line box) and appends one
/// quad per packed character to `out`.
///
/// The baseline sits at `origin.y + ascent`. Quad corners snap to whole
/// pixels. Glyphs without coverage (spaces) advance but emit no quad.
/// Returns the total advance, bit-equal to [`measure`] for any origin.
pub fn layout(atlas: &FontAtlas, text: &str, origin: Vec2, out: &mut Vec<GlyphQuad>) -> f32 {
    let baseline = origin.y + atlas.ascent();
    // Offset from origin.x; accumulated from zero in the same order as `measure`.
    let mut pen = 0.0_f32;

    for ch in text.chars() {
        if let Some(m) = atlas.glyph(ch).filter(|m| m.size.x > 0.0 && m.size.y > 0.0) {
            let x = (origin.x + pen + m.offset.x + 0.5).floor();
            let y = (baseline + m.offset.y + 0.5).floor();
            out.push(GlyphQuad {
                rect: Rect::new(x, y, m.size.x, m.size.y),
                uv_min: m.uv_min,
                uv_max: m.uv_max,
            });
        }
        pen += advance(atlas, ch);
    }

    pen
}

/// Total advance of `text`; zero for an empty string.
pub fn measure(atlas: &FontAtlas, text: &str) -> f32 {
    text.chars().fold(0.0, |pen, ch| pen + advance(atlas, ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TextureId;
    use crate::text::atlas::{pack_atlas, AtlasOptions};
    use crate::text::source::BlockGlyphs;

    fn atlas(px: f32) -> FontAtlas {
        let packed = pack_atlas(&BlockGlyphs::default(), px, &AtlasOptions::default()).unwrap();
        FontAtlas::from_packed(Vec::new(), packed, TextureId(1))
    }

    // ── fallback_advance ──────────────────────────────────────────────────

    #[test]
    fn fallback_policy() {
        assert!((fallback_advance(' ', 20.0) - 6.0).abs() < 1e-5);
        assert!((fallback_advance('\t', 20.0) - 24.0).abs() < 1e-5);
        assert!((fallback_advance('é', 20.0) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn packed_space_uses_its_own_advance() {
        let a = atlas(20.0);
        assert!((advance(&a, ' ') - 20.0 * BlockGlyphs::SPACE_ADVANCE).abs() < 1e-5);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn empty_text_has_no_quads_and_zero_width() {
        let a = atlas(16.0);
        let mut quads = Vec::new();
        assert_eq!(layout(&a, "", Vec2::new(5.0, 5.0), &mut quads), 0.0);
        assert!(quads.is_empty());
        assert_eq!(measure(&a, ""), 0.0);
    }

    #[test]
    fn blank_glyphs_advance_without_quads() {
        let a = atlas(16.0);
        let mut quads = Vec::new();
        let w = layout(&a, "a b", Vec2::zero(), &mut quads);
        assert_eq!(quads.len(), 2);
        assert!(quads.iter().all(|q| q.rect.size.x > 0.0 && q.rect.size.y > 0.0));
        assert_eq!(w, measure(&a, "a b"));
        // 'b' still lands after the space's advance
        let b = a.glyph('b').unwrap();
        let pen = advance(&a, 'a') + advance(&a, ' ');
        assert_eq!(quads[1].rect.origin.x, (pen + b.offset.x + 0.5).floor());
    }

    #[test]
    fn unpacked_chars_advance_without_quads() {
        let a = atlas(20.0);
        let mut quads = Vec::new();
        let w = layout(&a, "\tx\u{e9}", Vec2::zero(), &mut quads);
        assert_eq!(quads.len(), 1);
        let expected = 24.0 + 20.0 * BlockGlyphs::ADVANCE + 10.0;
        assert!((w - expected).abs() < 1e-4);
    }

    #[test]
    fn quads_sit_on_the_baseline() {
        let a = atlas(20.0);
        let mut quads = Vec::new();
        layout(&a, "A", Vec2::new(10.0, 100.0), &mut quads);
        // ascent 16, block height 15, xmin 1
        assert_eq!(quads[0].rect, Rect::new(11.0, 101.0, 10.0, 15.0));
    }

    #[test]
    fn quad_positions_snap_to_whole_pixels() {
        let a = atlas(20.0);
        let mut quads = Vec::new();
        layout(&a, "AB", Vec2::new(0.3, 0.6), &mut quads);
        for q in &quads {
            assert_eq!(q.rect.origin.x, q.rect.origin.x.floor());
            assert_eq!(q.rect.origin.y, q.rect.origin.y.floor());
        }
        // second pen position is 0.3 + 12 = 12.3, +1 xmin rounds to 13
        assert_eq!(quads[1].rect.origin.x, 13.0);
    }

    #[test]
    fn measure_matches_layout_advance() {
        let a = atlas(18.0);
        for text in ["Hello, world!", "tabs\tand\u{2014}dashes", " ", "~~~"] {
            let mut quads = Vec::new();
            let rendered = layout(&a, text, Vec2::zero(), &mut quads);
            assert!((measure(&a, text) - rendered).abs() < 1e-3, "{text:?}");
        }
    }

    #[test]
    fn advance_is_independent_of_origin() {
        let a = atlas(17.3);
        let text = "Hello, wo\trld! ".repeat(40);
        let measured = measure(&a, &text);

        for origin in [Vec2::zero(), Vec2::new(12345.67, 0.0), Vec2::new(-9876.5, 321.0)] {
            let mut quads = Vec::new();
            let rendered = layout(&a, &text, origin, &mut quads);
            assert_eq!(rendered.to_bits(), measured.to_bits(), "origin {origin:?}");
        }
    }
}
