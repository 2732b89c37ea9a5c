use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};
use crate::text::{self, FontAtlas, GlyphQuad};

/// Quad vertices sampling `uv_min..uv_max` over `quad.rect`.
fn glyph_vertices(quad: &GlyphQuad, color: Color) -> [Vertex; 4] {
    let [tl, tr, br, bl] = quad.rect.corners();
    let (u0, v0, u1, v1) = (quad.uv_min.x, quad.uv_min.y, quad.uv_max.x, quad.uv_max.y);
    [
        Vertex::new(tl, Vec2::new(u0, v0), color),
        Vertex::new(tr, Vec2::new(u1, v0), color),
        Vertex::new(br, Vec2::new(u1, v1), color),
        Vertex::new(bl, Vec2::new(u0, v1), color),
    ]
}

impl DrawList {
    /// Records `text` with its line box's top-left at `origin`. Returns the
    /// horizontal advance.
    ///
    /// `scratch` holds the laid-out quads and is cleared first.
    pub fn push_text(
        &mut self,
        atlas: &FontAtlas,
        text: &str,
        origin: Vec2,
        color: Color,
        scratch: &mut Vec<GlyphQuad>,
    ) -> f32 {
        scratch.clear();
        let advance = text::layout(atlas, text, origin, scratch);
        self.push(
            Topology::Quads,
            Brush::Glyphs(atlas.texture()),
            scratch.iter().flat_map(|q| glyph_vertices(q, color)),
        );
        advance
    }
}
