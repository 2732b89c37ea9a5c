use crate::backend::TextureId;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};

const FULL_UV: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

impl DrawList {
    /// Records `texture` stretched over `dest`, multiplied by `tint`.
    pub fn push_texture(&mut self, texture: TextureId, dest: Rect, tint: Color) {
        if dest.is_empty() || !dest.is_finite() {
            return;
        }
        let corners = dest.corners();
        let verts = std::array::from_fn::<_, 4, _>(|i| Vertex::new(corners[i], FULL_UV[i], tint));
        self.push(Topology::Quads, Brush::Image(texture), verts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_quad_spans_full_uv_range() {
        let mut list = DrawList::new();
        list.push_texture(TextureId(9), Rect::new(0.0, 0.0, 64.0, 32.0), Color::WHITE);

        let prim = list.primitives()[0];
        assert_eq!(prim.brush, Brush::Image(TextureId(9)));
        let uv: Vec<_> = list.vertices().iter().map(|v| v.uv).collect();
        assert_eq!(uv, FULL_UV.to_vec());
        assert_eq!(list.vertices()[2].pos, Vec2::new(64.0, 32.0));
    }

    #[test]
    fn empty_destination_draws_nothing() {
        let mut list = DrawList::new();
        list.push_texture(TextureId(9), Rect::new(0.0, 0.0, 0.0, 32.0), Color::WHITE);
        assert!(list.is_empty());
    }
}
