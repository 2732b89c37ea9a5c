use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};

/// Corner vertices in TL, TR, BR, BL order, or `None` for an empty rect.
#[inline]
pub(crate) fn rect_vertices(rect: Rect, color: Color) -> Option<[Vertex; 4]> {
    if rect.is_empty() || !rect.is_finite() {
        return None;
    }
    Some(rect.corners().map(|p| Vertex::solid(p, color)))
}

impl DrawList {
    /// Records a filled rectangle as one quad.
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        if let Some(v) = rect_vertices(rect, color) {
            self.push(Topology::Quads, Brush::Solid, v);
        }
    }

    /// Records the rectangle's edges as a closed loop.
    pub fn push_rect_outline(&mut self, rect: Rect, color: Color) {
        if let Some(v) = rect_vertices(rect, color) {
            self.push(Topology::LineLoop, Brush::Solid, v);
        }
    }

    /// Fill pass, then outline pass.
    pub fn push_rect_with_outline(&mut self, rect: Rect, fill: Color, outline: Color) {
        self.push_rect(rect, fill);
        self.push_rect_outline(rect, outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn fill_is_one_quad_in_clockwise_screen_order() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::RED);

        let prim = list.primitives()[0];
        assert_eq!(prim.topology, Topology::Quads);
        let pos: Vec<_> = list.vertices_of(&prim).iter().map(|v| v.pos).collect();
        assert_eq!(
            pos,
            vec![
                Vec2::new(10.0, 20.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(40.0, 60.0),
                Vec2::new(10.0, 60.0),
            ]
        );
    }

    #[test]
    fn outline_is_a_four_vertex_loop() {
        let mut list = DrawList::new();
        list.push_rect_outline(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK);
        let prim = list.primitives()[0];
        assert_eq!((prim.topology, prim.count), (Topology::LineLoop, 4));
    }

    #[test]
    fn with_outline_draws_fill_first() {
        let mut list = DrawList::new();
        list.push_rect_with_outline(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE, Color::BLACK);
        let topo: Vec<_> = list.primitives().iter().map(|p| p.topology).collect();
        assert_eq!(topo, vec![Topology::Quads, Topology::LineLoop]);
        assert_eq!(list.vertices()[0].color, Color::WHITE);
        assert_eq!(list.vertices()[4].color, Color::BLACK);
    }

    #[test]
    fn empty_rects_draw_nothing() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::RED);
        list.push_rect_outline(Rect::new(0.0, 0.0, 10.0, -1.0), Color::RED);
        list.push_rect(Rect::new(0.0, 0.0, f32::NAN, 10.0), Color::RED);
        assert!(list.is_empty());
    }
}
