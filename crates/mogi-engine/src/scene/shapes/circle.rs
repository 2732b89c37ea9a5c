use std::f32::consts::TAU;

use crate::coords::{Circle, Vec2};
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};

pub const MIN_CIRCLE_SEGMENTS: u32 = 10;
pub const MAX_CIRCLE_SEGMENTS: u32 = 60;

/// Segments used to approximate a circle of `radius` logical pixels.
#[inline]
pub fn segment_count(radius: f32) -> u32 {
    let n = (radius * 1.5).round();
    if n.is_nan() {
        return MIN_CIRCLE_SEGMENTS;
    }
    (n.clamp(MIN_CIRCLE_SEGMENTS as f32, MAX_CIRCLE_SEGMENTS as f32)) as u32
}

#[inline]
fn is_drawable(circle: Circle) -> bool {
    circle.radius > 0.0 && circle.radius.is_finite() && circle.center.is_finite()
}

/// `count` points evenly spaced over a full turn starting at angle 0.
/// `count == segments + 1` repeats the first point to close a fan.
fn ring(circle: Circle, segments: u32, count: u32) -> impl Iterator<Item = Vec2> {
    let step = TAU / segments as f32;
    (0..count).map(move |i| circle.center + Vec2::from_angle(i as f32 * step) * circle.radius)
}

/// Filled disc as a fan: center plus `segments + 1` rim samples.
pub(crate) fn fan_vertices(circle: Circle, color: Color) -> impl Iterator<Item = Vertex> {
    let segments = segment_count(circle.radius);
    std::iter::once(circle.center)
        .chain(ring(circle, segments, segments + 1))
        .map(move |p| Vertex::solid(p, color))
}

impl DrawList {
    /// Records a filled circle.
    pub fn push_circle(&mut self, circle: Circle, color: Color) {
        if !is_drawable(circle) {
            return;
        }
        self.push(Topology::TriangleFan, Brush::Solid, fan_vertices(circle, color));
    }

    /// Records the circle's rim as a closed loop.
    pub fn push_circle_outline(&mut self, circle: Circle, color: Color) {
        if !is_drawable(circle) {
            return;
        }
        let segments = segment_count(circle.radius);
        self.push(
            Topology::LineLoop,
            Brush::Solid,
            ring(circle, segments, segments).map(|p| Vertex::solid(p, color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── segment_count ─────────────────────────────────────────────────────

    #[test]
    fn segment_count_clamps_both_ends() {
        assert_eq!(segment_count(1.0), 10);
        assert_eq!(segment_count(20.0), 30);
        assert_eq!(segment_count(500.0), 60);
    }

    #[test]
    fn segment_count_is_monotonic() {
        let mut prev = 0;
        for i in 1..2000 {
            let n = segment_count(i as f32 * 0.1);
            assert!((MIN_CIRCLE_SEGMENTS..=MAX_CIRCLE_SEGMENTS).contains(&n));
            assert!(n >= prev);
            prev = n;
        }
    }

    // ── tessellation ──────────────────────────────────────────────────────

    #[test]
    fn fill_is_center_plus_closed_rim() {
        let mut list = DrawList::new();
        let c = Circle::new(Vec2::new(50.0, 50.0), 20.0);
        list.push_circle(c, Color::BLUE);

        let prim = list.primitives()[0];
        assert_eq!(prim.topology, Topology::TriangleFan);
        assert_eq!(prim.count, 1 + 30 + 1);

        let v = list.vertices_of(&prim);
        assert_eq!(v[0].pos, c.center);
        let first = v[1].pos;
        let last = v[v.len() - 1].pos;
        assert!((first - last).length() < 1e-3);
        for vert in &v[1..] {
            assert!(((vert.pos - c.center).length() - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn outline_has_no_center_vertex() {
        let mut list = DrawList::new();
        list.push_circle_outline(Circle::new(Vec2::zero(), 20.0), Color::BLUE);
        let prim = list.primitives()[0];
        assert_eq!((prim.topology, prim.count), (Topology::LineLoop, 30));
    }

    #[test]
    fn degenerate_radius_draws_nothing() {
        let mut list = DrawList::new();
        for r in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            list.push_circle(Circle::new(Vec2::zero(), r), Color::RED);
            list.push_circle_outline(Circle::new(Vec2::zero(), r), Color::RED);
        }
        assert!(list.is_empty());
    }
}
