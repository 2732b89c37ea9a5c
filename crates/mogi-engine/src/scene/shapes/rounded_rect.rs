use std::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};

use super::circle::segment_count;
use super::rect::rect_vertices;

/// Radii below this draw as plain quads.
pub const RADIUS_EPSILON: f32 = 1e-3;

/// Border-box rounded rectangle: `rect` is the outer edge of the border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRectSpec {
    pub rect: Rect,
    /// Border thickness per axis.
    pub border: Vec2,
    /// Outer corner radius.
    pub radius: f32,
    pub fill: Color,
    pub border_color: Color,
}

/// Derived geometry of a [`RoundedRectSpec`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderBoxLayout {
    pub outer: Rect,
    /// Outer radius clamped to half the smaller side.
    pub outer_radius: f32,
    /// Fill region, or `None` when the inset collapses.
    pub inner: Option<Rect>,
    pub inner_radius: f32,
    /// Whether the outer shape is drawn in the border color.
    pub has_border: bool,
}

impl BorderBoxLayout {
    pub fn compute(rect: Rect, border: Vec2, radius: f32) -> Self {
        let outer_radius = clamp_radius(rect, radius);

        if border.x <= 0.0 || border.y <= 0.0 {
            return Self {
                outer: rect,
                outer_radius,
                inner: Some(rect),
                inner_radius: outer_radius,
                has_border: false,
            };
        }

        let inner = rect.inset(border);
        let inner_radius = (outer_radius - border.x.max(border.y)).max(0.0);
        Self {
            outer: rect,
            outer_radius,
            inner: (!inner.is_empty()).then_some(inner),
            inner_radius,
            has_border: true,
        }
    }
}

#[inline]
fn clamp_radius(rect: Rect, radius: f32) -> f32 {
    let max = (rect.width().min(rect.height()) * 0.5).max(0.0);
    if radius.is_finite() { radius.clamp(0.0, max) } else { 0.0 }
}

/// Fan vertices for a rounded rect: center, then four corner arcs clockwise
/// on screen from the top-left, then the first rim point again.
fn rounded_fan(rect: Rect, radius: f32, color: Color) -> Vec<Vertex> {
    let per_corner = (segment_count(radius) / 4).max(2);
    let [tl, tr, br, bl] = rect.corners();
    let r = radius;

    // (arc center, start angle) with +Y down; each arc spans a quarter turn.
    let arcs = [
        (tl + Vec2::new(r, r), PI),
        (tr + Vec2::new(-r, r), 1.5 * PI),
        (br + Vec2::new(-r, -r), 0.0),
        (bl + Vec2::new(r, -r), FRAC_PI_2),
    ];

    let mut out = Vec::with_capacity(2 + 4 * (per_corner as usize + 1));
    out.push(Vertex::solid(rect.center(), color));
    for (center, start) in arcs {
        for k in 0..=per_corner {
            let a = start + FRAC_PI_2 * k as f32 / per_corner as f32;
            out.push(Vertex::solid(center + Vec2::from_angle(a) * r, color));
        }
    }
    let first_rim = out[1];
    out.push(first_rim);
    out
}

impl DrawList {
    /// Records a rounded rectangle with a single color.
    pub fn push_rounded_rect_fill(&mut self, rect: Rect, radius: f32, color: Color) {
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        let radius = clamp_radius(rect, radius);
        if radius < RADIUS_EPSILON {
            if let Some(v) = rect_vertices(rect, color) {
                self.push(Topology::Quads, Brush::Solid, v);
            }
            return;
        }
        self.push(Topology::TriangleFan, Brush::Solid, rounded_fan(rect, radius, color));
    }

    /// Records a border-box rounded rectangle: border shape, then fill on top.
    pub fn push_rounded_rect(&mut self, spec: &RoundedRectSpec) {
        if spec.rect.is_empty() || !spec.rect.is_finite() {
            return;
        }
        let layout = BorderBoxLayout::compute(spec.rect, spec.border, spec.radius);

        if layout.has_border {
            self.push_rounded_rect_fill(layout.outer, layout.outer_radius, spec.border_color);
        }
        if let Some(inner) = layout.inner {
            self.push_rounded_rect_fill(inner, layout.inner_radius, spec.fill);
        }
    }
}
