use crate::coords::{Circle, Line};
use crate::paint::Color;
use crate::scene::{Brush, DrawList, Topology, Vertex};

use super::circle::fan_vertices;

/// Lines shorter than this draw nothing.
pub const LINE_EPSILON: f32 = 1e-4;

/// `(offset, length)` of each dash along a line of length `total`.
///
/// Walks from 0 in `dash + gap` steps while the running distance is below
/// `total`; the last dash is cut short at the end of the line. Remainders
/// shorter than [`LINE_EPSILON`] are dropped.
pub fn dash_spans(total: f32, dash: f32, gap: f32) -> impl Iterator<Item = (f32, f32)> {
    let period = dash + gap;
    let valid = total.is_finite() && dash > 0.0 && dash.is_finite() && gap >= 0.0 && gap.is_finite();
    (0u32..)
        .map(move |i| i as f32 * period)
        .take_while(move |&dist| valid && total - dist >= LINE_EPSILON)
        .map(move |dist| (dist, dash.min(total - dist)))
}

/// Distances along a line of length `total` where dots are stamped.
///
/// Samples every `spacing` while below `total`, then one final sample at
/// `total`.
pub fn dot_stops(total: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let valid = total.is_finite() && spacing > 0.0 && spacing.is_finite();
    (0u32..)
        .map(move |i| i as f32 * spacing)
        .take_while(move |&dist| valid && total - dist >= LINE_EPSILON)
        .chain(valid.then_some(total))
}

/// Dot spacing for a dotted line; falls back to touching dots when
/// `dot_radius * 2 * gap_factor` is degenerate.
#[inline]
pub fn dot_spacing(dot_radius: f32, gap_factor: f32) -> f32 {
    let spacing = dot_radius * 2.0 * gap_factor;
    if spacing > LINE_EPSILON && spacing.is_finite() {
        spacing
    } else {
        dot_radius * 2.0
    }
}

impl DrawList {
    /// Records a one-pixel segment.
    pub fn push_line(&mut self, line: Line, color: Color) {
        if line.delta().normalized(LINE_EPSILON).is_none() {
            return;
        }
        self.push(
            Topology::Lines,
            Brush::Solid,
            [Vertex::solid(line.start, color), Vertex::solid(line.end, color)],
        );
    }

    /// Records a segment widened to `thickness` as a quad.
    pub fn push_thick_line(&mut self, line: Line, thickness: f32, color: Color) {
        if !(thickness > 0.0 && thickness.is_finite()) {
            return;
        }
        let Some(dir) = line.delta().normalized(LINE_EPSILON) else { return };
        let n = dir.perp() * (thickness * 0.5);

        self.push(
            Topology::Quads,
            Brush::Solid,
            [line.start + n, line.end + n, line.end - n, line.start - n].map(|p| Vertex::solid(p, color)),
        );
    }

    /// Records `dash`-long segments separated by `gap`.
    pub fn push_dashed_line(&mut self, line: Line, dash: f32, gap: f32, color: Color) {
        let Some(dir) = line.delta().normalized(LINE_EPSILON) else { return };
        let total = line.length();

        let verts = dash_spans(total, dash, gap).flat_map(|(dist, len)| {
            [
                Vertex::solid(line.point_at(dir, dist), color),
                Vertex::solid(line.point_at(dir, dist + len), color),
            ]
        });
        self.push(Topology::Lines, Brush::Solid, verts);
    }

    /// Records filled dots of `dot_radius` along the line. Neighbouring dot
    /// centers are `dot_radius * 2 * gap_factor` apart and the last dot sits on
    /// the end point.
    pub fn push_dotted_line(&mut self, line: Line, dot_radius: f32, gap_factor: f32, color: Color) {
        if !(dot_radius > 0.0 && dot_radius.is_finite()) {
            return;
        }
        let Some(dir) = line.delta().normalized(LINE_EPSILON) else { return };
        let total = line.length();
        let spacing = dot_spacing(dot_radius, gap_factor);

        for dist in dot_stops(total, spacing) {
            let center = line.point_at(dir, dist.min(total));
            self.push(Topology::TriangleFan, Brush::Solid, fan_vertices(Circle::new(center, dot_radius), color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn horizontal(len: f32) -> Line {
        Line::new(Vec2::new(0.0, 0.0), Vec2::new(len, 0.0))
    }

    // ── plain / thick ─────────────────────────────────────────────────────

    #[test]
    fn plain_line_is_two_vertices() {
        let mut list = DrawList::new();
        list.push_line(horizontal(10.0), Color::WHITE);
        assert_eq!(list.vertices().len(), 2);
        assert_eq!(list.primitives()[0].topology, Topology::Lines);
    }

    #[test]
    fn thick_line_offsets_along_perpendicular() {
        let mut list = DrawList::new();
        list.push_thick_line(horizontal(10.0), 4.0, Color::WHITE);
        let ys: Vec<_> = list.vertices().iter().map(|v| v.pos.y).collect();
        assert_eq!(ys, vec![2.0, 2.0, -2.0, -2.0]);
        assert_eq!(list.vertices()[1].pos.x, 10.0);
    }

    #[test]
    fn thick_line_needs_positive_thickness() {
        let mut list = DrawList::new();
        list.push_thick_line(horizontal(10.0), 0.0, Color::WHITE);
        list.push_thick_line(horizontal(10.0), -1.0, Color::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn zero_length_lines_draw_nothing_in_every_style() {
        let p = Vec2::new(3.0, 4.0);
        let line = Line::new(p, p + Vec2::new(LINE_EPSILON * 0.5, 0.0));
        let mut list = DrawList::new();
        list.push_line(line, Color::WHITE);
        list.push_thick_line(line, 3.0, Color::WHITE);
        list.push_dashed_line(line, 2.0, 2.0, Color::WHITE);
        list.push_dotted_line(line, 1.0, 2.0, Color::WHITE);
        assert!(list.vertices().is_empty());
    }

    // ── dashed ────────────────────────────────────────────────────────────

    #[test]
    fn exact_multiple_gives_whole_periods() {
        let spans: Vec<_> = dash_spans(100.0, 10.0, 10.0).collect();
        assert_eq!(spans.len(), 5);
        assert!(spans.iter().all(|&(_, len)| len == 10.0));
    }

    #[test]
    fn trailing_dash_is_cut_at_line_end() {
        let spans: Vec<_> = dash_spans(25.0, 10.0, 5.0).collect();
        assert_eq!(spans, vec![(0.0, 10.0), (15.0, 10.0)]);

        let spans: Vec<_> = dash_spans(33.0, 10.0, 5.0).collect();
        assert_eq!(spans.last(), Some(&(30.0, 3.0)));
    }

    #[test]
    fn remainder_adds_one_partial_dash() {
        let spans: Vec<_> = dash_spans(11.0, 3.0, 2.0).collect();
        assert_eq!(spans, vec![(0.0, 3.0), (5.0, 3.0), (10.0, 1.0)]);
        assert_eq!(dash_spans(10.0, 3.0, 2.0).count(), 2);
    }

    #[test]
    fn dashes_never_exceed_dash_length() {
        for total in [1.0, 7.5, 99.9, 250.0] {
            assert!(dash_spans(total, 6.0, 3.5).all(|(_, len)| len <= 6.0 && len > 0.0));
        }
    }

    #[test]
    fn invalid_dash_parameters_draw_nothing() {
        assert_eq!(dash_spans(50.0, 0.0, 5.0).count(), 0);
        assert_eq!(dash_spans(50.0, 5.0, -1.0).count(), 0);
        let mut list = DrawList::new();
        list.push_dashed_line(horizontal(50.0), -2.0, 1.0, Color::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn zero_gap_tiles_the_line() {
        let spans: Vec<_> = dash_spans(30.0, 10.0, 0.0).collect();
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn dashed_line_emits_two_vertices_per_dash() {
        let mut list = DrawList::new();
        list.push_dashed_line(horizontal(100.0), 10.0, 10.0, Color::WHITE);
        assert_eq!(list.len(), 1);
        assert_eq!(list.vertices().len(), 10);
        assert_eq!(list.vertices()[2].pos, Vec2::new(20.0, 0.0));
    }

    // ── dotted ────────────────────────────────────────────────────────────

    #[test]
    fn dots_end_on_the_end_point() {
        let stops: Vec<_> = dot_stops(10.0, 4.0).collect();
        assert_eq!(stops, vec![0.0, 4.0, 8.0, 10.0]);
    }

    #[test]
    fn degenerate_gap_factor_falls_back_to_touching_dots() {
        assert_eq!(dot_spacing(2.0, 0.0), 4.0);
        assert_eq!(dot_spacing(2.0, f32::NAN), 4.0);
        assert_eq!(dot_spacing(2.0, 1.5), 6.0);
    }

    #[test]
    fn dotted_line_stamps_filled_circles() {
        let mut list = DrawList::new();
        list.push_dotted_line(horizontal(10.0), 1.0, 2.0, Color::WHITE);
        // stops at 0, 4, 8 and 10
        assert_eq!(list.len(), 4);
        assert!(list.primitives().iter().all(|p| p.topology == Topology::TriangleFan));
        let last = list.primitives()[3];
        assert_eq!(list.vertices_of(&last)[0].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn dotted_line_needs_positive_radius() {
        let mut list = DrawList::new();
        list.push_dotted_line(horizontal(10.0), 0.0, 2.0, Color::WHITE);
        assert!(list.is_empty());
    }
}
