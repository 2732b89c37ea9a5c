use std::ops::Range;

use super::{Brush, DrawList, IndexKind, Primitive, Topology};

/// A run of indices drawn with one pipeline and one texture binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub kind: IndexKind,
    pub brush: Brush,
    /// Range into [`Batches::indices`].
    pub indices: Range<u32>,
}

/// Index buffer plus draw ranges lowered from a [`DrawList`].
///
/// Fans and loops become triangle and line lists so a backend needs only two
/// primitive topologies. Consecutive primitives sharing an index kind and a
/// brush merge into one batch; submission order is preserved.
#[derive(Debug, Default, Clone)]
pub struct Batches {
    pub indices: Vec<u32>,
    pub batches: Vec<Batch>,
}

impl Batches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds from `list`, reusing allocations.
    pub fn rebuild(&mut self, list: &DrawList) {
        self.indices.clear();
        self.batches.clear();

        for prim in list.primitives() {
            let start = self.indices.len() as u32;
            lower(prim, &mut self.indices);
            let end = self.indices.len() as u32;
            if end == start {
                continue;
            }

            let kind = prim.topology.index_kind();
            match self.batches.last_mut() {
                Some(last) if last.kind == kind && last.brush == prim.brush && last.indices.end == start => {
                    last.indices.end = end;
                }
                _ => self.batches.push(Batch {
                    kind,
                    brush: prim.brush,
                    indices: start..end,
                }),
            }
        }
    }

    pub fn from_list(list: &DrawList) -> Self {
        let mut out = Self::new();
        out.rebuild(list);
        out
    }
}

/// Appends list indices for one primitive. Incomplete trailing groups are
/// dropped.
fn lower(prim: &Primitive, out: &mut Vec<u32>) {
    let b = prim.first;
    let n = prim.count;

    match prim.topology {
        Topology::Quads => {
            for q in 0..n / 4 {
                let i = b + q * 4;
                out.extend_from_slice(&[i, i + 1, i + 2, i, i + 2, i + 3]);
            }
        }
        Topology::TriangleFan => {
            for k in 1..n.saturating_sub(1) {
                out.extend_from_slice(&[b, b + k, b + k + 1]);
            }
        }
        Topology::Lines => {
            for s in 0..n / 2 {
                out.extend_from_slice(&[b + s * 2, b + s * 2 + 1]);
            }
        }
        Topology::LineLoop => {
            if n < 2 {
                return;
            }
            for k in 0..n {
                out.extend_from_slice(&[b + k, b + (k + 1) % n]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TextureId;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Vertex;

    fn verts(n: usize) -> Vec<Vertex> {
        (0..n).map(|i| Vertex::solid(Vec2::new(i as f32, 0.0), Color::WHITE)).collect()
    }

    // ── lowering ──────────────────────────────────────────────────────────

    #[test]
    fn quad_becomes_two_triangles() {
        let mut list = DrawList::new();
        list.push(Topology::Quads, Brush::Solid, verts(4));
        let b = Batches::from_list(&list);
        assert_eq!(b.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(b.batches[0].kind, IndexKind::Triangles);
    }

    #[test]
    fn fan_pivots_on_first_vertex() {
        let mut list = DrawList::new();
        list.push(Topology::TriangleFan, Brush::Solid, verts(5));
        let b = Batches::from_list(&list);
        assert_eq!(b.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn loop_closes_back_to_start() {
        let mut list = DrawList::new();
        list.push(Topology::LineLoop, Brush::Solid, verts(3));
        let b = Batches::from_list(&list);
        assert_eq!(b.indices, vec![0, 1, 1, 2, 2, 0]);
        assert_eq!(b.batches[0].kind, IndexKind::Lines);
    }

    #[test]
    fn indices_are_offset_by_primitive_start() {
        let mut list = DrawList::new();
        list.push(Topology::Lines, Brush::Solid, verts(2));
        list.push(Topology::Lines, Brush::Solid, verts(2));
        let b = Batches::from_list(&list);
        assert_eq!(b.indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn degenerate_fan_emits_nothing() {
        let mut list = DrawList::new();
        list.push(Topology::TriangleFan, Brush::Solid, verts(2));
        let b = Batches::from_list(&list);
        assert!(b.indices.is_empty());
        assert!(b.batches.is_empty());
    }

    // ── merging ───────────────────────────────────────────────────────────

    #[test]
    fn same_kind_and_brush_merge() {
        let mut list = DrawList::new();
        list.push(Topology::Quads, Brush::Solid, verts(4));
        list.push(Topology::TriangleFan, Brush::Solid, verts(4));
        let b = Batches::from_list(&list);
        assert_eq!(b.batches.len(), 1);
        assert_eq!(b.batches[0].indices, 0..12);
    }

    #[test]
    fn brush_or_kind_change_splits_and_keeps_order() {
        let tex = TextureId(7);
        let mut list = DrawList::new();
        list.push(Topology::Quads, Brush::Solid, verts(4));
        list.push(Topology::Quads, Brush::Glyphs(tex), verts(4));
        list.push(Topology::Lines, Brush::Solid, verts(2));
        list.push(Topology::Quads, Brush::Solid, verts(4));
        let b = Batches::from_list(&list);

        let kinds: Vec<_> = b.batches.iter().map(|x| (x.kind, x.brush)).collect();
        assert_eq!(
            kinds,
            vec![
                (IndexKind::Triangles, Brush::Solid),
                (IndexKind::Triangles, Brush::Glyphs(tex)),
                (IndexKind::Lines, Brush::Solid),
                (IndexKind::Triangles, Brush::Solid),
            ]
        );
    }
}
