use super::{Brush, Primitive, Topology, Vertex};

/// Per-frame tessellated geometry in submission order.
///
/// Vertices of every primitive share one buffer; primitives reference
/// contiguous ranges of it. `clear()` keeps allocated capacity so steady-state
/// frames do not allocate.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    vertices: Vec<Vertex>,
    primitives: Vec<Primitive>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded geometry. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.primitives.clear();
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// All vertices, in submission order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices belonging to `prim`.
    #[inline]
    pub fn vertices_of(&self, prim: &Primitive) -> &[Vertex] {
        let start = prim.first as usize;
        &self.vertices[start..start + prim.count as usize]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Appends a primitive. Nothing is recorded if `vertices` is empty.
    pub fn push(&mut self, topology: Topology, brush: Brush, vertices: impl IntoIterator<Item = Vertex>) {
        let first = self.vertices.len();
        self.vertices.extend(vertices);
        let count = self.vertices.len() - first;
        if count == 0 {
            return;
        }
        self.primitives.push(Primitive {
            topology,
            brush,
            first: first as u32,
            count: count as u32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::solid(Vec2::new(x, y), Color::WHITE)
    }

    #[test]
    fn empty_push_records_nothing() {
        let mut list = DrawList::new();
        list.push(Topology::Lines, Brush::Solid, std::iter::empty());
        assert!(list.is_empty());
    }

    #[test]
    fn primitives_reference_their_own_ranges() {
        let mut list = DrawList::new();
        list.push(Topology::Lines, Brush::Solid, [v(0.0, 0.0), v(1.0, 1.0)]);
        list.push(Topology::LineLoop, Brush::Solid, [v(2.0, 2.0), v(3.0, 3.0), v(4.0, 4.0)]);

        assert_eq!(list.len(), 2);
        let second = list.primitives()[1];
        assert_eq!((second.first, second.count), (2, 3));
        assert_eq!(list.vertices_of(&second)[0].pos, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut list = DrawList::new();
        list.push(Topology::Lines, Brush::Solid, [v(0.0, 0.0), v(1.0, 1.0)]);
        let cap = list.vertices.capacity();
        list.clear();
        assert!(list.is_empty());
        assert!(list.vertices().is_empty());
        assert_eq!(list.vertices.capacity(), cap);
    }
}
