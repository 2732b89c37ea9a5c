use crate::backend::TextureId;
use crate::coords::Vec2;
use crate::paint::Color;

/// A tessellated vertex: logical-pixel position, texture coordinate and
/// premultiplied color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub uv: Vec2,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec2, uv: Vec2, color: Color) -> Self {
        Self { pos, uv, color }
    }

    /// Vertex with no texture coordinate.
    #[inline]
    pub const fn solid(pos: Vec2, color: Color) -> Self {
        Self { pos, uv: Vec2::zero(), color }
    }
}

/// How a primitive's vertices connect.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Independent quads, four vertices each (TL, TR, BR, BL).
    Quads,
    /// Fan around the first vertex.
    TriangleFan,
    /// Independent segments, two vertices each.
    Lines,
    /// Closed polyline.
    LineLoop,
}

impl Topology {
    /// Whether the topology fills area or strokes lines.
    #[inline]
    pub fn index_kind(self) -> IndexKind {
        match self {
            Self::Quads | Self::TriangleFan => IndexKind::Triangles,
            Self::Lines | Self::LineLoop => IndexKind::Lines,
        }
    }
}

/// Index buffer flavor a topology lowers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IndexKind {
    Triangles,
    Lines,
}

/// How a primitive is shaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Brush {
    /// Vertex color only.
    Solid,
    /// Vertex color modulated by an alpha-mask texture (glyph atlas).
    Glyphs(TextureId),
    /// Vertex color multiplied with an RGBA texture.
    Image(TextureId),
}

impl Brush {
    #[inline]
    pub fn texture(self) -> Option<TextureId> {
        match self {
            Self::Solid => None,
            Self::Glyphs(id) | Self::Image(id) => Some(id),
        }
    }
}

/// A contiguous run of vertices in a [`super::DrawList`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Primitive {
    pub topology: Topology,
    pub brush: Brush,
    pub first: u32,
    pub count: u32,
}
