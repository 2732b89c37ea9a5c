//! Shared GPU types used by the primitive renderer.

use bytemuck::{Pod, Zeroable};

use crate::coords::Projection;
use crate::paint::Color;
use crate::scene::{Brush, Vertex};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── projection uniform ────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ProjectionUniform {
    pub cols: [[f32; 4]; 4],
}

impl From<&Projection> for ProjectionUniform {
    fn from(p: &Projection) -> Self {
        Self { cols: p.cols }
    }
}

pub(super) const PROJECTION_UBO_SIZE: std::num::NonZeroU64 =
    match std::num::NonZeroU64::new(std::mem::size_of::<ProjectionUniform>() as u64) {
        Some(n) => n,
        None => panic!("ProjectionUniform is zero-sized"),
    };

// ── vertex ────────────────────────────────────────────────────────────────

/// Shader mode selecting how the bound texture contributes.
pub(super) const MODE_SOLID: u32 = 0;
pub(super) const MODE_ALPHA_MASK: u32 = 1;
pub(super) const MODE_IMAGE: u32 = 2;

#[inline]
pub(super) fn brush_mode(brush: Brush) -> u32 {
    match brush {
        Brush::Solid => MODE_SOLID,
        Brush::Glyphs(_) => MODE_ALPHA_MASK,
        Brush::Image(_) => MODE_IMAGE,
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct GpuVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
    pub mode: u32,
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4, // color
        3 => Uint32     // mode
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    pub(super) fn new(v: &Vertex, mode: u32) -> Self {
        Self {
            pos: [v.pos.x, v.pos.y],
            uv: [v.uv.x, v.uv.y],
            color: v.color.to_array(),
            mode,
        }
    }
}

#[inline]
pub(super) fn clear_color(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TextureId;
    use crate::coords::Vec2;

    #[test]
    fn vertex_stride_is_word_aligned() {
        assert_eq!(std::mem::size_of::<GpuVertex>() % 4, 0);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 36);
    }

    #[test]
    fn brush_selects_shader_mode() {
        assert_eq!(brush_mode(Brush::Solid), MODE_SOLID);
        assert_eq!(brush_mode(Brush::Glyphs(TextureId(1))), MODE_ALPHA_MASK);
        assert_eq!(brush_mode(Brush::Image(TextureId(1))), MODE_IMAGE);
    }

    #[test]
    fn vertex_conversion_keeps_premultiplied_color() {
        let v = Vertex::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25), Color::from_premul(0.1, 0.2, 0.3, 0.5));
        let g = GpuVertex::new(&v, MODE_IMAGE);
        assert_eq!(g.pos, [1.0, 2.0]);
        assert_eq!(g.uv, [0.5, 0.25]);
        assert_eq!(g.color, [0.1, 0.2, 0.3, 0.5]);
        assert_eq!(g.mode, MODE_IMAGE);
    }
}
