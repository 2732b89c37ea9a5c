use crate::coords::Projection;
use crate::device::{Gpu, GpuFrame};

/// Device handles a renderer needs for one frame or upload.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical pixels to clip space.
    pub projection: &'a Projection,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn from_gpu(gpu: &'a Gpu<'_>, projection: &'a Projection) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            projection,
        }
    }
}

/// Encoder and color view of an acquired frame.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn from_frame(frame: &'a mut GpuFrame) -> Self {
        Self {
            encoder: &mut frame.encoder,
            color_view: &frame.view,
        }
    }
}
