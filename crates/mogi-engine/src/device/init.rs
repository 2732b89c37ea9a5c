/// Surface and device options for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Use an sRGB swapchain format if the surface offers one. Vertex colors
    /// are linear, so the target does the encoding.
    pub prefer_srgb: bool,
    /// Mode used while vsync is on; vsync off always asks for `AutoNoVsync`.
    pub present_mode: wgpu::PresentMode,
    /// Ignored when the surface does not list it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Present mode requested for a vsync setting.
#[inline]
pub fn vsync_present_mode(vsync: bool, preferred: wgpu::PresentMode) -> wgpu::PresentMode {
    if vsync { preferred } else { wgpu::PresentMode::AutoNoVsync }
}
