use winit::dpi::PhysicalSize;

use super::{vsync_present_mode, GpuInit};

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// A window surface and the configuration it was last given.
///
/// Zero-sized drawables are remembered but never configured; wgpu rejects them.
pub(crate) struct Swapchain<'w> {
    surface: wgpu::Surface<'w>,
    caps: wgpu::SurfaceCapabilities,
    config: wgpu::SurfaceConfiguration,
    /// Present mode used while vsync is on.
    vsync_mode: wgpu::PresentMode,
    size: PhysicalSize<u32>,
}

impl<'w> Swapchain<'w> {
    /// Picks format, alpha and present mode for `adapter` and configures.
    pub(crate) fn configure(
        surface: wgpu::Surface<'w>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        size: PhysicalSize<u32>,
        init: &GpuInit,
    ) -> Option<Self> {
        let caps = surface.get_capabilities(adapter);
        let format = choose_surface_format(&caps, init.prefer_srgb)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: choose_present_mode(&caps, init.present_mode),
            alpha_mode: choose_alpha_mode(&caps, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(device, &config);

        Some(Self {
            surface,
            caps,
            config,
            vsync_mode: init.present_mode,
            size,
        })
    }

    #[inline]
    pub(crate) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    fn drawable(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    pub(crate) fn resize(&mut self, device: &wgpu::Device, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !self.drawable() {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(device, &self.config);
    }

    /// Switches between the configured vsync mode and unsynchronized present.
    pub(crate) fn set_vsync(&mut self, device: &wgpu::Device, vsync: bool) {
        let mode = choose_present_mode(&self.caps, vsync_present_mode(vsync, self.vsync_mode));
        if mode == self.config.present_mode {
            return;
        }
        self.config.present_mode = mode;
        if self.drawable() {
            self.surface.configure(device, &self.config);
        }
        log::debug!(target: "mogi", "present mode set to {mode:?}");
    }

    pub(crate) fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Reconfigures after a lost or outdated surface and classifies `err`.
    pub(crate) fn recover(&self, device: &wgpu::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                if self.drawable() {
                    self.surface.configure(device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

fn choose_surface_format(caps: &wgpu::SurfaceCapabilities, prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    const SRGB: [wgpu::TextureFormat; 2] = [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb];

    let srgb = prefer_srgb
        .then(|| SRGB.into_iter().find(|f| caps.formats.contains(f)))
        .flatten();
    srgb.or_else(|| caps.formats.first().copied())
}

fn choose_alpha_mode(caps: &wgpu::SurfaceCapabilities, requested: Option<wgpu::CompositeAlphaMode>) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Picks `requested` if the surface supports it, otherwise `Fifo`.
fn choose_present_mode(caps: &wgpu::SurfaceCapabilities, requested: wgpu::PresentMode) -> wgpu::PresentMode {
    match requested {
        // Auto modes are resolved by wgpu itself.
        wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync => requested,
        mode if caps.present_modes.contains(&mode) => mode,
        _ => wgpu::PresentMode::Fifo,
    }
}
