use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::backend::{Backend, BackendEvent, Frame, TextureId};
use crate::coords::{Projection, Viewport};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::error::EngineError;
use crate::input::platform::translate_window_event;
use crate::render::{PrimitiveRenderer, RenderCtx, RenderTarget};
use crate::texture::ImageData;

/// Pump iterations allowed for the platform to deliver `resumed`.
const STARTUP_PUMPS: usize = 64;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Initial size in logical pixels.
    pub initial_size: LogicalSize<f64>,
    pub vsync: bool,
    pub gpu: GpuInit,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "mogi".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            vsync: true,
            gpu: GpuInit::default(),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    renderer: PrimitiveRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// winit `ApplicationHandler` fed by [`WindowBackend::poll_events`].
struct Host {
    config: WindowConfig,
    entry: Option<WindowEntry>,
    window_id: Option<WindowId>,
    events: Vec<BackendEvent>,
    close_requested: bool,
    init_error: Option<anyhow::Error>,
}

impl Host {
    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let gpu_init = self.config.gpu.clone();

        let mut entry = WindowEntryTryBuilder {
            renderer: PrimitiveRenderer::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        let vsync = self.config.vsync;
        entry.with_gpu_mut(|gpu| gpu.set_vsync(vsync));

        self.window_id = Some(id);
        self.entry = Some(entry);
        Ok(())
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if self.entry.is_some() || self.init_error.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!(target: "mogi", "failed to create window: {e:#}");
            self.init_error = Some(e);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window_id != Some(window_id) {
            return;
        }
        let Some(entry) = self.entry.as_mut() else { return };

        match &event {
            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            _ => {}
        }

        if let Some(ev) = entry.with_window(|w| translate_window_event(w, &event)) {
            self.events.push(ev);
        }
    }
}

/// [`Backend`] backed by a winit window and a wgpu surface.
///
/// The event loop is pumped (not run) so the caller keeps control of the frame
/// loop. The window is dropped before the event loop.
pub struct WindowBackend {
    host: Host,
    event_loop: EventLoop<()>,
    next_texture: u64,
}

impl WindowBackend {
    /// Opens a `width` × `height` (logical px) window titled `title`.
    pub fn create(width: u32, height: u32, title: &str) -> Result<Self, EngineError> {
        Self::with_config(WindowConfig {
            title: title.to_string(),
            initial_size: LogicalSize::new(width as f64, height as f64),
            ..Default::default()
        })
    }

    /// Opens a window and initializes the GPU surface for it.
    pub fn with_config(config: WindowConfig) -> Result<Self, EngineError> {
        if !(config.initial_size.width > 0.0 && config.initial_size.height > 0.0) {
            return Err(EngineError::Initialization(format!(
                "invalid window size {}x{}",
                config.initial_size.width, config.initial_size.height
            )));
        }

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut backend = Self {
            host: Host {
                config,
                entry: None,
                window_id: None,
                events: Vec::new(),
                close_requested: false,
                init_error: None,
            },
            event_loop,
            next_texture: 1,
        };

        for _ in 0..STARTUP_PUMPS {
            if let PumpStatus::Exit(code) = backend.event_loop.pump_app_events(Some(Duration::ZERO), &mut backend.host) {
                return Err(EngineError::Initialization(format!("event loop exited during startup ({code})")));
            }
            if let Some(e) = backend.host.init_error.take() {
                return Err(e.into());
            }
            if backend.host.entry.is_some() {
                log::info!(target: "mogi", "window '{}' ready", backend.host.config.title);
                return Ok(backend);
            }
        }

        Err(EngineError::Initialization("platform never resumed the application".to_string()))
    }

    /// The underlying winit window.
    pub fn window(&self) -> Option<&Window> {
        self.host.entry.as_ref().map(|e| e.borrow_window())
    }

    fn entry_mut(&mut self) -> Result<&mut WindowEntry, EngineError> {
        self.host
            .entry
            .as_mut()
            .ok_or_else(|| EngineError::Initialization("window is not open".to_string()))
    }
}

impl Backend for WindowBackend {
    fn poll_events(&mut self, out: &mut Vec<BackendEvent>) {
        if let PumpStatus::Exit(_) = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.host) {
            self.host.close_requested = true;
        }
        out.append(&mut self.host.events);
    }

    fn should_close(&self) -> bool {
        self.host.close_requested
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.host.config.vsync = enabled;
        if let Some(entry) = self.host.entry.as_mut() {
            entry.with_gpu_mut(|gpu| gpu.set_vsync(enabled));
        }
    }

    fn drawable_size(&self) -> Viewport {
        match self.window() {
            Some(w) => {
                let logical = w.inner_size().to_logical::<f64>(w.scale_factor());
                Viewport::new(logical.width as f32, logical.height as f32)
            }
            None => Viewport::default(),
        }
    }

    fn create_texture(&mut self, image: &ImageData) -> Result<TextureId, EngineError> {
        let id = TextureId(self.next_texture);
        let size = self.drawable_size();
        let entry = self.entry_mut()?;

        entry.with_mut(|fields| {
            let (texture, view) = fields.gpu.create_texture("mogi texture", image);
            let projection = Projection::top_left(size.width.max(1.0), size.height.max(1.0));
            let ctx = RenderCtx::from_gpu(fields.gpu, &projection);
            fields.renderer.insert_texture(&ctx, id, texture, view);
        });

        self.next_texture += 1;
        log::debug!(target: "mogi", "texture {id:?} uploaded ({}x{} {:?})", image.width, image.height, image.format);
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if let Some(entry) = self.host.entry.as_mut() {
            if !entry.with_renderer_mut(|r| r.remove_texture(id)) {
                log::debug!(target: "mogi", "destroy of unknown texture {id:?} ignored");
            }
        }
    }

    fn present(&mut self, frame: Frame<'_>) -> Result<(), EngineError> {
        let entry = self.entry_mut()?;

        entry.with_mut(|fields| {
            let mut gpu_frame = match fields.gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    return match fields.gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Fatal => {
                            Err(EngineError::Initialization("surface lost irrecoverably".to_string()))
                        }
                        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
                    };
                }
            };

            let ctx = RenderCtx::from_gpu(fields.gpu, frame.projection);

            // RenderTarget borrows the encoder; dropped before submit() takes the frame.
            {
                let mut target = RenderTarget::from_frame(&mut gpu_frame);
                fields.renderer.render(&ctx, &mut target, frame.clear, frame.draw_list);
            }

            fields.window.pre_present_notify();
            fields.gpu.submit(gpu_frame);
            Ok(())
        })
    }
}
