use std::path::Path;

use log::Level;

use crate::backend::{Backend, BackendEvent, Frame};
use crate::coords::{Circle, Line, Projection, Rect, Vec2, Viewport, ViewportSync};
use crate::error::EngineError;
use crate::input::{InputFrame, InputState, MouseButton};
use crate::logging::{DiagnosticSink, LogSink};
use crate::paint::Color;
use crate::scene::shapes::RoundedRectSpec;
use crate::scene::DrawList;
use crate::text::{self, AtlasOptions, FontAtlas, GlyphQuad};
use crate::texture::{ImageData, Texture};
use crate::time::{FrameStats, FrameTimer};

use super::app::{App, AppControl};

/// Owning wrapper around a [`Backend`]; every drawing entry point lives here.
///
/// Draw calls record into a per-frame [`DrawList`] in logical pixels (top-left
/// origin, +Y down). [`present`] hands that list and the current projection to
/// the backend and starts the next frame empty.
///
/// [`present`]: RenderContext::present
pub struct RenderContext<B: Backend> {
    backend: B,
    viewport: ViewportSync,
    vsync: bool,

    timer: FrameTimer,
    stats: FrameStats,

    input: InputState,
    input_frame: InputFrame,

    draw_list: DrawList,
    clear_color: Color,

    diagnostics: Box<dyn DiagnosticSink>,
    atlas_options: AtlasOptions,

    events: Vec<BackendEvent>,
    glyphs: Vec<GlyphQuad>,
}

impl<B: Backend> RenderContext<B> {
    /// Wraps `backend`, reading its drawable size and enabling vsync.
    pub fn new(mut backend: B) -> Self {
        let size = backend.drawable_size();
        backend.set_vsync(true);
        log::info!(target: "mogi", "render context ready: {}x{}", size.width, size.height);

        Self {
            backend,
            viewport: ViewportSync::new(size),
            vsync: true,
            timer: FrameTimer::new(),
            stats: FrameStats::new(),
            input: InputState::default(),
            input_frame: InputFrame::default(),
            draw_list: DrawList::new(),
            clear_color: Color::BLACK,
            diagnostics: Box::new(LogSink),
            atlas_options: AtlasOptions::default(),
            events: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    /// Tears the context down and releases the backend.
    ///
    /// Fonts and textures still alive must be destroyed first; their backend
    /// resources go away with the backend either way.
    pub fn destroy(self) {
        log::info!(target: "mogi", "render context destroyed after {} frames", self.stats.total_frames());
        drop(self.backend);
    }

    /// Replaces the diagnostics collaborator.
    pub fn set_diagnostics(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.diagnostics = sink;
    }

    /// Atlas size and padding used by later font loads.
    pub fn set_atlas_options(&mut self, options: AtlasOptions) {
        self.atlas_options = options;
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn report(&mut self, level: Level, message: &str) {
        self.diagnostics.record(level, message);
    }

    // ── events ────────────────────────────────────────────────────────────

    /// Drains host events: resizes update the projection, pointer events update
    /// the input state. Per-frame button transitions restart here.
    pub fn poll_events(&mut self) {
        self.input_frame.clear();

        let mut events = std::mem::take(&mut self.events);
        self.backend.poll_events(&mut events);

        for ev in &events {
            if let BackendEvent::Resized { width, height } = *ev {
                if !Viewport::new(width, height).is_valid() {
                    self.report(Level::Debug, &format!("ignored resize to {width}x{height}"));
                } else if self.viewport.resize(width, height) {
                    log::debug!(target: "mogi", "viewport resized to {width}x{height}");
                }
            }
            self.input.apply_event(&mut self.input_frame, ev);
        }

        events.clear();
        self.events = events;
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    // ── presentation ──────────────────────────────────────────────────────

    /// Sets the clear color and discards everything drawn so far this frame.
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.draw_list.clear();
    }

    /// Presents the recorded frame. The draw list is emptied even on failure.
    pub fn present(&mut self) -> Result<(), EngineError> {
        let frame = Frame {
            clear: self.clear_color,
            viewport: self.viewport.viewport(),
            projection: self.viewport.projection(),
            draw_list: &self.draw_list,
        };
        let result = self.backend.present(frame);
        self.draw_list.clear();

        if let Err(e) = &result {
            self.report(Level::Error, &format!("present failed: {e}"));
        }
        result
    }

    /// Primitives recorded since the last `clear` or `present`.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    // ── viewport ──────────────────────────────────────────────────────────

    /// Current canvas size in logical pixels.
    #[inline]
    pub fn window_size(&self) -> Viewport {
        self.viewport.viewport()
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        self.viewport.projection()
    }

    // ── timing ────────────────────────────────────────────────────────────

    /// Seconds since the previous call; `0.0` on the first call.
    pub fn delta_time(&mut self) -> f32 {
        let dt = self.timer.tick().dt;
        self.stats.record(dt);
        dt
    }

    #[inline]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn set_vsync(&mut self, enabled: bool) {
        if self.vsync == enabled {
            return;
        }
        self.vsync = enabled;
        self.backend.set_vsync(enabled);
        log::debug!(target: "mogi", "vsync {}", if enabled { "on" } else { "off" });
    }

    #[inline]
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    /// Reads a TrueType/OpenType file and builds an atlas at `pixel_height`.
    pub fn load_font(&mut self, path: impl AsRef<Path>, pixel_height: f32) -> Result<FontAtlas, EngineError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                let err = EngineError::resource(format!("{}: {e}", path.display()));
                self.report(Level::Error, &err.to_string());
                return Err(err);
            }
        };
        self.load_font_from_bytes(bytes, pixel_height).map_err(|e| match e {
            EngineError::ResourceLoad(msg) => EngineError::ResourceLoad(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Builds an atlas from font file contents. The atlas keeps `bytes`.
    pub fn load_font_from_bytes(&mut self, bytes: Vec<u8>, pixel_height: f32) -> Result<FontAtlas, EngineError> {
        match FontAtlas::build(&mut self.backend, bytes, pixel_height, &self.atlas_options) {
            Ok(atlas) => Ok(atlas),
            Err(e) => {
                self.report(Level::Error, &format!("font load failed: {e}"));
                Err(e)
            }
        }
    }

    /// Releases the atlas texture and font bytes.
    pub fn destroy_font(&mut self, atlas: FontAtlas) {
        atlas.release(&mut self.backend);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Draws `text` with its line box's top-left at `pos`. Returns the advance.
    pub fn draw_text(&mut self, atlas: &FontAtlas, text: &str, pos: Vec2, color: Color) -> f32 {
        self.draw_list.push_text(atlas, text, pos, color, &mut self.glyphs)
    }

    /// Width `draw_text` would advance for `text`.
    pub fn measure_text(&self, atlas: &FontAtlas, text: &str) -> f32 {
        text::measure(atlas, text)
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Runs a tessellator and reports when it produced nothing.
    fn record(&mut self, what: &str, push: impl FnOnce(&mut DrawList)) {
        let before = self.draw_list.len();
        push(&mut self.draw_list);
        if self.draw_list.len() == before {
            self.report(Level::Trace, &format!("degenerate {what} skipped"));
        }
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.record("rect", |l| l.push_rect(rect, color));
    }

    pub fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.record("rect outline", |l| l.push_rect_outline(rect, color));
    }

    pub fn draw_rect_with_outline(&mut self, rect: Rect, fill: Color, outline: Color) {
        self.record("rect", |l| l.push_rect_with_outline(rect, fill, outline));
    }

    pub fn draw_circle(&mut self, circle: Circle, color: Color) {
        self.record("circle", |l| l.push_circle(circle, color));
    }

    pub fn draw_circle_outline(&mut self, circle: Circle, color: Color) {
        self.record("circle outline", |l| l.push_circle_outline(circle, color));
    }

    pub fn draw_line(&mut self, line: Line, color: Color) {
        self.record("line", |l| l.push_line(line, color));
    }

    pub fn draw_thick_line(&mut self, line: Line, thickness: f32, color: Color) {
        self.record("thick line", |l| l.push_thick_line(line, thickness, color));
    }

    pub fn draw_dashed_line(&mut self, line: Line, dash: f32, gap: f32, color: Color) {
        self.record("dashed line", |l| l.push_dashed_line(line, dash, gap, color));
    }

    pub fn draw_dotted_line(&mut self, line: Line, dot_radius: f32, gap_factor: f32, color: Color) {
        self.record("dotted line", |l| l.push_dotted_line(line, dot_radius, gap_factor, color));
    }

    /// Draws a border-box rounded rectangle: border as the outer shape, fill
    /// inset by the border thickness.
    pub fn draw_rounded_rect(&mut self, spec: &RoundedRectSpec) {
        self.record("rounded rect", |l| l.push_rounded_rect(spec));
    }

    // ── textures ──────────────────────────────────────────────────────────

    /// Decodes an image file (png, jpeg, bmp, gif, ico, tiff, webp) and uploads it.
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<Texture, EngineError> {
        let image = ImageData::from_path(path.as_ref());
        self.upload_image(image)
    }

    /// Uploads raw pixels with 1 to 4 channels per pixel.
    pub fn load_texture_from_memory(&mut self, bytes: &[u8], width: u32, height: u32, channels: u8) -> Result<Texture, EngineError> {
        let image = ImageData::from_raw(bytes, width, height, channels);
        self.upload_image(image)
    }

    fn upload_image(&mut self, image: Result<ImageData, EngineError>) -> Result<Texture, EngineError> {
        let uploaded = image.and_then(|image| {
            let id = self.backend.create_texture(&image)?;
            Ok(Texture::new(id, image.width, image.height))
        });
        if let Err(e) = &uploaded {
            self.report(Level::Error, &format!("texture load failed: {e}"));
        }
        uploaded
    }

    pub fn destroy_texture(&mut self, texture: Texture) {
        self.backend.destroy_texture(texture.id);
    }

    /// Draws `texture` stretched over `dest`, multiplied by `tint`.
    pub fn draw_texture(&mut self, texture: &Texture, dest: Rect, tint: Color) {
        self.record("texture", |l| l.push_texture(texture.id, dest, tint));
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Pointer position in logical pixels, if it is over the window.
    #[inline]
    pub fn cursor_pos(&self) -> Option<Vec2> {
        self.input.pointer_pos
    }

    /// Whether `button` went down during the last `poll_events`.
    #[inline]
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.input_frame.buttons_pressed.contains(&button)
    }

    /// Whether `button` went up during the last `poll_events`.
    #[inline]
    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        self.input_frame.buttons_released.contains(&button)
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.input.button_down(button)
    }

    // ── loop ──────────────────────────────────────────────────────────────

    /// Drives `app` until the host asks to close or the app exits.
    ///
    /// Each iteration polls events, measures the frame time, lets the app
    /// draw and presents.
    pub fn run<A>(&mut self, app: &mut A) -> Result<(), EngineError>
    where
        A: App<B> + ?Sized,
    {
        self.timer.reset();
        loop {
            self.poll_events();
            if self.should_close() {
                break;
            }

            let dt = self.delta_time();
            if app.on_frame(self, dt) == AppControl::Exit {
                break;
            }
            self.present()?;
        }
        Ok(())
    }
}
