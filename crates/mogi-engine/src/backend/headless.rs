use std::collections::{HashMap, VecDeque};

use crate::coords::{Projection, Viewport};
use crate::error::EngineError;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::texture::ImageData;

use super::{Backend, BackendEvent, Frame, TextureId};

/// Snapshot of a presented frame.
#[derive(Debug, Clone)]
pub struct RecordedFrame {
    pub clear: Color,
    pub viewport: Viewport,
    pub projection: Projection,
    pub draw_list: DrawList,
}

/// Backend without a window or GPU.
///
/// Textures live in memory, events are scripted with [`push_event`] and
/// presented frames are recorded for inspection.
///
/// [`push_event`]: HeadlessBackend::push_event
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    size: Viewport,
    vsync: bool,
    closed: bool,
    next_texture: u64,
    textures: HashMap<TextureId, ImageData>,
    pending: VecDeque<BackendEvent>,
    frames: Vec<RecordedFrame>,
    fail_textures: bool,
}

impl HeadlessBackend {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Viewport::new(width, height),
            vsync: true,
            next_texture: 1,
            ..Self::default()
        }
    }

    /// Queues an event for the next [`Backend::poll_events`].
    ///
    /// `Resized` and `CloseRequested` also update the reported drawable size
    /// and close flag when drained, like a real host.
    pub fn push_event(&mut self, event: BackendEvent) {
        self.pending.push_back(event);
    }

    /// Makes subsequent texture creation fail.
    pub fn fail_texture_uploads(&mut self, fail: bool) {
        self.fail_textures = fail;
    }

    pub fn texture(&self, id: TextureId) -> Option<&ImageData> {
        self.textures.get(&id)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    #[inline]
    pub fn vsync(&self) -> bool {
        self.vsync
    }
}

impl Backend for HeadlessBackend {
    fn poll_events(&mut self, out: &mut Vec<BackendEvent>) {
        while let Some(event) = self.pending.pop_front() {
            match event {
                BackendEvent::Resized { width, height } => self.size = Viewport::new(width, height),
                BackendEvent::CloseRequested => self.closed = true,
                _ => {}
            }
            out.push(event);
        }
    }

    fn should_close(&self) -> bool {
        self.closed
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = enabled;
    }

    fn drawable_size(&self) -> Viewport {
        self.size
    }

    fn create_texture(&mut self, image: &ImageData) -> Result<TextureId, EngineError> {
        if self.fail_textures {
            return Err(EngineError::resource("texture upload rejected by headless backend"));
        }
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(id, image.clone());
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        self.textures.remove(&id);
    }

    fn present(&mut self, frame: Frame<'_>) -> Result<(), EngineError> {
        self.frames.push(RecordedFrame {
            clear: frame.clear,
            viewport: frame.viewport,
            projection: *frame.projection,
            draw_list: frame.draw_list.clone(),
        });
        Ok(())
    }
}
