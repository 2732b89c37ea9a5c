use crate::backend::Backend;

use super::ctx::RenderContext;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame callback driven by [`RenderContext::run`].
pub trait App<B: Backend> {
    /// Draws one frame. `dt` is the time since the previous frame in seconds.
    fn on_frame(&mut self, ctx: &mut RenderContext<B>, dt: f32) -> AppControl;
}

impl<B, F> App<B> for F
where
    B: Backend,
    F: FnMut(&mut RenderContext<B>, f32) -> AppControl,
{
    fn on_frame(&mut self, ctx: &mut RenderContext<B>, dt: f32) -> AppControl {
        self(ctx, dt)
    }
}
