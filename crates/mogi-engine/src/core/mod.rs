//! Core engine-facing contracts.
//!
//! [`RenderContext`] is the single owning wrapper around a host backend. Higher
//! layers either drive it directly (`poll_events`, `delta_time`, draw calls,
//! `present`) or hand an [`App`] to [`RenderContext::run`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::RenderContext;
