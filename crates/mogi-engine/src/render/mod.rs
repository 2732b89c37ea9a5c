//! GPU rendering subsystem.
//!
//! [`PrimitiveRenderer`] consumes a `scene::DrawList` and issues GPU commands
//! via wgpu. It owns its GPU resources (pipelines, buffers, texture bindings).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to clip space using the projection uniform.

mod common;
mod ctx;
mod primitives;

pub use ctx::{RenderCtx, RenderTarget};
pub use primitives::PrimitiveRenderer;
