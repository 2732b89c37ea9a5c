//! Coordinate and geometry types shared across the tessellator, text layout and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC with the [`Projection`] kept by [`ViewportSync`].

mod rect;
mod shape;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use shape::{Circle, Line};
pub use vec2::Vec2;
pub use viewport::{Projection, Viewport, ViewportSync};
