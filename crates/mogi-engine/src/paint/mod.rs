//! Color model shared between the tessellator, text layout and renderers.
//!
//! Colors are linear premultiplied RGBA. Hex literals and HSLA values convert
//! into [`Color`] at the API boundary.
//!
//! Geometry types remain in `coords`.

pub mod color;
mod hex;
mod hsla;

pub use color::Color;
pub use hex::HexColorError;
pub use hsla::Hsla;
