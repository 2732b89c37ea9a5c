//! Glyph atlas construction and text layout.
//!
//! A [`FontAtlas`] packs printable ASCII at one pixel height into a single
//! alpha texture. [`layout`] turns a string into positioned quads and
//! [`measure`] returns the same total advance without emitting geometry.

mod atlas;
mod cache;
mod layout;
mod packer;
mod source;

pub use atlas::{glyph_index, pack_atlas, AtlasOptions, FontAtlas, GlyphMetric, PackedAtlas, FIRST_CODEPOINT, GLYPH_COUNT};
pub use cache::FontCache;
pub use layout::{advance, fallback_advance, layout, measure, GlyphQuad, SPACE_ADVANCE, TAB_SPACES, UNKNOWN_ADVANCE};
pub use packer::{Placement, ShelfPacker};
pub use source::{parse_font, BlockGlyphs, GlyphSource, RasterGlyph, VerticalMetrics};
