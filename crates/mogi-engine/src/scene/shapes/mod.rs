//! Shape tessellators.
//!
//! Each module adds `push_*` helpers on [`crate::scene::DrawList`] that turn a
//! declarative shape into vertices. Degenerate input records nothing.

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;
pub(crate) mod texture;

pub use circle::{segment_count, MAX_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};
pub use line::{dash_spans, dot_spacing, dot_stops, LINE_EPSILON};
pub use rounded_rect::{BorderBoxLayout, RoundedRectSpec, RADIUS_EPSILON};
