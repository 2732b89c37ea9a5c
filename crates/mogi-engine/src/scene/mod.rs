//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store tessellated vertices in submission order
//! - lower fans and loops to list indices and merge batches for backends
//! - keep shape-specific tessellation isolated per shape file under `scene::shapes`

mod batch;
mod list;
mod primitive;

pub mod shapes;

pub use batch::{Batch, Batches};
pub use list::DrawList;
pub use primitive::{Brush, IndexKind, Primitive, Topology, Vertex};
