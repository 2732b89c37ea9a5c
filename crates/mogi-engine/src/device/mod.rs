//! GPU device + surface management.
//!
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the window surface, including vsync switches
//! - acquiring frames and providing encoders/views for rendering
//! - uploading CPU images as sampled textures

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::{vsync_present_mode, GpuInit};
pub use surface::SurfaceErrorAction;
