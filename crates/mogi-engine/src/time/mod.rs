//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - one `FrameTimer` per render context
//! - call `tick()` once per frame boundary to obtain `FrameTime`
//! - feed `FrameTime::dt` into `FrameStats` for fps reporting

mod frame_timer;
mod stats;

pub use frame_timer::{FrameTime, FrameTimer};
pub use stats::FrameStats;
