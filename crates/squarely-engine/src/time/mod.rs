//! Frame timing.
//!
//! Movement in the demo is per frame, not per second; `FrameClock` exists for
//! diagnostics (frame index, delta time, frame-rate reporting).

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
