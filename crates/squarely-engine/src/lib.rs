//! Squarely engine crate.
//!
//! Owns the platform + GPU runtime pieces the demo binary builds on: the
//! window loop, keyboard input, frame timing, the wgpu device and the square
//! renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
