//! Coordinate types shared by the runtime, the renderer and applications.
//!
//! World space used by the demo:
//! - origin at the window center
//! - +X right, +Y up
//! - vertical extent is always `[-1, 1]`; horizontal extent is `[-aspect, aspect]`
//!
//! The renderer maps world space to clip space with an orthographic projection
//! built from the current viewport.

mod transform;
mod viewport;

pub use transform::{model_translation, world_projection, NEAR_PLANE, FAR_PLANE};
pub use viewport::Viewport;
