//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipeline, buffers, bind groups) and
//! creates them lazily on first use.
//!
//! Convention:
//! - geometry is authored in world units (see `coords`)
//! - the vertex shader applies `projection * model` from a uniform block

mod ctx;
pub mod square;

pub use ctx::{RenderCtx, RenderTarget};
pub use square::{SquareDraw, SquareRenderer, DEFAULT_HALF_EXTENT};
