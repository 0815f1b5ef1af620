//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s
//! (see `platform`).

mod frame;
mod keyboard;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use keyboard::KeyboardState;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
