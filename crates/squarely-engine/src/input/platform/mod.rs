//! Platform event translation.

mod winit_events;

pub use winit_events::{map_key, translate_window_event};
