//! Demo configuration.
//!
//! Everything is code-level; `RUST_LOG` is the only environment input.

use squarely_engine::device::GpuInit;
use squarely_engine::logging::LoggingConfig;
use squarely_engine::window::RuntimeConfig;

use crate::square::{Motion, SquareState};

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,

    /// Background color behind the square, as written to the surface.
    pub clear_color: wgpu::Color,

    pub motion: Motion,

    /// State on the first frame.
    pub initial: SquareState,

    /// Close the window when Escape is pressed.
    pub exit_on_escape: bool,

    /// Log position and frame rate every this many frames (trace level); 0 disables.
    pub report_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            // Clear and square colors are display values, written unconverted.
            gpu: GpuInit {
                prefer_srgb: false,
                ..GpuInit::default()
            },
            logging: LoggingConfig::default(),
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            motion: Motion::default(),
            initial: SquareState::default(),
            exit_on_escape: true,
            report_every: 600,
        }
    }
}
