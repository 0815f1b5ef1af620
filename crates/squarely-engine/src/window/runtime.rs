use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FrameTime};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Color Changing Square".to_string(),
            initial_size: LogicalSize::new(1800.0, 900.0),
            resizable: true,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}

/// Runs one frame if the viewport has a drawable area.
///
/// A zero-area viewport (minimized window) skips the frame: `frame` is not
/// called, the clock does not tick and `input_frame` keeps its pending
/// transitions for the next visible frame. Otherwise the clock ticks, `frame`
/// runs and `input_frame` is cleared afterwards.
pub fn run_visible_frame<R>(
    viewport: Viewport,
    clock: &mut FrameClock,
    input_frame: &mut InputFrame,
    frame: impl FnOnce(FrameTime, &InputFrame) -> R,
) -> Option<R> {
    if !viewport.is_valid() {
        return None;
    }

    let time = clock.tick();
    let out = frame(time, input_frame);
    input_frame.clear();
    Some(out)
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until the window closes or the app exits.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: CoreApp + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    viewport: Viewport,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let viewport = Viewport::from_physical(window.inner_size());
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            viewport,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        log::info!(
            "window \"{}\" opened at {}x{}",
            self.config.title,
            viewport.width,
            viewport.height
        );

        self.entry = Some(entry);
        Ok(())
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.entry = None;
        event_loop.exit();
    }

    /// Resize phase: reconfigures the surface and records the new viewport.
    /// Application state is untouched; the app sees the new viewport on its
    /// next frame.
    fn handle_resize(&mut self) {
        let Some(entry) = self.entry.as_mut() else { return };

        let new_size = entry.with_window(|w| w.inner_size());
        entry.with_mut(|fields| {
            fields.gpu.resize(new_size);
            *fields.viewport = Viewport::from_physical(new_size);
            fields.window.request_redraw();
        });

        log::debug!("resized to {}x{}", new_size.width, new_size.height);
    }

    /// Update + render phases for one frame.
    fn drive_frame(&mut self) -> AppControl {
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else { return AppControl::Continue };

        let mut runtime_ctx = RuntimeCtx::default();

        let control = entry.with_mut(|fields| {
            let viewport = *fields.viewport;
            let (window, gpu, input) = (fields.window, fields.gpu, fields.input_state);
            let runtime = &mut runtime_ctx;

            let frame = |time: FrameTime, input_frame: &InputFrame| {
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        id: window.id(),
                        window,
                    },
                    gpu,
                    input,
                    input_frame,
                    time,
                    viewport,
                    runtime,
                };

                app.on_frame(&mut ctx)
            };

            run_visible_frame(viewport, fields.clock, fields.input_frame, frame)
                .unwrap_or(AppControl::Continue)
        });

        if runtime_ctx.exit_requested() {
            AppControl::Exit
        } else {
            control
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.startup_error = Some(e);
            self.exit(event_loop);
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous redraw: one frame per display refresh (FIFO present blocks).
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            return;
        }

        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        let mut control = AppControl::Continue;
        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(&event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
            control = app.on_window_event(&event);
        });

        if control == AppControl::Exit {
            self.exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.exit(event_loop);
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.handle_resize();
            }

            WindowEvent::RedrawRequested => {
                if self.drive_frame() == AppControl::Exit {
                    self.exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::input::Key;

    fn pending_escape() -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(Key::Escape);
        frame
    }

    // ── frame gating ──────────────────────────────────────────────────────

    #[test]
    fn zero_area_viewport_skips_frame_and_keeps_input() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let mut input_frame = pending_escape();
        let mut ran = false;

        let out = run_visible_frame(
            Viewport::new(1800.0, 0.0),
            &mut clock,
            &mut input_frame,
            |_, _| ran = true,
        );

        assert!(out.is_none());
        assert!(!ran);
        assert!(input_frame.pressed(Key::Escape));

        // The clock did not advance: the next tick is still frame 0.
        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn visible_frame_ticks_runs_and_clears_input() {
        let mut clock = FrameClock::default();
        let mut input_frame = pending_escape();

        let out = run_visible_frame(
            Viewport::new(1800.0, 900.0),
            &mut clock,
            &mut input_frame,
            |time, frame| {
                assert_eq!(time.frame_index, 0);
                frame.pressed(Key::Escape)
            },
        );

        assert_eq!(out, Some(true));
        assert!(input_frame.keys_pressed.is_empty());
    }

    #[test]
    fn input_survives_minimize_until_next_visible_frame() {
        let mut clock = FrameClock::default();
        let mut input_frame = pending_escape();

        let hidden = Viewport::new(0.0, 0.0);
        run_visible_frame(hidden, &mut clock, &mut input_frame, |_, _| ());

        let visible = Viewport::new(800.0, 600.0);
        let seen = run_visible_frame(visible, &mut clock, &mut input_frame, |_, frame| {
            frame.pressed(Key::Escape)
        });

        assert_eq!(seen, Some(true));
    }

    #[test]
    fn exit_request_is_recorded() {
        let mut rt = RuntimeCtx::default();
        assert!(!rt.exit_requested());
        rt.exit();
        assert!(rt.exit_requested());
    }
}
