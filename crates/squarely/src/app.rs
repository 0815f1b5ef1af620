use squarely_engine::core::{App, AppControl, FrameCtx};
use squarely_engine::input::{InputFrame, Key, KeyboardState};
use squarely_engine::render::{SquareDraw, SquareRenderer};

use crate::config::DemoConfig;
use crate::square::{self, SquareState};

/// The demo: one square, moved with W/A/S/D and recolored with 1/2/3.
pub struct SquareApp {
    config: DemoConfig,
    state: SquareState,
    renderer: SquareRenderer,
}

impl SquareApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            state: config.initial,
            renderer: SquareRenderer::new(config.motion.half_extent),
            config,
        }
    }

    pub fn state(&self) -> SquareState {
        self.state
    }

    /// Update phase: runs the square transform for one frame.
    pub fn advance<K>(&mut self, keys: &K, aspect_ratio: f32)
    where
        K: KeyboardState + ?Sized,
    {
        let next = square::update(self.state, keys, aspect_ratio, &self.config.motion);

        if next.color != self.state.color {
            log::debug!("color -> {:?}", next.color.to_array());
        }

        self.state = next;
    }

    fn wants_exit(&self, input_frame: &InputFrame) -> bool {
        self.config.exit_on_escape && input_frame.pressed(Key::Escape)
    }
}

impl App for SquareApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.wants_exit(ctx.input_frame) {
            log::info!("escape pressed; exiting");
            ctx.runtime.exit();
            return AppControl::Continue;
        }

        let Some(aspect) = ctx.aspect_ratio() else {
            return AppControl::Continue;
        };

        self.advance(ctx.input, aspect);

        let every = self.config.report_every;
        if every > 0 && ctx.time.frame_index % every == 0 {
            let state = self.state();
            log::trace!(
                "frame {}: position ({:.3}, {:.3}), {:.1} fps",
                ctx.time.frame_index,
                state.position.x,
                state.position.y,
                ctx.time.fps
            );
        }

        let draw = SquareDraw {
            position: self.state.position,
            color: self.state.color,
        };
        let renderer = &mut self.renderer;

        ctx.render(self.config.clear_color, |rctx, target| {
            renderer.render(rctx, target, &draw);
        })
    }
}
