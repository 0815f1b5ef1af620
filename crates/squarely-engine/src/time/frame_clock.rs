use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at zero.
    pub frame_index: u64,

    /// Smoothed frame rate including this frame.
    pub fps: f32,
}

/// Produces `FrameTime` snapshots and a smoothed frame rate.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// report a multi-second frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    avg_dt: f32,
}

impl FrameClock {
    const SMOOTHING: f32 = 0.1;
    const DT_MIN: Duration = Duration::from_micros(100);
    const DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose first tick measures from `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            avg_dt: 0.0,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` and returns the snapshot for this frame.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(Self::DT_MIN, Self::DT_MAX)
            .as_secs_f32();

        self.last = now;
        self.avg_dt = if self.frame_index == 0 {
            dt
        } else {
            self.avg_dt + (dt - self.avg_dt) * Self::SMOOTHING
        };

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
            fps: self.fps(),
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Exponentially smoothed frames per second; zero before the first tick.
    pub fn fps(&self) -> f32 {
        if self.avg_dt > 0.0 { 1.0 / self.avg_dt } else { 0.0 }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
