/// Fixed-timestep frame clock
///
/// The simulation always advances in whole 1/60 s steps. Wall-clock time between
/// redraws is accumulated and converted into a number of steps to run, capped so
/// a long stall (window drag, breakpoint) cannot trigger a spiral of catch-up work.
use std::time::{Duration, Instant};

/// Target simulation rate
pub const STEPS_PER_SECOND: u32 = 60;
const STEP_DURATION: Duration = Duration::from_nanos(1_000_000_000 / STEPS_PER_SECOND as u64);

/// Maximum number of simulation steps per redraw
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Frame clock state
#[derive(Debug)]
pub struct FrameClock {
    /// Wall time not yet consumed by a step
    accumulator: Duration,

    /// Instant of the previous `begin_frame`
    last_frame_time: Instant,

    /// Total simulation steps handed out; the monotonic game clock
    step_count: u64,

    /// Redraws seen so far
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            step_count: 0,
            frame_count: 0,
        }
    }

    /// Begin a redraw; returns how many simulation steps to run before presenting
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.accumulate(elapsed)
    }

    /// Feed elapsed wall time into the accumulator and count the steps it buys
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= STEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= STEP_DURATION;
            steps += 1;
        }

        // Drop whatever the cap left behind instead of carrying the debt forward
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= STEP_DURATION {
            log::debug!(
                "Frame clock fell behind by {:?}, skipping",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Total simulation steps so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
