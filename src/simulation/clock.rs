//! Tick source and run flag for driving the simulation from any frame callback.
//!
//! The host supplies a monotonically increasing timestamp per frame; nothing
//! here assumes a particular scheduler.

use super::canvas::Canvas;
use super::game::Simulation;

/// Converts frame timestamps into tick deltas.
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    last: Option<f64>,
}

impl TickClock {
    /// Creates a clock with no baseline yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the previous timestamp.
    ///
    /// The first call has no baseline and yields `0.0`. A timestamp earlier
    /// than the previous one also yields `0.0`.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last {
            Some(last) => (timestamp_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        delta
    }

    /// Forgets the baseline so the next delta is zero again, e.g. after a pause.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Strictly alternating update/render loop body with a run flag.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    clock: TickClock,
    running: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// Creates a running loop.
    pub fn new() -> Self {
        Self {
            clock: TickClock::new(),
            running: true,
        }
    }

    /// Returns `true` until [`FrameLoop::stop`] is called.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clears the run flag. The current frame is never interrupted; later frames do nothing.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("frame loop stopped");
        }
        self.running = false;
    }

    /// Runs one tick followed by one render pass.
    ///
    /// # Returns
    ///
    /// Whether the host should schedule another frame.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        simulation: &mut Simulation,
        canvas: &mut dyn Canvas,
    ) -> bool {
        if !self.running {
            return false;
        }

        let dt = self.clock.delta(timestamp_ms);
        simulation.update(dt);
        simulation.render(canvas);

        self.running
    }

    /// Renders without advancing time, and drops the clock baseline so the
    /// first tick after resuming does not see the paused interval.
    pub fn frame_paused(&mut self, simulation: &Simulation, canvas: &mut dyn Canvas) -> bool {
        if !self.running {
            return false;
        }
        self.clock.reset();
        simulation.render(canvas);
        true
    }
}
