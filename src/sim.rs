//! Cancellable simulation drive loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::utils::FpsLimiter;

/// Result of one drive cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Continue,
    Converged,
}

/// Cooperative cancellation handle for a running loop.
///
/// `stop` may be called from any context; it takes effect at the next
/// iteration boundary, never preempting a generation in flight.
#[derive(Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Drives repeated cycles at a target frame rate.
///
/// Idle until [`run`](Self::run) is called; returns to idle when the
/// cycle reports convergence or the flag is cleared. Clones share the
/// same running flag, so at most one loop runs per flag.
#[derive(Clone)]
pub struct SimulationLoop {
    running: Arc<AtomicBool>,
    max_fps: f64,
}

impl SimulationLoop {
    pub fn new(max_fps: f64) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            max_fps,
        }
    }

    pub fn handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Runs `cycle` until it converges or the loop is stopped.
    ///
    /// No-op if already running. Blocks the caller; pacing sleeps for
    /// the remainder of each frame budget and skips the sleep entirely
    /// for overlong cycles.
    pub fn run(&self, mut cycle: impl FnMut() -> CycleOutcome) {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }
        tracing::debug!(max_fps = self.max_fps, "simulation loop started");

        let mut pacer = FpsLimiter::new(self.max_fps);
        while self.running.load(Ordering::Acquire) {
            match cycle() {
                CycleOutcome::Converged => self.running.store(false, Ordering::Release),
                CycleOutcome::Continue => pacer.delay(),
            }
        }
        tracing::debug!("simulation loop idle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_exits_on_convergence() {
        let sim = SimulationLoop::new(1000.);
        let mut cycles = 0;
        sim.run(|| {
            cycles += 1;
            if cycles == 3 {
                CycleOutcome::Converged
            } else {
                CycleOutcome::Continue
            }
        });
        assert_eq!(cycles, 3);
        assert!(!sim.is_running());
    }

    #[test]
    fn stop_from_inside_the_cycle_exits_without_another_cycle() {
        let sim = SimulationLoop::new(1000.);
        let handle = sim.handle();
        let mut cycles = 0;
        sim.run(|| {
            cycles += 1;
            if cycles == 5 {
                handle.stop();
            }
            CycleOutcome::Continue
        });
        assert_eq!(cycles, 5);
        assert!(!sim.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let sim = SimulationLoop::new(30.);
        sim.stop();
        sim.stop();
        assert!(!sim.is_running());
    }
}
