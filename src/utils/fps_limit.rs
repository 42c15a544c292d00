use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces a loop to a target frame rate.
///
/// Frames that overran their budget proceed immediately, there is no
/// negative delay or catch-up.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
        }
    }

    /// Sleeps for the remainder of the current frame budget.
    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }
        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_respects_the_frame_budget() {
        let mut limiter = FpsLimiter::new(100.);
        let timer = Instant::now();
        limiter.delay();
        limiter.delay();
        assert!(timer.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn overlong_frames_are_not_penalized() {
        let mut limiter = FpsLimiter::new(1000.);
        sleep(Duration::from_millis(5));
        let timer = Instant::now();
        limiter.delay();
        assert!(timer.elapsed() < Duration::from_millis(5));
    }
}
