use std::time::Duration;

/// Timing record emitted once per timed internal operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    pub label: &'static str,
    pub interval: Duration,
}

impl LogEvent {
    pub const RENDER: &'static str = "render";
    pub const GENERATION: &'static str = "generation";
    pub const FILL: &'static str = "fill";
    pub const GAME_OVER: &'static str = "game over";

    pub(crate) fn new(label: &'static str, interval: Duration) -> Self {
        Self { label, interval }
    }

    pub fn interval_ms(&self) -> u128 {
        self.interval.as_millis()
    }
}

pub type LogListener = Box<dyn FnMut(&LogEvent)>;
pub type GameOverListener = Box<dyn FnMut()>;
