mod board;
mod config;
mod error;
mod events;
mod grid;
mod path;
mod rules;
mod sim;
mod utils;

pub use board::{Frame, GameOfLife, RenderSurface};
pub use config::Config;
pub use error::{Error, Result};
pub use events::{GameOverListener, LogEvent, LogListener};
pub use grid::{CellState, Grid};
pub use path::{encode, svg_path_data, PathCommand};
pub use rules::advance;
pub use sim::{CycleOutcome, SimulationLoop, StopHandle};
pub use utils::FpsLimiter;
