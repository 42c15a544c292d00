//! Board façade: owns the grid and wires rules, path encoding and the
//! simulation loop together behind the public API.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::events::{GameOverListener, LogEvent, LogListener};
use crate::grid::Grid;
use crate::path::{self, PathCommand};
use crate::rules;
use crate::sim::{CycleOutcome, SimulationLoop, StopHandle};
use crate::Result;

/// One rendered frame handed to the attached surface.
pub struct Frame<'a> {
    pub commands: &'a [PathCommand],
    /// Cosmetic grid-lines overlay requested by the user.
    pub grid_lines: bool,
    pub width: usize,
    pub height: usize,
}

/// Seam for the external rendering layer.
pub trait RenderSurface {
    fn present(&mut self, frame: &Frame<'_>);
}

/// The game façade.
///
/// Exclusively owns one [`Grid`] at a time; `resize` and the generation
/// step replace it wholesale, never partially mutate it under a reader.
/// All mutation goes through these methods, from a single control flow.
pub struct GameOfLife {
    grid: Grid,
    grid_lines: bool,
    surface: Option<Box<dyn RenderSurface>>,
    sim: SimulationLoop,
    on_log: Option<LogListener>,
    on_game_over: Option<GameOverListener>,
}

impl GameOfLife {
    pub fn new(width: usize, height: usize, grid_lines: bool) -> Result<Self> {
        Ok(Self {
            grid: Grid::blank(width, height)?,
            grid_lines,
            surface: None,
            sim: SimulationLoop::new(Config::MAX_FPS),
            on_log: None,
            on_game_over: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    /// Attaches the rendering surface and draws the current state to it.
    pub fn attach(&mut self, surface: impl RenderSurface + 'static) {
        self.surface = Some(Box::new(surface));
        self.redraw();
    }

    /// Current draw-command sequence, recomputed on demand.
    pub fn render_commands(&self) -> Vec<PathCommand> {
        path::encode(&self.grid)
    }

    /// Registers the log listener, replacing any previous one.
    pub fn on_log(&mut self, listener: impl FnMut(&LogEvent) + 'static) {
        self.on_log = Some(Box::new(listener));
    }

    /// Registers the game-over listener, replacing any previous one.
    pub fn on_game_over(&mut self, listener: impl FnMut() + 'static) {
        self.on_game_over = Some(Box::new(listener));
    }

    /// Flips the cell under a viewport pixel.
    ///
    /// Out-of-range input is a caller error tolerated as a no-op.
    pub fn toggle_cell(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) {
        if viewport_width <= 0. || viewport_height <= 0. {
            return;
        }
        let x = (pixel_x / (viewport_width / self.grid.width() as f64)).floor();
        let y = (pixel_y / (viewport_height / self.grid.height() as f64)).floor();
        if !(x >= 0. && x < self.grid.width() as f64) {
            return;
        }
        if !(y >= 0. && y < self.grid.height() as f64) {
            return;
        }
        self.grid.toggle(x as usize, y as usize);
        self.redraw();
    }

    /// Seeds every cell independently, alive with probability
    /// [`Config::FILL_RATE`].
    pub fn fill_random(&mut self) {
        self.fill_random_seeded(None);
    }

    /// `fill_random` with a fixed seed, for reproducible boards.
    pub fn fill_random_seeded(&mut self, seed: Option<u64>) {
        let timer = Instant::now();
        self.grid.randomize(seed, Config::FILL_RATE);
        self.emit_log(LogEvent::new(LogEvent::FILL, timer.elapsed()));
        self.redraw();
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.redraw();
    }

    /// Replaces the grid with one of the new dimensions, keeping the
    /// overlap with the old bounds and padding the rest dead.
    ///
    /// Stops a running loop first so the swap never races a generation
    /// in flight. Resizing to the current dimensions just redraws.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.stop();
        if (width, height) != self.grid.size() {
            self.grid = self.grid.resized(width, height)?;
            tracing::debug!(width, height, "board resized");
        }
        self.redraw();
        Ok(())
    }

    pub fn add_grid(&mut self) {
        self.grid_lines = true;
        self.redraw();
    }

    pub fn remove_grid(&mut self) {
        self.grid_lines = false;
        self.redraw();
    }

    /// Runs the drive loop until convergence or [`stop`](Self::stop).
    ///
    /// No-op if already running. Each cycle: redraw, advance one
    /// generation, report timing, then pace to the frame budget.
    pub fn start(&mut self) {
        let sim = self.sim.clone();
        sim.run(|| self.drive_cycle());
    }

    /// Requests cancellation; the loop exits at its next iteration
    /// boundary. Idempotent.
    pub fn stop(&self) {
        self.sim.stop();
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Handle for stopping the loop from outside the drive context,
    /// e.g. from a listener.
    pub fn stop_handle(&self) -> StopHandle {
        self.sim.handle()
    }

    fn drive_cycle(&mut self) -> CycleOutcome {
        let timer = Instant::now();
        self.redraw();
        let (next, converged) = rules::advance(&self.grid);
        self.grid = next;
        self.emit_log(LogEvent::new(LogEvent::GENERATION, timer.elapsed()));
        if converged {
            self.game_over();
            CycleOutcome::Converged
        } else {
            CycleOutcome::Continue
        }
    }

    fn redraw(&mut self) {
        let timer = Instant::now();
        let commands = path::encode(&self.grid);
        if let Some(surface) = self.surface.as_mut() {
            surface.present(&Frame {
                commands: &commands,
                grid_lines: self.grid_lines,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        self.emit_log(LogEvent::new(LogEvent::RENDER, timer.elapsed()));
    }

    fn game_over(&mut self) {
        tracing::debug!("simulation converged");
        if let Some(listener) = self.on_game_over.as_mut() {
            listener();
        }
        self.emit_log(LogEvent::new(LogEvent::GAME_OVER, Duration::ZERO));
    }

    fn emit_log(&mut self, event: LogEvent) {
        if let Some(listener) = self.on_log.as_mut() {
            listener(&event);
        }
    }
}
