/// Defaults shared by the board façade and the demo binary.
pub struct Config;

impl Config {
    pub const DEFAULT_WIDTH: usize = 50;
    pub const DEFAULT_HEIGHT: usize = 50;

    /// Edge length of one cell in path units. The rendering surface is
    /// expected to stroke with the same width, so one horizontal stroke
    /// fills one cell.
    pub const CELL_EDGE: i64 = 10;

    pub const MAX_FPS: f64 = 30.;

    /// Probability that `fill_random` makes a cell alive.
    pub const FILL_RATE: f64 = 0.1;
}
