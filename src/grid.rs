use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Toroidal field of cells.
///
/// Storage is column-major (`index = x * height + y`), matching the scan
/// order of the path encoder. Every coordinate in `[0, width) x [0, height)`
/// has a defined state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x * self.height + y
    }

    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)].into()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        self.set_alive(x, y, state.is_alive());
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.cells[i] = !self.cells[i];
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills every cell independently: alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for x in 0..self.width {
            for y in 0..self.height {
                self.set_alive(x, y, rng.gen_bool(fill_rate));
            }
        }
    }

    /// New grid of the given dimensions: the overlap with the old bounds
    /// keeps its states, everything else starts dead.
    pub fn resized(&self, width: usize, height: usize) -> Result<Self> {
        let mut next = Self::blank(width, height)?;
        for x in 0..self.width.min(width) {
            for y in 0..self.height.min(height) {
                next.set_alive(x, y, self.is_alive(x, y));
            }
        }
        Ok(next)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rejects_zero_dimensions() {
        assert!(Grid::blank(0, 10).is_err());
        assert!(Grid::blank(10, 0).is_err());
        assert!(Grid::blank(1, 1).is_ok());
    }

    #[test]
    fn toggle_flips_state() {
        let mut grid = Grid::blank(3, 3).unwrap();
        assert_eq!(grid.get(1, 2), CellState::Dead);
        grid.toggle(1, 2);
        assert_eq!(grid.get(1, 2), CellState::Alive);
        grid.toggle(1, 2);
        assert_eq!(grid.get(1, 2), CellState::Dead);
    }

    #[test]
    fn randomize_is_deterministic_for_a_seed() {
        let mut a = Grid::blank(16, 16).unwrap();
        let mut b = Grid::blank(16, 16).unwrap();
        a.randomize(Some(42), 0.1);
        b.randomize(Some(42), 0.1);
        assert_eq!(a, b);
        assert!(a.population() > 0);
        assert!(a.population() < 16 * 16 / 2);
    }

    #[test]
    fn resize_preserves_overlap_and_pads_dead() {
        let mut grid = Grid::blank(4, 4).unwrap();
        grid.set_alive(0, 0, true);
        grid.set_alive(3, 3, true);

        let grown = grid.resized(6, 6).unwrap();
        assert!(grown.is_alive(0, 0));
        assert!(grown.is_alive(3, 3));
        assert_eq!(grown.population(), 2);

        let shrunk = grid.resized(2, 2).unwrap();
        assert!(shrunk.is_alive(0, 0));
        assert_eq!(shrunk.population(), 1);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::blank(5, 5).unwrap();
        grid.randomize(Some(7), 0.5);
        grid.clear();
        assert!(grid.is_empty());
    }
}
