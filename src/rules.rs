//! Generation-advance rules on the toroidal grid.

use crate::grid::Grid;

/// Computes the next generation of `grid`.
///
/// Returns the new grid and whether the simulation has converged:
/// the result is empty, or identical to `grid`. Only the immediately
/// preceding generation is compared, so period>1 oscillators never
/// report convergence and run until stopped.
pub fn advance(grid: &Grid) -> (Grid, bool) {
    let (width, height) = grid.size();
    let mut next = grid.clone();
    for x in 0..width {
        for y in 0..height {
            let neibs = count_neighbors(grid, x, y);
            let alive = if grid.is_alive(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            next.set_alive(x, y, alive);
        }
    }
    let converged = next.is_empty() || next == *grid;
    (next, converged)
}

/// Live cells among the 8 neighbors, with edges stitched together.
fn count_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
    let (width, height) = grid.size();
    let x1 = if x == 0 { width - 1 } else { x - 1 };
    let x2 = if x == width - 1 { 0 } else { x + 1 };
    let y1 = if y == 0 { height - 1 } else { y - 1 };
    let y2 = if y == height - 1 { 0 } else { y + 1 };
    grid.is_alive(x1, y1) as usize
        + grid.is_alive(x, y1) as usize
        + grid.is_alive(x2, y1) as usize
        + grid.is_alive(x1, y) as usize
        + grid.is_alive(x2, y) as usize
        + grid.is_alive(x1, y2) as usize
        + grid.is_alive(x, y2) as usize
        + grid.is_alive(x2, y2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_does_not_mutate_input() {
        let mut grid = Grid::blank(8, 8).unwrap();
        grid.randomize(Some(42), 0.3);
        let before = grid.clone();
        let _ = advance(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut grid = Grid::blank(8, 8).unwrap();
        grid.set_alive(4, 4, true);
        let (next, converged) = advance(&grid);
        assert!(next.is_empty());
        assert!(converged);
    }

    #[test]
    fn corner_counts_opposite_corner_as_neighbor() {
        let mut grid = Grid::blank(6, 5).unwrap();
        grid.set_alive(5, 4, true);
        assert_eq!(count_neighbors(&grid, 0, 0), 1);
    }
}
