//! Compact path encoding of the live cells.
//!
//! Each live cell becomes one horizontal stroke across its midline, one
//! cell edge long. The first stroke is positioned absolutely; every
//! following stroke is positioned relative to the end of the previous
//! one, which keeps the payload small for dense grids. Serialized with
//! [`svg_path_data`], the sequence is a valid SVG `d` attribute that,
//! stroked with width [`Config::CELL_EDGE`], fills exactly the live
//! cells.

use crate::config::Config;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCommand {
    /// Absolute move to the left edge midline of a live cell (`M`).
    MoveTo { x: i64, y: i64 },
    /// Absolute horizontal stroke to `x` (`H`).
    HorizontalTo { x: i64 },
    /// Relative move from the end of the previous stroke (`m`).
    MoveBy { dx: i64, dy: i64 },
    /// Relative horizontal stroke of one cell edge (`h`).
    HorizontalBy { dx: i64 },
}

/// Encodes `grid` into draw commands, scanning columns left to right and
/// rows top to bottom within each column. Deterministic for a given grid.
pub fn encode(grid: &Grid) -> Vec<PathCommand> {
    const EDGE: i64 = Config::CELL_EDGE;

    let mut commands = Vec::new();
    let mut last: Option<(i64, i64)> = None;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if !grid.is_alive(x, y) {
                continue;
            }
            let mx = x as i64 * EDGE;
            let my = y as i64 * EDGE + EDGE / 2;
            match last {
                None => {
                    commands.push(PathCommand::MoveTo { x: mx, y: my });
                    commands.push(PathCommand::HorizontalTo { x: mx + EDGE });
                }
                Some((lx, ly)) => {
                    // Relative to the stroke end, which sits one edge
                    // right of the previous move point.
                    commands.push(PathCommand::MoveBy {
                        dx: mx - lx - EDGE,
                        dy: my - ly,
                    });
                    commands.push(PathCommand::HorizontalBy { dx: EDGE });
                }
            }
            last = Some((mx, my));
        }
    }
    commands
}

/// Serializes commands into an SVG path `d` string.
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => d.push_str(&format!("M{},{}", x, y)),
            PathCommand::HorizontalTo { x } => d.push_str(&format!(" H{}", x)),
            PathCommand::MoveBy { dx, dy } => d.push_str(&format!(" m{},{}", dx, dy)),
            PathCommand::HorizontalBy { dx } => d.push_str(&format!(" h{}", dx)),
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_encodes_to_nothing() {
        let grid = Grid::blank(4, 4).unwrap();
        assert!(encode(&grid).is_empty());
    }

    #[test]
    fn single_cell_is_an_absolute_stroke() {
        let mut grid = Grid::blank(4, 4).unwrap();
        grid.set_alive(2, 1, true);
        assert_eq!(
            encode(&grid),
            vec![
                PathCommand::MoveTo { x: 20, y: 15 },
                PathCommand::HorizontalTo { x: 30 },
            ]
        );
    }

    #[test]
    fn consecutive_cells_in_a_column_use_relative_strokes() {
        let mut grid = Grid::blank(4, 4).unwrap();
        grid.set_alive(0, 0, true);
        grid.set_alive(0, 1, true);
        assert_eq!(
            encode(&grid),
            vec![
                PathCommand::MoveTo { x: 0, y: 5 },
                PathCommand::HorizontalTo { x: 10 },
                PathCommand::MoveBy { dx: -10, dy: 10 },
                PathCommand::HorizontalBy { dx: 10 },
            ]
        );
    }

    #[test]
    fn svg_data_matches_the_expected_grammar() {
        let mut grid = Grid::blank(2, 2).unwrap();
        grid.set_alive(0, 0, true);
        grid.set_alive(1, 1, true);
        assert_eq!(svg_path_data(&encode(&grid)), "M0,5 H10 m0,10 h10");
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut grid = Grid::blank(16, 16).unwrap();
        grid.randomize(Some(42), 0.3);
        assert_eq!(encode(&grid), encode(&grid));
    }
}
