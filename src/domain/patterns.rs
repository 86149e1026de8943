use log::debug;

use super::{Coord, Grid, GridError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Place pattern on grid with its top-left corner at `origin`.
    ///
    /// The pattern's bounding box is checked against the grid before any
    /// cell is written, so a failed placement leaves the grid untouched.
    pub fn place_on(&self, grid: &mut Grid, origin: Coord) -> Result<(), GridError> {
        let far_corner = origin + Coord::new(self.height as isize - 1, self.width as isize - 1);
        let (rows, cols) = grid.dimensions();
        if let Some(&outside) = [origin, far_corner]
            .iter()
            .find(|c| !c.is_in_bounds(rows, cols))
        {
            return Err(GridError::OutOfBounds { coord: outside, rows, cols });
        }
        debug!(
            "Placing {} ({}, {}x{}) at {}",
            self.name, self.description, self.height, self.width, origin
        );
        self.cells
            .iter()
            .try_for_each(|&(dx, dy)| grid.set(origin + Coord::new(dx as isize, dy as isize)))
    }
}

/// Classic Game of Life patterns used to seed the game
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, laid out as a horizontal row
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_extent() {
        let blinker = presets::blinker();
        assert_eq!((blinker.height, blinker.width), (1, 3));
        let block = presets::block();
        assert_eq!((block.height, block.width), (2, 2));
    }

    #[test]
    fn test_place_on() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::block().place_on(&mut grid, Coord::new(4, 4)).unwrap();
        assert_eq!(
            grid.live_cells(),
            vec![Coord::new(4, 4), Coord::new(4, 5), Coord::new(5, 4), Coord::new(5, 5)]
        );
    }

    #[test]
    fn test_place_off_grid_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4).unwrap();
        let err = presets::blinker().place_on(&mut grid, Coord::new(3, 2));
        assert_eq!(
            err,
            Err(GridError::OutOfBounds { coord: Coord::new(3, 4), rows: 4, cols: 4 })
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_place_before_origin_fails() {
        let mut grid = Grid::new(4, 4).unwrap();
        let err = presets::block().place_on(&mut grid, Coord::new(-1, 0));
        assert!(matches!(err, Err(GridError::OutOfBounds { coord, .. }) if coord == Coord::new(-1, 0)));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_place_at_far_edge() {
        let mut grid = Grid::new(4, 4).unwrap();
        presets::block().place_on(&mut grid, Coord::new(2, 2)).unwrap();
        assert_eq!(grid.population(), 4);
    }
}
