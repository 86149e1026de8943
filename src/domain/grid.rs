use log::{debug, trace};

use super::{Cell, Coord, GridError, Transition, NEIGHBOR_OFFSETS};

/// Grid manages the 2D cellular automaton grid.
///
/// Cells are stored row-major. The grid has hard edges: cells past the
/// border simply do not exist, so edge and corner cells see fewer neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;
        debug!("Allocating {}x{} grid", rows, cols);
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major index of an on-grid coordinate
    const fn offset(&self, coord: Coord) -> usize {
        coord.x as usize * self.cols + coord.y as usize
    }

    /// Convert a coordinate to its index in `cells`
    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.is_in_bounds(self.rows, self.cols) {
            Ok(self.offset(coord))
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position, or `None` off the grid
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).ok().map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, coord: Coord) -> Result<bool, GridError> {
        self.index(coord).map(|idx| self.cells[idx].is_alive())
    }

    pub fn set_cell(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Mark a cell alive
    pub fn set(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_cell(coord, Cell::Alive)
    }

    /// Mark a cell dead
    pub fn unset(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set_cell(coord, Cell::Dead)
    }

    /// All coordinates of the grid in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        (0..rows).flat_map(move |x| (0..cols).map(move |y| Coord::new(x, y)))
    }

    /// Neighbors of `coord` that lie on the grid (no wraparound)
    pub fn neighbor_coords(&self, coord: Coord) -> Vec<Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&offset| coord + offset)
            .filter(|c| c.is_in_bounds(self.rows, self.cols))
            .collect()
    }

    /// Count live cells among the on-grid neighbors
    pub fn live_neighbors(&self, coord: Coord) -> u8 {
        self.neighbor_coords(coord)
            .into_iter()
            .filter(|&c| self.get(c).is_some_and(Cell::is_alive))
            .count() as u8
    }

    /// Advance one generation in place.
    ///
    /// Every cell is evaluated against the current generation first; the
    /// resulting transitions are applied only after the whole scan, so no
    /// cell observes a neighbor's next state. Returns how many cells changed.
    pub fn step(&mut self) -> usize {
        let pending: Vec<(Coord, Transition)> = self
            .coords()
            .map(|coord| {
                let cell = self.cells[self.offset(coord)];
                (coord, cell.transition(self.live_neighbors(coord)))
            })
            .filter(|&(_, transition)| transition != Transition::Unchanged)
            .collect();

        for &(coord, transition) in &pending {
            let idx = self.offset(coord);
            self.cells[idx] = transition.apply(self.cells[idx]);
        }

        trace!("Step changed {} cells", pending.len());
        pending.len()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of all live cells in row-major order
    pub fn live_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.get(c).is_some_and(Cell::is_alive))
            .collect()
    }

    /// Iterate over rows of cells, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }
}
