/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

/// Outcome of evaluating one cell for the next generation.
/// Buffered during a scan and applied once the whole grid has been read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Born,
    Died,
    Unchanged,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Digit used in grid dumps
    pub const fn as_digit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn transition(self, neighbors: u8) -> Transition {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Transition::Unchanged,
            (Cell::Alive, _) => Transition::Died,
            (Cell::Dead, 3) => Transition::Born,
            (Cell::Dead, _) => Transition::Unchanged,
        }
    }

}

impl Transition {
    /// The state `cell` takes once this transition is applied
    pub const fn apply(self, cell: Cell) -> Cell {
        match self {
            Transition::Born => Cell::Alive,
            Transition::Died => Cell::Dead,
            Transition::Unchanged => cell,
        }
    }
}
