use std::fmt;
use std::ops::Add;

/// Offsets of the 8 Moore neighbors, row by row.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    Coord::new(-1, -1), Coord::new(-1, 0), Coord::new(-1, 1),
    Coord::new(0, -1),                     Coord::new(0, 1),
    Coord::new(1, -1),  Coord::new(1, 0),  Coord::new(1, 1),
];

/// A cell position. `x` is the row, `y` the column.
///
/// Components are signed so that neighbor offsets can step off the grid;
/// such coordinates are filtered with [`Coord::is_in_bounds`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Coord {
    pub x: isize,
    pub y: isize,
}

impl Coord {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies inside a `rows` x `cols` grid
    pub const fn is_in_bounds(self, rows: usize, cols: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < rows && (self.y as usize) < cols
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(isize, isize)> for Coord {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
