mod cell;
mod coord;
mod error;
mod grid;
mod patterns;

pub use cell::{Cell, Transition};
pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
