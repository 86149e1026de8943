//! Text rendering of the grid.

use std::fmt;
use std::io::{self, Write};

use crate::domain::Grid;

/// One line per row, cells as `0`/`1` inside brackets: `[0 1 0]`
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            f.write_str("[")?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.as_digit())?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl Grid {
    /// Human-readable row-by-row dump
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Write a grid dump followed by a blank line
pub fn print_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    writeln!(out, "{}", grid)
}
