use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info};

use super::GameConfig;
use crate::domain::{Coord, Grid, GridError, presets};
use crate::rendering;

/// The built-in starting patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    /// A horizontal blinker at (1,1)-(1,3)
    Blinker,
    /// Two blocks at (4,4)-(5,5) and (6,6)-(7,7), touching corners
    Blocks,
}

impl Seed {
    pub fn all() -> Vec<Seed> {
        vec![Seed::Blinker, Seed::Blocks]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Seed::Blinker => "Blinker",
            Seed::Blocks => "Blocks",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Seed::Blinker => "3-cell row, period 2",
            Seed::Blocks => "Two diagonal 2x2 blocks (a beacon), period 2",
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    Running,
    Cleared,
}

/// Game owns the grid and drives the simulation.
/// This is the application layer that coordinates domain logic.
pub struct Game {
    grid: Grid,
    size: usize,
    generation: u64,
    phase: Phase,
}

impl Game {
    /// Create a game on an empty `size` x `size` grid
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size, size)?,
            size,
            generation: 0,
            phase: Phase::Initialized,
        })
    }

    /// Side length used when no size is given
    pub const fn default_size() -> usize {
        GameConfig::DEFAULT_SIZE
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GridError> {
        Self::new(config.size)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generations run since creation or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bring a built-in pattern to life at its fixed position
    pub fn seed_pattern(&mut self, seed: Seed) -> Result<(), GridError> {
        debug!("Seeding {}: {}", seed.name(), seed.description());
        match seed {
            Seed::Blinker => presets::blinker().place_on(&mut self.grid, Coord::new(1, 1)),
            Seed::Blocks => {
                let block = presets::block();
                block.place_on(&mut self.grid, Coord::new(4, 4))?;
                block.place_on(&mut self.grid, Coord::new(6, 6))
            }
        }
    }

    /// Advance a single generation
    pub fn step(&mut self) -> usize {
        self.phase = Phase::Running;
        self.generation += 1;
        self.grid.step()
    }

    /// Run `count` generations.
    ///
    /// With a zero `delay` the generations run back to back and nothing is
    /// written. Otherwise each generation writes its `It n` label, steps,
    /// sleeps for `delay` and then writes the grid.
    pub fn run_generations<W: Write>(
        &mut self,
        out: &mut W,
        count: usize,
        delay: Duration,
    ) -> io::Result<()> {
        info!("Running {} generations (delay {:?})", count, delay);
        for i in 0..count {
            if delay.is_zero() {
                self.step();
            } else {
                writeln!(out, "It {}", i + 1)?;
                self.step();
                thread::sleep(delay);
                self.print(out)?;
            }
        }
        info!(
            "Finished at generation {} with {} live cells",
            self.generation,
            self.grid.population()
        );
        Ok(())
    }

    /// Write the current grid followed by a blank line
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        rendering::print_grid(out, &self.grid)
    }

    /// Clear grid and reset generation counter
    pub fn reset(&mut self) {
        debug!("Clearing grid after {} generations", self.generation);
        self.grid.clear();
        self.generation = 0;
        self.phase = Phase::Cleared;
    }
}
