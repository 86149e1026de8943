// Domain layer - Core business logic
pub mod domain;

// Application layer - Game driver and its configuration
pub mod application;

// Infrastructure layer - Text output
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Coord, Grid, GridError, Pattern, Transition, presets};
pub use application::{Game, GameConfig, Phase, Seed};
