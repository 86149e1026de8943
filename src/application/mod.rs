mod config;
mod game;

pub use config::GameConfig;
pub use game::{Game, Phase, Seed};
