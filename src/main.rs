use std::io::{self, Write};

use anyhow::{Context, Result};
use conway_life::{Game, GameConfig, Seed};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("failed to initialize logger")?;
    info!("Starting conway_life v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", config.banner)?;

    let mut game = Game::from_config(&config)
        .with_context(|| format!("cannot create a {0}x{0} game", config.size))?;
    for seed in Seed::all() {
        game.seed_pattern(seed)
            .with_context(|| format!("cannot seed {}", seed.name()))?;
    }

    game.print(&mut out)?;
    game.run_generations(&mut out, config.generations, config.delay)?;
    game.reset();

    out.flush()?;
    Ok(())
}
