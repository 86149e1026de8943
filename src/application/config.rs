use std::time::Duration;

/// Run parameters for the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub banner: &'static str,
    /// Side length of the square grid
    pub size: usize,
    pub generations: usize,
    /// Pause between generations; zero runs silently
    pub delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_SIZE: usize = 10;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            banner: "Game of Life",
            size: Self::DEFAULT_SIZE,
            generations: 5,
            delay: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.generations, 5);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.banner, "Game of Life");
    }
}
