use std::env;

/// Settings for an automated game, read from `MINESWEEPER_*` environment
/// variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    /// Seed for mine placement and move selection. Random when unset.
    pub seed: Option<u64>,
    /// Run the SAT consistency check after every observation.
    pub verify: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            mines: 8,
            seed: None,
            verify: false,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(height) = read::<usize, _>(&lookup, "MINESWEEPER_HEIGHT") {
            config.height = height;
        }
        if let Some(width) = read::<usize, _>(&lookup, "MINESWEEPER_WIDTH") {
            config.width = width;
        }
        if let Some(mines) = read::<usize, _>(&lookup, "MINESWEEPER_MINES") {
            config.mines = mines;
        }
        config.mines = config.mines.min(config.height.saturating_mul(config.width));

        config.seed = read(&lookup, "MINESWEEPER_SEED");
        if let Some(verify) = read(&lookup, "MINESWEEPER_VERIFY") {
            config.verify = verify;
        }

        config
    }
}

fn read<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
