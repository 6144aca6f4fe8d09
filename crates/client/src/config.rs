//! Terminal client configuration.
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`, when present).
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Fixed RNG seed; a time-based seed is used when unset.
    pub seed: Option<u64>,
    /// RON map to start on instead of the built-in farm.
    pub map_file: Option<PathBuf>,
    /// TOML game configuration applied over the defaults.
    pub config_file: Option<PathBuf>,
    pub sight_radius: Option<u32>,
    pub minimap_radius: u32,
    pub player_name: String,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_MINIMAP_RADIUS: u32 = 2;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TILEQUEST_SEED` - RNG seed
    /// - `TILEQUEST_MAP` - path to a RON map file
    /// - `TILEQUEST_CONFIG` - path to a TOML game config
    /// - `TILEQUEST_SIGHT_RADIUS` - tiles revealed around the player
    /// - `TILEQUEST_MINIMAP_RADIUS` - half-width of the minimap (default: 2)
    /// - `TILEQUEST_PLAYER` - player name
    /// - `TILEQUEST_LOG_DIR` - log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env("TILEQUEST_SEED");
        config.map_file = read_env("TILEQUEST_MAP");
        config.config_file = read_env("TILEQUEST_CONFIG");
        config.sight_radius = read_env("TILEQUEST_SIGHT_RADIUS");
        config.log_dir = read_env("TILEQUEST_LOG_DIR");
        if let Some(radius) = read_env("TILEQUEST_MINIMAP_RADIUS") {
            config.minimap_radius = radius;
        }
        if let Some(name) = read_env::<String>("TILEQUEST_PLAYER") {
            let name = name.trim();
            if !name.is_empty() {
                config.player_name = name.to_owned();
            }
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            map_file: None,
            config_file: None,
            sight_radius: None,
            minimap_radius: Self::DEFAULT_MINIMAP_RADIUS,
            player_name: tilequest_core::Player::DEFAULT_NAME.to_owned(),
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
