//! Game configuration loader.
//!
//! The file only tunes numbers; the fallback map itself is code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tilequest_core::{BattleConfig, Coordinate, GameConfig};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sight_radius: Option<u32>,
    default_location: Option<Coordinate>,
    battle: Option<BattleConfig>,
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file, applied over the defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        Self::load_onto(path, GameConfig::default())
    }

    /// Load config data from a TOML file, applied over `base`.
    pub fn load_onto(path: &Path, base: GameConfig) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content, base)
    }

    /// Parse TOML text, overriding only the keys it sets.
    pub fn parse(content: &str, base: GameConfig) -> LoadResult<GameConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let mut config = base;
        if let Some(radius) = file.sight_radius {
            config = config.with_sight_radius(radius);
        }
        if let Some(location) = file.default_location {
            let map = config.default_map.clone();
            config = config.with_default_map(map, location);
        }
        if let Some(battle) = file.battle {
            config = config.with_battle(battle);
        }
        Ok(config)
    }
}
