use crate::state::{Coordinate, Map};

/// Game configuration: fallbacks and tunable parameters.
///
/// Passed once to [`World::new`](crate::World::new). Every constructor that
/// must degrade gracefully reads its defaults from here.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Map a player lands on when its requested map or location is invalid.
    pub default_map: Map,
    /// Location on `default_map` used for the same fallback.
    pub default_location: Coordinate,
    /// Radius around a player's position revealed after every move.
    pub sight_radius: u32,
    pub battle: BattleConfig,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIGHT_RADIUS: u32 = 2;

    pub fn new() -> Self {
        Self {
            default_map: Map::default(),
            default_location: Coordinate::ORIGIN,
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
            battle: BattleConfig::default(),
        }
    }

    /// Replaces the fallback map and location.
    ///
    /// A location that is not passable on `map` is replaced by the map's
    /// regen location.
    pub fn with_default_map(mut self, map: Map, location: Coordinate) -> Self {
        self.default_location = if map.is_passable(location) {
            location
        } else {
            tracing::warn!(
                "default location {} is not passable on {:?}; using regen location",
                location,
                map.name()
            );
            map.regen_location()
        };
        self.default_map = map;
        self
    }

    pub fn with_sight_radius(mut self, sight_radius: u32) -> Self {
        self.sight_radius = sight_radius;
        self
    }

    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Limits applied to every battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Rounds after which an undecided battle ends in a stalemate.
    pub max_rounds: u32,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self { max_rounds }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }
}
