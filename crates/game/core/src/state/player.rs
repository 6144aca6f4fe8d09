use crate::state::{Coordinate, Entity, MapId, World};

/// A player-controlled entity placed on a map of the [`World`].
///
/// # Invariants
///
/// - `(map, location)` always names a passable tile of a map in the world
/// - `previous` is set only when a move changes maps
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub entity: Entity,
    map: MapId,
    location: Coordinate,
    previous: Option<(MapId, Coordinate)>,
    sight_radius: u32,
}

impl Player {
    pub const DEFAULT_NAME: &'static str = "Player";

    /// Places `entity` at `location` on `map`.
    ///
    /// An unknown map, or a location that is not passable on it, puts the
    /// player on the configured default map and location instead.
    pub fn spawn(entity: Entity, map: MapId, location: Coordinate, world: &World) -> Self {
        let (map, location) = match world.get(map) {
            Some(target) if target.is_passable(location) => (map, location),
            _ => {
                tracing::warn!(
                    "{} cannot start at {} on {}; using the default map",
                    entity.name(),
                    location,
                    map
                );
                (MapId::DEFAULT, world.config().default_location)
            }
        };
        Self {
            entity,
            map,
            location,
            previous: None,
            sight_radius: world.config().sight_radius,
        }
    }

    /// A player on the default map at the default location.
    pub fn new(entity: Entity, world: &World) -> Self {
        Self::spawn(
            entity,
            MapId::DEFAULT,
            world.config().default_location,
            world,
        )
    }

    pub fn map(&self) -> MapId {
        self.map
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Map and location held before the last map switch.
    pub fn previous(&self) -> Option<(MapId, Coordinate)> {
        self.previous
    }

    pub fn sight_radius(&self) -> u32 {
        self.sight_radius
    }

    pub fn set_sight_radius(&mut self, radius: u32) {
        self.sight_radius = radius;
    }

    /// Moves without validation. Callers have checked passability.
    pub(crate) fn place(&mut self, map: MapId, location: Coordinate) {
        if map != self.map {
            self.previous = Some((self.map, self.location));
        }
        self.map = map;
        self.location = location;
    }

    /// Refills hp and returns to the current map's regen location.
    pub fn respawn(&mut self, world: &World) {
        self.entity.restore_full();
        self.location = world.map(self.map).regen_location();
        tracing::debug!("{} respawns at {}", self.entity.name(), self.location);
    }

    /// Reveals tiles around `center`, or around the player when `None`.
    pub fn update_map(&self, world: &mut World, center: Option<Coordinate>) {
        let center = center.unwrap_or(self.location);
        world.update_visibility(self.map, center, self.sight_radius);
    }
}
