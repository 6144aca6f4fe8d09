//! Player movement and arrival triggers.
//!
//! A move is validated against the destination map, then applied: the
//! player is placed, nearby tiles are revealed, the front monster on the
//! tile engages, and an arrival event fires if the player is still there.
//! Blocked moves are normal play and leave everything untouched.

use crate::combat::{Battle, BattleReport, Combatant, Side};
use crate::env::{BattleObserver, Prompt, RandomSource};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Coordinate, Direction, MapId, Player, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("{0} does not exist")]
    UnknownMap(MapId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Coordinate },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Coordinate },

    #[error("cannot step {direction} off the edge of the map")]
    OffGrid { direction: Direction },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMap(_) => "MOVE_UNKNOWN_MAP",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "MOVE_BLOCKED",
            Self::OffGrid { .. } => "MOVE_OFF_GRID",
        }
    }
}

/// Movement intent: a destination, optionally on another map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub destination: Coordinate,
    /// `None` stays on the player's current map.
    pub map: Option<MapId>,
}

impl MoveAction {
    pub fn new(destination: Coordinate) -> Self {
        Self {
            destination,
            map: None,
        }
    }

    pub fn to_map(map: MapId, destination: Coordinate) -> Self {
        Self {
            destination,
            map: Some(map),
        }
    }

    /// Checks the destination, returning the map the player ends up on.
    pub fn pre_validate(&self, player: &Player, world: &World) -> Result<MapId, MoveError> {
        let map_id = self.map.unwrap_or(player.map());
        let map = world.get(map_id).ok_or(MoveError::UnknownMap(map_id))?;
        let destination = self.destination;
        if !map.in_bounds(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }
        if !map.is_passable(destination) {
            return Err(MoveError::Blocked { destination });
        }
        Ok(map_id)
    }

    /// Places the player and reveals the surroundings.
    ///
    /// Switching maps records where the player came from.
    pub fn apply(&self, map: MapId, player: &mut Player, world: &mut World) {
        player.place(map, self.destination);
        player.update_map(world, None);
    }
}

/// Collaborators a move may need if it starts a battle.
pub struct Session<'a> {
    pub prompt: &'a mut dyn Prompt,
    pub rng: &'a mut dyn RandomSource,
    pub observer: Option<&'a mut dyn BattleObserver>,
}

impl<'a> Session<'a> {
    pub fn new(prompt: &'a mut dyn Prompt, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            prompt,
            rng,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'a mut dyn BattleObserver) -> Self {
        self.observer = Some(observer);
        self
    }
}

/// Where a successful move left the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub map: MapId,
    pub location: Coordinate,
    /// Battle fought on arrival, if a monster was waiting.
    pub battle: Option<BattleReport>,
    /// Narration of the arrival event, if one fired.
    pub event: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveReport {
    /// Nothing changed.
    Blocked(MoveError),
    Moved(Arrival),
}

impl MoveReport {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    pub fn arrival(&self) -> Option<&Arrival> {
        match self {
            Self::Moved(arrival) => Some(arrival),
            Self::Blocked(_) => None,
        }
    }
}

impl World {
    /// Moves `player` to `destination`, on `map` if given.
    pub fn move_player(
        &mut self,
        player: &mut Player,
        destination: Coordinate,
        map: Option<MapId>,
        session: &mut Session<'_>,
    ) -> MoveReport {
        let action = MoveAction {
            destination,
            map,
        };
        let map_id = match action.pre_validate(player, self) {
            Ok(map_id) => map_id,
            Err(error) => {
                tracing::debug!("{} stays put: {}", player.entity.name(), error);
                return MoveReport::Blocked(error);
            }
        };
        action.apply(map_id, player, self);
        tracing::debug!("{} moves to {} on {}", player.entity.name(), destination, map_id);

        let battle = self.engage(player, map_id, destination, session);

        let still_here = player.map() == map_id && player.location() == destination;
        let event = if still_here {
            self.map_mut(map_id)
                .tile_at_mut(destination)
                .and_then(|tile| tile.event.as_mut())
                .filter(|event| event.fires_on_arrival())
                .and_then(|event| event.fire(player))
        } else {
            None
        };

        MoveReport::Moved(Arrival {
            map: player.map(),
            location: player.location(),
            battle,
            event,
        })
    }

    /// Lets `player` attack the front monster on the tile. The player
    /// initiates, so agility ties go to the player.
    ///
    /// A defeated monster leaves the tile; otherwise it goes back in front.
    fn engage(
        &mut self,
        player: &mut Player,
        map: MapId,
        location: Coordinate,
        session: &mut Session<'_>,
    ) -> Option<BattleReport> {
        let mut monster = self
            .map_mut(map)
            .tile_at_mut(location)?
            .take_front_monster()?;

        let mut battle = Battle::new(
            Combatant::controlled(player, &mut *session.prompt),
            Combatant::auto(&mut monster),
        )
        .with_config(self.config().battle);
        if let Some(observer) = session.observer.as_deref_mut() {
            battle = battle.with_observer(observer);
        }
        let report = battle.run(self, &mut *session.rng);

        if report.winner() == Some(Side::Attacker) {
            tracing::info!("{} is removed from {}", monster.entity.name(), location);
        } else if let Some(tile) = self.map_mut(map).tile_at_mut(location) {
            tile.return_monster(monster);
        }
        Some(report)
    }

    /// Takes one step in `direction`.
    pub fn move_direction(
        &mut self,
        player: &mut Player,
        direction: Direction,
        session: &mut Session<'_>,
    ) -> MoveReport {
        match player.location().step(direction) {
            Some(destination) => self.move_player(player, destination, None, session),
            None => MoveReport::Blocked(MoveError::OffGrid { direction }),
        }
    }

    pub fn move_up(&mut self, player: &mut Player, session: &mut Session<'_>) -> MoveReport {
        self.move_direction(player, Direction::Up, session)
    }

    pub fn move_down(&mut self, player: &mut Player, session: &mut Session<'_>) -> MoveReport {
        self.move_direction(player, Direction::Down, session)
    }

    pub fn move_left(&mut self, player: &mut Player, session: &mut Session<'_>) -> MoveReport {
        self.move_direction(player, Direction::Left, session)
    }

    pub fn move_right(&mut self, player: &mut Player, session: &mut Session<'_>) -> MoveReport {
        self.move_direction(player, Direction::Right, session)
    }

    /// Fires the event on the player's tile that answers to `word`.
    ///
    /// Returns `None` when nothing on the tile responds.
    pub fn interact(&mut self, player: &mut Player, word: &str) -> Option<String> {
        let tile = self.map_mut(player.map()).tile_at_mut(player.location())?;
        let event = tile.event.as_mut().filter(|event| event.responds_to(word))?;
        event.fire(player)
    }
}
