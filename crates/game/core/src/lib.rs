//! Deterministic rules for a turn-based tile map RPG.
//!
//! `tilequest-core` defines stats, entities, maps, movement, and battles,
//! and exposes them as plain APIs. Input, randomness and rendering enter
//! through the collaborator traits in [`env`]; map authoring and the
//! terminal frontend live in other crates.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{
    Arrival, BattleCommand, CommandKind, CommandSet, CustomEffect, MoveAction, MoveError,
    MoveReport, Outcome, Session, choose_command,
};
pub use combat::{Battle, BattleReport, BattleState, Combatant, Fighter, Side, Spoils};
pub use config::{BattleConfig, GameConfig};
pub use env::{
    AutoPilot, BattleEvent, BattleObserver, PcgRng, Prompt, RandomSource, ScriptedPrompt,
    Selection,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Coordinate, Direction, Entity, EntityBuilder, EquipError, Equipment, EquipmentSlot, Event,
    EventEffect, Item, ItemKind, Map, MapError, MapId, Monster, Player, Tile, Treasure, Trigger,
    World,
};
pub use stats::{StatBonus, StatChanges, Stats};
