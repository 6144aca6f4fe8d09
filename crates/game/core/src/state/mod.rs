//! Authoritative game state: entities, maps and the world that owns them.
//!
//! Players are held by the caller, not the world; the world owns maps and
//! the monsters standing on their tiles.
pub mod map;
pub mod monster;
pub mod player;
pub mod types;
pub mod world;

pub use map::{Event, EventEffect, Map, MapError, Repeat, Tile, Trigger};
pub use monster::{Monster, Treasure};
pub use player::Player;
pub use types::{
    Coordinate, Direction, Entity, EntityBuilder, EquipError, Equipment, EquipmentSlot, Inventory,
    InventorySlot, Item, ItemKind, MapId, Outfit,
};
pub use world::World;
