pub mod actor;
pub mod common;
pub mod item;

pub use actor::{Entity, EntityBuilder, EquipError, Inventory, InventorySlot, Outfit};
pub use common::{Coordinate, Direction, MapId};
pub use item::{Equipment, EquipmentSlot, Item, ItemKind};
