//! Combat resolution.
//!
//! - `damage`: attack formula
//! - `fighter`: the capability set a battle operates on
//! - `loot`: gold and treasure forfeiture
//! - `battle`: the round-based state machine

pub mod battle;
pub mod damage;
pub mod fighter;
pub mod loot;

pub use battle::{Battle, BattleReport, BattleState, Combatant, Side};
pub use damage::{apply_damage, calculate_damage};
pub use fighter::Fighter;
pub use loot::{Spoils, drop_treasures};
