//! What combatants and players do.
//!
//! - `command`: battle commands and their resolution
//! - `select`: picking a command by prompt or by weighted chance
//! - `movement`: validated moves on the world's maps

pub mod command;
pub mod movement;
pub mod select;

pub use command::{
    BattleCommand, CommandKind, CommandSet, CustomEffect, ItemTarget, Outcome,
    choose_item_and_target,
};
pub use movement::{Arrival, MoveAction, MoveError, MoveReport, Session};
pub use select::{choose_command, weighted_choice};
