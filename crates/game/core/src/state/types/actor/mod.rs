//! The capability set shared by players and monsters.
//!
//! This module contains:
//! - Entity: name, stats, inventory, gold, outfit, battle commands
//! - Inventory: ordered item storage
//! - Outfit: equipped items, the source of stat bonuses

pub mod inventory;
pub mod outfit;

pub use inventory::{Inventory, InventorySlot};
pub use outfit::Outfit;

use crate::action::{BattleCommand, CommandSet};
use crate::combat::apply_damage;
use crate::error::{ErrorSeverity, GameError};
use crate::state::types::{EquipmentSlot, Item};
use crate::stats::{StatChanges, Stats};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    #[error("{0} is not in the inventory")]
    NotInInventory(String),

    #[error("{0} cannot be equipped")]
    NotEquipment(String),

    #[error("nothing is equipped in the {0} slot")]
    SlotEmpty(EquipmentSlot),
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInInventory(_) => "EQUIP_NOT_IN_INVENTORY",
            Self::NotEquipment(_) => "EQUIP_NOT_EQUIPMENT",
            Self::SlotEmpty(_) => "EQUIP_SLOT_EMPTY",
        }
    }
}

/// Complete entity state.
///
/// # Invariants
///
/// - Only base stats are stored; [`Entity::stats`] adds the outfit bonus on read
/// - `hp` never exceeds the effective `max_hp`
/// - Every command granted by worn equipment is in `battle_commands`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    name: String,
    stats: Stats,
    inventory: Inventory,
    gold: u32,
    outfit: Outfit,
    battle_commands: CommandSet,
}

impl Entity {
    /// Entity with default stats and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: Stats::default(),
            inventory: Inventory::empty(),
            gold: 0,
            outfit: Outfit::empty(),
            battle_commands: CommandSet::new(),
        }
    }

    pub fn builder(name: impl Into<String>) -> EntityBuilder {
        EntityBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Stats as stored, without equipment.
    pub fn base_stats(&self) -> &Stats {
        &self.stats
    }

    /// Effective stats: base plus the outfit bonus.
    pub fn stats(&self) -> Stats {
        self.outfit.bonus().apply_to(&self.stats)
    }

    /// Merges `changes` into the base stats, then clamps hp.
    pub fn set_stats(&mut self, changes: StatChanges) {
        self.stats.merge(&changes);
        self.clamp_hp();
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    /// Heals up to `amount`, returning how much was restored.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let before = self.stats.hp;
        self.stats.hp = before.saturating_add(amount);
        self.clamp_hp();
        self.stats.hp - before
    }

    /// Refills hp to the effective maximum.
    pub fn restore_full(&mut self) {
        self.stats.hp = self.stats().max_hp;
    }

    /// Lowers hp by up to `amount`, returning the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.stats.hp;
        self.stats.hp = apply_damage(before, amount);
        before - self.stats.hp
    }

    fn clamp_hp(&mut self) {
        let max_hp = self.stats().max_hp;
        self.stats.hp = self.stats.hp.min(max_hp);
    }

    // ========================================================================
    // Gold
    // ========================================================================

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Removes up to `amount`, returning what was removed.
    pub fn remove_gold(&mut self, amount: u32) -> u32 {
        let removed = self.gold.min(amount);
        self.gold -= removed;
        removed
    }

    /// Forfeits half of the gold, rounded down, and returns it.
    ///
    /// The entity keeps the other half; at zero gold nothing changes.
    pub fn sample_gold(&mut self) -> u32 {
        self.remove_gold(self.gold / 2)
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add_item(&mut self, item: Item, quantity: u32) {
        self.inventory.add(item, quantity);
    }

    pub fn remove_item(&mut self, name: &str, quantity: u32) -> u32 {
        self.inventory.remove(name, quantity)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.get(name).is_some()
    }

    /// Takes one unit of `name` out of the inventory.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        self.inventory.take_one(name)
    }

    /// Uses one unit of `name` on this entity, returning a narration line.
    pub fn use_item(&mut self, name: &str) -> Option<String> {
        let item = self.take_item(name)?;
        Some(item.apply_to(self))
    }

    /// Uses one unit of `name` on `target`.
    ///
    /// Equipment can only be worn by its owner; it stays in the inventory.
    pub fn use_item_on(&mut self, name: &str, target: &mut Entity) -> Option<String> {
        if self.inventory.get(name)?.item.as_equipment().is_some() {
            return None;
        }
        let item = self.take_item(name)?;
        Some(item.apply_to(target))
    }

    // ========================================================================
    // Outfit
    // ========================================================================

    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    /// Moves equipment `name` from the inventory into its slot.
    ///
    /// Whatever the slot held goes back to the inventory.
    pub fn equip(&mut self, name: &str) -> Result<(), EquipError> {
        let slot = self
            .inventory
            .get(name)
            .ok_or_else(|| EquipError::NotInInventory(name.to_owned()))?;
        if slot.item.as_equipment().is_none() {
            return Err(EquipError::NotEquipment(slot.item.name().to_owned()));
        }
        if let Some(item) = self.take_item(name) {
            self.wear(item);
        }
        Ok(())
    }

    /// Moves the item in `slot` back to the inventory.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<(), EquipError> {
        let item = self.outfit.unequip(slot).ok_or(EquipError::SlotEmpty(slot))?;
        self.revoke_command(&item);
        self.inventory.add(item, 1);
        self.clamp_hp();
        Ok(())
    }

    /// Puts `item` on directly, bypassing the inventory.
    ///
    /// A replaced item goes to the inventory; so does `item` itself if it is
    /// not equipment.
    pub(crate) fn wear(&mut self, item: Item) {
        let granted = item
            .as_equipment()
            .and_then(|equipment| equipment.command.clone());
        match self.outfit.equip(item) {
            Ok(replaced) => {
                if let Some(old) = replaced {
                    self.revoke_command(&old);
                    self.inventory.add(old, 1);
                }
                if let Some(command) = granted {
                    self.battle_commands.insert(command);
                }
                self.clamp_hp();
            }
            Err(item) => self.inventory.add(item, 1),
        }
    }

    fn revoke_command(&mut self, item: &Item) {
        if let Some(command) = item.as_equipment().and_then(|e| e.command.as_ref()) {
            self.battle_commands.remove(command.name());
        }
    }

    // ========================================================================
    // Battle commands
    // ========================================================================

    pub fn battle_commands(&self) -> &CommandSet {
        &self.battle_commands
    }

    /// Adds a command, replacing any command with the same name.
    pub fn add_battle_command(&mut self, command: BattleCommand) {
        self.battle_commands.insert(command);
    }

    pub fn remove_battle_command(&mut self, name: &str) -> Option<BattleCommand> {
        self.battle_commands.remove(name)
    }

    pub fn has_battle_command(&self, name: &str) -> bool {
        self.battle_commands.get(name).is_some()
    }
}

/// Builder for constructing entities.
#[derive(Debug)]
pub struct EntityBuilder {
    name: String,
    stats: StatChanges,
    gold: u32,
    items: Vec<(Item, u32)>,
    outfit: Vec<Item>,
    commands: Vec<BattleCommand>,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: StatChanges::default(),
            gold: 0,
            items: Vec::new(),
            outfit: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn stats(mut self, stats: StatChanges) -> Self {
        self.stats = stats;
        self
    }

    pub fn gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn item(mut self, item: Item, quantity: u32) -> Self {
        self.items.push((item, quantity));
        self
    }

    /// Equipment worn from the start.
    pub fn wearing(mut self, item: Item) -> Self {
        self.outfit.push(item);
        self
    }

    pub fn command(mut self, command: BattleCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(mut self, commands: impl IntoIterator<Item = BattleCommand>) -> Self {
        self.commands.extend(commands);
        self
    }

    pub fn build(self) -> Entity {
        let mut entity = Entity::new(self.name);
        entity.stats = Stats::from_changes(&self.stats);
        entity.gold = self.gold;
        for command in self.commands {
            entity.battle_commands.insert(command);
        }
        for item in self.outfit {
            entity.wear(item);
        }
        // Named hp may exceed the base maximum when equipment raises it.
        if let Some(hp) = self.stats.hp {
            entity.stats.hp = hp;
            entity.clamp_hp();
        }
        for (item, quantity) in self.items {
            entity.inventory.add(item, quantity);
        }
        entity
    }
}
