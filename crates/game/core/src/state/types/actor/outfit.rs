//! Equipped items, one per slot.
//!
//! The outfit is the only source of stat bonuses. [`Outfit::bonus`] is
//! recomputed from what is worn, never accumulated.

use std::collections::BTreeMap;

use crate::state::types::{EquipmentSlot, Item};
use crate::stats::StatBonus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outfit {
    slots: BTreeMap<EquipmentSlot, Item>,
}

impl Outfit {
    /// Creates an empty outfit (nothing worn).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    /// Puts `item` into its slot, returning the item it replaced.
    ///
    /// Items that are not equipment are handed straight back.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, Item> {
        match item.as_equipment().map(|equipment| equipment.slot) {
            Some(slot) => Ok(self.slots.insert(slot, item)),
            None => Err(item),
        }
    }

    /// Empties `slot`, returning what was worn there.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// Sum of the bonuses of everything worn.
    pub fn bonus(&self) -> StatBonus {
        self.slots
            .values()
            .filter_map(Item::as_equipment)
            .map(|equipment| equipment.bonus)
            .sum()
    }
}
