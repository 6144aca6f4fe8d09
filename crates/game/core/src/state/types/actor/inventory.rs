//! Inventory storage for entities.
//!
//! An ordered list of `(item, quantity)` pairs. Adding an item already held
//! raises its quantity; a quantity that reaches zero removes the slot.

use crate::state::types::Item;

/// Inventory slot containing an item and its quantity (always ≥ 1).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: Item,
    pub quantity: u32,
}

impl InventorySlot {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Item names in inventory order.
    pub fn names(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| slot.item.name().to_owned())
            .collect()
    }

    /// Slot index of the named item (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.item.is_named(name))
    }

    pub fn get(&self, name: &str) -> Option<&InventorySlot> {
        self.slots.iter().find(|slot| slot.item.is_named(name))
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |slot| slot.quantity)
    }

    /// Adds `quantity` units. Adding zero units is a no-op.
    pub fn add(&mut self, item: Item, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.slots.iter_mut().find(|slot| slot.item == item) {
            Some(slot) => slot.quantity = slot.quantity.saturating_add(quantity),
            None => self.slots.push(InventorySlot::new(item, quantity)),
        }
    }

    /// Removes up to `quantity` units, returning how many were removed.
    pub fn remove(&mut self, name: &str, quantity: u32) -> u32 {
        let Some(index) = self.position(name) else {
            return 0;
        };
        let slot = &mut self.slots[index];
        let removed = slot.quantity.min(quantity);
        slot.quantity -= removed;
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        removed
    }

    /// Removes one unit and hands back a copy of the item.
    pub fn take_one(&mut self, name: &str) -> Option<Item> {
        let item = self.get(name)?.item.clone();
        self.remove(name, 1);
        Some(item)
    }

    /// First item matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&Item) -> bool) -> Option<&Item> {
        self.slots
            .iter()
            .map(|slot| &slot.item)
            .find(|item| predicate(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_by_name() {
        let mut inventory = Inventory::empty();
        inventory.add(Item::new("Axe"), 1);
        inventory.add(Item::new("Banana"), 1);
        inventory.add(Item::new("Axe"), 2);
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.quantity("axe"), 3);
        assert_eq!(inventory.names(), vec!["Axe", "Banana"]);
    }

    #[test]
    fn removing_last_unit_drops_slot() {
        let mut inventory = Inventory::empty();
        inventory.add(Item::new("Banana"), 2);
        assert_eq!(inventory.remove("Banana", 1), 1);
        assert_eq!(inventory.quantity("Banana"), 1);
        assert_eq!(inventory.remove("Banana", 5), 1);
        assert!(inventory.is_empty());
        assert_eq!(inventory.remove("Banana", 1), 0);
    }

    #[test]
    fn zero_quantity_is_ignored() {
        let mut inventory = Inventory::empty();
        inventory.add(Item::new("Ghost"), 0);
        assert!(inventory.is_empty());
    }

    #[test]
    fn take_one_decrements() {
        let mut inventory = Inventory::empty();
        inventory.add(Item::food("Banana", 5), 2);
        let item = inventory.take_one("BANANA");
        assert_eq!(item.map(|item| item.name().to_owned()), Some("Banana".into()));
        assert_eq!(inventory.quantity("Banana"), 1);
        assert!(inventory.take_one("Apple").is_none());
    }
}
