//! Item types.
//!
//! The core knows only the *effect contracts* of items: plain items do
//! nothing, food restores hp, equipment changes stats and may grant a
//! battle command. Concrete catalogs live outside the core.

use crate::action::BattleCommand;
use crate::stats::StatBonus;

use super::actor::Entity;

/// Outfit slot an equipment item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Torso,
    Legs,
    Shield,
}

/// Equipment-specific data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub slot: EquipmentSlot,
    pub bonus: StatBonus,
    /// Battle command granted while equipped (e.g. a weapon's attack).
    pub command: Option<BattleCommand>,
}

impl Equipment {
    pub fn new(slot: EquipmentSlot, bonus: StatBonus) -> Self {
        Self {
            slot,
            bonus,
            command: None,
        }
    }

    pub fn with_command(mut self, command: BattleCommand) -> Self {
        self.command = Some(command);
        self
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Using it has no effect.
    Plain,
    /// Restores `recovers` hp to whoever it is used on.
    Food { recovers: u32 },
    Equipment(Equipment),
}

/// Something an entity can carry. Items are identified by name.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    kind: ItemKind,
}

impl Item {
    /// A plain item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Plain,
        }
    }

    pub fn food(name: impl Into<String>, recovers: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Food { recovers },
        }
    }

    pub fn equipment(name: impl Into<String>, equipment: Equipment) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Equipment(equipment),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn as_equipment(&self) -> Option<&Equipment> {
        match &self.kind {
            ItemKind::Equipment(equipment) => Some(equipment),
            _ => None,
        }
    }

    pub fn is_food(&self) -> bool {
        matches!(self.kind, ItemKind::Food { .. })
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Applies this item's effect to `target`, returning a narration line.
    ///
    /// The caller has already taken the item out of an inventory.
    pub fn apply_to(self, target: &mut Entity) -> String {
        match self.kind {
            ItemKind::Plain => format!("{} uses {}. Nothing happens.", target.name(), self.name),
            ItemKind::Food { recovers } => {
                let healed = target.restore_hp(recovers);
                format!("{} recovers {} HP from {}.", target.name(), healed, self.name)
            }
            ItemKind::Equipment(_) => {
                let name = self.name.clone();
                target.wear(self);
                format!("{} equips {}.", target.name(), name)
            }
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}
