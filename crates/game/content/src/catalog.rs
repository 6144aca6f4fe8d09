//! Built-in items, monsters, commands, and tile events.
//!
//! The core knows only what food, equipment and events *do*. This module
//! names concrete ones.

use tilequest_core::{
    BattleCommand, Entity, Equipment, EquipmentSlot, Event, Item, Monster, Player, StatBonus,
    StatChanges,
};

// ============================================================================
// Items
// ============================================================================

pub fn banana() -> Item {
    Item::food("Banana", 5)
}

pub fn bread() -> Item {
    Item::food("Bread", 10)
}

pub fn sword() -> Item {
    Item::equipment(
        "Sword",
        Equipment::new(EquipmentSlot::Weapon, StatBonus::new().attack(3)).with_command(
            BattleCommand::attack()
                .with_name("Slash")
                .with_strength(2)
                .with_success_rate(0.8),
        ),
    )
}

pub fn helmet() -> Item {
    Item::equipment(
        "Helmet",
        Equipment::new(EquipmentSlot::Helmet, StatBonus::new().defense(2)),
    )
}

pub fn buckler() -> Item {
    Item::equipment(
        "Buckler",
        Equipment::new(EquipmentSlot::Shield, StatBonus::new().defense(1).agility(-1)),
    )
}

// ============================================================================
// Commands and combatants
// ============================================================================

/// Attack, a coin-flip escape, and item use.
pub fn standard_commands() -> Vec<BattleCommand> {
    vec![
        BattleCommand::attack(),
        BattleCommand::escape().with_success_rate(0.5),
        BattleCommand::use_item(),
    ]
}

/// A fresh adventurer with starting gear in the pack.
pub fn hero(name: impl Into<String>) -> Entity {
    Entity::builder(name)
        .stats(
            StatChanges::new()
                .max_hp(30)
                .attack(4)
                .defense(2)
                .agility(3),
        )
        .gold(10)
        .commands(standard_commands())
        .item(banana(), 3)
        .item(sword(), 1)
        .item(helmet(), 1)
        .build()
}

pub fn slime() -> Monster {
    Monster::new(
        Entity::builder("Slime")
            .stats(StatChanges::new().max_hp(6).attack(2).defense(0).agility(1))
            .gold(3)
            .command(BattleCommand::attack().with_success_rate(0.6))
            .build(),
    )
    .with_treasure(banana(), 0.5)
}

pub fn dragon() -> Monster {
    Monster::new(
        Entity::builder("Dragon")
            .stats(
                StatChanges::new()
                    .max_hp(200)
                    .attack(50)
                    .defense(10)
                    .agility(10_000),
            )
            .gold(500)
            .command(BattleCommand::attack().with_name("Fire Breath").with_strength(50))
            .build(),
    )
    .with_treasure(buckler(), 1.0)
}

/// Looks a monster up by name (case-insensitive).
pub fn monster(name: &str) -> Option<Monster> {
    match name.trim().to_ascii_lowercase().as_str() {
        "slime" => Some(slime()),
        "dragon" => Some(dragon()),
        _ => None,
    }
}

// ============================================================================
// Events
// ============================================================================

/// One-shot chest opened with "open".
pub fn chest(gold: u32) -> Event {
    Event::new("Chest", move |player: &mut Player| {
        player.entity.add_gold(gold);
        format!("{} opens the chest and finds {} gold!", player.entity.name(), gold)
    })
    .on_command("open")
}

/// Restores hp each time "drink" is entered.
pub fn well() -> Event {
    Event::new("Well", |player: &mut Player| {
        player.entity.restore_full();
        format!("{} drinks from the well and feels refreshed.", player.entity.name())
    })
    .on_command("drink")
    .repeatable()
}
