use crate::env::RandomSource;
use crate::state::{Entity, Item, Monster, Player, World};

use super::loot::drop_treasures;

/// What a battle needs from a combatant.
///
/// Battles see only this capability set, never the concrete type.
pub trait Fighter {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn is_player(&self) -> bool {
        false
    }

    /// Called on the loser once the battle is decided.
    fn die(&mut self, world: &World);

    /// Gold forfeited on defeat.
    fn sample_gold(&mut self) -> u32 {
        self.entity_mut().sample_gold()
    }

    /// Items forfeited on defeat; `None` when there is no drop table.
    fn sample_treasures(&mut self, _rng: &mut dyn RandomSource) -> Option<Vec<Item>> {
        None
    }
}

impl Fighter for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn is_player(&self) -> bool {
        true
    }

    fn die(&mut self, world: &World) {
        self.respawn(world);
    }
}

impl Fighter for Monster {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn die(&mut self, _world: &World) {
        self.entity.restore_full();
    }

    /// Monsters give up everything they carry.
    fn sample_gold(&mut self) -> u32 {
        let gold = self.entity.gold();
        self.entity.remove_gold(gold)
    }

    fn sample_treasures(&mut self, rng: &mut dyn RandomSource) -> Option<Vec<Item>> {
        Some(drop_treasures(self.treasures(), rng))
    }
}
