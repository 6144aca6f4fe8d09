//! Loss sampling: what the loser of a battle gives up.

use crate::env::RandomSource;
use crate::state::{Item, Treasure};

/// Gold and items transferred to a battle's winner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spoils {
    pub gold: u32,
    pub items: Vec<Item>,
}

impl Spoils {
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_owned()).collect()
    }
}

/// Rolls each treasure independently against its probability.
pub fn drop_treasures(treasures: &[Treasure], rng: &mut dyn RandomSource) -> Vec<Item> {
    treasures
        .iter()
        .filter(|treasure| rng.chance(treasure.probability()))
        .map(|treasure| treasure.item.clone())
        .collect()
}
