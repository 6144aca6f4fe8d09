use crate::state::{Entity, Item};

/// An item a monster may drop, with its drop probability in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    pub item: Item,
    probability: f64,
}

impl Treasure {
    /// Clamps `probability` into `[0, 1]`; NaN counts as never.
    pub fn new(item: Item, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { item, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// A non-player combatant with a drop table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub entity: Entity,
    treasures: Vec<Treasure>,
}

impl Monster {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            treasures: Vec::new(),
        }
    }

    pub fn with_treasure(mut self, item: Item, probability: f64) -> Self {
        self.treasures.push(Treasure::new(item, probability));
        self
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_is_clamped() {
        assert_eq!(Treasure::new(Item::new("Gem"), 1.7).probability(), 1.0);
        assert_eq!(Treasure::new(Item::new("Gem"), -0.2).probability(), 0.0);
        assert_eq!(Treasure::new(Item::new("Gem"), f64::NAN).probability(), 0.0);
    }
}
