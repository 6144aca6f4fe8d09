//! Additive equipment modifiers.
//!
//! Bonuses are never folded into stored stats. Effective stats are computed
//! on read as `base + Σ bonus`, so equipping, replacing and unequipping
//! cannot double count.

use core::iter::Sum;
use core::ops::Add;

use super::core::Stats;

/// Flat modifier contributed by one equipped item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBonus {
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub agility: i32,
}

impl StatBonus {
    pub const NONE: Self = Self {
        max_hp: 0,
        attack: 0,
        defense: 0,
        agility: 0,
    };

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn max_hp(mut self, value: i32) -> Self {
        self.max_hp = value;
        self
    }

    pub fn attack(mut self, value: i32) -> Self {
        self.attack = value;
        self
    }

    pub fn defense(mut self, value: i32) -> Self {
        self.defense = value;
        self
    }

    pub fn agility(mut self, value: i32) -> Self {
        self.agility = value;
        self
    }

    /// Applies this bonus to base stats, saturating at zero.
    ///
    /// `hp` is carried over and clamped against the effective `max_hp`.
    pub fn apply_to(&self, base: &Stats) -> Stats {
        let mut stats = Stats {
            hp: base.hp,
            max_hp: base.max_hp.saturating_add_signed(self.max_hp),
            attack: base.attack.saturating_add_signed(self.attack),
            defense: base.defense.saturating_add_signed(self.defense),
            agility: base.agility.saturating_add_signed(self.agility),
        };
        stats.clamp_hp();
        stats
    }
}

impl Add for StatBonus {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            max_hp: self.max_hp.saturating_add(rhs.max_hp),
            attack: self.attack.saturating_add(rhs.attack),
            defense: self.defense.saturating_add(rhs.defense),
            agility: self.agility.saturating_add(rhs.agility),
        }
    }
}

impl Sum for StatBonus {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::NONE, Add::add)
    }
}

impl<'a> Sum<&'a StatBonus> for StatBonus {
    fn sum<I: Iterator<Item = &'a StatBonus>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
