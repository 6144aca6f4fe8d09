//! Base stats stored on every entity.
//!
//! All values are unsigned, so "never negative" holds by construction.
//! `hp` is clamped into `[0, max_hp]` after every mutation.

/// The five attributes of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub agility: u32,
}

impl Stats {
    /// Creates stats at full health.
    pub const fn new(max_hp: u32, attack: u32, defense: u32, agility: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            attack,
            defense,
            agility,
        }
    }

    /// Merges the given overrides, leaving missing fields untouched, then
    /// clamps `hp`.
    pub fn apply(&mut self, changes: &StatChanges) {
        self.merge(changes);
        self.clamp_hp();
    }

    /// Merges the given overrides without clamping.
    ///
    /// Callers that clamp against an effective maximum (base plus equipment)
    /// use this and clamp themselves.
    pub fn merge(&mut self, changes: &StatChanges) {
        if let Some(max_hp) = changes.max_hp {
            self.max_hp = max_hp;
        }
        if let Some(hp) = changes.hp {
            self.hp = hp;
        }
        if let Some(attack) = changes.attack {
            self.attack = attack;
        }
        if let Some(defense) = changes.defense {
            self.defense = defense;
        }
        if let Some(agility) = changes.agility {
            self.agility = agility;
        }
    }

    /// Builds stats from defaults overridden by `changes`.
    pub fn from_changes(changes: &StatChanges) -> Self {
        let mut stats = Self::default();
        // Raising max_hp without naming hp starts the entity at full health.
        if changes.hp.is_none() {
            if let Some(max_hp) = changes.max_hp {
                stats.hp = max_hp;
            }
        }
        stats.apply(changes);
        stats
    }

    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp);
    }
}

impl Default for Stats {
    /// Every attribute 1, at full health.
    fn default() -> Self {
        Self::new(1, 1, 1, 1)
    }
}

/// Partial stat overrides; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChanges {
    pub hp: Option<u32>,
    pub max_hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub agility: Option<u32>,
}

impl StatChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = Some(max_hp);
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.defense = Some(defense);
        self
    }

    pub fn agility(mut self, agility: u32) -> Self {
        self.agility = Some(agility);
        self
    }
}
