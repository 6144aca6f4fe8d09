use std::collections::VecDeque;

use crate::state::Monster;

use super::Event;

/// One grid cell.
///
/// An impassable tile never holds monsters: they are dropped, with a
/// warning, when the tile is walled off or one is placed on a wall.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    passable: bool,
    pub description: String,
    /// Set once the tile has been within a player's sight.
    pub seen: bool,
    monsters: VecDeque<Monster>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub event: Option<Event>,
}

impl Tile {
    /// A passable tile with no description.
    pub fn new() -> Self {
        Self {
            passable: true,
            description: String::new(),
            seen: false,
            monsters: VecDeque::new(),
            event: None,
        }
    }

    /// An impassable tile.
    pub fn wall() -> Self {
        Self::new().with_passable(false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_passable(mut self, passable: bool) -> Self {
        self.set_passable(passable);
        self
    }

    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.add_monster(monster);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    /// Changes passability. Walling off a tile drops its monsters.
    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
        if !passable && !self.monsters.is_empty() {
            tracing::warn!(
                "dropping {} monster(s) from impassable tile",
                self.monsters.len()
            );
            self.monsters.clear();
        }
    }

    pub fn monsters(&self) -> impl ExactSizeIterator<Item = &Monster> {
        self.monsters.iter()
    }

    pub fn has_monsters(&self) -> bool {
        !self.monsters.is_empty()
    }

    /// Appends `monster`, unless the tile is impassable.
    pub fn add_monster(&mut self, monster: Monster) {
        if !self.passable {
            tracing::warn!(
                "monster {} cannot stand on an impassable tile",
                monster.entity.name()
            );
            return;
        }
        self.monsters.push_back(monster);
    }

    /// Removes the monster that engages first.
    pub fn take_front_monster(&mut self) -> Option<Monster> {
        self.monsters.pop_front()
    }

    /// Puts a monster back at the front of the queue.
    pub fn return_monster(&mut self, monster: Monster) {
        if self.passable {
            self.monsters.push_front(monster);
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}
