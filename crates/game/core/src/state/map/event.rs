//! Tile events.
//!
//! The core owns only when an event fires and whether it is used up. What
//! it does is an [`EventEffect`] supplied by content.

use std::fmt;
use std::sync::Arc;

use crate::state::Player;

/// Body of an event.
pub trait EventEffect: Send + Sync {
    /// Runs the effect on `player`, returning a narration line.
    fn run(&self, player: &mut Player) -> String;
}

impl<F> EventEffect for F
where
    F: Fn(&mut Player) -> String + Send + Sync,
{
    fn run(&self, player: &mut Player) -> String {
        self(player)
    }
}

/// What makes an event fire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Stepping onto the tile.
    OnArrival,
    /// Typing the word while standing on the tile.
    Command(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    Once,
    Repeatable,
}

/// Triggerable effect attached to a tile.
///
/// Consumption is per tile instance: cloning a tile clones the flag, so two
/// maps built from the same template pay out independently.
#[derive(Clone)]
pub struct Event {
    name: String,
    trigger: Trigger,
    repeat: Repeat,
    consumed: bool,
    effect: Arc<dyn EventEffect>,
}

impl Event {
    /// A one-shot event fired on arrival.
    pub fn new(name: impl Into<String>, effect: impl EventEffect + 'static) -> Self {
        Self {
            name: name.into(),
            trigger: Trigger::OnArrival,
            repeat: Repeat::Once,
            consumed: false,
            effect: Arc::new(effect),
        }
    }

    /// Fires when `word` is entered on the tile instead of on arrival.
    pub fn on_command(mut self, word: impl Into<String>) -> Self {
        self.trigger = Trigger::Command(word.into());
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeat = Repeat::Repeatable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn fires_on_arrival(&self) -> bool {
        !self.consumed && self.trigger == Trigger::OnArrival
    }

    /// Whether typing `word` fires this event (case-insensitive).
    pub fn responds_to(&self, word: &str) -> bool {
        !self.consumed
            && matches!(&self.trigger, Trigger::Command(w) if w.eq_ignore_ascii_case(word.trim()))
    }

    /// Runs the effect unless consumed; one-shot events are consumed.
    pub fn fire(&mut self, player: &mut Player) -> Option<String> {
        if self.consumed {
            return None;
        }
        if self.repeat == Repeat::Once {
            self.consumed = true;
        }
        tracing::debug!("event {:?} fired for {}", self.name, player.entity.name());
        Some(self.effect.run(player))
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .field("repeat", &self.repeat)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}
