//! Render collaborator seam for battles.
//!
//! A battle reports what happens as [`BattleEvent`]s. Frontends format them;
//! the core only emits.

use crate::action::Outcome;
use crate::combat::Side;

/// Narration of a battle, in the order things happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Started {
        attacker: String,
        defender: String,
    },
    RoundStarted {
        round: u32,
    },
    Acted {
        side: Side,
        actor: String,
        /// `None` when the actor had nothing to use.
        command: Option<String>,
        outcome: Outcome,
    },
    Won {
        winner: String,
        loser: String,
        gold: u32,
        items: Vec<String>,
    },
    Fled {
        by: String,
    },
    Stalemate {
        rounds: u32,
    },
}

/// Receives battle narration.
pub trait BattleObserver {
    fn on_event(&mut self, event: &BattleEvent);
}

impl BattleObserver for Vec<BattleEvent> {
    fn on_event(&mut self, event: &BattleEvent) {
        self.push(event.clone());
    }
}
