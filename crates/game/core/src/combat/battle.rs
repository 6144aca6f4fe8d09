//! The battle state machine.
//!
//! Two combatants trade actions in rounds until one dies, one flees, or the
//! battle stalls. Each round the more agile side acts first; ties go to the
//! attacker. A side without commands fails every action.

use crate::action::{Outcome, choose_command};
use crate::config::BattleConfig;
use crate::env::{AutoPilot, BattleEvent, BattleObserver, Prompt, RandomSource};
use crate::state::World;

use super::Fighter;
use super::loot::Spoils;

/// Which end of the battle a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The side that started the battle.
    Attacker,
    Defender,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Attacker => Self::Defender,
            Self::Defender => Self::Attacker,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    Ongoing,
    Won { winner: Side },
    Fled { by: Side },
    /// Neither side can finish the other.
    Stalemate,
}

impl BattleState {
    pub fn is_over(self) -> bool {
        self != Self::Ongoing
    }
}

/// How a battle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub state: BattleState,
    pub rounds: u32,
    /// What the winner took; `None` unless the battle was won.
    pub spoils: Option<Spoils>,
}

impl BattleReport {
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            BattleState::Won { winner } => Some(winner),
            _ => None,
        }
    }
}

/// A fighter together with whoever decides its moves.
pub struct Combatant<'a> {
    fighter: &'a mut dyn Fighter,
    prompt: Option<&'a mut dyn Prompt>,
}

impl<'a> Combatant<'a> {
    /// A fighter steered through `prompt`.
    pub fn controlled(fighter: &'a mut dyn Fighter, prompt: &'a mut dyn Prompt) -> Self {
        Self {
            fighter,
            prompt: Some(prompt),
        }
    }

    /// A fighter using the automatic policy.
    pub fn auto(fighter: &'a mut dyn Fighter) -> Self {
        Self {
            fighter,
            prompt: None,
        }
    }

    fn name(&self) -> String {
        self.fighter.entity().name().to_owned()
    }

    fn has_commands(&self) -> bool {
        !self.fighter.entity().battle_commands().is_empty()
    }
}

pub struct Battle<'a> {
    attacker: Combatant<'a>,
    defender: Combatant<'a>,
    config: BattleConfig,
    observer: Option<&'a mut dyn BattleObserver>,
    state: BattleState,
    rounds: u32,
}

impl<'a> Battle<'a> {
    pub fn new(attacker: Combatant<'a>, defender: Combatant<'a>) -> Self {
        Self {
            attacker,
            defender,
            config: BattleConfig::default(),
            observer: None,
            state: BattleState::Ongoing,
            rounds: 0,
        }
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_observer(mut self, observer: &'a mut dyn BattleObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    fn side(&self, side: Side) -> &Combatant<'a> {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Combatant<'a> {
        match side {
            Side::Attacker => &mut self.attacker,
            Side::Defender => &mut self.defender,
        }
    }

    /// Acting order for the next round: higher agility first, ties to the
    /// attacker.
    pub fn order(&self) -> [Side; 2] {
        let attacker = self.attacker.fighter.entity().stats().agility;
        let defender = self.defender.fighter.entity().stats().agility;
        if defender > attacker {
            [Side::Defender, Side::Attacker]
        } else {
            [Side::Attacker, Side::Defender]
        }
    }

    fn emit(&mut self, event: BattleEvent) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_event(&event);
        }
    }

    /// Plays one round: each side acts once unless the battle ends first.
    pub fn play_round(&mut self, rng: &mut dyn RandomSource) -> BattleState {
        if self.state.is_over() {
            return self.state;
        }
        self.rounds += 1;
        self.emit(BattleEvent::RoundStarted { round: self.rounds });
        tracing::debug!("round {}", self.rounds);

        for side in self.order() {
            self.act(side, rng);
            if self.state.is_over() {
                break;
            }
        }
        self.state
    }

    fn act(&mut self, side: Side, rng: &mut dyn RandomSource) {
        let (actor, target) = match side {
            Side::Attacker => (&mut self.attacker, &mut self.defender),
            Side::Defender => (&mut self.defender, &mut self.attacker),
        };

        let mut auto = AutoPilot;
        let prompt: &mut dyn Prompt = match actor.prompt.as_deref_mut() {
            Some(prompt) => prompt,
            None => &mut auto,
        };

        let command = choose_command(actor.fighter.entity(), prompt, rng);
        let outcome = match &command {
            Some(command) => command.attempt(
                actor.fighter.entity_mut(),
                target.fighter.entity_mut(),
                prompt,
                rng,
            ),
            None => Outcome::Failed,
        };

        let actor_name = actor.name();
        let actor_alive = actor.fighter.entity().is_alive();
        let target_alive = target.fighter.entity().is_alive();
        tracing::debug!(
            "{} used {:?}: {:?}",
            actor_name,
            command.as_ref().map(|c| c.name()),
            outcome
        );

        self.state = match outcome {
            Outcome::Fled => BattleState::Fled { by: side },
            _ if !target_alive => BattleState::Won { winner: side },
            _ if !actor_alive => BattleState::Won {
                winner: side.other(),
            },
            _ => BattleState::Ongoing,
        };
        self.emit(BattleEvent::Acted {
            side,
            actor: actor_name,
            command: command.map(|c| c.name().to_owned()),
            outcome,
        });
    }

    /// Runs to completion and settles the result.
    ///
    /// The loser dies (players respawn through `world`) and its gold and
    /// treasures go to the winner.
    pub fn run(mut self, world: &World, rng: &mut dyn RandomSource) -> BattleReport {
        let (attacker, defender) = (self.attacker.name(), self.defender.name());
        tracing::debug!("{} engages {}", attacker, defender);
        self.emit(BattleEvent::Started { attacker, defender });

        while !self.state.is_over() {
            if !self.attacker.has_commands() && !self.defender.has_commands() {
                tracing::warn!("neither side has a battle command");
                self.state = BattleState::Stalemate;
                break;
            }
            if self.rounds >= self.config.max_rounds {
                self.state = BattleState::Stalemate;
                break;
            }
            self.play_round(rng);
        }

        let spoils = match self.state {
            BattleState::Won { winner } => Some(self.settle(winner, world, rng)),
            BattleState::Fled { by } => {
                let by = self.side(by).name();
                tracing::info!("{} fled", by);
                self.emit(BattleEvent::Fled { by });
                None
            }
            _ => {
                tracing::info!("battle ended in a stalemate after {} rounds", self.rounds);
                self.emit(BattleEvent::Stalemate {
                    rounds: self.rounds,
                });
                None
            }
        };

        BattleReport {
            state: self.state,
            rounds: self.rounds,
            spoils,
        }
    }

    fn settle(&mut self, winner: Side, world: &World, rng: &mut dyn RandomSource) -> Spoils {
        let loser = self.side_mut(winner.other());
        let gold = loser.fighter.sample_gold();
        let items = loser.fighter.sample_treasures(rng).unwrap_or_default();
        loser.fighter.die(world);
        let loser_name = loser.name();

        let spoils = Spoils { gold, items };
        let champion = self.side_mut(winner);
        let entity = champion.fighter.entity_mut();
        entity.add_gold(spoils.gold);
        for item in &spoils.items {
            entity.add_item(item.clone(), 1);
        }
        let winner_name = champion.name();

        tracing::info!(
            "{} defeated {} and took {} gold, {} item(s)",
            winner_name,
            loser_name,
            spoils.gold,
            spoils.items.len()
        );
        self.emit(BattleEvent::Won {
            winner: winner_name,
            loser: loser_name,
            gold: spoils.gold,
            items: spoils.item_names(),
        });
        spoils
    }
}
