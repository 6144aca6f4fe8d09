//! Battle commands and their resolution.
//!
//! A [`BattleCommand`] is a named, probabilistic action. Each attempt draws
//! once against `success_rate`; a miss still consumes the turn.

use std::fmt;
use std::sync::Arc;

use crate::combat::calculate_damage;
use crate::env::{Prompt, RandomSource, choose};
use crate::state::{Entity, Item};

/// Result of attempting a command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The effect took place; the string narrates it.
    Applied(String),
    /// The draw failed, or nothing could be done.
    Failed,
    /// The actor escaped.
    Fled,
}

/// User-supplied effect for [`CommandKind::Custom`].
pub trait CustomEffect: Send + Sync {
    fn apply(&self, actor: &mut Entity, target: &mut Entity) -> Outcome;
}

impl<F> CustomEffect for F
where
    F: Fn(&mut Entity, &mut Entity) -> Outcome + Send + Sync,
{
    fn apply(&self, actor: &mut Entity, target: &mut Entity) -> Outcome {
        self(actor, target)
    }
}

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// Damage = max(0, attack + strength - defense). Plain attacks have
    /// strength 0.
    Attack { strength: u32 },
    Escape,
    /// Use an inventory item on self or the opponent.
    UseItem,
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<dyn CustomEffect>),
}

impl fmt::Debug for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { strength } => f.debug_struct("Attack").field("strength", strength).finish(),
            Self::Escape => f.write_str("Escape"),
            Self::UseItem => f.write_str("UseItem"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named action a combatant can take in battle. Identified by name.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCommand {
    name: String,
    success_rate: f64,
    kind: CommandKind,
}

impl BattleCommand {
    pub const DEFAULT_STRENGTH: u32 = 0;

    fn with_kind(name: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            success_rate: 1.0,
            kind,
        }
    }

    /// "Attack" with the default strength.
    pub fn attack() -> Self {
        Self::with_kind(
            "Attack",
            CommandKind::Attack {
                strength: Self::DEFAULT_STRENGTH,
            },
        )
    }

    /// "Escape": ends the battle on success.
    pub fn escape() -> Self {
        Self::with_kind("Escape", CommandKind::Escape)
    }

    /// "Use": pick an item from the inventory and a target.
    pub fn use_item() -> Self {
        Self::with_kind("Use", CommandKind::UseItem)
    }

    pub fn custom(name: impl Into<String>, effect: impl CustomEffect + 'static) -> Self {
        Self::with_kind(name, CommandKind::Custom(Arc::new(effect)))
    }

    /// A command that always applies and does nothing else.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = name.clone();
        Self::custom(name, move |actor: &mut Entity, _target: &mut Entity| {
            Outcome::Applied(format!("{} uses {}. Nothing happens.", actor.name(), label))
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Probability the effect applies; clamped into `[0, 1]`.
    pub fn with_success_rate(mut self, success_rate: f64) -> Self {
        self.success_rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        self
    }

    /// Sets the strength of an attack; no effect on other kinds.
    pub fn with_strength(mut self, strength: u32) -> Self {
        if let CommandKind::Attack { strength: current } = &mut self.kind {
            *current = strength;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Attempts the command once.
    ///
    /// `prompt` is consulted only by commands that need further choices
    /// (which item, on whom).
    pub fn attempt(
        &self,
        actor: &mut Entity,
        target: &mut Entity,
        prompt: &mut dyn Prompt,
        rng: &mut dyn RandomSource,
    ) -> Outcome {
        if let CommandKind::UseItem = self.kind {
            return self.attempt_use(actor, target, prompt, rng);
        }

        if !rng.chance(self.success_rate) {
            return Outcome::Failed;
        }

        match &self.kind {
            CommandKind::Attack { strength } => {
                let damage = calculate_damage(&actor.stats(), &target.stats(), *strength);
                let dealt = target.take_damage(damage);
                Outcome::Applied(format!(
                    "{} uses {} on {} for {} damage.",
                    actor.name(),
                    self.name,
                    target.name(),
                    dealt
                ))
            }
            CommandKind::Escape => Outcome::Fled,
            CommandKind::Custom(effect) => effect.apply(actor, target),
            CommandKind::UseItem => Outcome::Failed,
        }
    }

    /// Item and target are chosen before the draw; the item is consumed
    /// only when the draw succeeds.
    fn attempt_use(
        &self,
        actor: &mut Entity,
        target: &mut Entity,
        prompt: &mut dyn Prompt,
        rng: &mut dyn RandomSource,
    ) -> Outcome {
        let choice = if prompt.is_interactive() {
            choose_item_and_target(actor, target, prompt)
        } else {
            auto_item_and_target(actor)
        };
        let Some((item_name, on)) = choice else {
            return Outcome::Failed;
        };

        if !rng.chance(self.success_rate) {
            return Outcome::Failed;
        }

        let line = match on {
            ItemTarget::Actor => actor.use_item(&item_name),
            ItemTarget::Opponent => actor.use_item_on(&item_name, target),
        };
        line.map_or(Outcome::Failed, Outcome::Applied)
    }
}

impl PartialEq for BattleCommand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for BattleCommand {}

/// Whom an item is used on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemTarget {
    Actor,
    Opponent,
}

/// Asks for an item, then for a target. Pass at either step → `None`.
pub fn choose_item_and_target(
    actor: &Entity,
    opponent: &Entity,
    prompt: &mut dyn Prompt,
) -> Option<(String, ItemTarget)> {
    let items = actor.inventory().names();
    let item_index = choose(prompt, "Which item?", &items)?;
    let item = items.get(item_index)?.clone();

    let whom = [actor.name().to_owned(), opponent.name().to_owned()];
    let target = match choose(prompt, "On whom?", &whom)? {
        0 => ItemTarget::Actor,
        _ => ItemTarget::Opponent,
    };
    Some((item, target))
}

/// Policy without input: eat the first food, otherwise throw the first
/// item that is not equipment.
fn auto_item_and_target(actor: &Entity) -> Option<(String, ItemTarget)> {
    if let Some(food) = actor.inventory().find(Item::is_food) {
        return Some((food.name().to_owned(), ItemTarget::Actor));
    }
    let junk = actor
        .inventory()
        .find(|item| item.as_equipment().is_none())?;
    Some((junk.name().to_owned(), ItemTarget::Opponent))
}

/// Battle commands kept sorted by name, at most one per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandSet {
    commands: Vec<BattleCommand>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `command`, replacing any command with the same name.
    pub fn insert(&mut self, command: BattleCommand) {
        match self
            .commands
            .binary_search_by(|existing| existing.name.as_str().cmp(command.name()))
        {
            Ok(index) => self.commands[index] = command,
            Err(index) => self.commands.insert(index, command),
        }
    }

    /// Removes the command named `name` (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<BattleCommand> {
        let index = self.commands.iter().position(|c| c.is_named(name))?;
        Some(self.commands.remove(index))
    }

    /// Looks a command up by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&BattleCommand> {
        self.commands.iter().find(|c| c.is_named(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleCommand> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[BattleCommand] {
        &self.commands
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<BattleCommand> for CommandSet {
    fn from_iter<I: IntoIterator<Item = BattleCommand>>(iter: I) -> Self {
        let mut set = Self::new();
        for command in iter {
            set.insert(command);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AutoPilot, PcgRng, ScriptedPrompt};
    use crate::state::{Equipment, EquipmentSlot};
    use crate::stats::{StatBonus, StatChanges};

    fn fighter(attack: u32, defense: u32) -> Entity {
        Entity::builder("Fighter")
            .stats(StatChanges::new().max_hp(100).attack(attack).defense(defense))
            .build()
    }

    #[test]
    fn attack_subtracts_defense() {
        let mut actor = fighter(10, 0);
        let mut target = fighter(0, 4);
        let mut rng = PcgRng::seeded(1);
        let command = BattleCommand::attack().with_strength(20);

        let outcome = command.attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(target.stats().hp, 100 - 26);
    }

    #[test]
    fn weak_attack_deals_no_damage() {
        let mut actor = fighter(1, 0);
        let mut target = fighter(0, 50);
        let mut rng = PcgRng::seeded(1);
        BattleCommand::attack().attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
        assert_eq!(target.stats().hp, 100);
    }

    #[test]
    fn plain_attack_into_equal_defense_is_harmless() {
        let mut actor = Entity::builder("Fighter")
            .stats(StatChanges::new().max_hp(10).attack(5).defense(0))
            .build();
        let mut target = Entity::builder("Wall")
            .stats(StatChanges::new().max_hp(10).attack(0).defense(5))
            .build();
        let mut rng = PcgRng::seeded(1);

        let outcome =
            BattleCommand::attack().attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(target.stats().hp, 10);
    }

    #[test]
    fn zero_success_rate_always_fails() {
        let mut actor = fighter(50, 0);
        let mut target = fighter(0, 0);
        let mut rng = PcgRng::seeded(5);
        let command = BattleCommand::attack().with_success_rate(0.0);
        for _ in 0..100 {
            let outcome = command.attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
            assert_eq!(outcome, Outcome::Failed);
        }
        assert_eq!(target.stats().hp, 100);
    }

    #[test]
    fn success_rate_is_clamped() {
        assert_eq!(BattleCommand::escape().with_success_rate(3.0).success_rate(), 1.0);
        assert_eq!(BattleCommand::escape().with_success_rate(-1.0).success_rate(), 0.0);
        assert_eq!(BattleCommand::escape().with_success_rate(f64::NAN).success_rate(), 0.0);
    }

    #[test]
    fn escape_flees_without_changes() {
        let mut actor = fighter(1, 1);
        let mut target = fighter(1, 1);
        let mut rng = PcgRng::seeded(2);
        let outcome =
            BattleCommand::escape().attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
        assert_eq!(outcome, Outcome::Fled);
        assert_eq!(actor, fighter(1, 1));
        assert_eq!(target, fighter(1, 1));
    }

    #[test]
    fn use_item_on_opponent_via_prompt() {
        let mut actor = Entity::builder("Dude")
            .item(Item::new("Banana"), 1)
            .item(Item::food("Axe", 3), 3)
            .build();
        let mut enemy = Entity::builder("Enemy")
            .stats(StatChanges::new().max_hp(10).hp(1))
            .build();
        let mut prompt = ScriptedPrompt::new(["goulash", "axe", "bill", "enemy"]);
        let mut rng = PcgRng::seeded(3);

        let outcome =
            BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut prompt, &mut rng);
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(actor.inventory().quantity("Axe"), 2);
        assert_eq!(enemy.stats().hp, 4);
    }

    #[test]
    fn use_item_pass_consumes_nothing() {
        let mut actor = Entity::builder("Dude").item(Item::new("Banana"), 1).build();
        let mut enemy = Entity::new("Enemy");
        let mut rng = PcgRng::seeded(3);

        let mut prompt = ScriptedPrompt::new(["banana", "bill", "pass"]);
        let outcome =
            BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut prompt, &mut rng);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(actor.inventory().quantity("Banana"), 1);
    }

    #[test]
    fn auto_use_prefers_food_on_self() {
        let mut actor = Entity::builder("Slime")
            .stats(StatChanges::new().max_hp(10).hp(1))
            .item(Item::new("Rock"), 1)
            .item(Item::food("Jelly", 4), 1)
            .build();
        let mut enemy = Entity::new("Dude");
        let mut rng = PcgRng::seeded(4);

        BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut AutoPilot, &mut rng);
        assert_eq!(actor.stats().hp, 5);
        assert!(!actor.has_item("Jelly"));
        assert!(actor.has_item("Rock"));
    }

    #[test]
    fn auto_use_never_throws_equipment() {
        let sword = Item::equipment(
            "Sword",
            Equipment::new(EquipmentSlot::Weapon, StatBonus::new().attack(3)),
        );
        let mut actor = Entity::builder("Knight").item(sword, 1).build();
        let mut enemy = Entity::new("Dude");
        let mut rng = PcgRng::seeded(4);

        let outcome =
            BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut AutoPilot, &mut rng);
        assert_eq!(outcome, Outcome::Failed);
        assert!(actor.has_item("Sword"));
        assert!(enemy.outfit().is_empty());
        assert_eq!(enemy.stats().attack, 1);
    }

    #[test]
    fn equipment_chosen_for_opponent_stays_home() {
        let sword = Item::equipment(
            "Sword",
            Equipment::new(EquipmentSlot::Weapon, StatBonus::new().attack(3)),
        );
        let mut actor = Entity::builder("Dude").item(sword, 1).build();
        let mut enemy = Entity::new("Enemy");
        let mut prompt = ScriptedPrompt::new(["sword", "enemy"]);
        let mut rng = PcgRng::seeded(4);

        let outcome =
            BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut prompt, &mut rng);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(actor.inventory().quantity("Sword"), 1);
        assert!(enemy.outfit().is_empty());
    }

    #[test]
    fn use_item_with_empty_inventory_fails() {
        let mut actor = Entity::new("Slime");
        let mut enemy = Entity::new("Dude");
        let mut rng = PcgRng::seeded(4);
        let outcome =
            BattleCommand::use_item().attempt(&mut actor, &mut enemy, &mut AutoPilot, &mut rng);
        assert_eq!(outcome, Outcome::Failed);
    }

    #[test]
    fn custom_effect_runs() {
        let drain = BattleCommand::custom("Drain", |actor: &mut Entity, target: &mut Entity| {
            let taken = target.take_damage(1);
            actor.restore_hp(taken);
            Outcome::Applied(format!("{} drains {}", actor.name(), target.name()))
        });
        let mut actor = Entity::builder("Bat")
            .stats(StatChanges::new().max_hp(5).hp(1))
            .build();
        let mut target = Entity::builder("Dude")
            .stats(StatChanges::new().max_hp(5))
            .build();
        let mut rng = PcgRng::seeded(8);

        drain.attempt(&mut actor, &mut target, &mut AutoPilot, &mut rng);
        assert_eq!(actor.stats().hp, 2);
        assert_eq!(target.stats().hp, 4);
    }

    #[test]
    fn command_set_sorted_and_deduplicated() {
        let set: CommandSet = [
            BattleCommand::named("Yell"),
            BattleCommand::named("Run"),
            BattleCommand::attack(),
            BattleCommand::attack().with_strength(9),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.names(), vec!["Attack", "Run", "Yell"]);
        assert!(matches!(
            set.get("ATTACK").map(BattleCommand::kind),
            Some(CommandKind::Attack { strength: 9 })
        ));
    }
}
