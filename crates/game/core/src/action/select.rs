//! Battle command selection.

use crate::env::{Prompt, RandomSource, choose};
use crate::state::Entity;

use super::BattleCommand;

/// Picks the command `entity` uses this turn.
///
/// An interactive prompt is asked first; unknown names are asked again.
/// On pass, or without a controller, the choice is random weighted by
/// success rate. Returns `None` only when the entity has no commands.
pub fn choose_command(
    entity: &Entity,
    prompt: &mut dyn Prompt,
    rng: &mut dyn RandomSource,
) -> Option<BattleCommand> {
    let commands = entity.battle_commands().as_slice();
    if commands.is_empty() {
        return None;
    }

    let names = entity.battle_commands().names();
    let question = format!("Choose an attack for {}:", entity.name());
    if let Some(index) = choose(prompt, &question, &names) {
        return commands.get(index).cloned();
    }

    weighted_choice(commands, rng).cloned()
}

/// Random choice weighted by success rate; uniform when every rate is zero.
pub fn weighted_choice<'a>(
    commands: &'a [BattleCommand],
    rng: &mut dyn RandomSource,
) -> Option<&'a BattleCommand> {
    let total: f64 = commands.iter().map(BattleCommand::success_rate).sum();
    if total <= 0.0 {
        let len = u32::try_from(commands.len()).unwrap_or(u32::MAX);
        return commands.get(rng.below(len) as usize);
    }

    let mut remaining = rng.next_unit() * total;
    for command in commands {
        if remaining < command.success_rate() {
            return Some(command);
        }
        remaining -= command.success_rate();
    }
    // Rounding can leave a sliver past the last weight.
    commands.iter().rev().find(|c| c.success_rate() > 0.0)
}
