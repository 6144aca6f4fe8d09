//! Damage calculation.

use crate::stats::Stats;

/// Damage dealt by an attack of the given `strength`.
///
/// # Formula
///
/// ```text
/// damage = max(0, attack + strength - defense)
/// ```
///
/// Both stat blocks are effective stats (base plus equipment).
pub fn calculate_damage(attacker: &Stats, defender: &Stats, strength: u32) -> u32 {
    attacker
        .attack
        .saturating_add(strength)
        .saturating_sub(defender.defense)
}

/// HP left after taking `damage` (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
