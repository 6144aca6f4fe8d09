//! Plain-text views of the world.
//!
//! Only tiles the player has seen are drawn. Everything else is blank.

use std::fmt::Write;

use tilequest_core::{BattleEvent, Coordinate, Entity, Map, Outcome, Player, Tile};

pub const PLAYER: char = '@';
pub const MONSTER: char = 'M';
pub const EVENT: char = '?';
pub const FLOOR: char = '.';
pub const WALL: char = '#';
pub const UNSEEN: char = ' ';

fn glyph(tile: &Tile) -> char {
    if !tile.seen {
        UNSEEN
    } else if !tile.is_passable() {
        WALL
    } else if tile.has_monsters() {
        MONSTER
    } else if tile.event.as_ref().is_some_and(|event| !event.is_consumed()) {
        EVENT
    } else {
        FLOOR
    }
}

/// Draws rows `rows` and columns `cols` of `map`, one line per row.
fn draw(map: &Map, player: Coordinate, rows: (u32, u32), cols: (u32, u32)) -> String {
    let mut out = String::new();
    for row in rows.0..=rows.1 {
        let line: String = (cols.0..=cols.1)
            .map(|col| {
                let here = Coordinate::new(row, col);
                if here == player {
                    PLAYER
                } else {
                    map.tile_at(here).map_or(UNSEEN, glyph)
                }
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// The whole map.
pub fn map(map: &Map, player: &Player) -> String {
    let mut out = format!("{}\n", map.name());
    out.push_str(&draw(
        map,
        player.location(),
        (0, map.rows().saturating_sub(1)),
        (0, map.cols().saturating_sub(1)),
    ));
    out
}

/// The square of `radius` tiles around the player, clipped to the map.
pub fn minimap(map: &Map, player: &Player, radius: u32) -> String {
    let center = player.location();
    let last_row = map.rows().saturating_sub(1);
    let last_col = map.cols().saturating_sub(1);
    draw(
        map,
        center,
        (
            center.row.saturating_sub(radius),
            center.row.saturating_add(radius).min(last_row),
        ),
        (
            center.col.saturating_sub(radius),
            center.col.saturating_add(radius).min(last_col),
        ),
    )
}

pub fn status(entity: &Entity) -> String {
    let stats = entity.stats();
    let mut out = String::new();
    let _ = writeln!(out, "{}", entity.name());
    let _ = writeln!(
        out,
        "  HP {}/{}  ATK {}  DEF {}  AGI {}",
        stats.hp, stats.max_hp, stats.attack, stats.defense, stats.agility
    );
    let _ = writeln!(out, "  Gold {}", entity.gold());
    let _ = writeln!(
        out,
        "  Commands: {}",
        entity.battle_commands().names().join(", ")
    );
    out
}

pub fn inventory(entity: &Entity) -> String {
    let mut out = String::new();
    if entity.inventory().is_empty() {
        out.push_str("Your pack is empty.\n");
    }
    for slot in entity.inventory().slots() {
        let _ = writeln!(out, "  {} x{}", slot.item.name(), slot.quantity);
    }
    for (slot, item) in entity.outfit().iter() {
        let _ = writeln!(out, "  [{}] {}", slot, item.name());
    }
    out
}

/// One line of battle narration.
pub fn battle_line(event: &BattleEvent) -> String {
    match event {
        BattleEvent::Started { attacker, defender } => {
            format!("{} attacks {}!", attacker, defender)
        }
        BattleEvent::RoundStarted { round } => format!("-- Round {} --", round),
        BattleEvent::Acted {
            actor,
            command: None,
            ..
        } => format!("{} has nothing to do.", actor),
        BattleEvent::Acted {
            actor,
            command: Some(command),
            outcome,
            ..
        } => match outcome {
            Outcome::Applied(narration) => narration.clone(),
            Outcome::Failed => format!("{}'s {} failed.", actor, command),
            Outcome::Fled => format!("{} got away!", actor),
        },
        BattleEvent::Won {
            winner,
            loser,
            gold,
            items,
        } => {
            let mut line = format!("{} defeated {} and took {} gold", winner, loser, gold);
            if !items.is_empty() {
                let _ = write!(line, " and {}", items.join(", "));
            }
            line.push('!');
            line
        }
        BattleEvent::Fled { by } => format!("{} escaped the battle.", by),
        BattleEvent::Stalemate { rounds } => {
            format!("Neither side could win after {} rounds.", rounds)
        }
    }
}
