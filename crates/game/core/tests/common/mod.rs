#![allow(dead_code)]

use tilequest_core::{
    BattleCommand, Coordinate, Entity, Event, Item, Map, MapId, Monster, Player, StatChanges, Tile,
    World,
};

pub const CENTER: Coordinate = Coordinate::new(1, 1);

/// A 3×3 plus sign: walls in the corners, a harmless monster on the right
/// arm, regen in the center.
pub fn plus_map() -> Map {
    let harmless = Monster::new(
        Entity::builder("Monster")
            .command(BattleCommand::attack().with_success_rate(0.0))
            .build(),
    );
    Map::new(
        "Map",
        vec![
            vec![Tile::wall(), Tile::new(), Tile::wall()],
            vec![Tile::new(), Tile::new(), Tile::new().with_monster(harmless)],
            vec![Tile::wall(), Tile::new(), Tile::wall()],
        ],
        CENTER,
    )
    .expect("plus map is rectangular")
}

/// Two tiles, each with a chest holding 5 gold, opened with "open".
pub fn chest_map() -> Map {
    let chest = || {
        Tile::new().with_event(
            Event::new("Chest", |player: &mut Player| {
                player.entity.add_gold(5);
                "You found 5 gold!".to_owned()
            })
            .on_command("open"),
        )
    };
    Map::new("Chest Map", vec![vec![chest(), chest()]], Coordinate::ORIGIN)
        .expect("chest map is rectangular")
}

pub fn world_with_plus() -> (World, MapId) {
    let mut world = World::default();
    let map = world.add_map(plus_map());
    (world, map)
}

/// Strong, fast, and never hurt by the plus map's monster.
pub fn dude(world: &World, map: MapId) -> Player {
    let entity = Entity::builder("Dude")
        .stats(StatChanges::new().attack(10).agility(10_000).max_hp(2000))
        .gold(10)
        .commands([
            BattleCommand::attack().with_strength(20),
            BattleCommand::escape(),
            BattleCommand::use_item(),
        ])
        .build();
    Player::spawn(entity, map, CENTER, world)
}

/// Never lands a hit.
pub fn newb(world: &World, map: MapId, location: Coordinate) -> Player {
    let entity = Entity::builder("Newb")
        .gold(50)
        .command(BattleCommand::attack().with_success_rate(0.0))
        .build();
    Player::spawn(entity, map, location, world)
}

pub fn slime() -> Monster {
    Monster::new(
        Entity::builder("Slime")
            .gold(5000)
            .command(BattleCommand::attack().with_success_rate(0.0))
            .build(),
    )
    .with_treasure(Item::new("Item"), 1.0)
}

pub fn dragon() -> Monster {
    Monster::new(
        Entity::builder("Dragon")
            .stats(StatChanges::new().attack(50).agility(10_000))
            .command(BattleCommand::attack().with_strength(50))
            .build(),
    )
}
