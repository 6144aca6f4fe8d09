mod common;

use common::{CENTER, chest_map, dude, world_with_plus};
use tilequest_core::{
    BattleCommand, BattleEvent, Coordinate, Direction, Entity, Event, GameConfig, Map, MapId,
    Monster, MoveError, MoveReport, PcgRng, Player, ScriptedPrompt, Session, Side, StatChanges,
    Stats, Tile, World,
};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_player_defaults() {
    let world = World::default();
    let player = Player::new(Entity::new(Player::DEFAULT_NAME), &world);

    assert_eq!(player.entity.name(), "Player");
    assert_eq!(player.entity.stats(), Stats::new(1, 1, 1, 1));
    assert!(player.entity.inventory().is_empty());
    assert_eq!(player.entity.gold(), 0);
    assert!(player.entity.outfit().is_empty());
    assert!(player.entity.battle_commands().is_empty());
    assert_eq!(player.map(), MapId::DEFAULT);
    assert_eq!(player.location(), Coordinate::ORIGIN);
    assert_eq!(player.previous(), None);
    assert_eq!(player.sight_radius(), GameConfig::DEFAULT_SIGHT_RADIUS);
}

#[test]
fn test_invalid_start_falls_back_to_defaults() {
    let (world, map) = world_with_plus();
    let cases = [
        (MapId(42), CENTER),
        (map, Coordinate::new(0, 0)),
        (map, Coordinate::new(3, 1)),
    ];

    for (start_map, start) in cases {
        let player = Player::spawn(Entity::new("Lost"), start_map, start, &world);
        assert_eq!(player.map(), MapId::DEFAULT, "start {start} on {start_map}");
        assert_eq!(player.location(), world.config().default_location);
    }
}

#[test]
fn test_configured_default_location() {
    let farm = Map::new(
        "Farm",
        vec![vec![Tile::new(); 3]; 3],
        Coordinate::new(2, 2),
    )
    .expect("farm");
    let config = GameConfig::new()
        .with_default_map(farm, Coordinate::new(1, 2))
        .with_sight_radius(1);
    let world = World::new(config);

    let player = Player::spawn(Entity::new("Dude"), MapId(3), CENTER, &world);
    assert_eq!(player.map(), MapId::DEFAULT);
    assert_eq!(player.location(), Coordinate::new(1, 2));
    assert_eq!(player.sight_radius(), 1);
    assert_eq!(world.map(player.map()).name(), "Farm");
}

// ============================================================================
// Movement on the plus map
// ============================================================================

#[test]
fn test_move_to_passable_tile() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(1));
    let mut session = Session::new(&mut prompt, &mut rng);

    let report = world.move_player(&mut player, Coordinate::new(2, 1), None, &mut session);
    assert!(!report.is_blocked());
    assert_eq!(player.map(), map);
    assert_eq!(player.location(), Coordinate::new(2, 1));
}

#[test]
fn test_move_to_impassable_or_outside_is_noop() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(1));
    let mut session = Session::new(&mut prompt, &mut rng);

    let wall = world.move_player(&mut player, Coordinate::new(2, 2), None, &mut session);
    assert_eq!(
        wall,
        MoveReport::Blocked(MoveError::Blocked {
            destination: Coordinate::new(2, 2)
        })
    );
    let outside = world.move_player(&mut player, Coordinate::new(3, 3), None, &mut session);
    assert!(matches!(
        outside,
        MoveReport::Blocked(MoveError::OutOfBounds { .. })
    ));
    let nowhere = world.move_player(&mut player, CENTER, Some(MapId(9)), &mut session);
    assert_eq!(nowhere, MoveReport::Blocked(MoveError::UnknownMap(MapId(9))));

    assert_eq!(player.map(), map);
    assert_eq!(player.location(), CENTER);
    assert_eq!(player.previous(), None);
}

#[test]
fn test_directional_moves_stop_at_walls() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::new(["attack"]), PcgRng::seeded(2));
    let mut session = Session::new(&mut prompt, &mut rng);

    world.move_up(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(0, 1));
    let report = world.move_up(&mut player, &mut session);
    assert_eq!(
        report,
        MoveReport::Blocked(MoveError::OffGrid {
            direction: Direction::Up
        })
    );
    assert_eq!(player.location(), Coordinate::new(0, 1));

    world.move_down(&mut player, &mut session);
    world.move_down(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(2, 1));
    world.move_down(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(2, 1));

    world.move_up(&mut player, &mut session);
    world.move_left(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(1, 0));
    world.move_left(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(1, 0));

    world.move_right(&mut player, &mut session);
    world.move_right(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(1, 2));
    world.move_right(&mut player, &mut session);
    assert_eq!(player.map(), map);
    assert_eq!(player.location(), Coordinate::new(1, 2));
}

#[test]
fn test_monster_engages_on_arrival_and_is_removed() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::new(["attack"]), PcgRng::seeded(3));
    let mut events: Vec<BattleEvent> = Vec::new();
    let mut session = Session::new(&mut prompt, &mut rng).with_observer(&mut events);

    let report = world.move_right(&mut player, &mut session);
    let arrival = report.arrival().expect("moved");
    let battle = arrival.battle.as_ref().expect("monster engaged");
    assert_eq!(battle.winner(), Some(Side::Attacker));
    assert_eq!(arrival.location, Coordinate::new(1, 2));

    let tile = world.map(map).tile_at(Coordinate::new(1, 2)).expect("tile");
    assert!(!tile.has_monsters());
    assert!(!events.is_empty());
}

#[test]
fn test_mover_wins_agility_tie() {
    let even = |name: &str| {
        Entity::builder(name)
            .stats(StatChanges::new().max_hp(5).attack(10).defense(0).agility(1))
            .command(BattleCommand::attack())
            .build()
    };
    let duel = Map::new(
        "Duel",
        vec![vec![
            Tile::new(),
            Tile::new().with_monster(Monster::new(even("Rat"))),
        ]],
        Coordinate::ORIGIN,
    )
    .expect("duel map");
    let mut world = World::default();
    let map = world.add_map(duel);
    let mut player = Player::spawn(even("Dude"), map, Coordinate::ORIGIN, &world);
    let (mut prompt, mut rng) = (ScriptedPrompt::new(["attack"]), PcgRng::seeded(5));
    let mut events: Vec<BattleEvent> = Vec::new();
    let mut session = Session::new(&mut prompt, &mut rng).with_observer(&mut events);

    let report = world.move_right(&mut player, &mut session);
    let battle = report
        .arrival()
        .and_then(|arrival| arrival.battle.clone())
        .expect("battle");
    assert_eq!(battle.winner(), Some(Side::Attacker));
    assert_eq!(battle.rounds, 1);
    assert_eq!(player.location(), Coordinate::new(0, 1));
    assert_eq!(player.entity.stats().hp, 5);
    let first_actor = events.iter().find_map(|event| match event {
        BattleEvent::Acted { side, .. } => Some(*side),
        _ => None,
    });
    assert_eq!(first_actor, Some(Side::Attacker));

    let tile = world.map(map).tile_at(Coordinate::new(0, 1)).expect("tile");
    assert!(!tile.has_monsters());
}

#[test]
fn test_fled_monster_stays_on_tile() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::new(["escape"]), PcgRng::seeded(4));
    let mut session = Session::new(&mut prompt, &mut rng);

    let report = world.move_right(&mut player, &mut session);
    let battle = report
        .arrival()
        .and_then(|arrival| arrival.battle.clone())
        .expect("battle");
    assert_eq!(battle.spoils, None);
    assert_eq!(player.entity.gold(), 10);

    let tile = world.map(map).tile_at(Coordinate::new(1, 2)).expect("tile");
    assert_eq!(tile.monsters().len(), 1);
}

#[test]
fn test_switching_maps_records_previous() {
    let (mut world, map) = world_with_plus();
    let other = world.add_map(Map::default());
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(5));
    let mut session = Session::new(&mut prompt, &mut rng);

    world.move_player(&mut player, Coordinate::new(0, 1), None, &mut session);
    assert_eq!(player.previous(), None);

    world.move_player(&mut player, Coordinate::ORIGIN, Some(other), &mut session);
    assert_eq!(player.map(), other);
    assert_eq!(player.previous(), Some((map, Coordinate::new(0, 1))));
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_chests_pay_out_per_map_instance() {
    let mut world = World::default();
    let first = world.add_map(chest_map());
    let second = world.add_map(chest_map());
    let mut player = Player::spawn(
        Entity::builder("Dude").gold(10).build(),
        first,
        Coordinate::ORIGIN,
        &world,
    );
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(6));
    let mut session = Session::new(&mut prompt, &mut rng);

    assert!(world.interact(&mut player, "open").is_some());
    assert_eq!(player.entity.gold(), 15);
    assert_eq!(world.interact(&mut player, "OPEN"), None);
    assert_eq!(player.entity.gold(), 15);

    world.move_player(&mut player, Coordinate::new(0, 0), Some(MapId::DEFAULT), &mut session);
    assert_eq!(world.interact(&mut player, "open"), None);

    world.move_player(&mut player, Coordinate::ORIGIN, Some(second), &mut session);
    world.interact(&mut player, "open");
    assert_eq!(player.entity.gold(), 20);

    world.move_right(&mut player, &mut session);
    world.interact(&mut player, "open");
    assert_eq!(player.entity.gold(), 25);

    world.move_player(&mut player, Coordinate::new(0, 1), Some(first), &mut session);
    world.interact(&mut player, "open");
    assert_eq!(player.entity.gold(), 30);
    assert_eq!(world.interact(&mut player, "kick"), None);
}

#[test]
fn test_arrival_event_fires_once() {
    let mut world = World::default();
    let trap = Tile::new().with_event(Event::new("Trap", |player: &mut Player| {
        player.entity.remove_gold(1);
        "A coin falls through the floor.".to_owned()
    }));
    let map = world.add_map(
        Map::new("Trap", vec![vec![Tile::new(), trap]], Coordinate::ORIGIN).expect("trap map"),
    );
    let mut player = Player::spawn(
        Entity::builder("Dude").gold(3).build(),
        map,
        Coordinate::ORIGIN,
        &world,
    );
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(7));
    let mut session = Session::new(&mut prompt, &mut rng);

    let report = world.move_right(&mut player, &mut session);
    assert!(report.arrival().and_then(|a| a.event.as_ref()).is_some());
    world.move_left(&mut player, &mut session);
    let report = world.move_right(&mut player, &mut session);
    assert_eq!(report.arrival().and_then(|a| a.event.clone()), None);
    assert_eq!(player.entity.gold(), 2);
}

#[test]
fn test_repeatable_event_fires_every_time() {
    let mut world = World::default();
    let well = Tile::new().with_event(
        Event::new("Well", |player: &mut Player| {
            player.entity.restore_full();
            "You drink from the well.".to_owned()
        })
        .on_command("drink")
        .repeatable(),
    );
    let map = world.add_map(Map::new("Well", vec![vec![well]], Coordinate::ORIGIN).expect("well"));
    let mut player = Player::spawn(Entity::new("Dude"), map, Coordinate::ORIGIN, &world);

    for _ in 0..3 {
        assert!(world.interact(&mut player, "drink").is_some());
    }
}

// ============================================================================
// Visibility and death
// ============================================================================

#[test]
fn test_update_map_reveals_around_center() {
    let mut world = World::default();
    let line = world.add_map(
        Map::new("Line", vec![vec![Tile::new(); 4]], Coordinate::ORIGIN).expect("line"),
    );
    let player = Player::spawn(Entity::new("Dude"), line, Coordinate::ORIGIN, &world);

    player.update_map(&mut world, None);
    assert!(!world.map(line).tiles()[0][3].seen);
    assert!(world.map(line).tiles()[0][2].seen);

    player.update_map(&mut world, Some(Coordinate::new(0, 2)));
    assert!(world.map(line).tiles()[0][3].seen);
}

#[test]
fn test_moving_reveals_tiles() {
    let mut world = World::default();
    let line = world.add_map(
        Map::new("Line", vec![vec![Tile::new(); 5]], Coordinate::ORIGIN).expect("line"),
    );
    let mut player = Player::spawn(Entity::new("Dude"), line, Coordinate::ORIGIN, &world);
    player.set_sight_radius(0);
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(8));
    let mut session = Session::new(&mut prompt, &mut rng);

    world.move_right(&mut player, &mut session);
    let seen: Vec<bool> = world.map(line).tiles()[0].iter().map(|t| t.seen).collect();
    assert_eq!(seen, vec![false, true, false, false, false]);
}

#[test]
fn test_die_returns_to_regen_location() {
    let (mut world, map) = world_with_plus();
    let mut player = dude(&world, map);
    let (mut prompt, mut rng) = (ScriptedPrompt::default(), PcgRng::seeded(9));
    let mut session = Session::new(&mut prompt, &mut rng);

    world.move_down(&mut player, &mut session);
    assert_eq!(player.location(), Coordinate::new(2, 1));
    player.entity.take_damage(1500);

    player.respawn(&world);
    assert_eq!(player.location(), world.map(map).regen_location());
    assert_eq!(player.entity.stats().hp, 2000);
}
