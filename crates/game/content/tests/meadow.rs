use tilequest_content::{catalog, scaffold};
use tilequest_core::{AutoPilot, Coordinate, GameConfig, PcgRng, Player, Session, World};

fn meadow_world() -> (World, Player) {
    let mut world = World::new(GameConfig::default());
    let meadow = world.add_map(scaffold::meadow().unwrap());
    let player = Player::spawn(
        catalog::hero("Dude"),
        meadow,
        Coordinate::new(1, 1),
        &world,
    );
    (world, player)
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_chest_opens_once() {
    let (mut world, mut player) = meadow_world();
    let mut prompt = AutoPilot;
    let mut rng = PcgRng::seeded(11);
    let mut session = Session::new(&mut prompt, &mut rng);

    let report = world.move_player(&mut player, Coordinate::new(1, 3), None, &mut session);
    assert!(!report.is_blocked());
    // Chests wait for the command word.
    assert_eq!(report.arrival().and_then(|a| a.event.clone()), None);

    assert!(world.interact(&mut player, "open").is_some());
    assert!(world.interact(&mut player, "open").is_none());
    assert_eq!(player.entity.gold(), 15);
}

#[test]
fn test_well_heals_every_time() {
    let (mut world, mut player) = meadow_world();
    let mut prompt = AutoPilot;
    let mut rng = PcgRng::seeded(12);
    let mut session = Session::new(&mut prompt, &mut rng);

    world.move_player(&mut player, Coordinate::new(3, 4), None, &mut session);
    for _ in 0..2 {
        player.entity.take_damage(10);
        assert!(world.interact(&mut player, "DRINK").is_some());
        assert_eq!(player.entity.stats().hp, player.entity.stats().max_hp);
    }
}

// ============================================================================
// Terrain
// ============================================================================

#[test]
fn test_fence_blocks_movement() {
    let (mut world, mut player) = meadow_world();
    let mut prompt = AutoPilot;
    let mut rng = PcgRng::seeded(13);
    let mut session = Session::new(&mut prompt, &mut rng);

    assert!(world.move_up(&mut player, &mut session).is_blocked());
    assert!(world.move_left(&mut player, &mut session).is_blocked());
    assert_eq!(player.location(), Coordinate::new(1, 1));
}
