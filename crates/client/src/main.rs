//! tilequest terminal client.
//!
//! Configuration comes from the environment (see [`CliConfig::from_env`]).
//! Logs go to a file so they never interleave with the game text.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tilequest_client::{CliConfig, Console, Game};
use tilequest_content::{ConfigLoader, MapLoader, catalog, scaffold};
use tilequest_core::{GameConfig, PcgRng, Player, World};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let mut game = build_game(&config)?;
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    game.run(&console);
    Ok(())
}

/// Farm first, then the meadow, or the single map named by `TILEQUEST_MAP`.
fn build_game(config: &CliConfig) -> Result<Game> {
    let farm = scaffold::farm()?;
    let mut game_config = GameConfig::new().with_default_map(farm.clone(), farm.regen_location());
    if let Some(path) = &config.config_file {
        game_config = ConfigLoader::load_onto(path, game_config)?;
    }
    if let Some(radius) = config.sight_radius {
        game_config = game_config.with_sight_radius(radius);
    }

    let mut world = World::new(game_config);
    let start = match &config.map_file {
        Some(path) => {
            let map = MapLoader::load(path)?;
            tracing::info!("Loaded map {:?} from {}", map.name(), path.display());
            world.add_map(map)
        }
        None => {
            let start = world.add_map(farm);
            world.add_map(scaffold::meadow()?);
            start
        }
    };
    let regen = world.map(start).regen_location();
    let player = Player::spawn(catalog::hero(config.player_name.clone()), start, regen, &world);

    let seed = config.seed.unwrap_or_else(time_seed);
    tracing::info!("Starting {} on {} with seed {}", player.entity.name(), start, seed);

    Ok(Game::new(world, player, PcgRng::seeded(seed)).with_minimap_radius(config.minimap_radius))
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Setup logging to a file in the platform cache directory.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "tilequest.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/tilequest.log", log_dir.display());
    Ok(guard)
}

fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "tilequest")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tilequest").join("logs"))
}
