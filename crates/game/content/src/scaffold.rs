//! Ready-made maps for new games.

use tilequest_core::{Coordinate, Map, MapError, Tile};

use crate::catalog;

/// 5×5 field of grass, regenerating in the middle.
pub fn farm() -> Result<Map, MapError> {
    let grass = || Tile::new().with_description("You are standing on some grass.");
    let tiles = (0..5).map(|_| (0..5).map(|_| grass()).collect()).collect();
    Map::new("Farm", tiles, Coordinate::new(2, 2))
}

/// A single row of chests, each opened with "open".
pub fn chest_row(len: usize, gold: u32) -> Result<Map, MapError> {
    let tiles = vec![
        (0..len)
            .map(|_| {
                Tile::new()
                    .with_description("There is a chest here.")
                    .with_event(catalog::chest(gold))
            })
            .collect(),
    ];
    Map::new("Chest Room", tiles, Coordinate::ORIGIN)
}

/// The walled meadow shipped with the crate.
#[cfg(feature = "loaders")]
pub fn meadow() -> crate::loaders::LoadResult<Map> {
    crate::loaders::MapLoader::parse(include_str!("../data/maps/meadow.ron"))
}
