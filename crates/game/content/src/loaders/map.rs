//! Map data loader.
//!
//! A map file draws the grid as strings, one per row. Every glyph is looked
//! up in the file's legend, which says what a tile of that kind looks like,
//! whether it can be entered, and what waits on it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tilequest_core::{Coordinate, Event, Map, Tile};

use crate::catalog;
use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapFile {
    name: String,
    regen: Coordinate,
    legend: BTreeMap<char, TileSpec>,
    rows: Vec<String>,
}

/// Legend entry describing every tile drawn with one glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSpec {
    #[serde(default)]
    pub description: String,
    #[serde(default = "passable_by_default")]
    pub passable: bool,
    /// Catalog monster names, front of the queue first.
    #[serde(default)]
    pub monsters: Vec<String>,
    #[serde(default)]
    pub event: Option<EventSpec>,
}

fn passable_by_default() -> bool {
    true
}

/// Catalog events a legend entry can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSpec {
    Chest { gold: u32 },
    Well,
}

impl EventSpec {
    pub fn build(self) -> Event {
        match self {
            EventSpec::Chest { gold } => catalog::chest(gold),
            EventSpec::Well => catalog::well(),
        }
    }
}

impl TileSpec {
    /// Builds a fresh tile. Each call yields independent monsters and events.
    pub fn build(&self) -> LoadResult<Tile> {
        let mut tile = Tile::new()
            .with_description(self.description.clone())
            .with_passable(self.passable);
        for name in &self.monsters {
            let monster = catalog::monster(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown monster '{}'", name))?;
            tile = tile.with_monster(monster);
        }
        if let Some(event) = self.event {
            tile = tile.with_event(event.build());
        }
        Ok(tile)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a RON file.
    pub fn load(path: &Path) -> LoadResult<Map> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a map from RON text.
    pub fn parse(content: &str) -> LoadResult<Map> {
        let data: MapFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let mut tiles = Vec::with_capacity(data.rows.len());
        for (row, line) in data.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.chars().count());
            for (col, glyph) in line.chars().enumerate() {
                let spec = data.legend.get(&glyph).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Map '{}' uses glyph '{}' at ({}, {}) with no legend entry",
                        data.name,
                        glyph,
                        row,
                        col
                    )
                })?;
                cells.push(spec.build()?);
            }
            tiles.push(cells);
        }

        // Map::new would swap in the fallback map; a data file should fail loudly.
        let regen_ok = tiles
            .get(data.regen.row as usize)
            .and_then(|row| row.get(data.regen.col as usize))
            .is_some_and(Tile::is_passable);
        if !regen_ok {
            anyhow::bail!(
                "Map '{}' regen location {} is not a passable tile",
                data.name,
                data.regen
            );
        }

        Ok(Map::new(data.name, tiles, data.regen)?)
    }
}
