//! Bounded tile grids.
//!
//! A [`Map`] is rectangular, at least 1×1, and its regen location is always
//! a passable tile. Its shape never changes; tile contents do.

pub mod event;
pub mod tile;

pub use event::{Event, EventEffect, Repeat, Trigger};
pub use tile::Tile;

use crate::error::{ErrorSeverity, GameError};
use crate::state::Coordinate;

/// Grid shapes no fallback can repair.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    #[error("map {name:?} has no tiles")]
    Empty { name: String },

    #[error("map {name:?} row {row} has {found} tiles, expected {expected}")]
    Ragged {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "MAP_EMPTY",
            Self::Ragged { .. } => "MAP_RAGGED",
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    name: String,
    tiles: Vec<Vec<Tile>>,
    regen_location: Coordinate,
}

impl Map {
    pub const DEFAULT_NAME: &'static str = "Map";

    /// Validates and builds a map.
    ///
    /// An empty or ragged grid is an error. A regen location that is out of
    /// bounds or impassable is an authoring mistake: it is logged and the
    /// default map is returned instead.
    pub fn new(
        name: impl Into<String>,
        tiles: Vec<Vec<Tile>>,
        regen_location: Coordinate,
    ) -> Result<Self, MapError> {
        let name = name.into();
        let expected = match tiles.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(MapError::Empty { name }),
        };
        if let Some((row, found)) = tiles
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(MapError::Ragged {
                name,
                row,
                expected,
                found,
            });
        }

        let map = Self {
            name,
            tiles,
            regen_location,
        };
        if !map.is_passable(regen_location) {
            tracing::warn!(
                "map {:?}: regen location {} is not a passable tile; using the default map",
                map.name,
                regen_location
            );
            return Ok(Self::default());
        }
        Ok(map)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.tiles.len() as u32
    }

    pub fn cols(&self) -> u32 {
        self.tiles.first().map_or(0, Vec::len) as u32
    }

    pub fn regen_location(&self) -> Coordinate {
        self.regen_location
    }

    /// Rows of tiles, top to bottom.
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.rows() && coord.col < self.cols()
    }

    pub fn tile_at(&self, coord: Coordinate) -> Option<&Tile> {
        self.tiles
            .get(coord.row as usize)
            .and_then(|row| row.get(coord.col as usize))
    }

    pub fn tile_at_mut(&mut self, coord: Coordinate) -> Option<&mut Tile> {
        self.tiles
            .get_mut(coord.row as usize)
            .and_then(|row| row.get_mut(coord.col as usize))
    }

    /// False out of bounds or on an impassable tile.
    pub fn is_passable(&self, coord: Coordinate) -> bool {
        self.tile_at(coord).is_some_and(Tile::is_passable)
    }

    /// Marks every tile within `radius` (Chebyshev) of `center` as seen.
    pub fn reveal(&mut self, center: Coordinate, radius: u32) {
        let Some(last_row) = self.rows().checked_sub(1) else {
            return;
        };
        let last_col = self.cols().saturating_sub(1);
        let top = center.row.saturating_sub(radius);
        let left = center.col.saturating_sub(radius);
        let bottom = center.row.saturating_add(radius).min(last_row);
        let right = center.col.saturating_add(radius).min(last_col);

        for row in top..=bottom {
            for col in left..=right {
                if let Some(tile) = self.tile_at_mut(Coordinate::new(row, col)) {
                    tile.seen = true;
                }
            }
        }
    }
}

impl Default for Map {
    /// A single passable tile named "Map".
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_owned(),
            tiles: vec![vec![Tile::new()]],
            regen_location: Coordinate::ORIGIN,
        }
    }
}
