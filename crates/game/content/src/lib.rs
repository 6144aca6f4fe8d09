//! Built-in content for tilequest: items, monsters, events and maps.
//!
//! The core crate defines what these things *do*; this crate names concrete
//! ones and, with the `loaders` feature, reads maps (RON) and game
//! configuration (TOML) from data files.

pub mod catalog;
pub mod scaffold;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EventSpec, LoadResult, MapLoader, TileSpec};
