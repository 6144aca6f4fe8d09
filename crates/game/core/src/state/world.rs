use crate::config::GameConfig;
use crate::state::{Coordinate, Map, MapId};

/// Arena of maps addressed by [`MapId`].
///
/// [`MapId::DEFAULT`] is the configured default map. Maps added later get
/// ids from 1 upward; each is an independent instance even when two share
/// a name.
#[derive(Clone, Debug)]
pub struct World {
    config: GameConfig,
    default_map: Map,
    maps: Vec<Map>,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let default_map = config.default_map.clone();
        Self {
            config,
            default_map,
            maps: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Adds `map` and returns its id.
    pub fn add_map(&mut self, map: Map) -> MapId {
        self.maps.push(map);
        MapId(self.maps.len() as u32)
    }

    pub fn contains(&self, id: MapId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: MapId) -> Option<&Map> {
        match id.0.checked_sub(1) {
            None => Some(&self.default_map),
            Some(index) => self.maps.get(index as usize),
        }
    }

    pub fn get_mut(&mut self, id: MapId) -> Option<&mut Map> {
        match id.0.checked_sub(1) {
            None => Some(&mut self.default_map),
            Some(index) => self.maps.get_mut(index as usize),
        }
    }

    /// The map `id`, or the default map when `id` is unknown.
    pub fn map(&self, id: MapId) -> &Map {
        self.get(id).unwrap_or(&self.default_map)
    }

    pub fn map_mut(&mut self, id: MapId) -> &mut Map {
        let index = id.0.checked_sub(1).map(|index| index as usize);
        match index {
            Some(index) if index < self.maps.len() => &mut self.maps[index],
            _ => &mut self.default_map,
        }
    }

    /// Ids of every map, default first.
    pub fn ids(&self) -> impl Iterator<Item = MapId> {
        (0..=self.maps.len() as u32).map(MapId)
    }

    /// Marks tiles within `radius` of `center` on map `id` as seen.
    pub fn update_visibility(&mut self, id: MapId, center: Coordinate, radius: u32) {
        if let Some(map) = self.get_mut(id) {
            map.reveal(center, radius);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
