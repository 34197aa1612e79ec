//! Tile palette - which visual resource draws each tile type.

use mazegen_logic::tiles::TileType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps tile types to visual resource names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePalette {
    resources: HashMap<TileType, String>,
}

impl Default for TilePalette {
    fn default() -> Self {
        let resources = TileType::ALL
            .iter()
            .filter(|t| t.is_placeable())
            .map(|&t| (t, default_resource(t).to_string()))
            .collect();
        Self { resources }
    }
}

fn default_resource(tile: TileType) -> &'static str {
    match tile {
        TileType::Empty => "",
        TileType::OutsideCorner => "tiles/outside_corner",
        TileType::OutsideWall => "tiles/outside_wall",
        TileType::InsideCorner => "tiles/inside_corner",
        TileType::InsideWall => "tiles/inside_wall",
        TileType::StandardPellet => "tiles/standard_pellet",
        TileType::PowerPellet => "tiles/power_pellet",
        TileType::TJunction => "tiles/t_junction",
        TileType::GhostExitWall => "tiles/ghost_exit_wall",
    }
}

impl TilePalette {
    /// A palette with no resources at all.
    pub fn empty() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    pub fn with(mut self, tile: TileType, resource: impl Into<String>) -> Self {
        self.resources.insert(tile, resource.into());
        self
    }

    pub fn without(mut self, tile: TileType) -> Self {
        self.resources.remove(&tile);
        self
    }

    pub fn resource(&self, tile: TileType) -> Option<&str> {
        self.resources.get(&tile).map(String::as_str)
    }
}
