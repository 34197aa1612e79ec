//! Tile components attached to spawned tile entities.

use mazegen_logic::projector::PlacementRecord;
use mazegen_logic::quadrant::Quadrant;
use mazegen_logic::rotation::Rotation;
use mazegen_logic::tiles::TileType;
use serde::{Deserialize, Serialize};

/// Marks an entity as a generated maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
    pub quadrant: Quadrant,
    pub template_row: usize,
    pub template_col: usize,
}

/// World position and orientation of a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation,
}

impl Transform {
    /// Rotation about the z axis in degrees.
    pub fn z_degrees(&self) -> f32 {
        self.rotation.degrees() as f32
    }
}

/// Tracking name for debugging and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Visual resource the tile is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    pub resource: String,
}

impl From<&PlacementRecord> for Tile {
    fn from(record: &PlacementRecord) -> Self {
        Self {
            tile_type: record.tile_type,
            quadrant: record.quadrant,
            template_row: record.template_row,
            template_col: record.template_col,
        }
    }
}

impl From<&PlacementRecord> for Transform {
    fn from(record: &PlacementRecord) -> Self {
        Self {
            x: record.position.x,
            y: record.position.y,
            rotation: record.rotation,
        }
    }
}
