//! Tile world - a `hecs`-backed tile sink.

use hecs::{Entity, World};
use mazegen_logic::projector::PlacementRecord;
use mazegen_logic::quadrant::Quadrant;

use crate::components::{Name, Tile, Transform, Visual};
use crate::palette::TilePalette;
use crate::sink::{PlacementError, TileSink};

/// ECS world holding one generated level's tiles.
pub struct TileWorld {
    /// ECS world containing all tile entities
    pub world: World,
    palette: TilePalette,
}

impl TileWorld {
    pub fn new(palette: TilePalette) -> Self {
        Self {
            world: World::new(),
            palette,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.world.query::<&Tile>().iter().count()
    }

    pub fn tiles_in(&self, quadrant: Quadrant) -> usize {
        self.world
            .query::<&Tile>()
            .iter()
            .filter(|(_, tile)| tile.quadrant == quadrant)
            .count()
    }

    /// Find a tile entity by its tracking name.
    pub fn find_by_name(&self, name: &str) -> Option<Entity> {
        self.world
            .query::<&Name>()
            .iter()
            .find(|(_, n)| n.0 == name)
            .map(|(e, _)| e)
    }

    /// Transform of the tile projected from template (row, col) in `quadrant`.
    pub fn transform_at(&self, quadrant: Quadrant, row: usize, col: usize) -> Option<Transform> {
        self.world
            .query::<(&Tile, &Transform)>()
            .iter()
            .find(|(_, (tile, _))| {
                tile.quadrant == quadrant && tile.template_row == row && tile.template_col == col
            })
            .map(|(_, (_, transform))| *transform)
    }
}

impl TileSink for TileWorld {
    fn clear_all(&mut self) {
        let tiles: Vec<Entity> = self.world.query::<&Tile>().iter().map(|(e, _)| e).collect();
        for entity in tiles {
            // Collected from this world a moment ago, so it still exists.
            let _ = self.world.despawn(entity);
        }
    }

    fn place(&mut self, record: &PlacementRecord) -> Result<(), PlacementError> {
        let resource = self
            .palette
            .resource(record.tile_type)
            .ok_or(PlacementError::MissingVisual(record.tile_type))?
            .to_string();
        self.world.spawn((
            Tile::from(record),
            Transform::from(record),
            Name(record.debug_name()),
            Visual { resource },
        ));
        Ok(())
    }
}
