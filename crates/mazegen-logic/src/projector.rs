//! Placement record streams.
//!
//! [`project`] walks one quadrant of the template row-major and yields a
//! [`PlacementRecord`] per placeable cell. [`project_level`] chains all four
//! quadrants in generation order. Both are lazy and `Clone`, so a consumer
//! can restart a stream by cloning it before iterating.
//!
//! Empty cells and unknown tile codes produce no record.

use crate::grid::TemplateGrid;
use crate::quadrant::{Quadrant, QuadrantFrame, QuadrantLayout, WorldPosition};
use crate::rotation::{resolve_rotation, Rotation};
use crate::tiles::TileType;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One decided tile instance: what to place, where, and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub tile_type: TileType,
    pub position: WorldPosition,
    pub rotation: Rotation,
    pub quadrant: Quadrant,
    /// Template cell this record was projected from.
    pub template_row: usize,
    pub template_col: usize,
}

impl PlacementRecord {
    /// Tracking name, `Tile_{code}_R{y}_C{x}`.
    pub fn debug_name(&self) -> String {
        format!(
            "Tile_{}_R{}_C{}",
            self.tile_type.code(),
            self.position.y,
            self.position.x
        )
    }
}

/// Lazy record stream for one quadrant.
#[derive(Debug, Clone)]
pub struct QuadrantProjection<'a> {
    grid: &'a TemplateGrid,
    quadrant: Quadrant,
    frame: QuadrantFrame,
    rows: Range<usize>,
    row: usize,
    col: usize,
}

impl<'a> QuadrantProjection<'a> {
    pub fn new(grid: &'a TemplateGrid, quadrant: Quadrant, frame: QuadrantFrame) -> Self {
        let rows = quadrant.row_range(grid.rows());
        Self {
            grid,
            quadrant,
            frame,
            row: rows.start,
            rows,
            col: 0,
        }
    }
}

impl Iterator for QuadrantProjection<'_> {
    type Item = PlacementRecord;

    fn next(&mut self) -> Option<PlacementRecord> {
        while self.row < self.rows.end {
            let (row, col) = (self.row, self.col);
            self.col += 1;
            if self.col >= self.grid.cols() {
                self.col = 0;
                self.row += 1;
            }
            if let Some(record) = place_cell(self.grid, self.quadrant, &self.frame, row, col) {
                return Some(record);
            }
        }
        None
    }
}

/// Decide the record for one template cell, or `None` if nothing is placed.
pub fn place_cell(
    grid: &TemplateGrid,
    quadrant: Quadrant,
    frame: &QuadrantFrame,
    row: usize,
    col: usize,
) -> Option<PlacementRecord> {
    let code = grid.code(row, col)?;
    let Some(tile_type) = TileType::from_code(code) else {
        log::debug!("skipping unknown tile code {} at ({}, {})", code, row, col);
        return None;
    };
    if !tile_type.is_placeable() {
        return None;
    }
    Some(PlacementRecord {
        tile_type,
        position: quadrant.world_position(row, col, frame),
        rotation: resolve_rotation(grid, row, col, tile_type, quadrant),
        quadrant,
        template_row: row,
        template_col: col,
    })
}

/// Records for one quadrant of `grid`.
pub fn project<'a>(
    grid: &'a TemplateGrid,
    quadrant: Quadrant,
    layout: &QuadrantLayout,
) -> QuadrantProjection<'a> {
    QuadrantProjection::new(grid, quadrant, layout.frame(grid))
}

/// Records for the whole level: TopLeft, TopRight, BottomLeft, BottomRight.
pub fn project_level<'a>(
    grid: &'a TemplateGrid,
    layout: &QuadrantLayout,
) -> impl Iterator<Item = PlacementRecord> + Clone + 'a {
    let frame = layout.frame(grid);
    Quadrant::ALL
        .into_iter()
        .flat_map(move |q| QuadrantProjection::new(grid, q, frame))
}

/// Record count a full-level projection must produce.
///
/// Every placeable cell appears once per quadrant, except the seam row,
/// which the two bottom quadrants skip.
pub fn expected_record_count(grid: &TemplateGrid) -> usize {
    let seam = match grid.rows() {
        0 => 0,
        rows => grid.placeable_in_row(rows - 1),
    };
    grid.placeable_count() * 4 - seam * 2
}
