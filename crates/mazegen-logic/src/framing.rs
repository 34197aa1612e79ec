//! Level extent and camera framing.
//!
//! The core never drives a camera. It only reports the orthographic framing
//! that shows the whole generated level, for whichever collaborator does.

use crate::grid::TemplateGrid;
use serde::{Deserialize, Serialize};

/// Padding added around the level's larger dimension, in world units.
pub const FRAMING_PADDING: f32 = 2.0;
/// Camera depth in front of the tile plane.
pub const CAMERA_DEPTH: f32 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelFraming {
    /// Width of both halves side by side.
    pub width: f32,
    /// Height of both halves, seam row counted once.
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub depth: f32,
    /// Half-height of the orthographic view volume.
    pub orthographic_size: f32,
}

impl LevelFraming {
    pub fn for_grid(grid: &TemplateGrid) -> Self {
        Self::for_size(grid.rows(), grid.cols())
    }

    pub fn for_size(rows: usize, cols: usize) -> Self {
        let width = cols as f32 * 2.0;
        let height = rows.saturating_sub(1) as f32 * 2.0;
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: -height / 4.0,
            depth: CAMERA_DEPTH,
            orthographic_size: width.max(height) / 2.0 + FRAMING_PADDING,
        }
    }
}
