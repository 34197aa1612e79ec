//! Quadrants and world coordinate mapping.
//!
//! The full maze is the template reflected into four quadrants:
//!
//! ```text
//!     ┌───────────┬───────────┐
//!     │  TopLeft  │ TopRight  │   TopRight   = mirror H
//!     │ (as-is)   │           │   BottomLeft = mirror V
//!     ├───────────┼───────────┤   BottomRight = mirror H + V
//!     │BottomLeft │BottomRight│
//!     └───────────┴───────────┘
//! ```
//!
//! World space is y-up. The two top quadrants share the template's last row
//! as the horizontal seam, so the bottom quadrants skip that row.

use crate::grid::TemplateGrid;
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Generation order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn mirror_horizontal(self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }

    pub fn mirror_vertical(self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }

    /// Template rows projected into this quadrant.
    pub fn row_range(self, template_rows: usize) -> Range<usize> {
        if self.mirror_vertical() {
            0..template_rows.saturating_sub(1)
        } else {
            0..template_rows
        }
    }

    /// World position of template cell (row, col) in this quadrant.
    pub fn world_position(self, row: usize, col: usize, frame: &QuadrantFrame) -> WorldPosition {
        let (row, col) = (row as f32, col as f32);
        let x = if self.mirror_horizontal() {
            frame.mirror_x - col
        } else {
            frame.origin_x + col
        };
        let y = if self.mirror_vertical() {
            -frame.bottom_offset + row
        } else {
            frame.top_y - row
        };
        WorldPosition { x, y }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }
}

/// A tile center in world units (y-up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Authored placement constants for the top-left quadrant.
///
/// Everything else is derived from these and the template size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantLayout {
    /// World x of template column 0 in the top-left quadrant.
    pub origin_x: f32,
    /// World y of template row 0 in the top-left quadrant. `None` = rows − 0.5.
    pub top_y: Option<f32>,
}

impl Default for QuadrantLayout {
    fn default() -> Self {
        Self {
            origin_x: 0.5,
            top_y: None,
        }
    }
}

impl QuadrantLayout {
    /// Resolve the concrete frame for a template.
    pub fn frame(&self, grid: &TemplateGrid) -> QuadrantFrame {
        QuadrantFrame::new(self, grid.rows(), grid.cols())
    }
}

/// Concrete coordinate constants for one template size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantFrame {
    pub origin_x: f32,
    pub top_y: f32,
    /// Mirror axis W: mirrored column c lands at `W − c`.
    pub mirror_x: f32,
    /// H: bottom-half row r lands at `−H + r`.
    pub bottom_offset: f32,
}

impl QuadrantFrame {
    pub fn new(layout: &QuadrantLayout, rows: usize, cols: usize) -> Self {
        let (rows, cols) = (rows as f32, cols as f32);
        let top_y = layout.top_y.unwrap_or(rows - 0.5);
        Self {
            origin_x: layout.origin_x,
            top_y,
            // Last column of the right half sits one unit right of the left half's.
            mirror_x: layout.origin_x + 2.0 * cols - 1.0,
            // Bottom row `rows − 2` sits one unit below top row `rows − 1`.
            bottom_offset: 2.0 * rows - 2.0 - top_y,
        }
    }
}
