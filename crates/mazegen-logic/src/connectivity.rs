//! Structural connectivity of template cells.
//!
//! A cell is connected in a direction when the neighbor one step that way
//! is inside the grid and belongs to the wall network (Corner, Wall or
//! Junction family). Pellet floor, empty cells, unknown codes and anything
//! past the edge count as "no connection".
//!
//! Connectivity is always read from the unmirrored template. It is a
//! property of the authored topology, not of the quadrant being generated.

use crate::grid::TemplateGrid;
use serde::{Deserialize, Serialize};

/// Compass direction in template space (row 0 is "up").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, col) step toward this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Which of the four neighbors take part in the wall network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connections {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl Connections {
    pub const NONE: Self = Self {
        up: false,
        right: false,
        down: false,
        left: false,
    };

    pub fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// Connections set exactly in `dirs`.
    pub fn from_directions(dirs: &[Direction]) -> Self {
        let mut c = Self::NONE;
        for &d in dirs {
            c.set(d, true);
        }
        c
    }

    pub fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, dir: Direction, connected: bool) {
        match dir {
            Direction::Up => self.up = connected,
            Direction::Right => self.right = connected,
            Direction::Down => self.down = connected,
            Direction::Left => self.left = connected,
        }
    }

    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.has(d)).count()
    }

    /// True when every direction in `dirs` is connected (others may be too).
    pub fn has_all(&self, dirs: &[Direction]) -> bool {
        dirs.iter().all(|&d| self.has(d))
    }

    pub fn vertical(&self) -> bool {
        self.up || self.down
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    /// The single unconnected direction of a three-way pattern.
    pub fn missing(&self) -> Option<Direction> {
        if self.count() != 3 {
            return None;
        }
        Direction::ALL.into_iter().find(|&d| !self.has(d))
    }
}

/// Whether the neighbor of (row, col) toward `dir` is structural.
pub fn connects(grid: &TemplateGrid, row: isize, col: isize, dir: Direction) -> bool {
    let (dr, dc) = dir.offset();
    let (Some(nr), Some(nc)) = (row.checked_add(dr), col.checked_add(dc)) else {
        return false;
    };
    grid.tile_at(nr, nc)
        .map(|t| t.is_structural())
        .unwrap_or(false)
}

/// Connectivity pattern of a template cell. Total over all coordinates.
pub fn connections(grid: &TemplateGrid, row: isize, col: isize) -> Connections {
    Connections {
        up: connects(grid, row, col, Direction::Up),
        right: connects(grid, row, col, Direction::Right),
        down: connects(grid, row, col, Direction::Down),
        left: connects(grid, row, col, Direction::Left),
    }
}
