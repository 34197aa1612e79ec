//! Tile types and structural families.
//!
//! Templates store tiles as small `u8` codes. Each code maps to a named
//! [`TileType`], and each tile type belongs to one [`TileFamily`] that decides
//! how it connects to neighbors and how it is rotated.

use serde::{Deserialize, Serialize};

/// A tile from the maze art set, keyed by its template code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    Empty = 0,
    OutsideCorner = 1,
    OutsideWall = 2,
    InsideCorner = 3,
    InsideWall = 4,
    StandardPellet = 5,
    PowerPellet = 6,
    TJunction = 7,
    GhostExitWall = 8,
}

/// Structural family of a tile type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileFamily {
    /// No tile. Never placed, never connects.
    Empty,
    /// Connects two perpendicular directions.
    Corner,
    /// Straight run (one opposite pair) or a single-direction stub.
    Wall,
    /// Pellet-bearing floor. Position only, always 0°.
    OpenFloor,
    /// Connects three directions, open toward the fourth.
    Junction,
}

impl TileFamily {
    /// Corner, Wall and Junction tiles form the connected wall network.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TileFamily::Corner | TileFamily::Wall | TileFamily::Junction
        )
    }
}

impl TileType {
    pub const ALL: [TileType; 9] = [
        TileType::Empty,
        TileType::OutsideCorner,
        TileType::OutsideWall,
        TileType::InsideCorner,
        TileType::InsideWall,
        TileType::StandardPellet,
        TileType::PowerPellet,
        TileType::TJunction,
        TileType::GhostExitWall,
    ];

    /// Map a template code to a tile type. Codes above 8 are unknown.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn family(self) -> TileFamily {
        match self {
            TileType::Empty => TileFamily::Empty,
            TileType::OutsideCorner | TileType::InsideCorner => TileFamily::Corner,
            TileType::OutsideWall | TileType::InsideWall | TileType::GhostExitWall => {
                TileFamily::Wall
            }
            TileType::StandardPellet | TileType::PowerPellet => TileFamily::OpenFloor,
            TileType::TJunction => TileFamily::Junction,
        }
    }

    pub fn is_structural(self) -> bool {
        self.family().is_structural()
    }

    /// Whether a cell of this type produces a placement record.
    pub fn is_placeable(self) -> bool {
        self != TileType::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            TileType::Empty => "Empty",
            TileType::OutsideCorner => "Outside Corner",
            TileType::OutsideWall => "Outside Wall",
            TileType::InsideCorner => "Inside Corner",
            TileType::InsideWall => "Inside Wall",
            TileType::StandardPellet => "Standard Pellet",
            TileType::PowerPellet => "Power Pellet",
            TileType::TJunction => "T-Junction",
            TileType::GhostExitWall => "Ghost Exit Wall",
        }
    }
}
