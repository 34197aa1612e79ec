//! Tile rotation rules.
//!
//! Two steps decide how a tile is turned:
//!
//! 1. [`canonical_rotation`] picks a rotation from the tile's family and its
//!    connectivity in the template, so the tile's open edges line up with
//!    its structural neighbors.
//! 2. [`apply_mirror_correction`] fixes that rotation up for quadrants that
//!    reflect the template horizontally and/or vertically.
//!
//! Malformed connectivity (a corner that is not a clean turn, a junction
//! that does not have exactly three arms) never fails; it falls back to a
//! best-effort rotation so a level is always produced.
//!
//! ```
//! use mazegen_logic::connectivity::Connections;
//! use mazegen_logic::rotation::{apply_mirror_correction, canonical_rotation, Rotation};
//! use mazegen_logic::tiles::TileType;
//!
//! // A corner whose arms go down and right is the unrotated art.
//! let down_right = Connections::new(false, true, true, false);
//! let r = canonical_rotation(TileType::OutsideCorner, down_right);
//! assert_eq!(r, Rotation::Deg0);
//! // Mirrored into the top-right quadrant its arms go down and left.
//! assert_eq!(
//!     apply_mirror_correction(r, TileType::OutsideCorner, true, false),
//!     Rotation::Deg270
//! );
//! ```

use crate::connectivity::{connections, Connections, Direction};
use crate::grid::TemplateGrid;
use crate::quadrant::Quadrant;
use crate::tiles::{TileFamily, TileType};
use serde::{Deserialize, Serialize};

/// A quarter-turn rotation, counter-clockwise in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    fn quarter_turns(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    fn from_quarter_turns(turns: usize) -> Self {
        Self::ALL[turns % 4]
    }

    /// Compose two rotations. Always reduced modulo 360.
    pub fn rotated_by(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

// ── Canonical rotation ──────────────────────────────────────────────────

/// Corner turns: (arm, arm) → rotation of the corner art.
const CORNER_TURNS: [([Direction; 2], Rotation); 4] = [
    ([Direction::Down, Direction::Right], Rotation::Deg0),
    ([Direction::Down, Direction::Left], Rotation::Deg270),
    ([Direction::Up, Direction::Left], Rotation::Deg180),
    ([Direction::Up, Direction::Right], Rotation::Deg90),
];

/// Junction openings: unconnected direction → rotation, with the three arms
/// each entry requires.
const JUNCTION_OPENINGS: [(Direction, [Direction; 3], Rotation); 4] = [
    (
        Direction::Up,
        [Direction::Right, Direction::Down, Direction::Left],
        Rotation::Deg0,
    ),
    (
        Direction::Right,
        [Direction::Up, Direction::Down, Direction::Left],
        Rotation::Deg90,
    ),
    (
        Direction::Down,
        [Direction::Up, Direction::Right, Direction::Left],
        Rotation::Deg180,
    ),
    (
        Direction::Left,
        [Direction::Up, Direction::Right, Direction::Down],
        Rotation::Deg270,
    ),
];

/// Rotation from connectivity alone, before any mirror correction.
pub fn canonical_rotation(tile: TileType, conn: Connections) -> Rotation {
    match tile.family() {
        TileFamily::Corner => corner_rotation(conn),
        TileFamily::Wall => wall_rotation(conn),
        TileFamily::Junction => junction_rotation(conn),
        TileFamily::OpenFloor | TileFamily::Empty => Rotation::Deg0,
    }
}

/// Exactly two perpendicular arms, else 0°.
fn corner_rotation(conn: Connections) -> Rotation {
    if conn.count() != 2 {
        return Rotation::Deg0;
    }
    CORNER_TURNS
        .iter()
        .find(|(arms, _)| conn.has_all(arms))
        .map(|&(_, rotation)| rotation)
        .unwrap_or(Rotation::Deg0)
}

/// Vertical-only runs stand at 90°; horizontal and ambiguous runs lie at 0°.
fn wall_rotation(conn: Connections) -> Rotation {
    if conn.vertical() && !conn.horizontal() {
        Rotation::Deg90
    } else {
        Rotation::Deg0
    }
}

fn junction_rotation(conn: Connections) -> Rotation {
    // Well-formed: exactly one direction left open.
    if let Some(open) = conn.missing() {
        if let Some(&(_, _, rotation)) = JUNCTION_OPENINGS.iter().find(|(d, _, _)| *d == open) {
            return rotation;
        }
    }
    // Malformed: first table entry whose three arms are all present.
    JUNCTION_OPENINGS
        .iter()
        .find(|(_, arms, _)| conn.has_all(arms))
        .map(|&(_, _, rotation)| rotation)
        .unwrap_or(Rotation::Deg0)
}

// ── Mirror correction ───────────────────────────────────────────────────

/// Indexed by quarter turns of the canonical rotation.
const CORNER_MIRROR_H: [Rotation; 4] = [
    Rotation::Deg270,
    Rotation::Deg180,
    Rotation::Deg90,
    Rotation::Deg0,
];
const CORNER_MIRROR_V: [Rotation; 4] = [
    Rotation::Deg90,
    Rotation::Deg0,
    Rotation::Deg270,
    Rotation::Deg180,
];
const JUNCTION_MIRROR_H: [Rotation; 4] = [
    Rotation::Deg0,
    Rotation::Deg270,
    Rotation::Deg180,
    Rotation::Deg90,
];
const JUNCTION_MIRROR_V: [Rotation; 4] = [
    Rotation::Deg180,
    Rotation::Deg90,
    Rotation::Deg0,
    Rotation::Deg270,
];

/// Adjust a canonical rotation for a reflected quadrant.
///
/// Only Corner and Junction art changes under reflection. Reflecting across
/// both axes is a half turn; a single axis uses the family's permutation
/// table. Wall and floor rotations pass through unchanged.
pub fn apply_mirror_correction(
    rotation: Rotation,
    tile: TileType,
    mirror_h: bool,
    mirror_v: bool,
) -> Rotation {
    let (table_h, table_v) = match tile.family() {
        TileFamily::Corner => (&CORNER_MIRROR_H, &CORNER_MIRROR_V),
        TileFamily::Junction => (&JUNCTION_MIRROR_H, &JUNCTION_MIRROR_V),
        _ => return rotation,
    };
    match (mirror_h, mirror_v) {
        (true, true) => rotation.rotated_by(Rotation::Deg180),
        (true, false) => table_h[rotation.quarter_turns()],
        (false, true) => table_v[rotation.quarter_turns()],
        (false, false) => rotation,
    }
}

/// Final rotation of template cell (row, col) placed into `quadrant`.
///
/// The top-left cell of the top-left quadrant is always 0°. That cell is
/// authored to sit unrotated, so it is pinned rather than derived.
pub fn resolve_rotation(
    grid: &TemplateGrid,
    row: usize,
    col: usize,
    tile: TileType,
    quadrant: Quadrant,
) -> Rotation {
    if row == 0 && col == 0 && quadrant == Quadrant::TopLeft {
        return Rotation::Deg0;
    }
    let conn = match (isize::try_from(row), isize::try_from(col)) {
        (Ok(r), Ok(c)) => connections(grid, r, c),
        _ => Connections::NONE,
    };
    apply_mirror_correction(
        canonical_rotation(tile, conn),
        tile,
        quadrant.mirror_horizontal(),
        quadrant.mirror_vertical(),
    )
}
