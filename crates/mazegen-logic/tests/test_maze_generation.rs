//! Integration tests for the full layout pipeline.
//!
//! Exercises: TemplateGrid → connections → canonical_rotation
//! → apply_mirror_correction → project / project_level
//!
//! All tests are pure logic — no ECS, no rendering.

use mazegen_logic::connectivity::{connections, Connections};
use mazegen_logic::grid::TemplateGrid;
use mazegen_logic::projector::{expected_record_count, project, project_level, PlacementRecord};
use mazegen_logic::quadrant::{Quadrant, QuadrantLayout, WorldPosition};
use mazegen_logic::rotation::{apply_mirror_correction, canonical_rotation, Rotation};
use mazegen_logic::templates;
use mazegen_logic::tiles::{TileFamily, TileType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

// ── Helpers ────────────────────────────────────────────────────────────

fn level(grid: &TemplateGrid) -> Vec<PlacementRecord> {
    project_level(grid, &QuadrantLayout::default()).collect()
}

/// Rotation of one template cell in one quadrant, if it was placed there.
fn rotation_of(records: &[PlacementRecord], q: Quadrant, row: usize, col: usize) -> Option<Rotation> {
    records
        .iter()
        .find(|r| r.quadrant == q && r.template_row == row && r.template_col == col)
        .map(|r| r.rotation)
}

/// Random rectangular grid; codes 0–9 so unknown codes show up too.
fn random_grid(rng: &mut StdRng) -> TemplateGrid {
    let rows = rng.gen_range(1..12);
    let cols = rng.gen_range(1..12);
    let cells = (0..rows * cols).map(|_| rng.gen_range(0..10u8)).collect();
    TemplateGrid::from_codes(rows, cols, cells).unwrap()
}

fn random_grids(seed: u64, count: usize) -> Vec<TemplateGrid> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_grid(&mut rng)).collect()
}

// ── Determinism & conservation ─────────────────────────────────────────

#[test]
fn deterministic_output() {
    for grid in [templates::level_map(), templates::test_map()] {
        assert_eq!(level(&grid), level(&grid));
    }
    for grid in random_grids(7, 50) {
        assert_eq!(level(&grid), level(&grid));
    }
}

#[test]
fn cell_conservation_on_builtins() {
    let full = templates::level_map();
    assert_eq!(expected_record_count(&full), 660);
    assert_eq!(level(&full).len(), 660);

    let test = templates::test_map();
    assert_eq!(level(&test).len(), 16 * 4 - 4 * 2);
}

#[test]
fn cell_conservation_on_random_grids() {
    for grid in random_grids(42, 100) {
        assert_eq!(
            level(&grid).len(),
            expected_record_count(&grid),
            "grid {}x{}",
            grid.rows(),
            grid.cols()
        );
    }
}

#[test]
fn no_record_for_empty_or_unknown_cells() {
    for grid in random_grids(3, 50) {
        for rec in level(&grid) {
            let code = grid.code(rec.template_row, rec.template_col).unwrap();
            assert_eq!(TileType::from_code(code), Some(rec.tile_type));
            assert_ne!(rec.tile_type, TileType::Empty);
        }
    }
}

#[test]
fn each_quadrant_covers_each_placeable_cell_once() {
    let grid = templates::level_map();
    let records = level(&grid);
    let mut seen: HashMap<(Quadrant, usize, usize), usize> = HashMap::new();
    for r in &records {
        *seen.entry((r.quadrant, r.template_row, r.template_col)).or_default() += 1;
    }
    assert!(seen.values().all(|&n| n == 1));
}

// ── Fixed point & mirror properties ────────────────────────────────────

#[test]
fn origin_cell_is_unrotated_in_top_left() {
    for grid in random_grids(11, 100)
        .into_iter()
        .chain([templates::level_map(), templates::test_map()])
    {
        let first = project(&grid, Quadrant::TopLeft, &QuadrantLayout::default()).next();
        if let Some(rec) = first.filter(|r| r.template_row == 0 && r.template_col == 0) {
            assert_eq!(rec.rotation, Rotation::Deg0);
        }
    }
}

#[test]
fn both_mirrors_rotate_corners_and_junctions_half_a_turn() {
    for tile in [TileType::OutsideCorner, TileType::InsideCorner, TileType::TJunction] {
        for r in Rotation::ALL {
            assert_eq!(
                apply_mirror_correction(r, tile, true, true).degrees(),
                (r.degrees() + 180) % 360
            );
        }
    }
}

#[test]
fn walls_are_mirror_invariant_across_quadrants() {
    for grid in random_grids(99, 60)
        .into_iter()
        .chain([templates::level_map(), templates::test_map()])
    {
        let records = level(&grid);
        for rec in records.iter().filter(|r| r.quadrant == Quadrant::TopLeft) {
            if rec.tile_type.family() != TileFamily::Wall {
                continue;
            }
            // (0,0) is pinned in the top-left quadrant only.
            if rec.template_row == 0 && rec.template_col == 0 {
                continue;
            }
            for q in [Quadrant::TopRight, Quadrant::BottomLeft, Quadrant::BottomRight] {
                if let Some(other) = rotation_of(&records, q, rec.template_row, rec.template_col) {
                    assert_eq!(other, rec.rotation, "wall at {:?} in {:?}", rec, q);
                }
            }
        }
    }
}

#[test]
fn bottom_right_is_half_turn_of_top_left_for_corners_and_junctions() {
    let grid = templates::level_map();
    let records = level(&grid);
    for rec in records.iter().filter(|r| r.quadrant == Quadrant::BottomRight) {
        let family = rec.tile_type.family();
        if family != TileFamily::Corner && family != TileFamily::Junction {
            continue;
        }
        let conn = connections(&grid, rec.template_row as isize, rec.template_col as isize);
        let canonical = canonical_rotation(rec.tile_type, conn);
        assert_eq!(rec.rotation, canonical.rotated_by(Rotation::Deg180));
    }
}

// ── Bounds safety ──────────────────────────────────────────────────────

#[test]
fn connections_one_past_each_bound_are_empty() {
    for grid in random_grids(5, 100)
        .into_iter()
        .chain([templates::level_map(), templates::test_map()])
    {
        let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
        assert_eq!(connections(&grid, -1, -1), Connections::NONE);
        assert_eq!(connections(&grid, rows, cols), Connections::NONE);
        assert_eq!(connections(&grid, -1, cols), Connections::NONE);
        assert_eq!(connections(&grid, rows, -1), Connections::NONE);
    }
}

#[test]
fn connections_total_over_extreme_coordinates() {
    let grid = templates::level_map();
    for (r, c) in [
        (isize::MIN, 0),
        (0, isize::MIN),
        (isize::MAX, 0),
        (0, isize::MAX),
        (isize::MAX, isize::MIN),
    ] {
        assert_eq!(connections(&grid, r, c), Connections::NONE);
    }
}

// ── Worked scenarios ───────────────────────────────────────────────────

#[test]
fn test_map_scenario() {
    let grid = templates::test_map();
    let layout = QuadrantLayout::default();

    let top_left: Vec<_> = project(&grid, Quadrant::TopLeft, &layout).collect();
    assert_eq!(top_left[0].tile_type, TileType::OutsideCorner);
    assert_eq!(top_left[0].rotation, Rotation::Deg0);

    let bottom_right: Vec<_> = project(&grid, Quadrant::BottomRight, &layout).collect();
    assert!(bottom_right.iter().all(|r| r.template_row != 3));
    assert_eq!(rotation_of(&bottom_right, Quadrant::BottomRight, 0, 0), Some(Rotation::Deg180));
}

#[test]
fn level_map_spot_checks() {
    let grid = templates::level_map();
    let records = level(&grid);
    let rot = |q, r, c| rotation_of(&records, q, r, c).map(|r| r.degrees());

    // Inside corner opening down-right at (2,2).
    assert_eq!(rot(Quadrant::TopLeft, 2, 2), Some(0));
    assert_eq!(rot(Quadrant::TopRight, 2, 2), Some(270));
    assert_eq!(rot(Quadrant::BottomLeft, 2, 2), Some(90));
    assert_eq!(rot(Quadrant::BottomRight, 2, 2), Some(180));

    // Inside corner opening down-left at (2,5).
    assert_eq!(rot(Quadrant::TopLeft, 2, 5), Some(270));
    assert_eq!(rot(Quadrant::TopRight, 2, 5), Some(0));
    assert_eq!(rot(Quadrant::BottomLeft, 2, 5), Some(180));
    assert_eq!(rot(Quadrant::BottomRight, 2, 5), Some(90));

    // Vertical inside wall at (3,2).
    for q in Quadrant::ALL {
        assert_eq!(rot(q, 3, 2), Some(90));
    }

    // Ghost exit wall at (12,13) lies horizontal.
    assert_eq!(rot(Quadrant::TopLeft, 12, 13), Some(0));

    // Junction at (0,13) has two arms: falls back to 0°, then mirrors.
    assert_eq!(rot(Quadrant::TopLeft, 0, 13), Some(0));
    assert_eq!(rot(Quadrant::TopRight, 0, 13), Some(0));
    assert_eq!(rot(Quadrant::BottomLeft, 0, 13), Some(180));
    assert_eq!(rot(Quadrant::BottomRight, 0, 13), Some(180));
}

#[test]
fn level_map_positions() {
    let grid = templates::level_map();
    let records = level(&grid);
    let pos = |q: Quadrant, r: usize, c: usize| {
        records
            .iter()
            .find(|x| x.quadrant == q && x.template_row == r && x.template_col == c)
            .map(|x| x.position)
    };
    assert_eq!(pos(Quadrant::TopLeft, 2, 5), Some(WorldPosition::new(5.5, 12.5)));
    assert_eq!(pos(Quadrant::TopRight, 2, 5), Some(WorldPosition::new(22.5, 12.5)));
    assert_eq!(pos(Quadrant::BottomLeft, 2, 5), Some(WorldPosition::new(5.5, -11.5)));
    assert_eq!(pos(Quadrant::BottomRight, 2, 5), Some(WorldPosition::new(22.5, -11.5)));
    // Seam row exists only in the top half.
    assert!(pos(Quadrant::TopLeft, 14, 6).is_some());
    assert!(pos(Quadrant::BottomLeft, 14, 6).is_none());
}

#[test]
fn no_two_records_share_a_world_position() {
    let grid = templates::level_map();
    let mut seen = std::collections::HashSet::new();
    for rec in level(&grid) {
        let key = ((rec.position.x * 2.0) as i32, (rec.position.y * 2.0) as i32);
        assert!(seen.insert(key), "duplicate tile at {:?}", rec.position);
    }
}
