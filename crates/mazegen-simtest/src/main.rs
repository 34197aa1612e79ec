//! mazegen Headless Layout Harness
//!
//! Generates the maze into an in-process ECS tile world and checks the
//! layout properties that must hold for any template. No rendering.
//!
//! Usage:
//!   cargo run -p mazegen-simtest
//!   cargo run -p mazegen-simtest -- --verbose
//!   cargo run -p mazegen-simtest -- --config data/generator.json

use mazegen_logic::config::{ConfigError, GeneratorConfig};
use mazegen_logic::connectivity::{connections, Connections};
use mazegen_logic::projector::{expected_record_count, PlacementRecord};
use mazegen_logic::quadrant::Quadrant;
use mazegen_logic::rotation::{apply_mirror_correction, Rotation};
use mazegen_logic::templates;
use mazegen_logic::tiles::{TileFamily, TileType};
use mazegen_logic::validation::{validate_template, Severity};
use mazegen_world::{LevelGenerator, TilePalette, TileWorld};
use thiserror::Error;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1));

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    println!("=== mazegen Layout Harness ===\n");

    let mut configs: Vec<(String, GeneratorConfig)> = Vec::new();
    match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                log::info!("Loaded generator config from {}", path);
                configs.push((path.clone(), config));
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => {
            configs.push(("level map".into(), GeneratorConfig::default()));
            configs.push((
                "test map".into(),
                GeneratorConfig {
                    use_test_map: true,
                    ..GeneratorConfig::default()
                },
            ));
        }
    }

    let mut results = Vec::new();

    // 1. Rotation tables (template independent)
    results.extend(validate_mirror_tables(verbose));

    // 2. Each configured template end to end
    for (label, config) in &configs {
        results.extend(validate_generation(label, config, verbose));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn load_config(path: &str) -> Result<GeneratorConfig, LoadError> {
    let json = std::fs::read_to_string(path)?;
    Ok(GeneratorConfig::from_json(&json)?)
}

// ── 1. Mirror tables ────────────────────────────────────────────────────

fn validate_mirror_tables(verbose: bool) -> Vec<TestResult> {
    println!("--- Mirror Tables ---");
    let mut results = Vec::new();

    for tile in [TileType::OutsideCorner, TileType::TJunction] {
        let bad: Vec<u16> = Rotation::ALL
            .iter()
            .filter(|&&r| {
                apply_mirror_correction(r, tile, true, true) != r.rotated_by(Rotation::Deg180)
            })
            .map(|r| r.degrees())
            .collect();
        results.push(TestResult {
            name: format!("mirror_both_is_half_turn_{}", tile.code()),
            passed: bad.is_empty(),
            detail: if bad.is_empty() {
                format!("{} rotates 180° under both mirrors", tile.name())
            } else {
                format!("{} wrong at {:?}", tile.name(), bad)
            },
        });
    }

    let wall_stable = Rotation::ALL.iter().all(|&r| {
        [(true, false), (false, true), (true, true)]
            .iter()
            .all(|&(h, v)| apply_mirror_correction(r, TileType::InsideWall, h, v) == r)
    });
    results.push(TestResult {
        name: "walls_mirror_invariant".into(),
        passed: wall_stable,
        detail: "wall rotations unchanged by any mirror".into(),
    });

    if verbose {
        println!("  {} table checks", results.len());
    }
    results
}

// ── 2. End-to-end generation ────────────────────────────────────────────

fn validate_generation(label: &str, config: &GeneratorConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Generation: {} ---", label);
    let mut results = Vec::new();

    let generator = LevelGenerator::new(config.clone());
    let grid = generator.template();

    if verbose {
        match config.to_json() {
            Ok(json) => println!("  config: {}", json.replace('\n', " ")),
            Err(e) => log::warn!("Cannot echo config: {}", e),
        }
    }

    // Template findings are informational unless they are errors.
    let issues = validate_template(grid);
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if verbose {
        for issue in &issues {
            println!("  [{:?}] {}: {}", issue.severity, issue.category, issue.message);
        }
    }
    results.push(TestResult {
        name: format!("{}_template_valid", label),
        passed: errors == 0,
        detail: format!(
            "{}x{} template, {} error(s), {} warning(s)",
            grid.rows(),
            grid.cols(),
            errors,
            issues.len() - errors
        ),
    });

    let mut world = TileWorld::new(TilePalette::default());
    let summary = generator.generate(&mut world);
    let expected = if config.generate_new_map {
        expected_record_count(grid)
    } else {
        0
    };
    results.push(TestResult {
        name: format!("{}_cell_conservation", label),
        passed: summary.placed == expected && world.tile_count() == expected,
        detail: format!(
            "{} placed, {} in world, {} expected",
            summary.placed,
            world.tile_count(),
            expected
        ),
    });

    // Regenerating must replace, not accumulate.
    generator.generate(&mut world);
    results.push(TestResult {
        name: format!("{}_regeneration_replaces", label),
        passed: world.tile_count() == expected,
        detail: format!("{} tiles after second run", world.tile_count()),
    });

    let records: Vec<PlacementRecord> = generator.records().collect();
    let again: Vec<PlacementRecord> = generator.records().collect();
    results.push(TestResult {
        name: format!("{}_deterministic", label),
        passed: records == again,
        detail: format!("{} records, identical across runs", records.len()),
    });

    let origin_ok = world
        .transform_at(Quadrant::TopLeft, 0, 0)
        .map(|t| t.rotation == Rotation::Deg0)
        .unwrap_or(!config.generate_new_map || grid.placeable_count() == 0);
    results.push(TestResult {
        name: format!("{}_origin_unrotated", label),
        passed: origin_ok,
        detail: "cell (0,0) in top-left placed at 0°".into(),
    });

    if verbose {
        for q in Quadrant::ALL {
            println!("  {}: {} tiles", q.name(), world.tiles_in(q));
        }
    }

    let mut wall_mismatches = 0;
    for rec in records.iter().filter(|r| {
        r.quadrant == Quadrant::TopLeft
            && r.tile_type.family() == TileFamily::Wall
            && (r.template_row, r.template_col) != (0, 0)
    }) {
        for q in [Quadrant::TopRight, Quadrant::BottomLeft, Quadrant::BottomRight] {
            if let Some(t) = world.transform_at(q, rec.template_row, rec.template_col) {
                if t.rotation != rec.rotation {
                    log::debug!(
                        "wall ({}, {}) is {}° in {} but {}° in top-left",
                        rec.template_row,
                        rec.template_col,
                        t.rotation.degrees(),
                        q.name(),
                        rec.rotation.degrees()
                    );
                    wall_mismatches += 1;
                }
            }
        }
    }
    results.push(TestResult {
        name: format!("{}_wall_symmetry", label),
        passed: wall_mismatches == 0,
        detail: format!("{} wall rotation mismatches across quadrants", wall_mismatches),
    });

    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let bounds_ok = connections(grid, -1, -1) == Connections::NONE
        && connections(grid, rows, cols) == Connections::NONE;
    results.push(TestResult {
        name: format!("{}_bounds_safety", label),
        passed: bounds_ok,
        detail: "neighbors past each edge never connect".into(),
    });

    let seam_row = grid.rows().saturating_sub(1);
    let seam_in_bottom = records
        .iter()
        .filter(|r| r.quadrant.mirror_vertical() && r.template_row == seam_row)
        .count();
    results.push(TestResult {
        name: format!("{}_seam_row_skipped", label),
        passed: seam_in_bottom == 0,
        detail: format!("{} bottom-half records on the seam row", seam_in_bottom),
    });

    let framing = generator.framing();
    if verbose {
        println!(
            "  framing: {}x{} centered at ({}, {}), ortho size {}",
            framing.width, framing.height, framing.center_x, framing.center_y, framing.orthographic_size
        );
    }

    // Also make sure a template-only build matches the reference templates.
    if !config.use_test_map && config.template.is_none() {
        results.push(TestResult {
            name: format!("{}_reference_template", label),
            passed: *grid == templates::level_map(),
            detail: "built-in level map selected".into(),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let file = format!("mazegen-simtest-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_reads_file() {
        let path = write_temp("ok.json", r#"{"use_test_map": true}"#);
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert!(config.use_test_map);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("mazegen-simtest-does-not-exist.json");
        let err = load_config(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_config_bad_json_is_config_error() {
        let path = write_temp("bad.json", r#"{"template": [[1, 2], [2]]}"#);
        let err = load_config(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::Config(ConfigError::Json(_))));
        let _ = std::fs::remove_file(path);
    }
}
