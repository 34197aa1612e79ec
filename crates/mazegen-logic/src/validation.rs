//! Opt-in validation for authored templates.
//!
//! Generation itself never rejects a template: malformed cells fall back to
//! a default rotation and unknown codes are skipped. Callers that want
//! stricter guarantees run these checks first and decide what to do with
//! the findings.

use crate::connectivity::connections;
use crate::grid::TemplateGrid;
use crate::tiles::{TileFamily, TileType};

/// A template validation finding.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    /// The layout will be missing tiles or break an authoring guarantee.
    Error,
    /// The layout will render, possibly with a fallback rotation.
    Warning,
}

// ── A. Codes ────────────────────────────────────────────────────────────

/// Check every code maps to a known tile type.
pub fn check_tile_codes(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    grid.cells()
        .filter(|&(_, _, code)| TileType::from_code(code).is_none())
        .map(|(row, col, code)| ValidationIssue {
            category: "tile_codes",
            severity: Severity::Error,
            message: format!("Cell ({}, {}) has unknown tile code {}", row, col, code),
        })
        .collect()
}

/// Check the top-left cell is authored (it anchors the unrotated origin tile).
pub fn check_origin(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    match grid.tile_at(0, 0) {
        Some(t) if t.is_placeable() => Vec::new(),
        _ => vec![ValidationIssue {
            category: "origin",
            severity: Severity::Error,
            message: "Cell (0, 0) must hold a placeable tile".to_string(),
        }],
    }
}

// ── B. Connectivity per family ──────────────────────────────────────────

/// Check corners form a clean two-arm turn.
pub fn check_corners(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (row, col, tile) in structural_cells(grid, TileFamily::Corner) {
        let c = connections(grid, row as isize, col as isize);
        let straight = (c.up && c.down) || (c.left && c.right);
        if c.count() != 2 || straight {
            issues.push(ValidationIssue {
                category: "corner_connectivity",
                severity: Severity::Warning,
                message: format!(
                    "{} at ({}, {}) has {} arm(s){}; it will render at 0°",
                    tile.name(),
                    row,
                    col,
                    c.count(),
                    if straight { " in a straight line" } else { "" }
                ),
            });
        }
    }
    issues
}

/// Check junctions have exactly three arms.
pub fn check_junctions(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (row, col, tile) in structural_cells(grid, TileFamily::Junction) {
        let c = connections(grid, row as isize, col as isize);
        if c.count() != 3 {
            issues.push(ValidationIssue {
                category: "junction_connectivity",
                severity: Severity::Warning,
                message: format!(
                    "{} at ({}, {}) has {} arm(s), expected 3",
                    tile.name(),
                    row,
                    col,
                    c.count()
                ),
            });
        }
    }
    issues
}

/// Check walls run along one axis and touch the wall network.
pub fn check_walls(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (row, col, tile) in structural_cells(grid, TileFamily::Wall) {
        let c = connections(grid, row as isize, col as isize);
        if c.count() == 0 {
            issues.push(ValidationIssue {
                category: "wall_connectivity",
                severity: Severity::Warning,
                message: format!("{} at ({}, {}) is isolated", tile.name(), row, col),
            });
        } else if c.vertical() && c.horizontal() {
            issues.push(ValidationIssue {
                category: "wall_connectivity",
                severity: Severity::Warning,
                message: format!(
                    "{} at ({}, {}) connects on both axes; it will lie horizontal",
                    tile.name(),
                    row,
                    col
                ),
            });
        }
    }
    issues
}

fn structural_cells(
    grid: &TemplateGrid,
    family: TileFamily,
) -> impl Iterator<Item = (usize, usize, TileType)> + '_ {
    grid.cells().filter_map(move |(row, col, code)| {
        TileType::from_code(code)
            .filter(|t| t.family() == family)
            .map(|t| (row, col, t))
    })
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all template validations and return combined results.
pub fn validate_template(grid: &TemplateGrid) -> Vec<ValidationIssue> {
    let mut all = Vec::new();
    all.extend(check_tile_codes(grid));
    all.extend(check_origin(grid));
    all.extend(check_corners(grid));
    all.extend(check_junctions(grid));
    all.extend(check_walls(grid));
    all
}

/// True when no finding is an [`Severity::Error`].
pub fn is_generatable(issues: &[ValidationIssue]) -> bool {
    issues.iter().all(|i| i.severity != Severity::Error)
}
