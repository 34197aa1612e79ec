//! Built-in templates.
//!
//! [`LEVEL_MAP`] is the authored top-left quadrant of the full maze.
//! [`TEST_MAP`] is a small closed box used to check layouts in isolation.

use crate::grid::TemplateGrid;

/// The canonical maze quadrant (15 rows × 14 columns).
pub const LEVEL_MAP: [[u8; 14]; 15] = [
    [1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 7],
    [2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4],
    [2, 5, 3, 4, 4, 3, 5, 3, 4, 4, 4, 3, 5, 4],
    [2, 6, 4, 0, 0, 4, 5, 4, 0, 0, 0, 4, 5, 4],
    [2, 5, 3, 4, 4, 3, 5, 3, 4, 4, 4, 3, 5, 3],
    [2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    [2, 5, 3, 4, 4, 3, 5, 3, 3, 5, 3, 4, 4, 4],
    [2, 5, 3, 4, 4, 3, 5, 4, 4, 5, 3, 4, 4, 3],
    [2, 5, 5, 5, 5, 5, 5, 4, 4, 5, 5, 5, 5, 4],
    [1, 2, 2, 2, 2, 1, 5, 4, 3, 4, 4, 3, 0, 4],
    [0, 0, 0, 0, 0, 2, 5, 4, 3, 4, 4, 3, 0, 3],
    [0, 0, 0, 0, 0, 2, 5, 4, 4, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 2, 5, 4, 4, 0, 3, 4, 4, 8],
    [2, 2, 2, 2, 2, 1, 5, 3, 3, 0, 4, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 4, 0, 0, 0],
];

/// 4×4 test template: a closed box with a T-junction in the top-right.
pub const TEST_MAP: [[u8; 4]; 4] = [
    [1, 2, 2, 7],
    [2, 5, 5, 4],
    [2, 5, 5, 4],
    [1, 2, 2, 3],
];

pub fn level_map() -> TemplateGrid {
    TemplateGrid::from_array(&LEVEL_MAP)
}

pub fn test_map() -> TemplateGrid {
    TemplateGrid::from_array(&TEST_MAP)
}

/// Pick a built-in template the way the generator's `use_test_map` flag does.
pub fn builtin(use_test_map: bool) -> TemplateGrid {
    if use_test_map {
        test_map()
    } else {
        level_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_map_shape() {
        let g = level_map();
        assert_eq!(g.rows(), 15);
        assert_eq!(g.cols(), 14);
        assert_eq!(g.code_at(0, 0), Some(1));
        assert_eq!(g.code_at(12, 13), Some(8));
    }

    #[test]
    fn test_test_map_shape() {
        let g = test_map();
        assert_eq!((g.rows(), g.cols()), (4, 4));
        assert_eq!(g.placeable_count(), 16);
    }

    #[test]
    fn test_builtin_selection() {
        assert_eq!(builtin(true), test_map());
        assert_eq!(builtin(false), level_map());
    }
}
