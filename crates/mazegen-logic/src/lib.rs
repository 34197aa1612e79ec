//! Pure maze layout logic for mazegen.
//!
//! This crate derives a full four-quadrant maze from a single hand-authored
//! quadrant template. Functions take plain data and return plain data: there
//! is no engine, ECS, or rendering dependency, so every stage is
//! unit-testable on its own.
//!
//! Pipeline:
//!
//! ```text
//! TemplateGrid → connections() → canonical_rotation() → apply_mirror_correction()
//!              → project() / project_level() → PlacementRecord stream
//! ```
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tiles`] | Tile type codes (0–8) and their structural families |
//! | [`grid`] | Immutable, bounds-checked template grid |
//! | [`templates`] | Built-in maze quadrant and 4×4 test template |
//! | [`connectivity`] | Four-direction structural connectivity of a cell |
//! | [`rotation`] | Canonical rotation rules and mirror correction tables |
//! | [`quadrant`] | Quadrants, mirror flags, world coordinate mapping |
//! | [`projector`] | Lazy placement record streams per quadrant / level |
//! | [`framing`] | Level extent and orthographic camera framing |
//! | [`validation`] | Opt-in strict checks for authored templates |
//! | [`config`] | Generator configuration (serde/JSON) |
//!
//! # Usage
//!
//! ```
//! use mazegen_logic::projector::{expected_record_count, project_level};
//! use mazegen_logic::quadrant::QuadrantLayout;
//! use mazegen_logic::templates;
//!
//! let grid = templates::test_map();
//! let records: Vec<_> = project_level(&grid, &QuadrantLayout::default()).collect();
//! assert_eq!(records.len(), expected_record_count(&grid));
//! ```

pub mod config;
pub mod connectivity;
pub mod framing;
pub mod grid;
pub mod projector;
pub mod quadrant;
pub mod rotation;
pub mod templates;
pub mod tiles;
pub mod validation;
