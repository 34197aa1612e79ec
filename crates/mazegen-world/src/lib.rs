//! mazegen World - ECS tile world and level generator driver.
//!
//! `mazegen-logic` decides every tile (type, position, rotation). This crate
//! is the effectful side: it hands those decisions to a [`TileSink`], the
//! collaborator that turns a decision into a tracked tile instance.
//!
//! # Architecture
//!
//! - **Sink**: [`TileSink`] is the placement contract (`clear_all` + `place`)
//! - **World**: [`TileWorld`] is a sink backed by a `hecs` ECS world
//! - **Palette**: [`TilePalette`] resolves tile types to visual resources
//! - **Generator**: [`LevelGenerator`] clears a sink and streams a level into it
//!
//! # Example
//!
//! ```rust
//! use mazegen_world::prelude::*;
//! use mazegen_logic::config::GeneratorConfig;
//!
//! let mut world = TileWorld::new(TilePalette::default());
//! let generator = LevelGenerator::new(GeneratorConfig::default());
//!
//! let summary = generator.generate(&mut world);
//! assert_eq!(summary.placed, world.tile_count());
//! ```

pub mod components;
pub mod generator;
pub mod palette;
pub mod sink;
pub mod world;

pub use generator::{GenerationSummary, LevelGenerator};
pub use palette::TilePalette;
pub use sink::{PlacementError, RecordingSink, TileSink};
pub use world::TileWorld;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::generator::{GenerationSummary, LevelGenerator};
    pub use crate::palette::TilePalette;
    pub use crate::sink::{PlacementError, RecordingSink, TileSink};
    pub use crate::world::TileWorld;
}
