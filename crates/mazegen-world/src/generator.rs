//! Level generator - clears a sink and streams a whole level into it.

use mazegen_logic::config::GeneratorConfig;
use mazegen_logic::framing::LevelFraming;
use mazegen_logic::grid::TemplateGrid;
use mazegen_logic::projector::{project_level, PlacementRecord};

use crate::sink::TileSink;

/// Outcome of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Records the sink accepted.
    pub placed: usize,
    /// Records the sink rejected (e.g. missing visual resource).
    pub skipped: usize,
}

/// Drives generation from a resolved config.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GeneratorConfig,
    template: TemplateGrid,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let template = config.template();
        Self { config, template }
    }

    pub fn template(&self) -> &TemplateGrid {
        &self.template
    }

    /// Placement records for the configured level, without touching a sink.
    pub fn records(&self) -> impl Iterator<Item = PlacementRecord> + Clone + '_ {
        project_level(&self.template, &self.config.layout)
    }

    /// Framing a camera collaborator needs to show the whole level.
    pub fn framing(&self) -> LevelFraming {
        LevelFraming::for_grid(&self.template)
    }

    /// Clear everything a previous run placed, then place the whole level.
    ///
    /// Does nothing when `generate_new_map` is off. Never fails: records the
    /// sink rejects are logged and counted as skipped.
    pub fn generate<S: TileSink + ?Sized>(&self, sink: &mut S) -> GenerationSummary {
        let mut summary = GenerationSummary::default();
        if !self.config.generate_new_map {
            log::info!("Procedural generation disabled; keeping existing level");
            return summary;
        }

        log::info!(
            "Generating level from {} ({}x{})",
            self.config.template_name(),
            self.template.rows(),
            self.template.cols()
        );
        sink.clear_all();

        for record in self.records() {
            match sink.place(&record) {
                Ok(()) => summary.placed += 1,
                Err(e) => {
                    log::warn!("Skipping {}: {}", record.debug_name(), e);
                    summary.skipped += 1;
                }
            }
        }

        log::info!(
            "Level generated: {} tiles placed, {} skipped",
            summary.placed,
            summary.skipped
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::TilePalette;
    use crate::sink::RecordingSink;
    use crate::world::TileWorld;
    use mazegen_logic::projector::expected_record_count;
    use mazegen_logic::tiles::TileType;

    fn test_map_generator() -> LevelGenerator {
        LevelGenerator::new(GeneratorConfig {
            use_test_map: true,
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn test_generate_full_level_into_world() {
        let generator = LevelGenerator::new(GeneratorConfig::default());
        let mut world = TileWorld::new(TilePalette::default());
        let summary = generator.generate(&mut world);
        assert_eq!(summary.placed, 660);
        assert_eq!(summary.skipped, 0);
        assert_eq!(world.tile_count(), 660);
    }

    #[test]
    fn test_regeneration_replaces_previous_tiles() {
        let generator = test_map_generator();
        let mut world = TileWorld::new(TilePalette::default());
        generator.generate(&mut world);
        generator.generate(&mut world);
        assert_eq!(world.tile_count(), expected_record_count(generator.template()));
    }

    #[test]
    fn test_clear_happens_before_placement() {
        let generator = test_map_generator();
        let mut sink = RecordingSink::new();
        generator.generate(&mut sink);
        let first = sink.records.clone();
        generator.generate(&mut sink);
        assert_eq!(sink.clears, 2);
        assert_eq!(sink.records, first);
    }

    #[test]
    fn test_missing_visual_skips_but_continues() {
        let generator = test_map_generator();
        let palette = TilePalette::default().without(TileType::TJunction);
        let mut world = TileWorld::new(palette);
        let summary = generator.generate(&mut world);
        // One junction cell, in all four quadrants.
        assert_eq!(summary.skipped, 4);
        assert_eq!(summary.placed, 56 - 4);
        assert_eq!(world.tile_count(), 52);
    }

    #[test]
    fn test_disabled_generation_leaves_sink_untouched() {
        let generator = LevelGenerator::new(GeneratorConfig {
            generate_new_map: false,
            ..GeneratorConfig::default()
        });
        let mut sink = RecordingSink::new();
        let summary = generator.generate(&mut sink);
        assert_eq!(summary, GenerationSummary::default());
        assert_eq!(sink.clears, 0);
    }

    #[test]
    fn test_records_match_sink_stream() {
        let generator = test_map_generator();
        let mut sink = RecordingSink::new();
        generator.generate(&mut sink);
        let direct: Vec<_> = generator.records().collect();
        assert_eq!(sink.records, direct);
    }

    #[test]
    fn test_framing_uses_selected_template() {
        let f = test_map_generator().framing();
        assert_eq!(f.width, 8.0);
        assert_eq!(f.height, 6.0);
    }
}
