//! Placement sink - the contract for whoever instantiates tiles.

use mazegen_logic::projector::PlacementRecord;
use mazegen_logic::tiles::TileType;
use thiserror::Error;

/// Failures a sink reports for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no visual resource for {0:?}")]
    MissingVisual(TileType),
}

/// Receives placement records and tracks the tiles it creates.
pub trait TileSink {
    /// Remove every tile this sink created for a previous generation.
    fn clear_all(&mut self);

    /// Create one tile. Errors are per-record and never stop generation.
    fn place(&mut self, record: &PlacementRecord) -> Result<(), PlacementError>;
}

/// Sink that keeps the records it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub records: Vec<PlacementRecord>,
    pub clears: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TileSink for RecordingSink {
    fn clear_all(&mut self) {
        self.records.clear();
        self.clears += 1;
    }

    fn place(&mut self, record: &PlacementRecord) -> Result<(), PlacementError> {
        self.records.push(*record);
        Ok(())
    }
}
