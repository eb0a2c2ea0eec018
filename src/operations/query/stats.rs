use serde::{Deserialize, Serialize};
use tracing::debug;

use super::area::RoomArea;
use super::bounding_box::BoundingBox;
use crate::config::GridConfig;
use crate::geometry::RoomOutline;
use crate::operations::classify::{ClassifiedTile, ClassifyTiles};
use crate::operations::layout::GridLayout;

/// Flat allowance for breakage and offcuts.
pub const WASTE_MARGIN: f64 = 1.10;

/// Area and tile-count summary of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Room area in m².
    pub area_m2: f64,
    /// Room area plus the [`WASTE_MARGIN`], in m².
    pub area_with_margin_m2: f64,
    pub full_tiles: usize,
    pub cut_tiles: usize,
    /// Full plus cut tiles.
    pub total_tiles: usize,
}

/// Classified tiles and their summary for one outline + config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TilePlan {
    pub tiles: Vec<ClassifiedTile>,
    pub stats: Stats,
}

/// Lays out, classifies and summarizes tiles for a room.
///
/// Everything is derived from the outline and config alone. An open outline
/// or one with fewer than 3 vertices produces an empty plan without
/// enumerating any tiles.
pub struct ComputeStats<'a> {
    room: &'a RoomOutline,
    config: GridConfig,
}

impl<'a> ComputeStats<'a> {
    /// Creates a new `ComputeStats` operation.
    #[must_use]
    pub fn new(room: &'a RoomOutline, config: GridConfig) -> Self {
        Self { room, config }
    }

    /// Executes the pipeline: bounding box, grid, classification, area.
    #[must_use]
    pub fn execute(&self) -> TilePlan {
        if !self.room.is_tileable() {
            return TilePlan::default();
        }
        let Some(bounds) = BoundingBox::new(self.room).execute() else {
            return TilePlan::default();
        };
        let config = self.config.sanitized();
        let grid = GridLayout::new(config, bounds).execute();
        let classified = ClassifyTiles::new(&grid, self.room.vertices()).execute();

        let area_m2 = RoomArea::new(self.room, config.scale).execute();
        let stats = Stats {
            area_m2,
            area_with_margin_m2: area_m2 * WASTE_MARGIN,
            full_tiles: classified.full,
            cut_tiles: classified.cut,
            total_tiles: classified.full + classified.cut,
        };
        debug!(
            area_m2 = stats.area_m2,
            full = stats.full_tiles,
            cut = stats.cut_tiles,
            "tile plan computed"
        );
        TilePlan {
            tiles: classified.tiles,
            stats,
        }
    }
}
