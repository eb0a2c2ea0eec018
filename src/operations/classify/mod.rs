mod tile_classify;

pub use tile_classify::{
    classify_tile, ClassifiedTile, ClassifyTiles, TileClassification, TileProbe, TileStatus,
    CONTACT_TOLERANCE,
};
