mod grid_layout;

pub use grid_layout::{AxisLattice, GridLayout, TileGrid, TileIter, MIN_STEP};
