use tracing::{trace, warn};

use crate::config::GridConfig;
use crate::geometry::TileRect;
use crate::math::periodic::{lattice_floor, wrap};
use crate::math::{Aabb2, Point2};

/// Step (linear units) substituted for a non-positive or non-finite tile
/// dimension or grid period so that enumeration always terminates.
pub const MIN_STEP: f64 = 1.0;

/// Grid lattice along one axis, in linear units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLattice {
    /// First grid line, `<= min` of the bounding box and less than one period before it.
    pub start: f64,
    /// Exclusive upper bound for tile origins.
    pub end: f64,
    /// Tile size along this axis.
    pub size: f64,
    /// Tile size plus joint.
    pub period: f64,
    /// Grid phase, the offset wrapped into `[0, period)`.
    pub phase: f64,
}

impl AxisLattice {
    fn new(min: f64, max: f64, size: f64, joint: f64, offset: f64) -> Self {
        let size = guard_step(size, "tile size");
        let joint = if joint.is_finite() { joint.max(0.0) } else { 0.0 };
        let period = guard_step(size + joint, "grid period");
        let phase = wrap(offset, period);
        let start = lattice_floor(min, phase, period);
        Self {
            start,
            end: max,
            size,
            period,
            phase,
        }
    }

    /// Number of tile origins `start + i * period` below `end`.
    #[must_use]
    pub fn count(&self) -> usize {
        if !(self.start.is_finite() && self.end.is_finite()) || self.end <= self.start {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut n = ((self.end - self.start) / self.period).ceil() as usize;
        // Correct the float estimate so that exactly the origins below `end` count.
        while n > 0 && self.coordinate(n - 1) >= self.end {
            n -= 1;
        }
        while self.coordinate(n) < self.end {
            n += 1;
        }
        n
    }

    /// Origin coordinate of the `i`-th tile along this axis.
    #[must_use]
    pub fn coordinate(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        self.start + i * self.period
    }
}

fn guard_step(value: f64, what: &'static str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(value, what, min_step = MIN_STEP, "invalid grid step, substituting minimum");
        MIN_STEP
    }
}

/// Plans the candidate tile grid covering a bounding box.
///
/// The grid is phase-locked to the configured offset: tile origins sit at
/// `offset + k * period` on each axis, converted to linear units by the
/// config's scale.
#[derive(Debug)]
pub struct GridLayout {
    config: GridConfig,
    bounds: Aabb2,
}

impl GridLayout {
    /// Creates a new grid layout operation.
    #[must_use]
    pub fn new(config: GridConfig, bounds: Aabb2) -> Self {
        Self { config, bounds }
    }

    /// Executes the planning step. Never fails; invalid parameters are
    /// replaced by their defaults or by [`MIN_STEP`].
    #[must_use]
    pub fn execute(&self) -> TileGrid {
        let config = self.config.sanitized();
        let s = config.scale;
        let joint = config.joint * s;
        let x = AxisLattice::new(
            self.bounds.min.x,
            self.bounds.max.x,
            config.tile_width * s,
            joint,
            config.offset_x * s,
        );
        let y = AxisLattice::new(
            self.bounds.min.y,
            self.bounds.max.y,
            config.tile_height * s,
            joint,
            config.offset_y * s,
        );
        trace!(?x, ?y, "grid lattice planned");
        TileGrid { x, y }
    }
}

/// The finite set of candidate tiles covering a bounding box.
///
/// Iteration is lazy and can be restarted any number of times with
/// [`TileGrid::iter`]. Tiles come column by column: X outer, Y inner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    pub x: AxisLattice,
    pub y: AxisLattice,
}

impl TileGrid {
    /// Iterates over all candidate tiles.
    #[must_use]
    pub fn iter(&self) -> TileIter {
        TileIter {
            grid: *self,
            columns: self.x.count(),
            rows: self.y.count(),
            col: 0,
            row: 0,
        }
    }

    /// Total number of candidate tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.count().saturating_mul(self.y.count())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for &TileGrid {
    type Item = TileRect;
    type IntoIter = TileIter;

    fn into_iter(self) -> TileIter {
        self.iter()
    }
}

/// Iterator over the tiles of a [`TileGrid`].
#[derive(Debug, Clone)]
pub struct TileIter {
    grid: TileGrid,
    columns: usize,
    rows: usize,
    col: usize,
    row: usize,
}

impl Iterator for TileIter {
    type Item = TileRect;

    fn next(&mut self) -> Option<TileRect> {
        if self.rows == 0 || self.col >= self.columns {
            return None;
        }
        let origin = Point2::new(
            self.grid.x.coordinate(self.col),
            self.grid.y.coordinate(self.row),
        );
        self.row += 1;
        if self.row >= self.rows {
            self.row = 0;
            self.col += 1;
        }
        Some(TileRect::new(origin, self.grid.x.size, self.grid.y.size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.rows == 0 || self.col >= self.columns {
            0
        } else {
            (self.columns - self.col) * self.rows - self.row
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileIter {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb2 {
        Aabb2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn config(tile: f64, joint: f64, ox: f64, oy: f64, scale: f64) -> GridConfig {
        GridConfig {
            tile_width: tile,
            tile_height: tile,
            joint,
            offset_x: ox,
            offset_y: oy,
            scale,
        }
    }

    #[test]
    fn aligned_grid_starts_at_min() {
        let grid = GridLayout::new(config(60.0, 0.0, 0.0, 0.0, 3.0), bounds(0.0, 0.0, 600.0, 300.0))
            .execute();
        assert!((grid.x.start).abs() < TOL);
        assert!((grid.y.start).abs() < TOL);
        assert!((grid.x.period - 180.0).abs() < TOL);
        assert_eq!(grid.x.count(), 4); // 0, 180, 360, 540
        assert_eq!(grid.y.count(), 2); // 0, 180
        assert_eq!(grid.len(), 8);
    }

    #[test]
    fn enumeration_order_and_extent() {
        let grid = GridLayout::new(config(60.0, 0.0, 0.0, 0.0, 3.0), bounds(0.0, 0.0, 600.0, 300.0))
            .execute();
        let tiles: Vec<TileRect> = grid.iter().collect();
        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[0].origin, Point2::new(0.0, 0.0));
        assert_eq!(tiles[1].origin, Point2::new(0.0, 180.0));
        assert_eq!(tiles[2].origin, Point2::new(180.0, 0.0));
        assert_eq!(tiles[7].origin, Point2::new(540.0, 180.0));
        for t in &tiles {
            assert!(t.origin.x < 600.0 && t.origin.y < 300.0);
            assert!((t.width - 180.0).abs() < TOL);
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let grid = GridLayout::new(config(50.0, 0.3, 7.0, -3.0, 2.0), bounds(-40.0, 15.0, 420.0, 333.0))
            .execute();
        let first: Vec<TileRect> = grid.iter().collect();
        let second: Vec<TileRect> = (&grid).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(grid.iter().len(), first.len());
    }

    #[test]
    fn start_within_one_period_for_any_offset() {
        let b = bounds(37.5, -120.25, 900.0, 480.0);
        for offset in [-1000.0, -61.3, -60.0, -0.7, 0.0, 0.3, 59.9, 60.3, 123.0, 5000.1] {
            let grid = GridLayout::new(config(60.0, 0.3, offset, -offset, 3.0), b).execute();
            for (axis, min) in [(grid.x, b.min.x), (grid.y, b.min.y)] {
                assert!(axis.start <= min, "offset={offset} start={} min={min}", axis.start);
                assert!(
                    min - axis.start < axis.period,
                    "offset={offset} start={} min={min} period={}",
                    axis.start,
                    axis.period
                );
                assert!((0.0..axis.period).contains(&axis.phase));
            }
        }
    }

    #[test]
    fn start_lies_on_offset_phase() {
        // Period 180.9, offset 10 cm = 30 units.
        let grid = GridLayout::new(config(60.0, 0.3, 10.0, 0.0, 3.0), bounds(0.0, 0.0, 500.0, 500.0))
            .execute();
        let k = (grid.x.start - 30.0) / grid.x.period;
        assert!((k - k.round()).abs() < 1e-9, "k={k}");
    }

    #[test]
    fn negative_offset_matches_equivalent_positive() {
        let b = bounds(0.0, 0.0, 700.0, 700.0);
        let neg = GridLayout::new(config(60.0, 0.0, -20.0, 0.0, 3.0), b).execute();
        let pos = GridLayout::new(config(60.0, 0.0, 40.0, 0.0, 3.0), b).execute();
        assert!((neg.x.start - pos.x.start).abs() < TOL);
        assert_eq!(neg.x.count(), pos.x.count());
    }

    #[test]
    fn joint_widens_period() {
        let grid = GridLayout::new(config(60.0, 0.3, 0.0, 0.0, 3.0), bounds(0.0, 0.0, 1.0, 1.0))
            .execute();
        assert!((grid.x.size - 180.0).abs() < TOL);
        assert!((grid.x.period - 180.9).abs() < TOL);
    }

    #[test]
    fn degenerate_step_terminates() {
        let mut c = config(0.0, 0.0, 0.0, 0.0, 3.0);
        c.tile_height = -5.0;
        let grid = GridLayout::new(c, bounds(0.0, 0.0, 100.0, 100.0)).execute();
        // Sanitized back to the 60 cm default.
        assert!((grid.x.size - 180.0).abs() < TOL);

        let lattice = AxisLattice::new(0.0, 10.0, 0.0, 0.0, 0.0);
        assert!((lattice.period - MIN_STEP).abs() < TOL);
        assert_eq!(lattice.count(), 10);

        let lattice = AxisLattice::new(0.0, 10.0, f64::NAN, -4.0, 0.0);
        assert!(lattice.period >= MIN_STEP);
        assert!(lattice.count() <= 10);
    }

    #[test]
    fn sub_unit_step_is_kept() {
        let lattice = AxisLattice::new(0.0, 10.0, 0.5, 0.0, 0.0);
        assert!((lattice.size - 0.5).abs() < TOL);
        assert!((lattice.period - 0.5).abs() < TOL);
        assert_eq!(lattice.count(), 20);

        let lattice = AxisLattice::new(0.0, 10.0, 0.0, 0.0, 0.0);
        assert!((lattice.size - MIN_STEP).abs() < TOL);

        // 1 cm mosaic at half a unit per cm.
        let grid = GridLayout::new(config(1.0, 0.0, 0.0, 0.0, 0.5), bounds(0.0, 0.0, 10.0, 10.0))
            .execute();
        assert!((grid.x.size - 0.5).abs() < TOL);
        assert_eq!(grid.len(), 400);
    }

    #[test]
    fn empty_bounds_give_no_tiles() {
        let grid = GridLayout::new(GridConfig::default(), bounds(5.0, 5.0, 5.0, 5.0)).execute();
        // A zero-size box still admits the single tile whose origin precedes it.
        assert!(grid.len() <= 1);
        let inverted = TileGrid {
            x: AxisLattice::new(10.0, 0.0, 5.0, 0.0, 0.0),
            y: AxisLattice::new(0.0, 10.0, 5.0, 0.0, 0.0),
        };
        assert!(inverted.is_empty());
        assert_eq!(inverted.iter().count(), 0);
    }
}
