use tracing::debug;

use crate::error::PolygonError;
use crate::math::distance_2d::distance;
use crate::math::Point2;

/// Distance (linear units) within which a new vertex snaps onto the first
/// vertex and closes the outline.
pub const SNAP_DISTANCE: f64 = 15.0;

/// What [`RoomOutline::append_vertex`] did with the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The point became the new last vertex.
    Appended,
    /// The point landed on the first vertex and closed the outline instead.
    Closed,
    /// The outline was already closed; nothing changed.
    Rejected,
}

/// The room boundary as drawn: an ordered vertex list and a closed flag.
///
/// Vertices are kept in insertion order; either winding is accepted and
/// nothing checks for self-intersection. A closed outline always has at
/// least three vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomOutline {
    vertices: Vec<Point2>,
    closed: bool,
}

impl RoomOutline {
    /// Creates an empty, open outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a closed outline directly from its vertices.
    ///
    /// Stays open when fewer than 3 vertices are given.
    #[must_use]
    pub fn closed_from(vertices: Vec<Point2>) -> Self {
        let closed = vertices.len() >= 3;
        Self { vertices, closed }
    }

    /// Adds a vertex while drawing.
    ///
    /// With more than two vertices already placed, a point closer than
    /// [`SNAP_DISTANCE`] to the first vertex closes the outline and is not
    /// stored.
    pub fn append_vertex(&mut self, point: Point2) -> AppendOutcome {
        if self.closed {
            return AppendOutcome::Rejected;
        }
        if self.vertices.len() > 2 && distance(&point, &self.vertices[0]) < SNAP_DISTANCE {
            self.closed = true;
            debug!(vertices = self.vertices.len(), "room outline closed");
            return AppendOutcome::Closed;
        }
        self.vertices.push(point);
        AppendOutcome::Appended
    }

    /// Moves vertex `index` to `point`. Only allowed once the outline is closed.
    ///
    /// # Errors
    ///
    /// - `PolygonError::NotClosed` while the outline is still being drawn
    /// - `PolygonError::VertexOutOfRange` if `index` does not name a vertex
    pub fn replace_vertex(&mut self, index: usize, point: Point2) -> Result<(), PolygonError> {
        if !self.closed {
            return Err(PolygonError::NotClosed);
        }
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(PolygonError::VertexOutOfRange { index, len })?;
        *slot = point;
        Ok(())
    }

    /// Resets to an empty, open outline.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    /// Index of the first vertex within `radius` of `point`.
    #[must_use]
    pub fn vertex_at(&self, point: &Point2, radius: f64) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| distance(v, point) < radius)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn last_vertex(&self) -> Option<&Point2> {
        self.vertices.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the outline encloses a region tiles can be laid in.
    #[must_use]
    pub fn is_tileable(&self) -> bool {
        self.closed && self.vertices.len() >= 3
    }
}
