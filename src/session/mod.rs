//! Interactive session state.
//!
//! A [`Session`] owns the outline being drawn, the grid configuration and
//! the pointer/drag state of one editing session. Front ends translate
//! their events into [`Command`]s, feed them to [`Session::apply`] one at a
//! time, and render the [`Layout`] snapshot, which is recomputed from
//! scratch on every call.

mod command;

pub use command::{Command, Mode};

use tracing::{debug, trace, warn};

use crate::config::GridConfig;
use crate::geometry::{AppendOutcome, RoomOutline};
use crate::math::distance_2d::{orthogonal_snap, point_at_distance};
use crate::math::Point2;
use crate::operations::classify::ClassifiedTile;
use crate::operations::query::{length_cm, ComputeStats, EdgeLabel, EdgeLengths, Stats};

/// Pick radius (linear units) for grabbing an outline vertex.
pub const VERTEX_HIT_RADIUS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    Vertex(usize),
    Grid { anchor: Point2, offset_x: f64, offset_y: f64 },
}

/// Everything a front end needs to draw the current state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Tiles touching the room, FULL or CUT.
    pub tiles: Vec<ClassifiedTile>,
    pub stats: Stats,
    pub edge_labels: Vec<EdgeLabel>,
}

/// State of one interactive tiling session.
#[derive(Debug, Clone)]
pub struct Session {
    outline: RoomOutline,
    config: GridConfig,
    mode: Mode,
    pointer: Point2,
    drag: Option<Drag>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            outline: RoomOutline::new(),
            config: GridConfig::default(),
            mode: Mode::default(),
            pointer: Point2::origin(),
            drag: None,
        }
    }
}

impl Session {
    /// Creates a session with an empty outline and the default grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given grid configuration.
    #[must_use]
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn outline(&self) -> &RoomOutline {
        &self.outline
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last known pointer position, after orthogonal snapping.
    #[must_use]
    pub fn pointer(&self) -> Point2 {
        self.pointer
    }

    /// Whether a vertex or grid drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether [`Command::AppendWall`] would currently be accepted.
    #[must_use]
    pub fn accepts_wall_length(&self) -> bool {
        self.mode == Mode::Draw && !self.outline.is_empty() && !self.outline.is_closed()
    }

    /// Live length in whole cm of the wall being drawn, from the last vertex to
    /// the pointer.
    #[must_use]
    pub fn segment_preview_cm(&self) -> Option<f64> {
        if self.mode != Mode::Draw || self.outline.is_closed() {
            return None;
        }
        let last = self.outline.last_vertex()?;
        Some(length_cm(last, &self.pointer, self.config.scale))
    }

    /// Applies one command. Never fails: commands that do not fit the current
    /// state are ignored and logged.
    pub fn apply(&mut self, command: Command) {
        trace!(?command, "apply");
        match command {
            Command::AppendVertex(point) => self.append(point),
            Command::AppendWall { length_cm } => self.append_wall(length_cm),
            Command::ReplaceVertex { index, point } => self.replace(index, point),
            Command::Clear => {
                self.outline.clear();
                self.config.offset_x = 0.0;
                self.config.offset_y = 0.0;
                self.drag = None;
            }
            Command::SetConfig(config) => self.config = config.sanitized(),
            Command::SetInputs(inputs) => self.config = inputs.parse(),
            Command::SetMode(mode) => {
                self.mode = mode;
                self.drag = None;
            }
            Command::PointerMove { point, orthogonal } => self.pointer_move(point, orthogonal),
            Command::PointerDown(point) => self.pointer_down(point),
            Command::PointerUp { point, orthogonal } => self.pointer_up(point, orthogonal),
            Command::PointerLeave => self.drag = None,
        }
    }

    /// Recomputes tiles, stats and wall labels from the current state.
    #[must_use]
    pub fn layout(&self) -> Layout {
        let plan = ComputeStats::new(&self.outline, self.config).execute();
        Layout {
            tiles: plan.tiles,
            stats: plan.stats,
            edge_labels: EdgeLengths::new(&self.outline, self.config.scale).execute(),
        }
    }

    fn append(&mut self, point: Point2) {
        match self.outline.append_vertex(point) {
            AppendOutcome::Appended => trace!(vertices = self.outline.len(), "vertex appended"),
            AppendOutcome::Closed => debug!(vertices = self.outline.len(), "outline closed"),
            AppendOutcome::Rejected => debug!("append ignored, outline already closed"),
        }
    }

    fn append_wall(&mut self, length_cm: f64) {
        if !self.accepts_wall_length() || !(length_cm.is_finite() && length_cm > 0.0) {
            debug!(length_cm, "wall length ignored");
            return;
        }
        let Some(last) = self.outline.last_vertex() else {
            return;
        };
        let point = point_at_distance(last, &self.pointer, length_cm * self.config.scale);
        self.append(point);
    }

    fn replace(&mut self, index: usize, point: Point2) {
        if let Err(err) = self.outline.replace_vertex(index, point) {
            warn!(%err, "vertex replace ignored");
        }
    }

    fn snapped(&self, point: Point2, orthogonal: bool) -> Point2 {
        if !orthogonal || self.outline.is_closed() {
            return point;
        }
        match self.outline.last_vertex() {
            Some(last) => orthogonal_snap(last, &point),
            None => point,
        }
    }

    fn pointer_move(&mut self, point: Point2, orthogonal: bool) {
        self.pointer = if self.mode == Mode::Draw {
            self.snapped(point, orthogonal)
        } else {
            point
        };
        match self.drag {
            Some(Drag::Grid {
                anchor,
                offset_x,
                offset_y,
            }) if self.mode == Mode::Edit => {
                let scale = self.config.scale;
                self.config.offset_x = (offset_x + (point.x - anchor.x) / scale).round();
                self.config.offset_y = (offset_y + (point.y - anchor.y) / scale).round();
            }
            Some(Drag::Vertex(index)) => self.replace(index, point),
            _ => {}
        }
    }

    fn pointer_down(&mut self, point: Point2) {
        self.pointer = point;
        if !self.outline.is_closed() {
            return;
        }
        if let Some(index) = self.outline.vertex_at(&point, VERTEX_HIT_RADIUS) {
            self.drag = Some(Drag::Vertex(index));
        } else if self.mode == Mode::Edit {
            self.drag = Some(Drag::Grid {
                anchor: point,
                offset_x: self.config.offset_x,
                offset_y: self.config.offset_y,
            });
        }
    }

    fn pointer_up(&mut self, point: Point2, orthogonal: bool) {
        if self.drag.take().is_some() {
            return;
        }
        if self.mode != Mode::Draw || self.outline.is_closed() {
            return;
        }
        let point = self.snapped(point, orthogonal);
        self.pointer = point;
        self.append(point);
    }
}
