//! Tile grid configuration.
//!
//! Lengths are real-world centimetres; `scale` converts them to the linear
//! (screen) units the room outline is drawn in. Raw user text goes through
//! [`GridInputs`], which never fails: anything unparsable becomes the
//! documented default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_TILE_WIDTH: f64 = 60.0;
pub const DEFAULT_TILE_HEIGHT: f64 = 60.0;
/// 3 mm.
pub const DEFAULT_JOINT: f64 = 0.3;
pub const DEFAULT_SCALE: f64 = 3.0;

/// Grid parameters in real-world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Tile width in cm.
    pub tile_width: f64,
    /// Tile height in cm.
    pub tile_height: f64,
    /// Grout joint in cm, added to the tile size to get the grid period.
    pub joint: f64,
    /// Horizontal grid shift in cm; any sign, any magnitude.
    pub offset_x: f64,
    /// Vertical grid shift in cm; any sign, any magnitude.
    pub offset_y: f64,
    /// Linear units per cm.
    pub scale: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            joint: DEFAULT_JOINT,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl GridConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotPositive` for a tile dimension or scale that is not finite and > 0
    /// - `ConfigError::Negative` for a joint that is not finite and >= 0
    /// - `ConfigError::NotFinite` for a non-finite offset
    pub fn try_new(
        tile_width: f64,
        tile_height: f64,
        joint: f64,
        offset_x: f64,
        offset_y: f64,
        scale: f64,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("tile_width", tile_width),
            ("tile_height", tile_height),
            ("scale", scale),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(joint.is_finite() && joint >= 0.0) {
            return Err(ConfigError::Negative {
                field: "joint",
                value: joint,
            });
        }
        for (field, value) in [("offset_x", offset_x), ("offset_y", offset_y)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        Ok(Self {
            tile_width,
            tile_height,
            joint,
            offset_x,
            offset_y,
            scale,
        })
    }

    /// Returns a copy with every invalid field replaced.
    ///
    /// Tile dimensions and scale fall back to their defaults, a negative joint
    /// becomes zero, non-finite values fall back to their defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let joint = if !self.joint.is_finite() {
            defaults.joint
        } else {
            self.joint.max(0.0)
        };
        let fixed = Self {
            tile_width: positive_or(self.tile_width, defaults.tile_width),
            tile_height: positive_or(self.tile_height, defaults.tile_height),
            joint,
            offset_x: finite_or(self.offset_x, 0.0),
            offset_y: finite_or(self.offset_y, 0.0),
            scale: positive_or(self.scale, defaults.scale),
        };
        if fixed != *self {
            debug!(input = ?self, ?fixed, "grid config sanitized");
        }
        fixed
    }

    /// Converts a length in linear units to centimetres.
    #[must_use]
    pub fn to_cm(&self, linear: f64) -> f64 {
        linear / self.scale
    }
}

/// Raw text of the grid fields as typed by the user.
///
/// The joint is entered in millimetres, every other length in centimetres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridInputs {
    pub tile_width: String,
    pub tile_height: String,
    pub joint_mm: String,
    pub offset_x: String,
    pub offset_y: String,
    pub scale: String,
}

impl GridInputs {
    /// Parses every field, substituting the default for anything unusable.
    #[must_use]
    pub fn parse(&self) -> GridConfig {
        GridConfig {
            tile_width: parse_or(&self.tile_width, DEFAULT_TILE_WIDTH),
            tile_height: parse_or(&self.tile_height, DEFAULT_TILE_HEIGHT),
            joint: parse_number(&self.joint_mm).map_or(DEFAULT_JOINT, |mm| mm / 10.0),
            offset_x: parse_or(&self.offset_x, 0.0),
            offset_y: parse_or(&self.offset_y, 0.0),
            scale: parse_or(&self.scale, DEFAULT_SCALE),
        }
        .sanitized()
    }

    /// Text form of an existing configuration (joint shown in mm).
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            tile_width: config.tile_width.to_string(),
            tile_height: config.tile_height.to_string(),
            joint_mm: (config.joint * 10.0).to_string(),
            offset_x: config.offset_x.to_string(),
            offset_y: config.offset_y.to_string(),
            scale: config.scale.to_string(),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            if !text.is_empty() {
                debug!(input = text, "unparsable grid input, using default");
            }
            None
        }
    }
}

fn parse_or(text: &str, default: f64) -> f64 {
    parse_number(text).unwrap_or(default)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn positive_or(value: f64, default: f64) -> f64 {
    if is_positive(value) {
        value
    } else {
        default
    }
}

fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}
