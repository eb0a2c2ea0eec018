use thiserror::Error;

/// Top-level error type for the tileplan engine.
#[derive(Debug, Error)]
pub enum TileplanError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by room outline edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("outline is not closed, vertices can only be replaced in edit mode")]
    NotClosed,

    #[error("vertex index {index} is out of range (outline has {len} vertices)")]
    VertexOutOfRange { index: usize, len: usize },
}

/// Errors raised by strict grid configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} = {value} must be finite and positive")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} must be finite and non-negative")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} = {value} must be finite")]
    NotFinite { field: &'static str, value: f64 },
}

/// Convenience type alias for results using [`TileplanError`].
pub type Result<T> = std::result::Result<T, TileplanError>;
