use thiserror::Error;

/// Top-level error type for the Shapelis toolkit.
#[derive(Debug, Error)]
pub enum ShapelisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Text(#[from] TextError),
}

/// Errors related to curve and path construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("curve needs at least {min} control points, got {actual}")]
    TooFewPoints { min: usize, actual: usize },
}

/// Errors related to mesh generation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to glyph outline decoding.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("malformed outline for glyph {glyph:?}: {reason}")]
    MalformedOutline { glyph: char, reason: String },
}

/// Convenience type alias for results using [`ShapelisError`].
pub type Result<T> = std::result::Result<T, ShapelisError>;
