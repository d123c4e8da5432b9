pub mod curve;
pub mod curve_path;
pub mod path;
pub mod shape;
pub mod shape_path;

pub use curve::{Curve, FrenetFrames, FrenetFramesExt, SamplingHint};
pub use curve_path::CurvePath;
pub use path::Path;
pub use shape::{ExtractedPoints, Shape};
pub use shape_path::ShapePath;
