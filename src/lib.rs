pub mod error;
pub mod geometry;
pub mod math;
pub mod shape_utils;
pub mod tessellation;
pub mod text;

pub use error::{Result, ShapelisError};
