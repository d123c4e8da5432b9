pub mod intersect_2d;
pub mod interpolation;
pub mod polygon_2d;

/// 2D point type used in mesh buffers.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type used in mesh buffers.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Vector of dimension `D`, the point type of a `D`-dimensional curve.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Machine epsilon, the threshold the polygon and frame algorithms compare against.
pub const EPSILON: f64 = f64::EPSILON;
