pub mod vector;

pub use vector::{angle_between, cosine_between, cross_z, distance_point_to_line, plan_normal};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance used when comparing plan coordinates of grid endpoints.
pub const COORDINATE_TOLERANCE: f64 = 1e-6;

/// Relative tolerance for arc endpoints lying on the arc circle.
pub const ARC_ENDPOINT_TOLERANCE: f64 = 1e-6;
