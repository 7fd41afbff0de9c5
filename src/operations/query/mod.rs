mod closest_point;

pub use closest_point::{distance_point_to_curve, ClosestPointOnCurve, ClosestPointResult};
