pub mod curve;
pub mod orientation;

pub use curve::{Arc, Curve, CurveDomain, LineSegment, SourceCurve};
pub use orientation::CanonicalOrientation;
