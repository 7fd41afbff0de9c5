use crate::math::{cross_z, Point3, COORDINATE_TOLERANCE};

use super::curve::{Arc, LineSegment, SourceCurve};

/// Authoring-independent start/end assignment of a grid curve.
///
/// Lines run left to right, or bottom to top when vertical. Arcs run
/// counter-clockwise as judged by the two endpoint radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalOrientation {
    /// Canonical start point.
    pub start: Point3,
    /// Canonical end point.
    pub end: Point3,
}

impl CanonicalOrientation {
    /// Resolves the canonical orientation of any grid curve.
    #[must_use]
    pub fn of(curve: &SourceCurve) -> Self {
        Self::resolve(curve, COORDINATE_TOLERANCE)
    }

    /// Like [`CanonicalOrientation::of`], comparing line coordinates with
    /// `tolerance`.
    #[must_use]
    pub fn resolve(curve: &SourceCurve, tolerance: f64) -> Self {
        match curve {
            SourceCurve::Line(line) => Self::of_points(*line.start(), *line.end(), tolerance),
            SourceCurve::Arc(arc) => Self::of_arc(arc),
        }
    }

    /// Resolves the orientation of a straight grid.
    #[must_use]
    pub fn of_line(line: &LineSegment) -> Self {
        Self::of_points(*line.start(), *line.end(), COORDINATE_TOLERANCE)
    }

    /// Orders two line endpoints by increasing X, or by increasing Y when
    /// they share the same X within `tolerance`.
    #[must_use]
    pub fn of_points(p0: Point3, p1: Point3, tolerance: f64) -> Self {
        let same_y = (p0.y - p1.y).abs() < tolerance;
        let same_x = (p0.x - p1.x).abs() < tolerance;

        let swap = if !same_y && same_x {
            p0.y > p1.y
        } else {
            p0.x > p1.x
        };

        if swap {
            Self { start: p1, end: p0 }
        } else {
            Self { start: p0, end: p1 }
        }
    }

    /// Resolves the orientation of a circular grid.
    ///
    /// The endpoints are kept in authored order when the turn from the
    /// first radius to the second is counter-clockwise, and swapped
    /// otherwise.
    #[must_use]
    pub fn of_arc(arc: &Arc) -> Self {
        let center = arc.center();
        let (p0, p1) = (*arc.first(), *arc.second());
        if cross_z(&(p0 - center), &(p1 - center)) > 0.0 {
            Self { start: p0, end: p1 }
        } else {
            Self { start: p1, end: p0 }
        }
    }
}
