use std::f64::consts::TAU;

use crate::geometry::curve::{Arc, Curve, LineSegment, SourceCurve};
use crate::math::{Point3, TOLERANCE};

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub point: Point3,
    /// The parameter value at the closest point.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a bounded grid curve to a given point.
pub struct ClosestPointOnCurve<'a> {
    curve: &'a SourceCurve,
    point: Point3,
}

impl<'a> ClosestPointOnCurve<'a> {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a SourceCurve, point: Point3) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    ///
    /// For lines, projects onto the segment and clamps to its ends.
    /// For arcs, projects radially when the point lies within the arc's
    /// angular range and otherwise picks the nearer endpoint.
    ///
    /// Returns `None` when the point cannot be projected (non-finite input).
    #[must_use]
    pub fn execute(&self) -> Option<ClosestPointResult> {
        if !self.point.coords.iter().all(|c| c.is_finite()) {
            return None;
        }
        match self.curve {
            SourceCurve::Line(line) => closest_point_on_line(line, &self.point),
            SourceCurve::Arc(arc) => closest_point_on_arc(arc, &self.point),
        }
    }
}

/// Returns the distance from `point` to the nearest point of `curve`.
///
/// Falls back to `0.0` when no projection exists; callers that need to
/// tell that case apart should use [`ClosestPointOnCurve`] directly.
#[must_use]
pub fn distance_point_to_curve(point: &Point3, curve: &SourceCurve) -> f64 {
    ClosestPointOnCurve::new(curve, *point)
        .execute()
        .map_or(0.0, |r| r.distance)
}

fn closest_point_on_line(line: &LineSegment, point: &Point3) -> Option<ClosestPointResult> {
    let t = line.domain().clamp((point - line.start()).dot(&line.direction()));
    let closest = line.evaluate(t).ok()?;

    Some(ClosestPointResult {
        point: closest,
        parameter: t,
        distance: (point - closest).norm(),
    })
}

fn closest_point_on_arc(arc: &Arc, point: &Point3) -> Option<ClosestPointResult> {
    let center = arc.center();
    let to_point = point - center;
    let in_plane = (to_point.x * to_point.x + to_point.y * to_point.y).sqrt();

    let parameter = if in_plane < TOLERANCE {
        // Every point of the arc is equidistant; take the start.
        arc.start_angle()
    } else if arc.contains_angle_of(point) {
        let sweep = arc.end_angle() - arc.start_angle();
        let delta = (to_point.y.atan2(to_point.x) - arc.start_angle()).rem_euclid(TAU);
        // Just short of a full turn means just before the start.
        if delta > sweep + TOLERANCE {
            arc.start_angle()
        } else {
            arc.domain().clamp(arc.start_angle() + delta)
        }
    } else {
        let d_start = (point - arc.evaluate(arc.start_angle()).ok()?).norm();
        let d_end = (point - arc.evaluate(arc.end_angle()).ok()?).norm();
        if d_start <= d_end {
            arc.start_angle()
        } else {
            arc.end_angle()
        }
    };

    let closest = arc.evaluate(parameter).ok()?;
    Some(ClosestPointResult {
        point: closest,
        parameter,
        distance: (point - closest).norm(),
    })
}
