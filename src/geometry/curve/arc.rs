use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, ARC_ENDPOINT_TOLERANCE, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc in the plan (normal +Z).
///
/// Angles are measured counter-clockwise from +X. The arc sweeps
/// counter-clockwise from `start_angle` to `end_angle`, with
/// `0 < end_angle - start_angle <= 2*pi`.
///
/// `P(t) = center + radius * (cos t, sin t, 0)`
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    first: Point3,
    second: Point3,
}

impl Arc {
    /// Creates the counter-clockwise arc from `first` to `second`.
    ///
    /// Coincident endpoints describe a full circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is not positive, or
    /// `GeometryError::NotCircular` if an endpoint is not at `radius` from
    /// the center.
    pub fn from_endpoints(center: Point3, radius: f64, first: Point3, second: Point3) -> Result<Self> {
        check_radius(radius)?;
        for p in [&first, &second] {
            let distance = (p - center).norm();
            if (distance - radius).abs() > ARC_ENDPOINT_TOLERANCE * radius.max(1.0) {
                return Err(GeometryError::NotCircular { radius, distance }.into());
            }
        }

        let start_angle = plan_angle(&center, &first);
        let mut sweep = (plan_angle(&center, &second) - start_angle).rem_euclid(TAU);
        if sweep < TOLERANCE {
            sweep = TAU;
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle: start_angle + sweep,
            first,
            second,
        })
    }

    /// Creates an arc from its center, radius and angular range.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is not positive or
    /// the sweep is outside `(0, 2*pi]`.
    pub fn from_angles(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        check_radius(radius)?;
        let sweep = end_angle - start_angle;
        if sweep.is_nan() || sweep <= TOLERANCE || sweep > TAU + TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "arc sweep {sweep} is outside (0, 2pi]"
            ))
            .into());
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
            first: point_at(&center, radius, start_angle),
            second: point_at(&center, radius, end_angle),
        })
    }

    /// Returns a concentric copy with the same angular range and a new radius.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the new radius is not positive.
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::from_angles(self.center, radius, self.start_angle, self.end_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the first endpoint as authored.
    #[must_use]
    pub fn first(&self) -> &Point3 {
        &self.first
    }

    /// Returns the second endpoint as authored.
    #[must_use]
    pub fn second(&self) -> &Point3 {
        &self.second
    }

    /// Returns whether the plan angle of `point` around the center lies
    /// within the arc's angular range.
    #[must_use]
    pub fn contains_angle_of(&self, point: &Point3) -> bool {
        let delta = (plan_angle(&self.center, point) - self.start_angle).rem_euclid(TAU);
        delta <= self.end_angle - self.start_angle + TOLERANCE || delta >= TAU - TOLERANCE
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_nan() || radius < TOLERANCE {
        return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
    }
    Ok(())
}

fn plan_angle(center: &Point3, point: &Point3) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

fn point_at(center: &Point3, radius: f64, angle: f64) -> Point3 {
    *center + Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(point_at(&self.center, self.radius, t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.end_angle - self.start_angle - TAU).abs() < TOLERANCE
    }
}
