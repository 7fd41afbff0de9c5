use crate::error::{InteractionError, Result};
use crate::geometry::curve::LineSegment;
use crate::geometry::orientation::CanonicalOrientation;
use crate::math::{cross_z, distance_point_to_line, plan_normal, Point3, Vector3, TOLERANCE};

/// Offsets a straight grid toward a reference point.
#[derive(Debug)]
pub struct LineGridOffset<'a> {
    line: &'a LineSegment,
    reference: Point3,
}

/// Computed parameters of a straight grid offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOffset {
    source: LineSegment,
    orientation: CanonicalOrientation,
    distance: f64,
    direction: Vector3,
}

impl<'a> LineGridOffset<'a> {
    /// Creates a new line offset operation.
    #[must_use]
    pub fn new(line: &'a LineSegment, reference: Point3) -> Self {
        Self { line, reference }
    }

    /// Executes the offset.
    ///
    /// The distance is the perpendicular distance from the reference point
    /// to the line. The translation vector is the plan normal of the
    /// canonical direction scaled by that distance, flipped so that it
    /// points to the reference point's side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the line has zero length.
    pub fn execute(&self) -> Result<LineOffset> {
        let orientation = CanonicalOrientation::of_line(self.line);
        self.execute_with(orientation)
    }

    pub(crate) fn execute_with(&self, orientation: CanonicalOrientation) -> Result<LineOffset> {
        let CanonicalOrientation { start, end } = orientation;
        let distance = distance_point_to_line(&self.reference, &start, &end)?;

        let chord = end - start;
        let mut direction = plan_normal(&chord)? * distance;
        if cross_z(&(self.reference - start), &chord) < 0.0 {
            direction = -direction;
        }

        tracing::debug!(distance, ?direction, "computed line grid offset");

        Ok(LineOffset {
            source: self.line.clone(),
            orientation,
            distance,
            direction,
        })
    }
}

impl LineOffset {
    /// Returns the offset distance (non-negative).
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the signed translation applied to the source line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the canonical orientation used for the sign decision.
    #[must_use]
    pub fn orientation(&self) -> &CanonicalOrientation {
        &self.orientation
    }

    /// Returns the source line.
    #[must_use]
    pub fn source(&self) -> &LineSegment {
        &self.source
    }

    /// Returns a copy with the distance replaced, keeping the offset side.
    ///
    /// When the computed distance was zero the side is undefined and the
    /// plan normal of the canonical direction is used.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidOverride` if `distance` is negative
    /// or not finite.
    pub fn with_distance(&self, distance: f64) -> Result<Self> {
        check_override(distance)?;
        let len = self.direction.norm();
        let unit = if len < TOLERANCE {
            plan_normal(&(self.orientation.end - self.orientation.start))?
        } else {
            self.direction / len
        };
        Ok(Self {
            distance,
            direction: unit * distance,
            ..self.clone()
        })
    }

    /// Builds the offset grid line by translating the source.
    #[must_use]
    pub fn to_line(&self) -> LineSegment {
        self.source.translated(&self.direction)
    }
}

pub(super) fn check_override(distance: f64) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(InteractionError::InvalidOverride(distance.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizontal() -> LineSegment {
        LineSegment::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn reference_above_offsets_up() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(5.0, 3.0, 0.0))
            .execute()
            .unwrap();
        assert_relative_eq!(offset.distance(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(*offset.direction(), Vector3::new(0.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn reference_below_offsets_down() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(5.0, -3.0, 0.0))
            .execute()
            .unwrap();
        assert_relative_eq!(offset.distance(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(*offset.direction(), Vector3::new(0.0, -3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn authoring_order_does_not_matter() {
        let forward = horizontal();
        let backward = LineSegment::new(Point3::new(10.0, 0.0, 0.0), Point3::origin()).unwrap();
        let p = Point3::new(2.0, -4.0, 0.0);
        let a = LineGridOffset::new(&forward, p).execute().unwrap();
        let b = LineGridOffset::new(&backward, p).execute().unwrap();
        assert_relative_eq!(*a.direction(), *b.direction(), epsilon = 1e-12);
    }

    #[test]
    fn vertical_line_offsets_to_reference_side() {
        let line = LineSegment::new(Point3::new(0.0, 10.0, 0.0), Point3::origin()).unwrap();
        let right = LineGridOffset::new(&line, Point3::new(2.0, 5.0, 0.0)).execute().unwrap();
        let left = LineGridOffset::new(&line, Point3::new(-2.0, 5.0, 0.0)).execute().unwrap();
        assert!(right.direction().x > 0.0);
        assert!(left.direction().x < 0.0);
    }

    #[test]
    fn oblique_offset_lands_on_reference() {
        let line = LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 0.0)).unwrap();
        let p = Point3::new(0.0, 4.0, 0.0);
        let offset = LineGridOffset::new(&line, p).execute().unwrap();
        let moved = offset.to_line();
        let d = distance_point_to_line(&p, moved.start(), moved.end()).unwrap();
        assert!(d < 1e-9, "d={d}");
    }

    #[test]
    fn translated_line_keeps_length() {
        let line = LineSegment::new(Point3::new(-3.0, 1.0, 0.0), Point3::new(7.0, 6.5, 0.0)).unwrap();
        let offset = LineGridOffset::new(&line, Point3::new(1.0, 9.0, 0.0)).execute().unwrap();
        assert_relative_eq!(offset.to_line().length(), line.length(), epsilon = 1e-12);
    }

    #[test]
    fn reference_on_line_gives_zero() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(4.0, 0.0, 0.0)).execute().unwrap();
        assert!(offset.distance().abs() < 1e-12);
        assert!(offset.direction().norm() < 1e-12);
    }

    #[test]
    fn override_keeps_side() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(5.0, -3.0, 0.0))
            .execute()
            .unwrap()
            .with_distance(8.0)
            .unwrap();
        assert_relative_eq!(offset.distance(), 8.0);
        assert_relative_eq!(*offset.direction(), Vector3::new(0.0, -8.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn override_from_zero_uses_normal() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(5.0, 0.0, 0.0))
            .execute()
            .unwrap()
            .with_distance(2.0)
            .unwrap();
        assert_relative_eq!(offset.direction().norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_override_is_rejected() {
        let line = horizontal();
        let offset = LineGridOffset::new(&line, Point3::new(5.0, 1.0, 0.0)).execute().unwrap();
        assert!(offset.with_distance(-1.0).is_err());
        assert!(offset.with_distance(f64::INFINITY).is_err());
    }
}
