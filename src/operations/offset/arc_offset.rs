use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Arc, SourceCurve};
use crate::geometry::orientation::CanonicalOrientation;
use crate::math::{Point3, TOLERANCE};
use crate::operations::query::distance_point_to_curve;

use super::line_offset::check_override;

/// Offsets a circular grid toward a reference point.
///
/// The new arc is concentric with the source. A reference point inside the
/// circle shrinks the radius; one on or outside it grows the radius.
#[derive(Debug)]
pub struct ArcGridOffset<'a> {
    arc: &'a Arc,
    reference: Point3,
}

/// Computed parameters of a circular grid offset.
///
/// The start and end angles are those of the source arc: a concentric
/// offset keeps the same angular range.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcOffset {
    source: Arc,
    orientation: CanonicalOrientation,
    distance: f64,
    radius: f64,
    inside: bool,
}

impl<'a> ArcGridOffset<'a> {
    /// Creates a new arc offset operation.
    #[must_use]
    pub fn new(arc: &'a Arc, reference: Point3) -> Self {
        Self { arc, reference }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the resulting radius is not
    /// positive.
    pub fn execute(&self) -> Result<ArcOffset> {
        let orientation = CanonicalOrientation::of_arc(self.arc);
        self.execute_with(orientation)
    }

    pub(crate) fn execute_with(&self, orientation: CanonicalOrientation) -> Result<ArcOffset> {
        let source = SourceCurve::Arc(self.arc.clone());
        let magnitude = distance_point_to_curve(&self.reference, &source);

        let inside = (self.reference - self.arc.center()).norm() < self.arc.radius();
        let distance = if inside { -magnitude } else { magnitude };
        let radius = checked_radius(self.arc.radius() + distance)?;

        tracing::debug!(distance, radius, inside, "computed arc grid offset");

        Ok(ArcOffset {
            source: self.arc.clone(),
            orientation,
            distance,
            radius,
            inside,
        })
    }
}

fn checked_radius(radius: f64) -> Result<f64> {
    if radius.is_nan() || radius <= TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "offset arc radius {radius} is not positive"
        ))
        .into());
    }
    Ok(radius)
}

impl ArcOffset {
    /// Returns the signed offset distance; negative means toward the center.
    #[must_use]
    pub fn signed_distance(&self) -> f64 {
        self.distance
    }

    /// Returns the offset distance magnitude.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance.abs()
    }

    /// Returns the radius of the new arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center shared by the source and the new arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.source.center()
    }

    /// Returns the start angle of the new arc.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.source.start_angle()
    }

    /// Returns the end angle of the new arc.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.source.end_angle()
    }

    /// Returns whether the new arc lies inside the source circle.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Returns the canonical orientation of the source arc.
    #[must_use]
    pub fn orientation(&self) -> &CanonicalOrientation {
        &self.orientation
    }

    /// Returns the source arc.
    #[must_use]
    pub fn source(&self) -> &Arc {
        &self.source
    }

    /// Returns a copy with the distance magnitude replaced, keeping the side.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidOverride` for a negative or
    /// non-finite distance, or `GeometryError::Degenerate` if the arc would
    /// collapse.
    pub fn with_distance(&self, distance: f64) -> Result<Self> {
        check_override(distance)?;
        let distance = if self.inside { -distance } else { distance };
        let radius = checked_radius(self.source.radius() + distance)?;
        Ok(Self {
            distance,
            radius,
            ..self.clone()
        })
    }

    /// Builds the offset grid arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the arc cannot be built.
    pub fn to_arc(&self) -> Result<Arc> {
        self.source.with_radius(self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::GridOffsetError;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn upper_half(radius: f64) -> Arc {
        Arc::from_angles(Point3::origin(), radius, 0.0, PI).unwrap()
    }

    #[test]
    fn reference_inside_shrinks() {
        let arc = upper_half(10.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(0.0, 7.0, 0.0))
            .execute()
            .unwrap();
        assert_relative_eq!(offset.signed_distance(), -3.0, epsilon = 1e-12);
        assert_relative_eq!(offset.radius(), 7.0, epsilon = 1e-12);
        assert!(offset.is_inside());
    }

    #[test]
    fn reference_outside_grows() {
        let arc = upper_half(10.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(-8.0, 6.0 * 2.0, 0.0))
            .execute()
            .unwrap();
        let expected = (8.0_f64.powi(2) + 12.0_f64.powi(2)).sqrt() - 10.0;
        assert_relative_eq!(offset.signed_distance(), expected, epsilon = 1e-9);
        assert_relative_eq!(offset.radius(), 10.0 + expected, epsilon = 1e-9);
    }

    #[test]
    fn angles_and_center_are_preserved() {
        let arc = Arc::from_angles(Point3::new(3.0, -2.0, 0.0), 4.0, 0.5, 0.5 + FRAC_PI_2).unwrap();
        let reference = *arc.center() + Vector3::new(6.0 * 0.8_f64.cos(), 6.0 * 0.8_f64.sin(), 0.0);
        let offset = ArcGridOffset::new(&arc, reference).execute().unwrap();
        let new_arc = offset.to_arc().unwrap();
        assert_eq!(new_arc.center(), arc.center());
        assert_relative_eq!(new_arc.start_angle(), arc.start_angle());
        assert_relative_eq!(new_arc.end_angle(), arc.end_angle());
        assert_relative_eq!(new_arc.radius(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn reference_at_center_collapses() {
        let arc = upper_half(2.0);
        let r = ArcGridOffset::new(&arc, Point3::origin()).execute();
        assert!(matches!(
            r,
            Err(GridOffsetError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn reference_on_arc_keeps_radius() {
        let arc = upper_half(5.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(0.0, 5.0, 0.0)).execute().unwrap();
        assert!(offset.distance() < 1e-12);
        assert_relative_eq!(offset.radius(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn angles_below_minus_pi_offset_radially() {
        let arc = Arc::from_angles(Point3::origin(), 10.0, -2.0 * PI, -PI).unwrap();
        let offset = ArcGridOffset::new(&arc, Point3::new(0.0, 13.0, 0.0))
            .execute()
            .unwrap();
        assert_relative_eq!(offset.signed_distance(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(offset.radius(), 13.0, epsilon = 1e-9);
        assert!(!offset.is_inside());
    }

    #[test]
    fn inside_beyond_angular_range_measures_to_endpoint() {
        // Below the upper half circle: the nearest arc point is the (10, 0) end.
        let arc = upper_half(10.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(6.0, -1.0, 0.0))
            .execute()
            .unwrap();
        let expected = 17.0_f64.sqrt();
        assert!(offset.is_inside());
        assert_relative_eq!(offset.signed_distance(), -expected, epsilon = 1e-9);
        assert_relative_eq!(offset.radius(), 10.0 - expected, epsilon = 1e-9);
    }

    #[test]
    fn inside_far_from_arc_collapses() {
        let arc = upper_half(10.0);
        let r = ArcGridOffset::new(&arc, Point3::new(0.0, -4.0, 0.0)).execute();
        assert!(matches!(
            r,
            Err(GridOffsetError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn override_keeps_side() {
        let arc = upper_half(10.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(0.0, 7.0, 0.0))
            .execute()
            .unwrap()
            .with_distance(4.5)
            .unwrap();
        assert_relative_eq!(offset.radius(), 5.5, epsilon = 1e-12);
        assert_relative_eq!(offset.signed_distance(), -4.5);
    }

    #[test]
    fn override_collapsing_arc_fails() {
        let arc = upper_half(10.0);
        let offset = ArcGridOffset::new(&arc, Point3::new(0.0, 7.0, 0.0)).execute().unwrap();
        assert!(offset.with_distance(10.0).is_err());
        assert!(offset.with_distance(12.0).is_err());
    }
}
