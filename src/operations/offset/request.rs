use crate::error::Result;
use crate::geometry::curve::SourceCurve;
use crate::geometry::orientation::CanonicalOrientation;
use crate::math::{Point3, COORDINATE_TOLERANCE};

use super::arc_offset::{ArcGridOffset, ArcOffset};
use super::line_offset::{LineGridOffset, LineOffset};

/// A single offset attempt: the picked grid curve and the picked point.
#[derive(Debug, Clone)]
pub struct OffsetRequest {
    curve: SourceCurve,
    reference: Point3,
    orientation: CanonicalOrientation,
}

impl OffsetRequest {
    /// Creates a request, resolving the canonical orientation of `curve`.
    #[must_use]
    pub fn new(curve: SourceCurve, reference: Point3) -> Self {
        Self::with_tolerance(curve, reference, COORDINATE_TOLERANCE)
    }

    /// Creates a request, comparing line coordinates with `tolerance` when
    /// resolving the orientation.
    #[must_use]
    pub fn with_tolerance(curve: SourceCurve, reference: Point3, tolerance: f64) -> Self {
        let orientation = CanonicalOrientation::resolve(&curve, tolerance);
        Self {
            curve,
            reference,
            orientation,
        }
    }

    /// Returns the source curve.
    #[must_use]
    pub fn curve(&self) -> &SourceCurve {
        &self.curve
    }

    /// Returns the reference point.
    #[must_use]
    pub fn reference(&self) -> &Point3 {
        &self.reference
    }

    /// Returns the canonical orientation of the source curve.
    #[must_use]
    pub fn orientation(&self) -> &CanonicalOrientation {
        &self.orientation
    }

    /// Runs the line or arc offset engine, depending on the curve kind.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the offset cannot be computed.
    pub fn execute(&self) -> Result<OffsetResult> {
        match &self.curve {
            SourceCurve::Line(line) => LineGridOffset::new(line, self.reference)
                .execute_with(self.orientation)
                .map(OffsetResult::Line),
            SourceCurve::Arc(arc) => ArcGridOffset::new(arc, self.reference)
                .execute_with(self.orientation)
                .map(OffsetResult::Arc),
        }
    }
}

/// Output of either offset engine.
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetResult {
    /// Translation of a straight grid.
    Line(LineOffset),
    /// Concentric copy of a circular grid.
    Arc(ArcOffset),
}

impl OffsetResult {
    /// Returns the offset distance magnitude, as shown to the user.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Line(offset) => offset.distance(),
            Self::Arc(offset) => offset.distance(),
        }
    }

    /// Returns a copy with the distance magnitude replaced.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidOverride` for a negative or
    /// non-finite distance, or `GeometryError::Degenerate` if an arc would
    /// collapse.
    pub fn with_distance(&self, distance: f64) -> Result<Self> {
        Ok(match self {
            Self::Line(offset) => Self::Line(offset.with_distance(distance)?),
            Self::Arc(offset) => Self::Arc(offset.with_distance(distance)?),
        })
    }

    /// Builds the curve of the new grid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the curve cannot be built.
    pub fn to_curve(&self) -> Result<SourceCurve> {
        Ok(match self {
            Self::Line(offset) => SourceCurve::Line(offset.to_line()),
            Self::Arc(offset) => SourceCurve::Arc(offset.to_arc()?),
        })
    }
}

/// Computes the offset of `curve` toward `reference`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the offset cannot be computed.
pub fn offset_grid(curve: &SourceCurve, reference: Point3) -> Result<OffsetResult> {
    OffsetRequest::new(curve.clone(), reference).execute()
}
