mod arc;
mod line;

pub use arc::Arc;
pub use line::LineSegment;

use crate::error::Result;
use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Clamps `t` into the domain.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }
}

/// Trait for bounded parametric curves in the plan.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// The curve of a grid: either straight or circular.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceCurve {
    /// A straight grid.
    Line(LineSegment),
    /// A circular grid.
    Arc(Arc),
}

impl SourceCurve {
    /// Short name of the curve kind, for messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
        }
    }
}

impl From<LineSegment> for SourceCurve {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for SourceCurve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl Curve for SourceCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        match self {
            Self::Line(line) => line.evaluate(t),
            Self::Arc(arc) => arc.evaluate(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            Self::Line(line) => line.domain(),
            Self::Arc(arc) => arc.domain(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Line(line) => line.is_closed(),
            Self::Arc(arc) => arc.is_closed(),
        }
    }
}
