use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Returns the perpendicular distance from `point` to the infinite line
/// through `start` and `end`.
///
/// The vector `point - start` is projected onto the unit line direction and
/// the projection is subtracted, leaving the perpendicular component.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `start` and `end` coincide.
pub fn distance_point_to_line(point: &Point3, start: &Point3, end: &Point3) -> Result<f64> {
    let chord = end - start;
    let len = chord.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate("line endpoints coincide".into()).into());
    }
    let direction = chord / len;

    let to_point = point - start;
    let projection = direction * to_point.dot(&direction);
    Ok((to_point - projection).norm())
}

/// Returns the cosine of the angle between two vectors.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector has zero length.
pub fn cosine_between(v1: &Vector3, v2: &Vector3) -> Result<f64> {
    let lengths = v1.norm() * v2.norm();
    if lengths < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v1.dot(v2) / lengths)
}

/// Returns the angle between two vectors in radians, within `[0, pi]`.
///
/// The cosine is clamped to `[-1, 1]` so that rounding on (anti)parallel
/// vectors never produces `NaN`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector has zero length.
pub fn angle_between(v1: &Vector3, v2: &Vector3) -> Result<f64> {
    Ok(cosine_between(v1, v2)?.clamp(-1.0, 1.0).acos())
}

/// Z component of `a x b`. Positive when `b` is counter-clockwise from `a`
/// in plan view.
#[must_use]
pub fn cross_z(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unit in-plan normal of a direction: `normalize(direction x Z)`.
///
/// For a direction pointing along +X this is -Y, i.e. the right-hand side.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the direction has no plan component.
pub fn plan_normal(direction: &Vector3) -> Result<Vector3> {
    let normal = direction.cross(&Vector3::z());
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(normal / len)
}
