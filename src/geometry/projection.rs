use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{VizError, VizResult};

/// Tolerance under which a dot product counts as orthogonal.
pub const ORTHO_TOL: f64 = 1e-9;

/// The orthogonal projection of one vector onto the line spanned by another.
///
/// Produced by [`project`]; all fields are plain values consumed by the
/// presentation layer for drawing.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Projection {
    /// Projection factor `(u·v) / (v·v)`.
    pub scalar: f64,
    /// The base vector `v` the projection lies along.
    pub onto: Vec2,
    /// The projected vector `scalar * v`.
    pub vector: Vec2,
}

impl Projection {
    /// The component of `u` orthogonal to the base, `u - proj`.
    pub fn rejection(&self, u: Vec2) -> Vec2 {
        u - self.vector
    }

    /// Segment from the tip of `u` down to the projection foot.
    ///
    /// Drawn perpendicular to the base vector when `u` is the vector this
    /// projection was computed from.
    pub fn drop_segment(&self, u: Vec2) -> (Point, Point) {
        (u.to_point(), self.vector.to_point())
    }
}

/// Project `u` onto the line spanned by `v`.
///
/// `v` must be non-zero; the zero vector has no spanned line and is rejected
/// as a [`VizError::Geometry`] instead of dividing by zero.
pub fn project(u: Vec2, v: Vec2) -> VizResult<Projection> {
    let denom = v.dot(v);
    if !denom.is_finite() || denom < f64::EPSILON {
        return Err(VizError::geometry(
            "projection base must be a non-zero vector",
        ));
    }
    let scalar = u.dot(v) / denom;
    Ok(Projection {
        scalar,
        onto: v,
        vector: v * scalar,
    })
}

/// Whether two vectors are orthogonal within `tol`.
pub fn is_orthogonal(a: Vec2, b: Vec2, tol: f64) -> bool {
    a.dot(b).abs() <= tol
}

/// Corner polyline of a right-angle marker between two arm directions.
///
/// Returns the three points of the small square-corner mark placed at
/// `corner`, `arm` units along each direction. Both directions must be
/// non-zero; they are normalized here.
pub fn right_angle_corner(
    corner: Point,
    dir_a: Vec2,
    dir_b: Vec2,
    arm: f64,
) -> VizResult<[Point; 3]> {
    if !(arm.is_finite() && arm > 0.0) {
        return Err(VizError::geometry("right-angle arm must be finite and > 0"));
    }
    let (a2, b2) = (dir_a.hypot2(), dir_b.hypot2());
    if a2 < f64::EPSILON || b2 < f64::EPSILON {
        return Err(VizError::geometry(
            "right-angle marker directions must be non-zero",
        ));
    }
    let a = dir_a.normalize() * arm;
    let b = dir_b.normalize() * arm;
    Ok([corner + a, corner + a + b, corner + b])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/projection.rs"]
mod tests;
