use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{VizError, VizResult};

/// Cross-product magnitude below which two vectors count as parallel,
/// relative to the product of their lengths.
const PARALLEL_TOL: f64 = 1e-9;

/// A parallelogram spanned by two linearly independent plane vectors.
///
/// This is the staging figure for the parallelogram-law proof: it exposes the
/// vertices, the two diagonals `x + y` and `x - y`, and the axis-aligned
/// square description for each of the four staged squares.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallelogramFigure {
    /// First spanning vector.
    pub x: Vec2,
    /// Second spanning vector.
    pub y: Vec2,
}

impl ParallelogramFigure {
    /// Build the figure, rejecting parallel or degenerate spanning vectors.
    pub fn new(x: Vec2, y: Vec2) -> VizResult<Self> {
        if !(x.x.is_finite() && x.y.is_finite() && y.x.is_finite() && y.y.is_finite()) {
            return Err(VizError::geometry("spanning vectors must be finite"));
        }
        let scale = x.hypot() * y.hypot();
        if scale < f64::EPSILON || x.cross(y).abs() <= PARALLEL_TOL * scale {
            return Err(VizError::geometry(
                "parallelogram spanning vectors must be linearly independent",
            ));
        }
        Ok(Self { x, y })
    }

    /// Vertices in drawing order: origin, `x`, `x + y`, `y`.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::ZERO,
            self.x.to_point(),
            (self.x + self.y).to_point(),
            self.y.to_point(),
        ]
    }

    /// The diagonal `x + y` (origin to far corner).
    pub fn sum(&self) -> Vec2 {
        self.x + self.y
    }

    /// The diagonal `x - y` (from the tip of `y` to the tip of `x`).
    pub fn diff(&self) -> Vec2 {
        self.x - self.y
    }

    /// Square spec for the `‖x‖²` square.
    pub fn x_square(&self) -> SquareSpec {
        SquareSpec::for_vector(self.x)
    }

    /// Square spec for the `‖y‖²` square.
    pub fn y_square(&self) -> SquareSpec {
        SquareSpec::for_vector(self.y)
    }

    /// Square spec for the `‖x+y‖²` square.
    pub fn sum_square(&self) -> SquareSpec {
        SquareSpec::for_vector(self.sum())
    }

    /// Square spec for the `‖x-y‖²` square.
    pub fn diff_square(&self) -> SquareSpec {
        SquareSpec::for_vector(self.diff())
    }
}

/// Side length and source-arrow orientation of one staged square.
///
/// `angle_rad` is the argument of the source vector (angle from the positive
/// x-axis); the staging animation first rotates the arrow upright and then
/// collapses it into an axis-aligned square of side `side`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SquareSpec {
    /// Square side, the Euclidean norm of the source vector.
    pub side: f64,
    /// Argument of the source vector in radians.
    pub angle_rad: f64,
}

impl SquareSpec {
    /// Spec for the square on a given vector.
    pub fn for_vector(v: Vec2) -> Self {
        Self {
            side: v.hypot(),
            angle_rad: v.atan2(),
        }
    }

    /// Rotation that brings the source arrow vertical, `π/2 - angle`.
    pub fn upright_rotation(&self) -> f64 {
        FRAC_PI_2 - self.angle_rad
    }

    /// Square area, `side²`.
    pub fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// Residual of the parallelogram law for `x`, `y`:
/// `‖x+y‖² + ‖x-y‖² - 2‖x‖² - 2‖y‖²`.
///
/// Identically zero (up to floating error) for every pair of plane vectors;
/// the tiling in [`crate::geometry::tiling`] visualizes why.
pub fn parallelogram_law_residual(x: Vec2, y: Vec2) -> f64 {
    (x + y).hypot2() + (x - y).hypot2() - 2.0 * x.hypot2() - 2.0 * y.hypot2()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/parallelogram.rs"]
mod tests;
