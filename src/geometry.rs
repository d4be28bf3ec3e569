/// Parallelogram staging: vertices, diagonals, square specs.
pub mod parallelogram;
/// Scalar projection, rejection, and right-angle markers.
pub mod projection;
/// Area-conserving rectangle tiling for the parallelogram-law proof.
pub mod tiling;
