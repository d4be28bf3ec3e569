//! Hilbertviz builds the lecture "Hilbert Spaces and Orthogonality" as data.
//!
//! Each scene of the lecture is a fixed, ahead-of-time sequence of declarative
//! drawing/animation directives and wait intervals (a [`Scene`]), parameterized
//! by small amounts of computed geometry: a vector projection here, a sequence
//! of area-conserving rectangle cuts there. An external animation host turns
//! that data into pixels; this crate never renders anything itself.
//!
//! # Layers
//!
//! 1. **Geometry** ([`geometry`]): the numeric staging logic. Vector
//!    projection with its orthogonal drop segment, and the rectangle tiling
//!    that re-tiles `2‖x‖² + 2‖y‖²` of square area into `‖x+y‖² + ‖x-y‖²`
//!    for the parallelogram-law proof.
//! 2. **Script** ([`script`]): immutable visual-object values, animation
//!    directives, and a builder that assembles validated scenes.
//! 3. **Scenes** ([`scenes`]): the lecture catalog, one constructor per scene.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure data out**: scene construction is deterministic and side-effect
//!   free; the only external surface is `Scene` JSON handed to the host.
//! - **No ambient state**: the TeX preamble and all presentation offsets are
//!   explicit configuration values, passed into every scene constructor.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
/// Framework-independent staging geometry.
pub mod geometry;
mod script;

/// The lecture scene catalog.
pub mod scenes;

pub use foundation::core::{Color, DOWN, LEFT, ORIGIN, Point, RIGHT, Rect, UP, Vec2};
pub use foundation::error::{VizError, VizResult};
pub use geometry::parallelogram::{ParallelogramFigure, SquareSpec, parallelogram_law_residual};
pub use geometry::projection::{ORTHO_TOL, Projection, is_orthogonal, project, right_angle_corner};
pub use geometry::tiling::{
    PieceId, PieceRecord, PlacedPiece, SourceSquare, SplitAxis, TilingPlan, TilingStep,
    plan_parallelogram_tiling,
};
pub use script::config::{SceneConfig, StyleConfig};
pub use script::directive::{
    Action, Animation, DEFAULT_RUN_TIME_SEC, Step, create, fade_in, fade_out, grow, move_to,
    rotate, transform, write,
};
pub use script::object::{AlignX, AlignY, Anchor, Placement, Side, TextSpec, Visual, VisualKind};
pub use script::scene::{Scene, SceneBuilder};
pub use script::tex::{TexTemplate, TexTemplateBuilder};
