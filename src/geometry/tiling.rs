use std::collections::VecDeque;

use crate::foundation::core::{Rect, Vec2};
use crate::foundation::error::{VizError, VizResult};
use crate::geometry::parallelogram::ParallelogramFigure;

/// Relative dimension tolerance, scaled by the larger target side. Slivers
/// thinner than this are dropped instead of queued.
const SNAP_DIM: f64 = 1e-7;

/// Relative area tolerance for the terminal coverage check.
const COVER_REL_TOL: f64 = 1e-6;

/// Upper bound on placements before the planner gives up.
const MAX_PLACEMENTS: usize = 10_000;

/// Identifier of one rectangle piece inside a [`TilingPlan`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PieceId(pub u32);

/// Which staged source square a piece was cut from.
///
/// The law carries a factor of two, so both small squares appear twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SourceSquare {
    /// First `‖x‖²` square.
    FirstX,
    /// Second `‖x‖²` square.
    SecondX,
    /// First `‖y‖²` square.
    FirstY,
    /// Second `‖y‖²` square.
    SecondY,
}

/// Dimensions and provenance of one piece.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PieceRecord {
    /// Piece identifier.
    pub id: PieceId,
    /// Source square this piece descends from.
    pub source: SourceSquare,
    /// Piece width at the time it was cut.
    pub width: f64,
    /// Piece height at the time it was cut.
    pub height: f64,
    /// Piece this one was split off from, if any.
    pub parent: Option<PieceId>,
}

/// Cut direction of a [`TilingStep::Split`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplitAxis {
    /// Vertical cut dividing the piece's width.
    Vertical,
    /// Horizontal cut dividing the piece's height.
    Horizontal,
}

/// One step of the recorded decomposition choreography.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum TilingStep {
    /// Rotate a piece a quarter turn in place, swapping its footprint.
    Rotate {
        /// Piece being rotated.
        piece: PieceId,
    },
    /// Cut a piece in two. Both children together have the parent's area.
    Split {
        /// Piece being cut.
        parent: PieceId,
        /// Cut direction.
        axis: SplitAxis,
        /// Offset of the cut from the piece's left/bottom edge.
        at: f64,
        /// Child keeping the left/bottom part.
        kept: PieceId,
        /// Child carrying the remainder.
        split_off: PieceId,
    },
    /// Move a piece onto an uncovered target region.
    Place {
        /// Piece being placed.
        piece: PieceId,
        /// Whether the piece arrives rotated a quarter turn.
        rotated: bool,
        /// Destination rectangle in target coordinates.
        to: Rect,
    },
}

/// Final position of one piece after the choreography has run.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlacedPiece {
    /// Piece identifier.
    pub piece: PieceId,
    /// Source square the piece descends from.
    pub source: SourceSquare,
    /// Covered rectangle in target coordinates.
    pub rect: Rect,
    /// Whether the piece sits rotated a quarter turn.
    pub rotated: bool,
}

/// A complete area-conserving re-tiling of the two source-square pairs into
/// the two target squares of the parallelogram law.
///
/// Produced by [`plan_parallelogram_tiling`]. The plan is pure data: the
/// scene script replays [`TilingPlan::steps`] as animation directives, and
/// tests verify the conservation and coverage invariants on it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TilingPlan {
    /// Target square of side `‖x+y‖`, sitting at the origin.
    pub sum_target: Rect,
    /// Target square of side `‖x-y‖`, stacked directly above.
    pub diff_target: Rect,
    /// Every piece that ever existed, including intermediate split parents.
    pub pieces: Vec<PieceRecord>,
    /// Recorded split/place choreography in execution order.
    pub steps: Vec<TilingStep>,
    /// Terminal piece positions.
    pub placed: Vec<PlacedPiece>,
}

impl TilingPlan {
    /// Look up a piece record by id.
    pub fn piece(&self, id: PieceId) -> Option<&PieceRecord> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Combined area of both target squares.
    pub fn target_area(&self) -> f64 {
        self.sum_target.area() + self.diff_target.area()
    }

    /// Combined area of all terminally placed pieces.
    pub fn placed_area(&self) -> f64 {
        self.placed.iter().map(|p| p.rect.area()).sum()
    }

    /// Check the terminal tiling invariants: every placed piece lies inside a
    /// target, pieces do not overlap, and the targets are covered with no
    /// gap beyond floating tolerance.
    pub fn verify(&self) -> VizResult<()> {
        let total = self.target_area();
        let tol = COVER_REL_TOL * total;
        let slack = SNAP_DIM
            * self
                .sum_target
                .width()
                .max(self.diff_target.width())
                .max(1.0);

        for p in &self.placed {
            let inside_sum = contains_with_slack(self.sum_target, p.rect, slack);
            let inside_diff = contains_with_slack(self.diff_target, p.rect, slack);
            if !(inside_sum || inside_diff) {
                return Err(VizError::geometry(format!(
                    "piece {} placed outside both targets",
                    p.piece.0
                )));
            }
        }

        let mut overlap = 0.0;
        for (i, p) in self.placed.iter().enumerate() {
            for q in &self.placed[i + 1..] {
                let inter = p.rect.intersect(q.rect);
                overlap += inter.width().max(0.0) * inter.height().max(0.0);
            }
        }
        if overlap > tol {
            return Err(VizError::geometry(format!(
                "placed pieces overlap by area {overlap}"
            )));
        }

        let gap = total - self.placed_area();
        if gap.abs() > tol {
            return Err(VizError::geometry(format!(
                "targets not covered: residual area {gap}"
            )));
        }
        Ok(())
    }
}

fn contains_with_slack(outer: Rect, inner: Rect, slack: f64) -> bool {
    inner.x0 >= outer.x0 - slack
        && inner.y0 >= outer.y0 - slack
        && inner.x1 <= outer.x1 + slack
        && inner.y1 <= outer.y1 + slack
}

/// In-flight piece state while the planner runs.
#[derive(Clone, Copy, Debug)]
struct WorkPiece {
    id: PieceId,
    source: SourceSquare,
    width: f64,
    height: f64,
    rotated: bool,
}

impl WorkPiece {
    fn area(self) -> f64 {
        self.width * self.height
    }
}

/// Plan the re-tiling of `2‖x‖² + 2‖y‖²` of square material into the
/// `‖x+y‖²` and `‖x-y‖²` target squares.
///
/// The planner works greedily: it keeps a worklist of uncovered rectangular
/// target regions and slices the current source piece so that one slice
/// exactly covers the corner of the current region, rotating the slice a
/// quarter turn when that covers more. Guillotine leftovers of the region and
/// the piece go back on their worklists. Sub-tolerance slivers on either side
/// are dropped; the parallelogram law guarantees the dropped amounts balance.
///
/// Errors on parallel spanning vectors and when the construction fails to
/// converge (which the assumed aspect relationships rule out; this is a
/// staging construction, not a general tiling solver).
#[tracing::instrument]
pub fn plan_parallelogram_tiling(x: Vec2, y: Vec2) -> VizResult<TilingPlan> {
    let fig = ParallelogramFigure::new(x, y)?;
    let a = fig.x_square().side;
    let b = fig.y_square().side;
    let c = fig.sum_square().side;
    let d = fig.diff_square().side;

    let sum_target = Rect::new(0.0, 0.0, c, c);
    let diff_target = Rect::new(0.0, c, d, c + d);
    let total_area = sum_target.area() + diff_target.area();
    let area_tol = COVER_REL_TOL * total_area;
    // Scale the sliver tolerance with the figure so extreme aspect ratios do
    // not leave sub-tolerance strips that starve the placement bound.
    let snap = SNAP_DIM * c.max(d).max(1.0);

    let mut pieces: Vec<PieceRecord> = Vec::new();
    let mut steps: Vec<TilingStep> = Vec::new();
    let mut placed: Vec<PlacedPiece> = Vec::new();
    let mut next_id = 0u32;

    let mut fresh = |pieces: &mut Vec<PieceRecord>,
                     source: SourceSquare,
                     width: f64,
                     height: f64,
                     parent: Option<PieceId>| {
        let id = PieceId(next_id);
        next_id += 1;
        pieces.push(PieceRecord {
            id,
            source,
            width,
            height,
            parent,
        });
        id
    };

    let mut queue: VecDeque<WorkPiece> = VecDeque::new();
    for (source, side) in [
        (SourceSquare::FirstX, a),
        (SourceSquare::SecondX, a),
        (SourceSquare::FirstY, b),
        (SourceSquare::SecondY, b),
    ] {
        let id = fresh(&mut pieces, source, side, side, None);
        queue.push_back(WorkPiece {
            id,
            source,
            width: side,
            height: side,
            rotated: false,
        });
    }

    // Depth-first over uncovered regions: finish a corner before moving on.
    let mut regions: VecDeque<Rect> = VecDeque::new();
    regions.push_back(sum_target);
    regions.push_back(diff_target);

    let mut placements = 0usize;
    while let Some(region) = regions.pop_front() {
        let (rw, rh) = (region.width(), region.height());
        if rw < snap || rh < snap {
            continue;
        }

        let Some(mut piece) = queue.pop_front() else {
            let rest: f64 = region.area() + regions.iter().map(|r| r.area()).sum::<f64>();
            if rest <= area_tol {
                break;
            }
            return Err(VizError::geometry(
                "ran out of source material before the targets were covered",
            ));
        };

        placements += 1;
        if placements > MAX_PLACEMENTS {
            return Err(VizError::geometry(
                "tiling construction did not converge within the placement bound",
            ));
        }

        // Orientation that covers the larger share of the region corner.
        let straight = piece.width.min(rw) * piece.height.min(rh);
        let turned = piece.height.min(rw) * piece.width.min(rh);
        if turned > straight + f64::EPSILON {
            piece = WorkPiece {
                width: piece.height,
                height: piece.width,
                rotated: !piece.rotated,
                ..piece
            };
            steps.push(TilingStep::Rotate { piece: piece.id });
        }

        // Snap near-exact fits so incommensurable side ratios cannot leave
        // degenerate slivers behind.
        if (piece.width - rw).abs() < snap {
            piece.width = rw;
        }
        if (piece.height - rh).abs() < snap {
            piece.height = rh;
        }

        let cw = piece.width.min(rw);
        let ch = piece.height.min(rh);

        if piece.width > cw {
            let off_w = piece.width - cw;
            let kept = fresh(&mut pieces, piece.source, cw, piece.height, Some(piece.id));
            let split_off = fresh(
                &mut pieces,
                piece.source,
                off_w,
                piece.height,
                Some(piece.id),
            );
            steps.push(TilingStep::Split {
                parent: piece.id,
                axis: SplitAxis::Vertical,
                at: cw,
                kept,
                split_off,
            });
            if off_w >= snap {
                queue.push_front(WorkPiece {
                    id: split_off,
                    width: off_w,
                    ..piece
                });
            }
            piece = WorkPiece {
                id: kept,
                width: cw,
                ..piece
            };
        }
        if piece.height > ch {
            let off_h = piece.height - ch;
            let kept = fresh(&mut pieces, piece.source, piece.width, ch, Some(piece.id));
            let split_off = fresh(
                &mut pieces,
                piece.source,
                piece.width,
                off_h,
                Some(piece.id),
            );
            steps.push(TilingStep::Split {
                parent: piece.id,
                axis: SplitAxis::Horizontal,
                at: ch,
                kept,
                split_off,
            });
            if off_h >= snap {
                queue.push_front(WorkPiece {
                    id: split_off,
                    height: off_h,
                    ..piece
                });
            }
            piece = WorkPiece {
                id: kept,
                height: ch,
                ..piece
            };
        }

        let dest = Rect::new(region.x0, region.y0, region.x0 + cw, region.y0 + ch);
        steps.push(TilingStep::Place {
            piece: piece.id,
            rotated: piece.rotated,
            to: dest,
        });
        placed.push(PlacedPiece {
            piece: piece.id,
            source: piece.source,
            rect: dest,
            rotated: piece.rotated,
        });

        // Guillotine leftovers of the region, nearest corner first.
        let right = Rect::new(region.x0 + cw, region.y0, region.x1, region.y0 + ch);
        let top = Rect::new(region.x0, region.y0 + ch, region.x1, region.y1);
        regions.push_front(top);
        regions.push_front(right);
    }

    let leftover: f64 = queue.iter().map(|p| p.area()).sum();
    if leftover > area_tol {
        return Err(VizError::geometry(format!(
            "source material left over after covering the targets: {leftover}"
        )));
    }

    tracing::debug!(
        pieces = pieces.len(),
        steps = steps.len(),
        placed = placed.len(),
        "planned parallelogram tiling"
    );

    Ok(TilingPlan {
        sum_target,
        diff_target,
        pieces,
        steps,
        placed,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tiling.rs"]
mod tests;
