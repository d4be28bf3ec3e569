use std::collections::BTreeMap;

use super::*;

fn assert_plan_ok(x: Vec2, y: Vec2) -> TilingPlan {
    let plan = plan_parallelogram_tiling(x, y).unwrap();
    plan.verify().unwrap();
    plan
}

#[test]
fn unit_square_pair_tiles_exactly() {
    let plan = assert_plan_ok(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    // c = d = sqrt(2), four unit squares of source material.
    assert!((plan.target_area() - 4.0).abs() < 1e-9);
    assert!((plan.placed_area() - 4.0).abs() < 1e-9);
}

#[test]
fn lecture_vectors_tile() {
    assert_plan_ok(Vec2::new(0.5, 7.0_f64.sqrt() / 2.0), Vec2::new(1.0, 0.0));
}

#[test]
fn skewed_integer_vectors_tile() {
    let plan = assert_plan_ok(Vec2::new(2.0, 1.0), Vec2::new(-1.0, 1.0));
    // c = sqrt(5), d = 3.
    assert!((plan.sum_target.width() - 5.0_f64.sqrt()).abs() < 1e-9);
    assert!((plan.diff_target.height() - 3.0).abs() < 1e-9);
}

#[test]
fn extreme_aspect_ratios_tile() {
    // Side ratio of 10^4 produces target sides that miss the long side by
    // well under a relative tolerance but far over an absolute one.
    let plan = assert_plan_ok(Vec2::new(100.0, 0.0), Vec2::new(0.0, 0.01));
    assert!((plan.sum_target.width() - 10_000.000_1_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn near_parallel_vectors_tile() {
    assert_plan_ok(Vec2::new(1.0, 0.0), Vec2::new(0.9999, 0.01));
}

#[test]
fn targets_are_stacked_squares() {
    let plan = assert_plan_ok(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    assert!((plan.sum_target.width() - plan.sum_target.height()).abs() < 1e-12);
    assert!((plan.diff_target.width() - plan.diff_target.height()).abs() < 1e-12);
    assert_eq!(plan.diff_target.y0, plan.sum_target.y1);
}

#[test]
fn splits_conserve_area() {
    let plan = assert_plan_ok(Vec2::new(0.5, 7.0_f64.sqrt() / 2.0), Vec2::new(1.0, 0.0));
    for step in &plan.steps {
        let TilingStep::Split {
            parent,
            kept,
            split_off,
            ..
        } = *step
        else {
            continue;
        };
        let area = |id: PieceId| {
            let p = plan.piece(id).unwrap();
            p.width * p.height
        };
        assert!((area(parent) - area(kept) - area(split_off)).abs() < 1e-9);
    }
}

#[test]
fn split_children_record_their_parent() {
    let plan = assert_plan_ok(Vec2::new(2.0, 1.0), Vec2::new(-1.0, 1.0));
    for step in &plan.steps {
        let TilingStep::Split {
            parent,
            kept,
            split_off,
            ..
        } = *step
        else {
            continue;
        };
        assert_eq!(plan.piece(kept).unwrap().parent, Some(parent));
        assert_eq!(plan.piece(split_off).unwrap().parent, Some(parent));
    }
}

#[test]
fn four_source_squares_seed_the_plan() {
    let plan = assert_plan_ok(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    let sources: Vec<SourceSquare> = plan.pieces.iter().take(4).map(|p| p.source).collect();
    assert_eq!(
        sources,
        vec![
            SourceSquare::FirstX,
            SourceSquare::SecondX,
            SourceSquare::FirstY,
            SourceSquare::SecondY,
        ]
    );
    for piece in plan.pieces.iter().take(4) {
        assert!(piece.parent.is_none());
        assert!((piece.width - piece.height).abs() < 1e-12);
    }
}

#[test]
fn recorded_steps_replay_to_the_terminal_state() {
    let plan = assert_plan_ok(Vec2::new(0.5, 7.0_f64.sqrt() / 2.0), Vec2::new(1.0, 0.0));

    // Footprint per live piece; positions only exist once a piece is placed.
    let mut dims: BTreeMap<PieceId, (f64, f64)> = BTreeMap::new();
    for piece in plan.pieces.iter().take(4) {
        dims.insert(piece.id, (piece.width, piece.height));
    }

    let mut replayed: Vec<(PieceId, Rect)> = Vec::new();
    for step in &plan.steps {
        match *step {
            TilingStep::Rotate { piece } => {
                let (w, h) = dims[&piece];
                dims.insert(piece, (h, w));
            }
            TilingStep::Split {
                parent,
                axis,
                at,
                kept,
                split_off,
            } => {
                let (w, h) = dims.remove(&parent).unwrap();
                match axis {
                    SplitAxis::Vertical => {
                        dims.insert(kept, (at, h));
                        dims.insert(split_off, (w - at, h));
                    }
                    SplitAxis::Horizontal => {
                        dims.insert(kept, (w, at));
                        dims.insert(split_off, (w, h - at));
                    }
                }
            }
            TilingStep::Place { piece, to, .. } => {
                let (w, h) = dims.remove(&piece).unwrap();
                assert!((to.width() - w).abs() < 1e-6);
                assert!((to.height() - h).abs() < 1e-6);
                replayed.push((piece, to));
            }
        }
    }

    assert_eq!(replayed.len(), plan.placed.len());
    for (got, want) in replayed.iter().zip(&plan.placed) {
        assert_eq!(got.0, want.piece);
        assert_eq!(got.1, want.rect);
    }
}

#[test]
fn parallel_vectors_are_rejected() {
    let err = plan_parallelogram_tiling(Vec2::new(1.0, 1.0), Vec2::new(-2.0, -2.0)).unwrap_err();
    assert!(matches!(err, VizError::Geometry(_)));
}
