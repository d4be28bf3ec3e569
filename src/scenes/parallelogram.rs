use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Color, DOWN, LEFT, ORIGIN, Point, RIGHT, Rect, UP, Vec2};
use crate::foundation::error::{VizError, VizResult};
use crate::geometry::parallelogram::SquareSpec;
use crate::geometry::tiling::{
    PieceId, SourceSquare, SplitAxis, TilingStep, plan_parallelogram_tiling,
};
use crate::script::config::SceneConfig;
use crate::script::directive::{create, fade_in, fade_out, move_to, rotate, transform, write};
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

fn piece_key(piece: PieceId) -> String {
    format!("piece_{}", piece.0)
}

fn source_color(source: SourceSquare) -> Color {
    match source {
        SourceSquare::FirstX | SourceSquare::SecondX => Color::RED,
        SourceSquare::FirstY | SourceSquare::SecondY => Color::GREEN,
    }
}

/// The geometric parallelogram law: the figure, one square per side and per
/// diagonal, and the cut-and-move choreography that re-tiles the four side
/// squares into the two diagonal squares.
pub fn parallelogram_law(cfg: &SceneConfig) -> VizResult<Scene> {
    // Spanning vectors with incommensurable side ratio; the figure on screen
    // is the same shape blown up threefold.
    let xs = Vec2::new(0.5, 7.0_f64.sqrt() / 2.0);
    let ys = Vec2::new(1.0, 0.0);
    let scale = 3.0;
    let xv = xs * scale;
    let yv = ys * scale;

    // Vertices centered on the stage.
    let center = (xv + yv) * 0.5;
    let p0 = (-center).to_point();
    let p1 = (xv - center).to_point();
    let p2 = (xv + yv - center).to_point();
    let p3 = (yv - center).to_point();

    // Shrunken copy of the figure parked near the right edge.
    let small_center = Point::new(5.75, 0.0);
    let small = |p: Point| small_center + p.to_vec2() * (1.0 / scale);

    let fill = cfg.style.square_fill_opacity;
    let plan = plan_parallelogram_tiling(xs, ys)?;

    // Stage offsets: target stack on the left, source block on the right
    // of the staging area.
    let stack = plan.sum_target.union(plan.diff_target);
    let target_off = Point::new(-3.5, 0.0) - stack.center();

    let a = SquareSpec::for_vector(xs).side;
    let b = SquareSpec::for_vector(ys).side;
    let source_rects = [
        Rect::new(0.0, 0.0, a, a),
        Rect::new(a, 0.0, 2.0 * a, a),
        Rect::new(0.0, -b, b, 0.0),
        Rect::new(b, -b, 2.0 * b, 0.0),
    ];
    let block = source_rects
        .iter()
        .copied()
        .reduce(|acc, r| acc.union(r))
        .unwrap_or_default();
    let source_off = Point::new(3.5, 0.0) - block.center();

    let x_spec = SquareSpec::for_vector(xs);
    let y_spec = SquareSpec::for_vector(ys);
    let sum_spec = SquareSpec::for_vector(xs + ys);
    let diff_spec = SquareSpec::for_vector(xs - ys);

    let stage_arrow = |v: Vec2, side: f64, color: Color| {
        let at = Point::new(-side / 2.0, 0.0);
        Visual::arrow(at - v * 0.5, at + v * 0.5).color(color)
    };
    let stage_square = |side: f64, color: Color| {
        Visual::square(side)
            .at(ORIGIN)
            .color(color)
            .fill_opacity(fill)
            .z_index(-1)
    };

    let mut builder = SceneBuilder::new("parallelogram_law", &cfg.template)
        .object(
            "title",
            Visual::tex("The parallelogram law")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "law",
            Visual::math_tex(r"\|x+y\|^2 + \|x-y\|^2 = 2\|x\|^2 + 2\|y\|^2"),
        )?
        .object("para", Visual::polygon([p0, p1, p2, p3]))?
        .object("arrow_x", Visual::arrow(p0, p1).color(Color::RED))?
        .object(
            "label_x",
            Visual::math_tex(r"\vec{x}")
                .at(p0.midpoint(p1))
                .shift(LEFT * 0.5)
                .color(Color::RED),
        )?
        .object("arrow_y", Visual::arrow(p0, p3).color(Color::GREEN))?
        .object(
            "label_y",
            Visual::math_tex(r"\vec{y}")
                .at(p0.midpoint(p3))
                .shift(DOWN * 0.5)
                .color(Color::GREEN),
        )?
        .object("arrow_diff", Visual::arrow(p3, p1).color(Color::YELLOW))?
        .object(
            "label_diff",
            Visual::math_tex(r"x - y")
                .at(p3.midpoint(p1))
                .shift(DOWN * 1.5 + LEFT * 0.35)
                .color(Color::YELLOW),
        )?
        .object("arrow_sum", Visual::arrow(p0, p2).color(Color::PURPLE))?
        .object(
            "label_sum",
            Visual::math_tex(r"x + y")
                .at(p0.midpoint(p2))
                .shift(UP * 1.5 + RIGHT * 0.35)
                .color(Color::PURPLE),
        )?
        .object(
            "caption",
            Visual::tex(
                r"The sum of the squares of its two diagonals is equal to\\the sum of the squares of its four sides.",
            )
            .scaled(0.6)
            .to_edge(Anchor::TOP, cfg.style.edge_margin),
        )?
        .object("para_small", Visual::polygon([p0, p1, p2, p3].map(small)))?
        .object(
            "arrow_x_small",
            Visual::arrow(small(p0), small(p1)).color(Color::RED),
        )?
        .object(
            "arrow_y_small",
            Visual::arrow(small(p0), small(p3)).color(Color::GREEN),
        )?
        .object(
            "arrow_diff_small",
            Visual::arrow(small(p3), small(p1)).color(Color::YELLOW),
        )?
        .object(
            "arrow_sum_small",
            Visual::arrow(small(p0), small(p2)).color(Color::PURPLE),
        )?
        .object("stage_x", stage_arrow(xs, x_spec.side, Color::RED))?
        .object("xsq", stage_square(x_spec.side, Color::RED))?
        .object(
            "xsq_parked",
            stage_square(x_spec.side, Color::RED)
                .to_edge(Anchor::TOP_LEFT, cfg.style.edge_margin),
        )?
        .object(
            "xsq2",
            stage_square(x_spec.side, Color::RED).next_to("xsq_parked", Side::RightOf, 0.0),
        )?
        .object("stage_y", stage_arrow(ys, y_spec.side, Color::GREEN))?
        .object("ysq", stage_square(y_spec.side, Color::GREEN))?
        .object(
            "ysq_parked",
            stage_square(y_spec.side, Color::GREEN).next_to("xsq_parked", Side::Below, 0.0),
        )?
        .object(
            "ysq2",
            stage_square(y_spec.side, Color::GREEN).next_to("ysq_parked", Side::RightOf, 0.0),
        )?
        .object("stage_sum", stage_arrow(xs + ys, sum_spec.side, Color::PURPLE))?
        .object("sumsq", stage_square(sum_spec.side, Color::PURPLE))?
        .object(
            "sumsq_parked",
            stage_square(sum_spec.side, Color::PURPLE)
                .to_edge(Anchor::BOTTOM_LEFT, cfg.style.edge_margin),
        )?
        .object("stage_diff", stage_arrow(xs - ys, diff_spec.side, Color::YELLOW))?
        .object("diffsq", stage_square(diff_spec.side, Color::YELLOW))?
        .object(
            "diffsq_parked",
            stage_square(diff_spec.side, Color::YELLOW)
                .next_to("sumsq_parked", Side::Above, 0.0),
        )?
        .object("sum_outline", {
            let r = plan.sum_target + target_off;
            Visual::rectangle(r.width(), r.height())
                .at(r.center())
                .color(Color::PURPLE)
                .fill_opacity(fill)
                .z_index(-2)
        })?
        .object("diff_outline", {
            let r = plan.diff_target + target_off;
            Visual::rectangle(r.width(), r.height())
                .at(r.center())
                .color(Color::YELLOW)
                .fill_opacity(fill)
                .z_index(-2)
        })?;

    // Statement.
    builder = builder
        .play([write("title")])
        .wait(5.0)
        .play([write("law")])
        .wait(22.0)
        .play([fade_out("law")])
        // Figure.
        .play([create("para")])
        .wait_default()
        .play([
            create("arrow_x"),
            create("arrow_y"),
            write("label_x"),
            write("label_y"),
        ])
        .wait_default()
        .play([
            fade_out("title"),
            create("arrow_diff"),
            create("arrow_sum"),
            write("label_diff"),
            write("label_sum"),
        ])
        .wait_default()
        .play([write("caption")])
        .play([
            transform("para", "para_small"),
            transform("arrow_x", "arrow_x_small"),
            transform("arrow_y", "arrow_y_small"),
            transform("arrow_diff", "arrow_diff_small"),
            transform("arrow_sum", "arrow_sum_small"),
            fade_out("label_x"),
            fade_out("label_y"),
            fade_out("label_diff"),
            fade_out("label_sum"),
        ]);

    // One square per vector: stand the arrow upright, grow its square, park it.
    for (stage, spec, sq, parked) in [
        ("stage_x", x_spec, "xsq", "xsq_parked"),
        ("stage_y", y_spec, "ysq", "ysq_parked"),
        ("stage_sum", sum_spec, "sumsq", "sumsq_parked"),
        ("stage_diff", diff_spec, "diffsq", "diffsq_parked"),
    ] {
        builder = builder
            .play([fade_in(stage)])
            .play([rotate(stage, spec.upright_rotation())])
            .play([create(sq), fade_out(stage)])
            .play([transform(sq, parked)]);
        // The law needs each side square twice.
        if sq == "xsq" {
            builder = builder.play([fade_in("xsq2")]);
        } else if sq == "ysq" {
            builder = builder.play([fade_in("ysq2")]);
        }
    }

    // Re-tiling: the parked squares glide into the source block, the two
    // diagonal squares become the stacked targets, then the recorded plan
    // replays as cut-and-move directives.
    let mut on_stage: BTreeMap<PieceId, (Rect, SourceSquare)> = BTreeMap::new();
    let sources = [
        SourceSquare::FirstX,
        SourceSquare::SecondX,
        SourceSquare::FirstY,
        SourceSquare::SecondY,
    ];
    let mut moves = Vec::new();
    for (i, (rect, source)) in source_rects.iter().zip(sources).enumerate() {
        let id = PieceId(i as u32);
        let staged = *rect + source_off;
        let key = piece_key(id);
        builder = builder.object(
            key.as_str(),
            Visual::rectangle(staged.width(), staged.height())
                .at(staged.center())
                .color(source_color(source))
                .fill_opacity(fill),
        )?;
        on_stage.insert(id, (staged, source));
        moves.push(transform(
            ["xsq_parked", "xsq2", "ysq_parked", "ysq2"][i],
            key,
        ));
    }
    moves.push(transform("sumsq_parked", "sum_outline"));
    moves.push(transform("diffsq_parked", "diff_outline"));
    builder = builder.play(moves);

    for step in &plan.steps {
        match *step {
            TilingStep::Rotate { piece } => {
                let (r, source) = stage_rect(&on_stage, piece)?;
                let c = r.center();
                let (hw, hh) = (r.height() / 2.0, r.width() / 2.0);
                let turned = Rect::new(c.x - hw, c.y - hh, c.x + hw, c.y + hh);
                on_stage.insert(piece, (turned, source));
                builder = builder.play([rotate(piece_key(piece), FRAC_PI_2)]);
            }
            TilingStep::Split {
                parent,
                axis,
                at,
                kept,
                split_off,
            } => {
                let (r, source) = stage_rect(&on_stage, parent)?;
                let (kept_rect, off_rect) = match axis {
                    SplitAxis::Vertical => (
                        Rect::new(r.x0, r.y0, r.x0 + at, r.y1),
                        Rect::new(r.x0 + at, r.y0, r.x1, r.y1),
                    ),
                    SplitAxis::Horizontal => (
                        Rect::new(r.x0, r.y0, r.x1, r.y0 + at),
                        Rect::new(r.x0, r.y0 + at, r.x1, r.y1),
                    ),
                };
                for (id, rect) in [(kept, kept_rect), (split_off, off_rect)] {
                    builder = builder.object(
                        piece_key(id),
                        Visual::rectangle(rect.width(), rect.height())
                            .at(rect.center())
                            .color(source_color(source))
                            .fill_opacity(fill),
                    )?;
                    on_stage.insert(id, (rect, source));
                }
                on_stage.remove(&parent);
                builder = builder.play([
                    fade_out(piece_key(parent)),
                    fade_in(piece_key(kept)),
                    fade_in(piece_key(split_off)),
                ]);
            }
            TilingStep::Place { piece, to, .. } => {
                let (_, source) = stage_rect(&on_stage, piece)?;
                let dest = to + target_off;
                on_stage.insert(piece, (dest, source));
                builder = builder.play([move_to(piece_key(piece), dest.center())]);
            }
        }
    }

    builder.wait(1.0).build()
}

fn stage_rect(
    on_stage: &BTreeMap<PieceId, (Rect, SourceSquare)>,
    piece: PieceId,
) -> VizResult<(Rect, SourceSquare)> {
    on_stage
        .get(&piece)
        .copied()
        .ok_or_else(|| VizError::geometry(format!("plan step references unknown piece {}", piece.0)))
}

/// The parallelogram law again, this time expanded through inner products.
pub fn parallelogram_law_algebra(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("parallelogram_law_algebra", &cfg.template)
        .object(
            "title",
            Visual::tex("The parallelogram law (with inner products)")
                .to_edge(Anchor::TOP, cfg.style.edge_margin),
        )?
        .object(
            "law",
            Visual::math_tex(r"\|x+y\|^2 + \|x-y\|^2 = 2\|x\|^2 + 2\|y\|^2").font_size(35.0),
        )?
        .object(
            "expansion",
            Visual::math_tex(
                r"\|x+y\|^2 &= \langle x + y, x + y\rangle \\ &= \langle x, x \rangle + 2\langle x, y \rangle + \langle y, y \rangle \\ \|x-y\|^2 &= \langle x - y, x - y\rangle \\ &= \langle x, x \rangle - 2\langle x, y \rangle + \langle y, y \rangle",
            )
            .font_size(35.0)
            .next_to("law", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "law_below",
            Visual::math_tex(r"\|x+y\|^2 + \|x-y\|^2 = 2\|x\|^2 + 2\|y\|^2")
                .font_size(35.0)
                .next_to("expansion", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .play([write("law")])
        .wait(5.0)
        .play([write("expansion")])
        .wait(30.0)
        .play([transform("law", "law_below")])
        .wait(5.0)
        .fade_out_all()
        .build()
}
