use crate::foundation::core::{Color, DOWN, LEFT, RIGHT, UP, Vec2};
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::write;
use crate::script::object::{Anchor, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// Lecture recap.
pub fn outro(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("outro", &cfg.template)
        .object(
            "recap",
            Visual::bullet_list([
                "Recapped some concepts",
                "What is a Hilbert space?",
                "Hilbert projection theorem",
                "Orthogonal projections in Hilbert spaces",
            ]),
        )?
        .play([write("recap")])
        .wait(32.0)
        .fade_out_all()
        .build()
}

/// Static cover frame: the labeled parallelogram under the lecture title.
pub fn thumbnail(cfg: &SceneConfig) -> VizResult<Scene> {
    let xv = Vec2::new(0.5, 7.0_f64.sqrt() / 2.0) * 3.0;
    let yv = Vec2::new(3.0, 0.0);
    let center = (xv + yv) * 0.5;
    let p0 = (-center).to_point();
    let p1 = (xv - center).to_point();
    let p2 = (xv + yv - center).to_point();
    let p3 = (yv - center).to_point();

    SceneBuilder::new("thumbnail", &cfg.template)
        .object(
            "title",
            Visual::tex("Hilbert Spaces and Orthogonality")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .with_backdrop(),
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
        .add("title")
        .add("para")
        .add("arrow_x")
        .add("label_x")
        .add("arrow_y")
        .add("label_y")
        .add("arrow_diff")
        .add("label_diff")
        .add("arrow_sum")
        .add("label_sum")
        .build()
}
