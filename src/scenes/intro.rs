use crate::foundation::core::{Color, ORIGIN, Vec2};
use crate::foundation::error::VizResult;
use crate::geometry::projection::project;
use crate::script::config::SceneConfig;
use crate::script::directive::{create, fade_in, fade_out, grow, transform};
use crate::script::object::Visual;
use crate::script::scene::{Scene, SceneBuilder};

/// Opening scene: a projection on the number plane, then the title card.
///
/// `u` collapses onto its projection along `v`, previewing the orthogonal
/// decomposition the lecture builds up to.
pub fn intro(cfg: &SceneConfig) -> VizResult<Scene> {
    let u = Vec2::new(-1.0, 3.0);
    let v = Vec2::new(3.0, 4.0);
    let proj = project(u, v)?;
    let (drop_from, drop_to) = proj.drop_segment(u);

    SceneBuilder::new("intro", &cfg.template)
        .object("title", Visual::tex("Hilbert Spaces").font_size(100.0))?
        .object("plane", Visual::number_plane())?
        .object(
            "arrow_u",
            Visual::arrow(ORIGIN, u.to_point()).color(Color::YELLOW),
        )?
        // Second copy of u stays behind while the first morphs away.
        .object(
            "arrow_u_ghost",
            Visual::arrow(ORIGIN, u.to_point()).color(Color::YELLOW),
        )?
        .object(
            "arrow_v",
            Visual::arrow(ORIGIN, v.to_point()).color(Color::BLUE),
        )?
        .object(
            "arrow_proj",
            Visual::arrow(ORIGIN, proj.vector.to_point()).color(Color::PINK),
        )?
        .object("drop", Visual::line(drop_from, drop_to).color(Color::GREY))?
        .object(
            "rangle",
            Visual::right_angle(
                drop_to,
                proj.rejection(u),
                -proj.onto,
                cfg.style.right_angle_size,
            )
            .color(Color::GREY),
        )?
        .play_for([create("plane")], 1.0)
        .wait(3.0)
        .play([grow("arrow_u"), grow("arrow_v")])
        .add("arrow_u_ghost")
        .wait_default()
        .play([create("drop")])
        .play([create("rangle")])
        .wait_default()
        .play([transform("arrow_u_ghost", "arrow_proj")])
        .play([fade_out("drop"), fade_out("rangle")])
        .wait(10.0)
        .play([
            fade_out("plane"),
            fade_out("arrow_u"),
            fade_out("arrow_v"),
            fade_out("arrow_proj"),
            fade_in("title"),
        ])
        .wait(3.0)
        .build()
}
