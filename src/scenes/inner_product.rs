use crate::foundation::core::{Color, DOWN, ORIGIN, Point, RIGHT, Vec2};
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::{create, fade_out, grow, transform, write};
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// "1. Inner product": a first worked dot product on the plane.
pub fn inner_product_intro(cfg: &SceneConfig) -> VizResult<Scene> {
    let u = Vec2::new(-1.0, 3.0);
    let v = Vec2::new(6.0, 2.0);

    SceneBuilder::new("inner_product_intro", &cfg.template)
        .object("title", Visual::tex("What are Hilbert spaces?"))?
        .object(
            "headline",
            Visual::tex("1. Inner product").next_to("title", Side::Below, cfg.style.med_buff),
        )?
        .object("plane", Visual::number_plane())?
        .object(
            "arrow_u",
            Visual::arrow(ORIGIN, u.to_point()).color(Color::YELLOW),
        )?
        .object(
            "label_u",
            Visual::math_tex(r"\vec{u}")
                .next_to("arrow_u", Side::LeftOf, cfg.style.small_buff)
                .color(Color::YELLOW),
        )?
        .object(
            "arrow_v",
            Visual::arrow(ORIGIN, v.to_point()).color(Color::BLUE),
        )?
        .object(
            "label_v",
            Visual::math_tex(r"\vec{v}")
                .next_to("arrow_v", Side::RightOf, cfg.style.small_buff)
                .color(Color::BLUE),
        )?
        .object(
            "rangle",
            Visual::right_angle(ORIGIN, u, v, cfg.style.right_angle_size).color(Color::GREY),
        )?
        .object(
            "worked",
            Visual::tex(
                r"$\langle \vec{u}, \vec{v} \rangle$\\$= -1 \cdot 6 + 3 \cdot 2 = 0$\\$= \|u\|\|v\|\cos\theta$",
            )
            .at(ORIGIN)
            .shift(DOWN * 1.5)
            .with_backdrop(),
        )?
        .play([write("title")])
        .wait(2.0)
        .play([write("headline")])
        .wait(7.0)
        .play([fade_out("title"), fade_out("headline"), create("plane")])
        .play([grow("arrow_u"), write("label_u")])
        .wait(1.0)
        .play([grow("arrow_v"), write("label_v")])
        .wait(1.0)
        .play([create("rangle")])
        .wait(3.0)
        .play([write("worked")])
        .wait(3.0)
        .fade_out_all()
        .build()
}

/// Inner product axioms: symmetry, bilinearity, positive definiteness.
pub fn inner_product_definition(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("inner_product_definition", &cfg.template)
        .object("title", Visual::tex("What is an inner product?").font_size(75.0))?
        .object(
            "title_top",
            Visual::tex("What is an inner product?")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "map",
            Visual::tex(r"$\langle \cdot, \cdot \rangle : V \times V \to \mathbb{R}$")
                .next_to("title_top", Side::Below, cfg.style.block_buff),
        )?
        .object(
            "quantifiers",
            Visual::tex(r"For any $x, y, z \in V$ and $c \in \R$:")
                .next_to("map", Side::Below, cfg.style.block_buff),
        )?
        .object(
            "axioms",
            Visual::bullet_list([
                r"Symmetry: $\langle x, y \rangle = \langle y, x \rangle$",
                r"Bilinearity: $\langle x, y + cz \rangle = \langle x, y \rangle + c\langle x, z \rangle$",
                r"Positive definiteness: $\langle x, x \rangle \geq 0$ \\ $\langle x, x \rangle = 0$ iff $x = 0$",
            ])
            .next_to("quantifiers", Side::Below, cfg.style.block_buff),
        )?
        .play([write("title")])
        .wait_default()
        .play([transform("title", "title_top")])
        .wait_default()
        .play([write("map")])
        .wait(8.0)
        .play([write("quantifiers")])
        .wait_default()
        .play([write("axioms")])
        .wait(47.0)
        .fade_out_all()
        .build()
}

/// Inner product spaces, induced norm/metric, and the orthogonal dot-product
/// example `u = (-1, 2)`, `v = (-4, -2)`.
pub fn inner_product_space(cfg: &SceneConfig) -> VizResult<Scene> {
    let u = Vec2::new(-1.0, 2.0);
    let v = Vec2::new(-4.0, -2.0);
    // Label floats above the midpoint of v.
    let v_mid = (v * 0.5).to_point();
    let v_label_at = Point::new(v_mid.x, v_mid.y + 0.5);

    SceneBuilder::new("inner_product_space", &cfg.template)
        .object(
            "ips",
            Visual::tex(
                r"A vector space $V$ with an inner product $\langle \cdot, \cdot \rangle$\\ is called an \textbf{inner product space}.",
            )
            .font_size(35.0)
            .to_edge(Anchor::TOP, cfg.style.edge_margin),
        )?
        .object(
            "norm",
            Visual::tex(r"\textbf{Induced norm}: For any $x \in V, \|x\| = \sqrt{\langle x, x \rangle}$.")
                .font_size(35.0)
                .next_to("ips", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "metric",
            Visual::tex(r"\textbf{Induced metric}: For any $x, y \in V, d(x, y) = \|x - y\|$.")
                .font_size(35.0)
                .next_to("norm", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "dot",
            Visual::tex(r"Dot product: $\R^n \to \R$")
                .font_size(35.0)
                .next_to("metric", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "dot_formula",
            Visual::math_tex(r"a \cdot b = \sum_{i=1}^n a_i \cdot b_i = \|a\|\|b\|\cos\theta")
                .font_size(35.0)
                .next_to("dot", Side::Below, cfg.style.med_buff),
        )?
        .object("plane", Visual::number_plane())?
        .object(
            "arrow_u",
            Visual::arrow(ORIGIN, u.to_point()).color(Color::YELLOW),
        )?
        .object(
            "label_u",
            Visual::math_tex(r"\vec{u}")
                .next_to("arrow_u", Side::LeftOf, cfg.style.small_buff)
                .color(Color::YELLOW),
        )?
        .object(
            "arrow_v",
            Visual::arrow(ORIGIN, v.to_point()).color(Color::BLUE),
        )?
        .object(
            "label_v",
            Visual::math_tex(r"\vec{v}").at(v_label_at).color(Color::BLUE),
        )?
        .object(
            "rangle",
            Visual::right_angle(ORIGIN, u, v, cfg.style.right_angle_size).color(Color::GREY),
        )?
        .object(
            "worked",
            Visual::tex(
                r"$\langle \vec{u}, \vec{v} \rangle$\\$= -1 \cdot -4 + 2 \cdot -2 = 0$\\$= \|u\|\|v\|\cos\theta$",
            )
            .at(ORIGIN)
            .shift(RIGHT * 2.0)
            .with_backdrop(),
        )?
        .play([write("ips")])
        .wait(7.0)
        .play([write("norm")])
        .wait(15.0)
        .play([write("metric")])
        .wait(13.0)
        .play([write("dot"), write("dot_formula")])
        .wait(20.0)
        .play([
            fade_out("ips"),
            fade_out("norm"),
            fade_out("metric"),
            fade_out("dot"),
            fade_out("dot_formula"),
        ])
        .play([create("plane")])
        .play([grow("arrow_u"), write("label_u")])
        .wait(1.0)
        .play([grow("arrow_v"), write("label_v")])
        .wait(1.0)
        .play([create("rangle")])
        .wait(3.0)
        .play([write("worked")])
        .wait(8.0)
        .fade_out_all()
        .build()
}
