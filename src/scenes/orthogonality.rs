use crate::foundation::core::{Color, DOWN, ORIGIN, Vec2};
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::{create, fade_out, transform, write};
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// "2. Orthogonality": definitions, the perpendicular-vector animation, and
/// the closed-subspace argument for orthogonal complements.
pub fn orthogonality(cfg: &SceneConfig) -> VizResult<Scene> {
    let u = Vec2::new(-1.0, 2.0);
    let p1 = Vec2::new(-4.0, -2.0);
    let p2 = p1 * -0.5;

    SceneBuilder::new("orthogonality", &cfg.template)
        .object("title", Visual::tex("What are Hilbert spaces?"))?
        .object(
            "headline",
            Visual::tex("2. Orthogonality").next_to("title", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "ortho_def",
            Visual::tex(
                r"Let $V$ be an inner product space.\\$v, w \in V$ are \textbf{orthogonal} iff $\langle v, w \rangle = 0$.",
            )
            .font_size(35.0),
        )?
        .object(
            "perp_notation",
            Visual::tex(r"If $v$ and $w$ are orthogonal, we can write $v \perp w$.")
                .font_size(35.0)
                .next_to("ortho_def", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "perp_set",
            Visual::tex(r"For $x \in V$, $x^\perp = \{ v \in V : \langle x, v \rangle = 0 \}.$")
                .font_size(35.0)
                .next_to("ortho_def", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "complement",
            Visual::tex(
                r"$x^\perp$, the \textbf{orthogonal complement}, is a closed subspace of $V$.",
            )
            .font_size(35.0)
            .next_to("perp_set", Side::Below, cfg.style.med_buff),
        )?
        .object("plane", Visual::number_plane())?
        .object(
            "arrow_u",
            Visual::arrow(ORIGIN, u.to_point()).color(Color::YELLOW),
        )?
        .object(
            "arrow_p1",
            Visual::arrow(ORIGIN, p1.to_point()).color(Color::BLUE),
        )?
        .object(
            "rangle1",
            Visual::right_angle(ORIGIN, u, p1, cfg.style.right_angle_size).color(Color::GREY),
        )?
        .object(
            "arrow_p1_half",
            Visual::arrow(ORIGIN, (p1 * 0.5).to_point()).color(Color::BLUE),
        )?
        .object(
            "arrow_p2",
            Visual::arrow(ORIGIN, p2.to_point()).color(Color::BLUE),
        )?
        .object(
            "rangle2",
            Visual::right_angle(ORIGIN, u, p2, cfg.style.right_angle_size).color(Color::GREY),
        )?
        .object(
            "line_p1",
            Visual::arrow(ORIGIN, (p1 * 5.0).to_point()).color(Color::BLUE),
        )?
        .object(
            "line_p2",
            Visual::arrow(ORIGIN, (p2 * 5.0).to_point()).color(Color::BLUE),
        )?
        .object(
            "closed_title",
            Visual::tex("Orthogonal complements are closed subspaces.")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "seq_setup",
            Visual::tex(
                r"Let $\{ s_n \}$ where $s_n \in V$ be such that $s_n \perp x$ and $\{ s_n \} \to s$. Show that $s \perp x.$",
            )
            .font_size(35.0)
            .shift(DOWN * 0.25),
        )?
        .object(
            "limit_argument",
            Visual::tex(
                r"\begin{align*} \langle s, x \rangle &= \lim_{n \to \infty} \langle s_n, x \rangle \;\text{by continuity of the inner product} \\ &= \lim_{n \to \infty} 0 \;\text{as all $s_n$ are orthogonal to $x$}\\ &= 0. \;\text{$x^\perp$ is a \textbf{closed subspace} of $V$.} \end{align*}",
            )
            .font_size(35.0)
            .next_to("seq_setup", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "subspace_m",
            Visual::tex(r"Let $M$ be a subspace of $V$.")
                .font_size(35.0)
                .next_to("limit_argument", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "intersection",
            Visual::math_tex(r"M^\perp = \bigcap_{x \in M} x^\perp")
                .font_size(35.0)
                .next_to("subspace_m", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "m_closed",
            Visual::tex(r"$M$ is also a \textbf{closed subspace} of $V$.")
                .font_size(35.0)
                .next_to("intersection", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title"), write("headline")])
        .wait(5.0)
        .play([fade_out("title"), fade_out("headline")])
        .play([write("ortho_def")])
        .wait(14.0)
        .play([write("perp_notation")])
        .wait(5.0)
        .play([write("perp_set")])
        .wait(10.0)
        .play([write("complement")])
        .wait(2.0)
        .fade_out_all()
        .play([create("plane")])
        .play([create("arrow_u"), create("arrow_p1"), create("rangle1")])
        .wait_default()
        .play([transform("arrow_p1", "arrow_p1_half")])
        .wait_default()
        .play([create("arrow_p2"), create("rangle2")])
        .wait_default()
        .play([transform("arrow_p1_half", "line_p1"), transform("arrow_p2", "line_p2")])
        .wait_default()
        .fade_out_all()
        .play([write("closed_title")])
        .wait_default()
        .play([write("seq_setup")])
        .wait(18.0)
        .play([write("limit_argument")])
        .wait(30.0)
        .play([write("subspace_m")])
        .play([write("intersection")])
        .play([write("m_closed")])
        .wait(30.0)
        .fade_out_all()
        .build()
}
