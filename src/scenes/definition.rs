use crate::foundation::core::Color;
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::write;
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// Assembles the three ingredients into the Hilbert space definition, then
/// introduces the square-summable sequence space.
pub fn hilbert_definition(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("hilbert_definition", &cfg.template)
        .object(
            "title",
            Visual::tex("What is a Hilbert space?")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "definition",
            Visual::tex("A Hilbert space is a vector space that...").font_size(35.0),
        )?
        .object(
            "properties",
            Visual::bullet_list(["is endowed with an inner product", "is complete"])
                .font_size(35.0)
                .next_to("definition", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "example_rn",
            Visual::tex(r"$\R^n$ is a Hilbert space.")
                .font_size(35.0)
                .next_to("properties", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "example_l2",
            Visual::tex(r"$\ell^2$ is a Hilbert space.")
                .font_size(35.0)
                .next_to("example_rn", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "l2_title",
            Visual::tex(r"What is $\ell^2$?").to_edge(Anchor::TOP, cfg.style.edge_margin),
        )?
        .object(
            "l2_words",
            Visual::tex("Space of all square-summable infinite sequences.").font_size(35.0),
        )?
        .object(
            "l2_set",
            Visual::math_tex(
                r"\ell^2 = \left\{ \{ s_n \}_{n \in \N} : \sum_{i=1}^\infty | s_i |^2 < \infty \right\}",
            )
            .next_to("l2_words", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "l2_forall",
            Visual::tex(r"For $s, t \in \ell^2$:").next_to("l2_set", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "l2_inner",
            Visual::math_tex(r"\langle s, t \rangle = \sum_{i=1}^\infty s_i t_i")
                .next_to("l2_forall", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "l2_exercise",
            Visual::tex(r"Show that this is a Hilbert space (Hint: you already did on HW 2).")
                .font_size(35.0)
                .next_to("l2_inner", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .wait(5.0)
        .play([write("definition")])
        .play([write("properties")])
        .wait(5.0)
        .play([write("example_rn")])
        .wait(7.0)
        .play([write("example_l2")])
        .wait(3.0)
        .fade_out_all()
        .play([write("l2_title")])
        .wait_default()
        .play([write("l2_words")])
        .play([write("l2_set")])
        .wait(5.0)
        .play([write("l2_forall")])
        .play([write("l2_inner")])
        .wait(3.0)
        .play([write("l2_exercise")])
        .wait(3.0)
        .fade_out_all()
        .build()
}
