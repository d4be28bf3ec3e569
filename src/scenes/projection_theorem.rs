use crate::foundation::core::{Color, ORIGIN, Point};
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::{create, fade_out, transform, write};
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// Hilbert projection theorem: statement, then the closed-rectangle and
/// closed-disc examples showing why closedness and convexity matter.
pub fn projection_theorem(cfg: &SceneConfig) -> VizResult<Scene> {
    // Rectangle spanning x in [2, 5], so the nearest point to the origin
    // is (2, 0). The disc of radius sqrt(2) centered at (-2, 2) has its
    // nearest point at (-1, 1).
    let rect_center = Point::new(3.5, 0.0);
    let nearest_rect = Point::new(2.0, 0.0);
    let circle_center = Point::new(-2.0, 2.0);
    let nearest_circle = Point::new(-1.0, 1.0);
    let radius = 2.0_f64.sqrt();

    SceneBuilder::new("projection_theorem", &cfg.template)
        .object("heading", Visual::tex("Hilbert Space Theorems"))?
        .object(
            "thm_title",
            Visual::tex("Hilbert Projection Theorem")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "thm_text",
            Visual::tex(
                "Every non-empty, closed, and convex set $E$ in a Hilbert space $H$ contains a unique element of smallest norm.",
            )
            .font_size(35.0),
        )?
        .object(
            "thm_text2",
            Visual::tex(
                r"There is one and only one $x_0 \in E$ such that $\|x_0\| \leq \|x\|$ for every $x \in E$.",
            )
            .font_size(35.0)
            .next_to("thm_text", Side::Below, cfg.style.med_buff),
        )?
        .object("plane", Visual::number_plane())?
        .object(
            "rect",
            Visual::rectangle(3.0, 2.0)
                .at(rect_center)
                .color(Color::BLUE)
                .fill_opacity(cfg.style.shape_fill_opacity),
        )?
        .object("dot_rect", Visual::dot(nearest_rect).color(Color::YELLOW))?
        .object("brace_rect", Visual::brace(ORIGIN, nearest_rect))?
        .object(
            "circle",
            Visual::circle(radius)
                .at(circle_center)
                .color(Color::RED)
                .fill_opacity(cfg.style.shape_fill_opacity),
        )?
        .object("dot_circle", Visual::dot(nearest_circle).color(Color::YELLOW))?
        .object("brace_circle", Visual::brace(ORIGIN, nearest_circle))?
        .object(
            "open_rect",
            Visual::dashed_rectangle(3.0, 2.0, 30)
                .at(rect_center)
                .color(Color::BLUE)
                .fill_opacity(cfg.style.shape_fill_opacity),
        )?
        .object(
            "q_rect",
            Visual::tex("?")
                .next_to("brace_rect", Side::Below, cfg.style.med_buff)
                .with_backdrop(),
        )?
        .object(
            "open_circle",
            Visual::circle(radius).at(ORIGIN).color(Color::RED),
        )?
        .object("q_center", Visual::tex("?").at(ORIGIN).with_backdrop())?
        .play([write("heading")])
        .wait(5.0)
        .play([fade_out("heading")])
        .play([write("thm_title")])
        .play([write("thm_text")])
        .play([write("thm_text2")])
        .wait(21.0)
        .fade_out_all()
        .play([create("plane")])
        .wait_default()
        .play([create("rect")])
        .play([create("dot_rect")])
        .play([create("brace_rect")])
        .wait_default()
        .play([create("circle")])
        .play([create("dot_circle")])
        .play([create("brace_circle")])
        .wait(3.0)
        .play([fade_out("rect"), fade_out("dot_rect"), fade_out("brace_rect")])
        .play([create("open_rect"), create("q_rect"), create("brace_rect")])
        .wait(9.0)
        .play([
            fade_out("open_rect"),
            fade_out("q_rect"),
            fade_out("brace_rect"),
            fade_out("circle"),
            fade_out("dot_circle"),
            fade_out("brace_circle"),
        ])
        .play([create("open_circle"), create("q_center")])
        .wait(5.0)
        .play([fade_out("open_circle"), fade_out("q_center")])
        .play([create("q_center")])
        .wait(5.0)
        .fade_out_all()
        .build()
}

/// Uniqueness half of the projection theorem, driven by the parallelogram law.
pub fn projection_theorem_uniqueness(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("projection_theorem_uniqueness", &cfg.template)
        .object(
            "title",
            Visual::tex("Hilbert Projection Theorem - Uniqueness")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "infimum",
            Visual::tex(r"Let $\delta$ = $\inf \{ \|x \| : x \in E \}$.").font_size(35.0),
        )?
        .object(
            "goal",
            Visual::tex(r"Show that if $\|x\| = \|y\| = \delta$ for some $x, y \in E$, then $x = y$.")
                .font_size(35.0)
                .next_to("infimum", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "law",
            Visual::math_tex(r"\|x+y\|^2 + \|x-y\|^2 = 2\|x\|^2 + 2\|y\|^2")
                .font_size(35.0)
                .next_to("goal", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "rearranged",
            Visual::math_tex(
                r"\frac{1}{4}\|x - y\|^2 = \frac{1}{2}\|x\|^2 + \frac{1}{2}\|y\|^2 - \|\frac{x+y}{2}\|^2",
            )
            .font_size(35.0)
            .next_to("law", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "scaled",
            Visual::math_tex(r"\|x - y\|^2 = 2\|x\|^2 + 2\|y\|^2 - 4\|\frac{x+y}{2}\|^2")
                .font_size(35.0)
                .next_to("rearranged", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "bound",
            Visual::math_tex(
                r"\|x - y\|^2 \leq 2\|x\|^2 + 2\|y\|^2 - 4\delta^2\;\;\text{because $\delta$ is the infimum}",
            )
            .font_size(35.0)
            .next_to("scaled", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "bound_alone",
            Visual::math_tex(
                r"\|x - y\|^2 \leq 2\|x\|^2 + 2\|y\|^2 - 4\delta^2\;\;\text{because $\delta$ is the infimum}",
            )
            .font_size(35.0),
        )?
        .object(
            "plug_in",
            Visual::tex(r"$\|x-y\|^2 \leq 0$ by plugging in $\|x\| = \|y\| = \delta$")
                .font_size(35.0)
                .next_to("bound_alone", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "norm_zero",
            Visual::math_tex(r"\|x - y\| = 0")
                .font_size(35.0)
                .next_to("plug_in", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "diff_zero",
            Visual::math_tex(r"x - y = 0")
                .font_size(35.0)
                .next_to("norm_zero", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "equal",
            Visual::math_tex(r"x = y")
                .font_size(35.0)
                .next_to("diff_zero", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .play([write("infimum")])
        .wait(15.0)
        .play([write("goal")])
        .wait(5.0)
        .play([write("law")])
        .wait(5.0)
        .play([write("rearranged")])
        .play([write("scaled")])
        .wait(15.0)
        .play([write("bound")])
        .wait(10.0)
        .play([
            fade_out("infimum"),
            fade_out("goal"),
            fade_out("law"),
            fade_out("rearranged"),
            fade_out("scaled"),
        ])
        .play([transform("bound", "bound_alone")])
        .wait(5.0)
        .play([write("plug_in")])
        .wait(5.0)
        .play([write("norm_zero")])
        .wait(5.0)
        .play([write("diff_zero")])
        .wait(5.0)
        .play([write("equal")])
        .wait(29.0)
        .fade_out_all()
        .build()
}
