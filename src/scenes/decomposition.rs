use crate::foundation::core::{Color, UP};
use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::{fade_out, transform, write};
use crate::script::object::{Anchor, Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

/// Statement of the orthogonal decomposition theorem.
pub fn orthogonal_decomposition(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("orthogonal_decomposition", &cfg.template)
        .object(
            "title",
            Visual::tex("Orthogonal projections in Hilbert spaces")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "setup",
            Visual::tex(r"Let $M$ be a closed subspace of a Hilbert space $H$.").font_size(35.0),
        )?
        .object(
            "claims",
            Visual::bullet_list([
                r"Every $x \in H$ has a unique decomposition $x = P(x) + Q(x)$ where $P(x) \in M$ and $Q(x) \in M^\perp$.",
                r"The mappings $P: H \to M$ and $Q: H \to M^\perp$ are linear.",
                r"$P(x)$ and $Q(x)$ are the nearest points to $x$ in $M$ and $M^\perp$, respectively.",
                r"$\|x\|^2 = \|P(x)\|^2 + \|Q(x)\|^2$.",
            ])
            .font_size(35.0)
            .next_to("setup", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "naming",
            Visual::tex(
                r"P and Q are the \textbf{orthogonal projections} of $H$ onto $M$ and $M^\perp$.",
            )
            .font_size(35.0)
            .next_to("claims", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .wait(5.0)
        .play([write("setup")])
        .wait(5.0)
        .play([write("claims")])
        .wait(42.0)
        .play([write("naming")])
        .wait(5.0)
        .fade_out_all()
        .build()
}

/// Existence via the projection theorem, then uniqueness of the split.
pub fn decomposition_existence(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("decomposition_existence", &cfg.template)
        .object(
            "title",
            Visual::tex("Existence and uniqueness of the decomposition")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "claim",
            Visual::tex(
                r"1. Every $x \in H$ has a unique decomposition $x = P(x) + Q(x)$ where $P(x) \in M$ and $Q(x) \in M^\perp$.",
            )
            .font_size(35.0),
        )?
        .object(
            "coset",
            Visual::tex(r"$x + M = \{ x + y : y \in M \}$ is closed, convex, and non-empty.")
                .font_size(35.0)
                .next_to("claim", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "construction",
            Visual::tex(
                "Let $Q(x)$ be the element of minimum norm in $x + M$. Let $P(x) = x - Q(x)$.",
            )
            .font_size(35.0)
            .next_to("coset", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "trivial_meet",
            Visual::tex(r"Show that $M \cap M^\perp = \{ 0 \}$.")
                .font_size(35.0)
                .next_to("construction", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "forall",
            Visual::tex(r"For any $x \in M$:")
                .font_size(35.0)
                .next_to("trivial_meet", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "zero_case",
            Visual::tex(r"If $x = 0$, then $x \in M^\perp$.")
                .font_size(35.0)
                .next_to("forall", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "nonzero_case",
            Visual::tex(
                r"Otherwise, assume $x \in M^\perp$. $\langle x, x \rangle = 0$, but $x \neq 0$, contradiction.",
            )
            .font_size(35.0)
            .next_to("zero_case", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "uniq_goal",
            Visual::tex(
                "Show that if $x = P(x) + Q(x) = P(x)' + Q(x)'$, then $P(x) = P(x)'$ and $Q(x) = Q(x)'$.",
            )
            .font_size(35.0),
        )?
        .object(
            "uniq_rearrange",
            Visual::math_tex(
                r"P(x) + Q(x) &= P(x)' + Q(x)' \\ P(x) - P(x)' &= Q(x)' - Q(x)",
            )
            .font_size(35.0)
            .next_to("uniq_goal", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "uniq_membership",
            Visual::tex(
                r"$P(x) - P(X)' \in M$ and $Q'(x) - Q(x) \in M^\perp$ as both are subspaces",
            )
            .font_size(35.0)
            .next_to("uniq_rearrange", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "uniq_zero",
            Visual::math_tex(r"P(x) - P(x)' = Q(x)' - Q(x) = 0")
                .font_size(35.0)
                .next_to("uniq_membership", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "uniq_equal",
            Visual::math_tex(r"P(x) = P(x)', Q(x) = Q(x)'")
                .font_size(35.0)
                .next_to("uniq_zero", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .play([write("claim")])
        .wait(13.0)
        .play([write("coset")])
        .wait(5.0)
        .play([write("construction")])
        .wait(15.0)
        .play([write("trivial_meet")])
        .wait(5.0)
        .play([write("forall")])
        .play([write("zero_case")])
        .wait(5.0)
        .play([write("nonzero_case")])
        .wait(13.0)
        .play([
            fade_out("claim"),
            fade_out("coset"),
            fade_out("construction"),
            fade_out("trivial_meet"),
            fade_out("forall"),
            fade_out("zero_case"),
            fade_out("nonzero_case"),
        ])
        .play([write("uniq_goal")])
        .wait(15.0)
        .play([write("uniq_rearrange")])
        .wait(15.0)
        .play([write("uniq_membership")])
        .wait(10.0)
        .play([write("uniq_zero")])
        .wait(1.0)
        .play([write("uniq_equal")])
        .wait(5.0)
        .build()
}

/// The ranges of the two mappings: `P` lands in `M`, `Q` in `M` perp.
pub fn decomposition_maps(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("decomposition_maps", &cfg.template)
        .object(
            "p_title",
            Visual::tex(r"$P : H \to M$")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "p_argument",
            Visual::math_tex(
                r"P(x) &= x - Q(x) \\ &= x - (x + y) \;\text{for some $y \in M$} \\ &= -y \\ &\in M \;\text{because $M$ is a subspace.}",
            )
            .font_size(35.0),
        )?
        .object(
            "q_title",
            Visual::tex(r"$Q : H \to M^\perp$")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object("q_setup", Visual::tex("Let $z = Q(x)$.").font_size(35.0))?
        .object(
            "q_expand",
            Visual::math_tex(
                r"\langle z, z \rangle &= \|z\|^2 \\ &\leq \|z + v\|^2 \;\text{for all $v \in M$ by construction of z} \\ &= \|z - \alpha y \|^2 \;\text{for any $\alpha \in \R$ and $y \in M$ where $\|y\|=1$} \\ &= ...\\ &= \langle z, z \rangle - 2\alpha\langle y, z\rangle + \alpha^2",
            )
            .font_size(35.0)
            .next_to("q_setup", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "q_inequality",
            Visual::math_tex(r"0 \leq - 2 \alpha \langle y, z \rangle + \alpha^2")
                .font_size(45.0)
                .next_to("q_expand", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "ineq_top",
            Visual::math_tex(r"0 \leq - 2 \alpha \langle y, z \rangle + \alpha^2")
                .font_size(45.0)
                .shift(UP * 2.5),
        )?
        .object(
            "ortho_goal",
            Visual::tex(r"Show that $\langle z, v \rangle = 0$ for any $v \in M$.")
                .font_size(35.0)
                .next_to("ineq_top", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "choices",
            Visual::tex(r"Let $y = \frac{v}{\|v\|}$ and $\alpha = \langle z, y \rangle$.")
                .font_size(35.0)
                .next_to("ortho_goal", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "chain",
            Visual::math_tex(
                r"0 &\leq - 2 \alpha \langle y, z \rangle + \alpha^2 \\ 0 &\leq -2 \langle y, z\rangle^2 + \langle y, z\rangle^2 \\ 0 &\leq -\langle y, z\rangle^2 \\ \langle y, z\rangle^2 &\leq 0 \\ \langle y, z\rangle &= 0 \;\text{by positive definiteness} \\ \langle \frac{v}{\|v\|}, z \rangle &= 0 \\ \langle v, z \rangle &= 0 \;\text{by linearity}",
            )
            .font_size(35.0)
            .next_to("choices", Side::Below, cfg.style.med_buff),
        )?
        .play([write("p_title")])
        .wait(7.0)
        .play([write("p_argument")])
        .wait(13.0)
        .play([fade_out("p_title"), fade_out("p_argument")])
        .play([write("q_title")])
        .wait(4.0)
        .play([write("q_setup")])
        .wait(2.0)
        .play([write("q_expand")])
        .wait(37.0)
        .play([write("q_inequality")])
        .wait(3.0)
        .play([
            fade_out("q_title"),
            fade_out("q_setup"),
            fade_out("q_expand"),
            transform("q_inequality", "ineq_top"),
        ])
        .play([write("ortho_goal")])
        .wait(8.0)
        .play([write("choices")])
        .wait(5.0)
        .play([write("chain")])
        .wait(14.0)
        .fade_out_all()
        .build()
}

/// Linearity of `P` and `Q`, from uniqueness of the decomposition.
pub fn decomposition_linearity(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("decomposition_linearity", &cfg.template)
        .object(
            "title",
            Visual::tex("P and Q are linear")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object(
            "goal",
            Visual::tex(
                r"Show that $\alpha P(x) + \beta P(y) = P(\alpha x + \beta y)$, and same for $Q$.",
            )
            .font_size(35.0),
        )?
        .object(
            "split",
            Visual::tex(r"Let $x = P(x) + Q(x)$ and $y = P(y) + Q(y)$.")
                .font_size(35.0)
                .next_to("goal", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "combine",
            Visual::math_tex(
                r"\alpha x &= \alpha P(x) + \alpha Q(x) \\ \beta y &= \beta P(y) + \beta Q(y) \\ \alpha x + \beta y &= P(\alpha x + \beta y) + Q(\alpha x + \beta y)",
            )
            .font_size(35.0)
            .next_to("split", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "rearrange",
            Visual::math_tex(
                r"\alpha x + \beta y &= P(\alpha x + \beta y) + Q(\alpha x + \beta y) \\ \alpha P(x) + \alpha Q(x) + \beta P(y) + \beta Q(y) &= P(\alpha x + \beta y) + Q(\alpha x + \beta y) \\ \alpha P(x) + \beta P(y) - P(\alpha x + \beta y) &= Q(\alpha x + \beta y) - \alpha Q(x) - \beta Q(y)",
            )
            .font_size(35.0),
        )?
        .object(
            "p_zero",
            Visual::math_tex(r"\alpha P(x) + \beta P(y) - P(\alpha x + \beta y) = 0")
                .font_size(35.0)
                .next_to("rearrange", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "q_zero",
            Visual::math_tex(r"Q(\alpha x + \beta y) - \alpha Q(x) - \beta Q(y) = 0")
                .font_size(35.0)
                .next_to("p_zero", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .wait(10.0)
        .play([write("goal")])
        .wait(8.0)
        .play([write("split")])
        .wait(5.0)
        .play([write("combine")])
        .wait(9.0)
        .play([fade_out("goal"), fade_out("split"), fade_out("combine")])
        .play([write("rearrange")])
        .wait(16.0)
        .play([write("p_zero"), write("q_zero")])
        .wait(9.0)
        .fade_out_all()
        .build()
}

/// `P(x)` and `Q(x)` as the nearest points in `M` and its complement.
pub fn decomposition_minimality(cfg: &SceneConfig) -> VizResult<Scene> {
    SceneBuilder::new("decomposition_minimality", &cfg.template)
        .object(
            "title",
            Visual::tex(r"$P(x)$ and $Q(x)$ minimize distance to $M$ and $M^\perp$")
                .to_edge(Anchor::TOP, cfg.style.edge_margin)
                .color(Color::BLUE),
        )?
        .object("m_forall", Visual::tex(r"For all $y \in M$:").font_size(35.0))?
        .object(
            "m_start",
            Visual::math_tex(r"\|x - y\|^2 = \|Q(x) + P(x) - y\|^2")
                .font_size(35.0)
                .next_to("m_forall", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "m_expand",
            Visual::math_tex(
                r"\|x - y\|^2 &=\langle Q(x) + (P(x) - y), Q(x) + (P(x) - y) \rangle \\ &= \langle Q(x), Q(x) \rangle + 2 \langle Q(x), P(x) - y \rangle + \langle P(x) - y, P(x) - y \rangle \\ &= \langle Q(x), Q(x) \rangle + \langle P(x) - y, P(x) - y \rangle \\ &= \|Q(x)\|^2 + \|P(x) - y\|^2",
            )
            .font_size(35.0)
            .next_to("m_start", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "m_conclusion",
            Visual::tex("Minimized by $y = P(x).$")
                .next_to("m_expand", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "perp_forall",
            Visual::tex(r"For all $y \in M^\perp$:").font_size(35.0),
        )?
        .object(
            "perp_start",
            Visual::math_tex(r"\|x - y\|^2 = \|Q(x) + P(x) - y\|^2")
                .font_size(35.0)
                .next_to("perp_forall", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "perp_expand",
            Visual::math_tex(
                r"\|x - y\|^2 &= \langle P(x) + (Q(x) - y), P(x) + (Q(x) - y) \rangle \\ &= \langle P(x), P(x) \rangle + 2 \langle P(x), Q(x) - y \rangle + \langle Q(x) - y, Q(x) - y \rangle \\ &= \langle P(x), P(x) \rangle + \langle Q(x) - y, Q(x) - y \rangle \\ &= \|P(x)\|^2 + \|Q(x) - y\|^2",
            )
            .font_size(35.0)
            .next_to("perp_start", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "perp_conclusion",
            Visual::tex("Minimized by $y = Q(x).$")
                .next_to("perp_expand", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title")])
        .wait(31.0)
        .play([write("m_forall"), write("m_start")])
        .wait(6.0)
        .play([write("m_expand")])
        .wait(20.0)
        .play([write("m_conclusion")])
        .wait(7.0)
        .play([
            transform("m_forall", "perp_forall"),
            transform("m_start", "perp_start"),
            transform("m_expand", "perp_expand"),
            transform("m_conclusion", "perp_conclusion"),
        ])
        .wait(24.0)
        .fade_out_all()
        .build()
}
