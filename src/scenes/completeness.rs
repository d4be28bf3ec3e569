use crate::foundation::error::VizResult;
use crate::script::config::SceneConfig;
use crate::script::directive::{fade_out, transform, write};
use crate::script::object::{Side, Visual};
use crate::script::scene::{Scene, SceneBuilder};

const PI_DIGITS: &str = "3.1415926535";

/// "3. Completeness": Cauchy sequences and the rational approximations of pi
/// that converge outside the rationals.
pub fn completeness(cfg: &SceneConfig) -> VizResult<Scene> {
    let mut builder = SceneBuilder::new("completeness", &cfg.template)
        .object("title", Visual::tex("What are Hilbert spaces?"))?
        .object(
            "headline",
            Visual::tex("3. Completeness").next_to("title", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "complete_def",
            Visual::tex(
                r"A vector space $V$ is \textbf{complete} if all Cauchy sequences in $V$ converge.",
            )
            .font_size(35.0),
        )?
        .object(
            "cauchy_def",
            Visual::tex(
                r"A sequence $\{ s_n \}$ in $V$ is \textbf{Cauchy} iff\\for all $\epsilon > 0$, there exists $N \in \N$ such that for all $m, n > N$, $\|s_m - s_n\| < \epsilon$.",
            )
            .font_size(35.0)
            .next_to("complete_def", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "reals_complete",
            Visual::tex(r"$\R$ is a complete vector space.")
                .font_size(35.0)
                .next_to("cauchy_def", Side::Below, cfg.style.large_buff),
        )?
        .object(
            "rationals_incomplete",
            Visual::tex(r"$\Q$ is a \textbf{not} a complete vector space.")
                .font_size(35.0)
                .next_to("reals_complete", Side::Below, cfg.style.med_buff),
        )?;

    // One object per decimal prefix; the script morphs through them in order.
    for len in 3..=PI_DIGITS.len() {
        builder = builder.object(
            format!("pi_{len}"),
            Visual::tex(&PI_DIGITS[..len])
                .font_size(35.0)
                .next_to("rationals_incomplete", Side::Below, cfg.style.med_buff),
        )?;
    }

    builder = builder
        .object(
            "pi_symbol",
            Visual::tex(r"$\pi$")
                .font_size(35.0)
                .next_to("rationals_incomplete", Side::Below, cfg.style.med_buff),
        )?
        .object(
            "pi_not_rational",
            Visual::tex(r"$\pi \not\in \Q$")
                .font_size(35.0)
                .next_to("rationals_incomplete", Side::Below, cfg.style.med_buff),
        )?
        .play([write("title"), write("headline")])
        .wait(12.0)
        .play([fade_out("title"), fade_out("headline")])
        .play([write("complete_def")])
        .wait(5.0)
        .play([write("cauchy_def")])
        .wait(25.0)
        .play([write("reals_complete")])
        .wait(5.0)
        .play([write("rationals_incomplete")])
        .wait_default()
        .play([write("pi_3")]);

    for len in 4..=PI_DIGITS.len() {
        let prev = format!("pi_{}", len - 1);
        builder = builder.play_for([transform(prev, format!("pi_{len}"))], 0.5);
    }

    builder
        .play([transform(format!("pi_{}", PI_DIGITS.len()), "pi_symbol")])
        .wait_default()
        .play([transform("pi_symbol", "pi_not_rational")])
        .wait(2.0)
        .fade_out_all()
        .build()
}
