use crate::foundation::error::{VizError, VizResult};

/// Immutable TeX preamble configuration shared by every text object.
///
/// Built once at startup (usually via [`TexTemplate::lecture_default`]) and
/// passed explicitly into every scene constructor; it is serialized with the
/// scene so the host typesets all text with the same macros. There is no
/// ambient global template.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TexTemplate {
    preamble: String,
}

impl TexTemplate {
    /// Start building a template.
    pub fn builder() -> TexTemplateBuilder {
        TexTemplateBuilder {
            lines: Vec::new(),
        }
    }

    /// The template used throughout the lecture: AMS packages plus the
    /// `\R`, `\N`, `\Q` blackboard-bold shorthands.
    pub fn lecture_default() -> Self {
        Self::builder()
            .package("amsmath")
            .package("amssymb")
            .package("xcolor")
            .newcommand("R", r"\mathbb{R}")
            .newcommand("N", r"\mathbb{N}")
            .newcommand("Q", r"\mathbb{Q}")
            .build()
    }

    /// Full preamble text handed to the host's TeX pipeline.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Builder for [`TexTemplate`] values.
#[derive(Clone, Debug)]
pub struct TexTemplateBuilder {
    lines: Vec<String>,
}

impl TexTemplateBuilder {
    /// Add a `\usepackage{..}` line.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.lines.push(format!(r"\usepackage{{{}}}", name.into()));
        self
    }

    /// Add a `\newcommand{\name}{body}` line.
    pub fn newcommand(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.lines
            .push(format!(r"\newcommand{{\{}}}{{{}}}", name.into(), body.into()));
        self
    }

    /// Add a raw preamble line verbatim.
    pub fn raw(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Finish the immutable template.
    pub fn build(self) -> TexTemplate {
        TexTemplate {
            preamble: self.lines.join("\n"),
        }
    }
}

/// Reject TeX source the host cannot typeset: empty bodies and unbalanced
/// math delimiters slip through silently otherwise.
pub(crate) fn validate_tex(tex: &str, field: &str) -> VizResult<()> {
    if tex.trim().is_empty() {
        return Err(VizError::validation(format!("{field} must be non-empty")));
    }
    let mut depth = 0i32;
    for ch in tex.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(VizError::validation(format!(
                "{field} has unbalanced braces"
            )));
        }
    }
    if depth != 0 {
        return Err(VizError::validation(format!(
            "{field} has unbalanced braces"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/script/tex.rs"]
mod tests;
