use super::*;

#[test]
fn lecture_default_carries_packages_and_shorthands() {
    let t = TexTemplate::lecture_default();
    let p = t.preamble();
    assert!(p.contains(r"\usepackage{amsmath}"));
    assert!(p.contains(r"\usepackage{amssymb}"));
    assert!(p.contains(r"\newcommand{\R}{\mathbb{R}}"));
    assert!(p.contains(r"\newcommand{\Q}{\mathbb{Q}}"));
}

#[test]
fn builder_keeps_line_order() {
    let t = TexTemplate::builder()
        .package("amsmath")
        .raw(r"\setlength{\parindent}{0pt}")
        .newcommand("N", r"\mathbb{N}")
        .build();
    let lines: Vec<&str> = t.preamble().lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("amsmath"));
    assert!(lines[1].contains("parindent"));
    assert!(lines[2].contains(r"\N"));
}

#[test]
fn templates_with_equal_preambles_compare_equal() {
    assert_eq!(TexTemplate::lecture_default(), TexTemplate::lecture_default());
}

#[test]
fn validate_tex_accepts_balanced_source() {
    validate_tex(r"$\frac{v}{\|v\|}$", "t").unwrap();
    validate_tex(r"\{ s_n \} \to s", "t").unwrap();
}

#[test]
fn validate_tex_rejects_empty_and_unbalanced() {
    assert!(validate_tex("   ", "t").is_err());
    assert!(validate_tex(r"\mathbb{R", "t").is_err());
    assert!(validate_tex("}{", "t").is_err());
}
