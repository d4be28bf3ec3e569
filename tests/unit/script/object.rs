use super::*;
use crate::foundation::core::ORIGIN;

#[test]
fn defaults_are_sane() {
    let v = Visual::tex("hi");
    assert_eq!(v.color, Color::WHITE);
    assert_eq!(v.fill_opacity, 0.0);
    assert_eq!(v.z_index, 0);
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.placement, Placement::At(Point::ZERO));
    assert!(!v.backdrop);
    v.validate().unwrap();
}

#[test]
fn font_size_applies_to_text_kinds_only() {
    let t = Visual::math_tex("x").font_size(35.0);
    match t.kind {
        VisualKind::MathText(spec) => assert_eq!(spec.font_size, 35.0),
        _ => panic!("expected math text"),
    }
    // No-op on shapes.
    let s = Visual::square(1.0).font_size(35.0);
    assert!(matches!(s.kind, VisualKind::Square { side } if side == 1.0));
}

#[test]
fn shift_accumulates() {
    let v = Visual::dot(ORIGIN)
        .shift(Vec2::new(1.0, 0.0))
        .shift(Vec2::new(0.0, -2.0));
    assert_eq!(v.offset, Vec2::new(1.0, -2.0));
}

#[test]
fn fill_opacity_bounds_are_enforced() {
    assert!(Visual::square(1.0).fill_opacity(1.5).validate().is_err());
    assert!(Visual::square(1.0).fill_opacity(-0.1).validate().is_err());
    Visual::square(1.0).fill_opacity(0.5).validate().unwrap();
}

#[test]
fn degenerate_shapes_are_rejected() {
    assert!(Visual::arrow(ORIGIN, ORIGIN).validate().is_err());
    assert!(
        Visual::polygon([ORIGIN, Point::new(1.0, 0.0)])
            .validate()
            .is_err()
    );
    assert!(Visual::square(0.0).validate().is_err());
    assert!(Visual::circle(-1.0).validate().is_err());
    assert!(Visual::rectangle(2.0, f64::NAN).validate().is_err());
    assert!(Visual::dashed_rectangle(2.0, 1.0, 0).validate().is_err());
    assert!(
        Visual::right_angle(ORIGIN, Vec2::ZERO, Vec2::new(1.0, 0.0), 0.4)
            .validate()
            .is_err()
    );
}

#[test]
fn bad_tex_payloads_are_rejected() {
    assert!(Visual::tex("").validate().is_err());
    assert!(Visual::math_tex(r"\mathbb{R").validate().is_err());
    assert!(Visual::bullet_list(Vec::<String>::new()).validate().is_err());
    assert!(Visual::tex("x").font_size(0.0).validate().is_err());
}

#[test]
fn placement_buffs_must_be_non_negative() {
    assert!(
        Visual::tex("x")
            .next_to("a", Side::Below, -0.5)
            .validate()
            .is_err()
    );
    assert!(
        Visual::tex("x")
            .to_edge(Anchor::TOP, f64::INFINITY)
            .validate()
            .is_err()
    );
}
