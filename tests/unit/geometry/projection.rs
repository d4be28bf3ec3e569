use super::*;

#[test]
fn worked_example_scalar_and_vector() {
    let p = project(Vec2::new(-1.0, 3.0), Vec2::new(3.0, 4.0)).unwrap();
    assert!((p.scalar - 0.36).abs() < 1e-12);
    assert!((p.vector.x - 1.08).abs() < 1e-12);
    assert!((p.vector.y - 1.44).abs() < 1e-12);
}

#[test]
fn rejection_is_orthogonal_to_base() {
    let u = Vec2::new(-1.0, 3.0);
    let v = Vec2::new(3.0, 4.0);
    let p = project(u, v).unwrap();
    assert!(is_orthogonal(p.rejection(u), v, ORTHO_TOL));
}

#[test]
fn projection_is_idempotent() {
    let u = Vec2::new(2.5, -1.25);
    let v = Vec2::new(1.0, 2.0);
    let once = project(u, v).unwrap();
    let twice = project(once.vector, v).unwrap();
    assert!((once.scalar - twice.scalar).abs() < 1e-12);
}

#[test]
fn orthogonal_input_projects_to_zero() {
    let p = project(Vec2::new(-1.0, 2.0), Vec2::new(-4.0, -2.0)).unwrap();
    assert_eq!(p.scalar, 0.0);
    assert_eq!(p.vector, Vec2::ZERO);
}

#[test]
fn zero_base_is_rejected() {
    let err = project(Vec2::new(1.0, 1.0), Vec2::ZERO).unwrap_err();
    assert!(matches!(err, VizError::Geometry(_)));
}

#[test]
fn drop_segment_spans_tip_to_foot() {
    let u = Vec2::new(-1.0, 3.0);
    let p = project(u, Vec2::new(3.0, 4.0)).unwrap();
    let (from, to) = p.drop_segment(u);
    assert_eq!(from, u.to_point());
    assert_eq!(to, p.vector.to_point());
}

#[test]
fn right_angle_corner_on_axes() {
    let pts = right_angle_corner(Point::ZERO, Vec2::new(2.0, 0.0), Vec2::new(0.0, 3.0), 0.4)
        .unwrap();
    assert!((pts[0] - Point::new(0.4, 0.0)).hypot() < 1e-12);
    assert!((pts[1] - Point::new(0.4, 0.4)).hypot() < 1e-12);
    assert!((pts[2] - Point::new(0.0, 0.4)).hypot() < 1e-12);
}

#[test]
fn right_angle_corner_rejects_bad_arms() {
    assert!(right_angle_corner(Point::ZERO, Vec2::ZERO, Vec2::new(1.0, 0.0), 0.4).is_err());
    assert!(right_angle_corner(Point::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), 0.0).is_err());
}
