use super::*;

#[test]
fn law_residual_vanishes() {
    let pairs = [
        (Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
        (Vec2::new(0.5, 7.0_f64.sqrt() / 2.0), Vec2::new(1.0, 0.0)),
        (Vec2::new(-3.25, 2.0), Vec2::new(1.75, 4.5)),
    ];
    for (x, y) in pairs {
        assert!(parallelogram_law_residual(x, y).abs() < 1e-9);
    }
}

#[test]
fn vertices_of_unit_square() {
    let fig = ParallelogramFigure::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)).unwrap();
    let v = fig.vertices();
    assert_eq!(v[0], Point::ZERO);
    assert_eq!(v[1], Point::new(1.0, 0.0));
    assert_eq!(v[2], Point::new(1.0, 1.0));
    assert_eq!(v[3], Point::new(0.0, 1.0));
}

#[test]
fn square_sides_follow_the_law() {
    let fig =
        ParallelogramFigure::new(Vec2::new(0.5, 7.0_f64.sqrt() / 2.0), Vec2::new(1.0, 0.0))
            .unwrap();
    let lhs = fig.sum_square().area() + fig.diff_square().area();
    let rhs = 2.0 * fig.x_square().area() + 2.0 * fig.y_square().area();
    assert!((lhs - rhs).abs() < 1e-9);
}

#[test]
fn parallel_vectors_are_rejected() {
    let err = ParallelogramFigure::new(Vec2::new(1.0, 2.0), Vec2::new(2.0, 4.0)).unwrap_err();
    assert!(matches!(err, VizError::Geometry(_)));
    assert!(ParallelogramFigure::new(Vec2::ZERO, Vec2::new(1.0, 0.0)).is_err());
}

#[test]
fn upright_rotation_of_axis_vectors() {
    assert!((SquareSpec::for_vector(Vec2::new(0.0, 1.0)).upright_rotation()).abs() < 1e-12);
    assert!(
        (SquareSpec::for_vector(Vec2::new(1.0, 0.0)).upright_rotation() - FRAC_PI_2).abs()
            < 1e-12
    );
}

#[test]
fn square_spec_side_is_the_norm() {
    let spec = SquareSpec::for_vector(Vec2::new(3.0, 4.0));
    assert!((spec.side - 5.0).abs() < 1e-12);
    assert!((spec.area() - 25.0).abs() < 1e-12);
}
