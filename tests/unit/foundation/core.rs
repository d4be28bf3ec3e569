use super::*;

#[test]
fn default_color_is_white() {
    assert_eq!(Color::default(), Color::WHITE);
}

#[test]
fn rgb_is_opaque() {
    let c = Color::rgb(1, 2, 3);
    assert_eq!(c.a, 255);
}

#[test]
fn directions_are_unit_axis_vectors() {
    assert_eq!(UP + DOWN, Vec2::ZERO);
    assert_eq!(LEFT + RIGHT, Vec2::ZERO);
    assert_eq!(UP.hypot(), 1.0);
    assert_eq!(RIGHT.hypot(), 1.0);
    assert_eq!(ORIGIN, Point::ZERO);
}

#[test]
fn color_serde_roundtrip() {
    let c = Color::BLUE;
    let json = serde_json::to_string(&c).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
