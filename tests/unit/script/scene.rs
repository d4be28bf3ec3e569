use super::*;
use crate::script::directive::{create, move_to, rotate, transform, write};
use crate::script::object::Side;
use crate::foundation::core::{ORIGIN, Point};

fn template() -> TexTemplate {
    TexTemplate::lecture_default()
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .object("a", Visual::tex("y"))
        .unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn builder_state_is_debuggable() {
    let builder = SceneBuilder::new("s", &template())
        .object("a", Visual::dot(ORIGIN))
        .unwrap();
    let dump = format!("{builder:?}");
    assert!(dump.contains("SceneBuilder"));
    assert!(dump.contains("\"a\""));
}

#[test]
fn unknown_action_target_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .play([write("missing")])
        .build()
        .unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn unknown_transform_target_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .play([transform("a", "missing")])
        .build()
        .unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn unknown_next_to_anchor_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x").next_to("ghost", Side::Below, 0.25))
        .unwrap()
        .play([write("a")])
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn empty_play_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .play(Vec::<Action>::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn non_finite_rotation_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::square(1.0))
        .unwrap()
        .play([create("a")])
        .play([rotate("a", f64::NAN)])
        .build()
        .unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn transform_replaces_source_on_stage() {
    let builder = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .object("b", Visual::tex("y"))
        .unwrap()
        .play([write("a")])
        .play([transform("a", "b")]);
    let shown: Vec<&str> = builder.on_stage().collect();
    assert_eq!(shown, vec!["b"]);
}

#[test]
fn move_and_rotate_leave_the_stage_set_alone() {
    let builder = SceneBuilder::new("s", &template())
        .object("a", Visual::square(1.0))
        .unwrap()
        .play([create("a")])
        .play([rotate("a", 1.0)])
        .play([move_to("a", Point::new(1.0, 1.0))]);
    let shown: Vec<&str> = builder.on_stage().collect();
    assert_eq!(shown, vec!["a"]);
}

#[test]
fn fade_out_all_empties_the_stage() {
    let builder = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .object("b", Visual::dot(ORIGIN))
        .unwrap()
        .play([write("a"), create("b")])
        .fade_out_all();
    assert!(builder.on_stage().next().is_none());
    builder.build().unwrap();
}

#[test]
fn fade_out_all_on_empty_stage_adds_no_step() {
    let scene = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .fade_out_all()
        .add("a")
        .build()
        .unwrap();
    assert_eq!(scene.steps.len(), 1);
}

#[test]
fn duration_sums_plays_and_waits() {
    let scene = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .play([write("a")])
        .wait(2.5)
        .play_for([transform("a", "a")], 0.5)
        .add("a")
        .build()
        .unwrap();
    assert!((scene.duration_sec() - (DEFAULT_RUN_TIME_SEC + 2.5 + 0.5)).abs() < 1e-12);
}

#[test]
fn negative_wait_fails_validation() {
    let err = SceneBuilder::new("s", &template())
        .object("a", Visual::tex("x"))
        .unwrap()
        .wait(-1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn empty_name_fails_validation() {
    let err = SceneBuilder::new("  ", &template()).build().unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}
