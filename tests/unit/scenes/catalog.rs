use super::*;
use crate::script::directive::Step;
use crate::script::object::Placement;

#[test]
fn catalog_builds_every_scene() {
    let cfg = SceneConfig::lecture_default();
    let scenes = catalog(&cfg).unwrap();
    assert_eq!(scenes.len(), SCENE_NAMES.len());
    for (scene, name) in scenes.iter().zip(SCENE_NAMES) {
        assert_eq!(&scene.name, name);
        scene.validate().unwrap();
    }
}

#[test]
fn every_animated_scene_has_positive_duration() {
    let cfg = SceneConfig::lecture_default();
    for scene in catalog(&cfg).unwrap() {
        if scene.name == "thumbnail" {
            // Static cover frame, adds only.
            assert_eq!(scene.duration_sec(), 0.0);
        } else {
            assert!(scene.duration_sec() > 0.0, "{} has no duration", scene.name);
        }
    }
}

#[test]
fn scene_names_are_unique() {
    let mut names: Vec<&str> = SCENE_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), SCENE_NAMES.len());
}

#[test]
fn unknown_scene_name_is_rejected() {
    let cfg = SceneConfig::lecture_default();
    let err = scene_by_name(&cfg, "nope").unwrap_err();
    assert!(matches!(err, VizError::Validation(_)));
}

#[test]
fn invalid_style_is_rejected_before_building() {
    let mut cfg = SceneConfig::lecture_default();
    cfg.style.med_buff = -1.0;
    assert!(scene_by_name(&cfg, "intro").is_err());
}

#[test]
fn text_block_spacing_follows_the_style() {
    let mut cfg = SceneConfig::lecture_default();
    cfg.style.block_buff = 0.9;
    let scene = scene_by_name(&cfg, "inner_product_definition").unwrap();
    for key in ["map", "quantifiers", "axioms"] {
        let Placement::NextTo { buff, .. } = scene.objects[key].placement else {
            panic!("{key} is not stacked below its neighbor");
        };
        assert_eq!(buff, 0.9);
    }
}

#[test]
fn thumbnail_is_add_only() {
    let cfg = SceneConfig::lecture_default();
    let scene = scene_by_name(&cfg, "thumbnail").unwrap();
    assert!(
        scene
            .steps
            .iter()
            .all(|s| matches!(s, Step::Add { .. }))
    );
}

#[test]
fn scenes_share_the_lecture_template() {
    let cfg = SceneConfig::lecture_default();
    for scene in catalog(&cfg).unwrap() {
        assert_eq!(scene.template, cfg.template);
    }
}
