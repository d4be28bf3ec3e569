use hilbertviz::{Scene, SceneConfig, scenes};

#[test]
fn scene_json_roundtrip_revalidates() {
    let cfg = SceneConfig::lecture_default();
    let scene = scenes::scene_by_name(&cfg, "parallelogram_law").unwrap();

    let json = serde_json::to_string(&scene).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();

    back.validate().unwrap();
    assert_eq!(back.name, scene.name);
    assert_eq!(back.objects.len(), scene.objects.len());
    assert_eq!(back.steps.len(), scene.steps.len());
    assert!((back.duration_sec() - scene.duration_sec()).abs() < 1e-12);
}

#[test]
fn dumped_scene_carries_the_template_preamble() {
    let cfg = SceneConfig::lecture_default();
    let scene = scenes::scene_by_name(&cfg, "intro").unwrap();
    let json = serde_json::to_string_pretty(&scene).unwrap();
    assert!(json.contains("amsmath"));
}
