use hilbertviz::{SceneConfig, scenes};

#[test]
fn full_catalog_builds_and_verifies() {
    let cfg = SceneConfig::lecture_default();
    let catalog = scenes::catalog(&cfg).unwrap();
    assert_eq!(catalog.len(), scenes::SCENE_NAMES.len());

    let total: f64 = catalog.iter().map(|s| s.duration_sec()).sum();
    assert!(total > 60.0, "catalog script is implausibly short: {total}s");
}

#[test]
fn tiling_scene_covers_its_targets() {
    // Same spanning vectors the parallelogram scene stages.
    let x = hilbertviz::Vec2::new(0.5, 7.0_f64.sqrt() / 2.0);
    let y = hilbertviz::Vec2::new(1.0, 0.0);
    let plan = hilbertviz::plan_parallelogram_tiling(x, y).unwrap();
    plan.verify().unwrap();

    let residual = hilbertviz::parallelogram_law_residual(x, y);
    assert!(residual.abs() < 1e-9);
    assert!((plan.target_area() - plan.placed_area()).abs() < 1e-6 * plan.target_area());
}
