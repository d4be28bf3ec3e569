//! The lecture catalog: one constructor per scene, plus a name registry.
//!
//! Every constructor takes the shared [`SceneConfig`] and returns a validated
//! [`Scene`]. Scenes are independent; constructing one never touches another.

mod completeness;
mod decomposition;
mod definition;
mod inner_product;
mod intro;
mod orthogonality;
mod outro;
mod parallelogram;
mod projection_theorem;

use crate::foundation::error::{VizError, VizResult};
use crate::script::config::SceneConfig;
use crate::script::scene::Scene;

pub use completeness::completeness;
pub use decomposition::{
    decomposition_existence, decomposition_linearity, decomposition_maps,
    decomposition_minimality, orthogonal_decomposition,
};
pub use definition::hilbert_definition;
pub use inner_product::{inner_product_definition, inner_product_intro, inner_product_space};
pub use intro::intro;
pub use orthogonality::orthogonality;
pub use outro::{outro, thumbnail};
pub use parallelogram::{parallelogram_law, parallelogram_law_algebra};
pub use projection_theorem::{projection_theorem, projection_theorem_uniqueness};

/// Catalog scene names in lecture order.
pub const SCENE_NAMES: &[&str] = &[
    "intro",
    "inner_product_intro",
    "inner_product_definition",
    "inner_product_space",
    "orthogonality",
    "completeness",
    "hilbert_definition",
    "projection_theorem",
    "parallelogram_law",
    "parallelogram_law_algebra",
    "projection_theorem_uniqueness",
    "orthogonal_decomposition",
    "decomposition_existence",
    "decomposition_maps",
    "decomposition_linearity",
    "decomposition_minimality",
    "outro",
    "thumbnail",
];

/// Build one scene by catalog name.
pub fn scene_by_name(cfg: &SceneConfig, name: &str) -> VizResult<Scene> {
    cfg.style.validate()?;
    match name {
        "intro" => intro(cfg),
        "inner_product_intro" => inner_product_intro(cfg),
        "inner_product_definition" => inner_product_definition(cfg),
        "inner_product_space" => inner_product_space(cfg),
        "orthogonality" => orthogonality(cfg),
        "completeness" => completeness(cfg),
        "hilbert_definition" => hilbert_definition(cfg),
        "projection_theorem" => projection_theorem(cfg),
        "parallelogram_law" => parallelogram_law(cfg),
        "parallelogram_law_algebra" => parallelogram_law_algebra(cfg),
        "projection_theorem_uniqueness" => projection_theorem_uniqueness(cfg),
        "orthogonal_decomposition" => orthogonal_decomposition(cfg),
        "decomposition_existence" => decomposition_existence(cfg),
        "decomposition_maps" => decomposition_maps(cfg),
        "decomposition_linearity" => decomposition_linearity(cfg),
        "decomposition_minimality" => decomposition_minimality(cfg),
        "outro" => outro(cfg),
        "thumbnail" => thumbnail(cfg),
        other => Err(VizError::validation(format!("unknown scene '{other}'"))),
    }
}

/// Build the whole catalog in lecture order.
#[tracing::instrument(skip(cfg))]
pub fn catalog(cfg: &SceneConfig) -> VizResult<Vec<Scene>> {
    SCENE_NAMES
        .iter()
        .map(|name| scene_by_name(cfg, name))
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/scenes/catalog.rs"]
mod tests;
