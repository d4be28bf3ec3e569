use crate::foundation::error::{VizError, VizResult};
use crate::script::tex::TexTemplate;

/// Hand-tuned presentation offsets shared by the scene constructors.
///
/// These are pacing/appearance values, not algorithmic constants; scenes read
/// them instead of burying magic numbers in their scripts. Defaults match the
/// lecture as produced.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Tight gap between a label and the thing it labels.
    pub small_buff: f64,
    /// Default gap for stacked text lines.
    pub med_buff: f64,
    /// Gap between stacked statement blocks on text-only slides.
    pub block_buff: f64,
    /// Gap separating logical text blocks.
    pub large_buff: f64,
    /// Margin between frame edge and edge-placed objects.
    pub edge_margin: f64,
    /// Arm length of right-angle markers.
    pub right_angle_size: f64,
    /// Fill opacity of the staged proof squares.
    pub square_fill_opacity: f64,
    /// Fill opacity of filled example shapes (rectangle, circle).
    pub shape_fill_opacity: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            small_buff: 0.1,
            med_buff: 0.25,
            block_buff: 0.5,
            large_buff: 1.0,
            edge_margin: 0.5,
            right_angle_size: 0.4,
            square_fill_opacity: 0.5,
            shape_fill_opacity: 0.75,
        }
    }
}

impl StyleConfig {
    /// Validate that every offset is finite and non-negative.
    pub fn validate(&self) -> VizResult<()> {
        for (name, value) in [
            ("small_buff", self.small_buff),
            ("med_buff", self.med_buff),
            ("block_buff", self.block_buff),
            ("large_buff", self.large_buff),
            ("edge_margin", self.edge_margin),
            ("right_angle_size", self.right_angle_size),
            ("square_fill_opacity", self.square_fill_opacity),
            ("shape_fill_opacity", self.shape_fill_opacity),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(VizError::validation(format!(
                    "style {name} must be finite and >= 0"
                )));
            }
        }
        if self.square_fill_opacity > 1.0 || self.shape_fill_opacity > 1.0 {
            return Err(VizError::validation("fill opacities must be <= 1"));
        }
        Ok(())
    }
}

/// Everything a scene constructor needs besides its own content.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// TeX preamble configuration, built once and passed explicitly.
    pub template: TexTemplate,
    /// Presentation offsets.
    pub style: StyleConfig,
}

impl SceneConfig {
    /// Configuration the lecture was produced with.
    pub fn lecture_default() -> Self {
        Self {
            template: TexTemplate::lecture_default(),
            style: StyleConfig::default(),
        }
    }
}
