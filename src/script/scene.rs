use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::error::{VizError, VizResult};
use crate::script::directive::{Action, Animation, DEFAULT_RUN_TIME_SEC, Step, fade_out};
use crate::script::object::Visual;
use crate::script::tex::TexTemplate;

/// One independent, self-contained animation script.
///
/// A scene is pure data: an object table keyed by stable user-facing keys, an
/// ordered directive list, and the TeX template the host typesets all of the
/// scene's text with. Scenes share nothing with each other; serialized JSON
/// is the wire format handed to the animation host.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Scene name, unique within the catalog.
    pub name: String,
    /// Preamble configuration for every text object in this scene.
    pub template: TexTemplate,
    /// Object table keyed by stable keys.
    pub objects: BTreeMap<String, Visual>,
    /// Directives in execution order.
    pub steps: Vec<Step>,
}

impl Scene {
    /// Total scripted duration in seconds (play run times plus waits).
    pub fn duration_sec(&self) -> f64 {
        self.steps.iter().map(Step::duration_sec).sum()
    }

    /// Validate scene invariants: key references, payloads, durations.
    pub fn validate(&self) -> VizResult<()> {
        if self.name.trim().is_empty() {
            return Err(VizError::validation("scene name must be non-empty"));
        }
        for (key, object) in &self.objects {
            if key.trim().is_empty() {
                return Err(VizError::validation("object key must be non-empty"));
            }
            object.validate().map_err(|e| {
                VizError::validation(format!("object '{key}' invalid: {e}"))
            })?;
            if let crate::script::object::Placement::NextTo { anchor, .. } = &object.placement
                && !self.objects.contains_key(anchor)
            {
                return Err(VizError::validation(format!(
                    "object '{key}' is placed next to unknown object '{anchor}'"
                )));
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::Play {
                    actions,
                    run_time_sec,
                } => {
                    if actions.is_empty() {
                        return Err(VizError::validation(format!(
                            "step {index} plays no actions"
                        )));
                    }
                    if !(run_time_sec.is_finite() && *run_time_sec > 0.0) {
                        return Err(VizError::validation(format!(
                            "step {index} run time must be finite and > 0"
                        )));
                    }
                    for action in actions {
                        self.check_key(index, &action.object)?;
                        match &action.animation {
                            Animation::TransformInto { target } => {
                                self.check_key(index, target)?;
                            }
                            Animation::Rotate { angle_rad } => {
                                if !angle_rad.is_finite() {
                                    return Err(VizError::validation(format!(
                                        "step {index} rotation angle must be finite"
                                    )));
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Step::Wait { duration_sec } => {
                    if !(duration_sec.is_finite() && *duration_sec >= 0.0) {
                        return Err(VizError::validation(format!(
                            "step {index} wait must be finite and >= 0"
                        )));
                    }
                }
                Step::Add { object } => self.check_key(index, object)?,
            }
        }
        Ok(())
    }

    fn check_key(&self, step: usize, key: &str) -> VizResult<()> {
        if !self.objects.contains_key(key) {
            return Err(VizError::validation(format!(
                "step {step} references unknown object '{key}'"
            )));
        }
        Ok(())
    }
}

/// Builder for [`Scene`] values.
///
/// Tracks which objects are currently on stage so [`SceneBuilder::fade_out_all`]
/// can clear the frame the way the source scripts end.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    name: String,
    template: TexTemplate,
    objects: BTreeMap<String, Visual>,
    steps: Vec<Step>,
    shown: BTreeSet<String>,
}

impl SceneBuilder {
    /// Create a builder for a named scene using the given template.
    pub fn new(name: impl Into<String>, template: &TexTemplate) -> Self {
        Self {
            name: name.into(),
            template: template.clone(),
            objects: BTreeMap::new(),
            steps: Vec::new(),
            shown: BTreeSet::new(),
        }
    }

    /// Register an object under a unique key.
    pub fn object(mut self, key: impl Into<String>, object: Visual) -> VizResult<Self> {
        let key = key.into();
        if self.objects.contains_key(&key) {
            return Err(VizError::validation(format!(
                "duplicate object key '{key}'"
            )));
        }
        self.objects.insert(key, object);
        Ok(self)
    }

    /// Play actions together at the default run time.
    pub fn play(self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.play_for(actions, DEFAULT_RUN_TIME_SEC)
    }

    /// Play actions together over `run_time_sec`.
    pub fn play_for(mut self, actions: impl IntoIterator<Item = Action>, run_time_sec: f64) -> Self {
        let actions: Vec<Action> = actions.into_iter().collect();
        for action in &actions {
            match &action.animation {
                Animation::Create
                | Animation::Write
                | Animation::GrowArrow
                | Animation::FadeIn => {
                    self.shown.insert(action.object.clone());
                }
                Animation::FadeOut => {
                    self.shown.remove(&action.object);
                }
                Animation::TransformInto { target } => {
                    self.shown.remove(&action.object);
                    self.shown.insert(target.clone());
                }
                Animation::Rotate { .. } | Animation::MoveTo { .. } => {}
            }
        }
        self.steps.push(Step::Play {
            actions,
            run_time_sec,
        });
        self
    }

    /// Hold the current frame for one second.
    pub fn wait_default(self) -> Self {
        self.wait(1.0)
    }

    /// Hold the current frame for `duration_sec`.
    pub fn wait(mut self, duration_sec: f64) -> Self {
        self.steps.push(Step::Wait { duration_sec });
        self
    }

    /// Show an object instantly.
    pub fn add(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.shown.insert(key.clone());
        self.steps.push(Step::Add { object: key });
        self
    }

    /// Fade out everything currently on stage in one step.
    ///
    /// No-op when the stage is already empty.
    pub fn fade_out_all(self) -> Self {
        let shown: Vec<String> = self.shown.iter().cloned().collect();
        if shown.is_empty() {
            return self;
        }
        self.play(shown.into_iter().map(fade_out))
    }

    /// Keys currently on stage, in key order.
    pub fn on_stage(&self) -> impl Iterator<Item = &str> {
        self.shown.iter().map(String::as_str)
    }

    /// Build and validate the final scene.
    #[tracing::instrument(skip(self), fields(scene = %self.name))]
    pub fn build(self) -> VizResult<Scene> {
        let scene = Scene {
            name: self.name,
            template: self.template,
            objects: self.objects,
            steps: self.steps,
        };
        scene.validate()?;
        tracing::debug!(
            objects = scene.objects.len(),
            steps = scene.steps.len(),
            duration_sec = scene.duration_sec(),
            "built scene"
        );
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/scene.rs"]
mod tests;
