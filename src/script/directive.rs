use crate::foundation::core::Point;

/// Run time used by [`crate::SceneBuilder::play`] when none is given.
pub const DEFAULT_RUN_TIME_SEC: f64 = 1.0;

/// How an object enters, leaves, or changes during one play step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Animation {
    /// Draw the object's outline progressively.
    Create,
    /// Write text stroke by stroke.
    Write,
    /// Grow an arrow from its tail.
    GrowArrow,
    /// Fade the object in.
    FadeIn,
    /// Fade the object out.
    FadeOut,
    /// Morph this object into another registered object, which replaces it.
    TransformInto {
        /// Key of the replacement object.
        target: String,
    },
    /// Rotate in place.
    Rotate {
        /// Rotation angle in radians, counterclockwise.
        angle_rad: f64,
    },
    /// Glide to a new center point.
    MoveTo {
        /// Destination center.
        to: Point,
    },
}

/// One animated object within a play step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Action {
    /// Key of the animated object.
    pub object: String,
    /// Animation applied to it.
    pub animation: Animation,
}

/// One directive of a scene script, executed strictly in sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// Run a group of animations together over `run_time_sec`.
    Play {
        /// Animations running concurrently within this step.
        actions: Vec<Action>,
        /// Step duration in seconds.
        run_time_sec: f64,
    },
    /// Hold the current frame; pure pacing, no semantic effect.
    Wait {
        /// Pause duration in seconds.
        duration_sec: f64,
    },
    /// Show an object instantly, without animation.
    Add {
        /// Key of the shown object.
        object: String,
    },
}

impl Step {
    /// Wall-clock duration this step contributes to the scene.
    pub fn duration_sec(&self) -> f64 {
        match self {
            Self::Play { run_time_sec, .. } => *run_time_sec,
            Self::Wait { duration_sec } => *duration_sec,
            Self::Add { .. } => 0.0,
        }
    }
}

/// `Create` action on `object`.
pub fn create(object: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::Create,
    }
}

/// `Write` action on `object`.
pub fn write(object: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::Write,
    }
}

/// `GrowArrow` action on `object`.
pub fn grow(object: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::GrowArrow,
    }
}

/// `FadeIn` action on `object`.
pub fn fade_in(object: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::FadeIn,
    }
}

/// `FadeOut` action on `object`.
pub fn fade_out(object: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::FadeOut,
    }
}

/// Morph `object` into `target`, replacing it on stage.
pub fn transform(object: impl Into<String>, target: impl Into<String>) -> Action {
    Action {
        object: object.into(),
        animation: Animation::TransformInto {
            target: target.into(),
        },
    }
}

/// Rotate `object` in place by `angle_rad`.
pub fn rotate(object: impl Into<String>, angle_rad: f64) -> Action {
    Action {
        object: object.into(),
        animation: Animation::Rotate { angle_rad },
    }
}

/// Glide `object` to a new center.
pub fn move_to(object: impl Into<String>, to: Point) -> Action {
    Action {
        object: object.into(),
        animation: Animation::MoveTo { to },
    }
}
