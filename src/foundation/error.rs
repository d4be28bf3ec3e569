/// Convenience result type used across Hilbertviz.
pub type VizResult<T> = Result<T, VizError>;

/// Top-level error taxonomy used by scene and geometry APIs.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Invalid user-provided scene, object, or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Violated geometric precondition (zero projection base, parallel
    /// tiling vectors) or a staging construction that failed to converge.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    /// Build a [`VizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VizError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`VizError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
