/// Convenience result type used across beamline.
pub type BeamResult<T> = Result<T, BeamError>;

/// Error taxonomy for the crate boundaries (scene loading, validation, rasterization).
///
/// Geometry and animation never produce errors: unresolved anchors and degenerate
/// rectangles are normal transient states and simply suppress drawing.
#[derive(thiserror::Error, Debug)]
pub enum BeamError {
    /// Invalid user-provided scene or style data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while turning a surface into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BeamError {
    /// Build a [`BeamError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BeamError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BeamError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
