/// Convenience result type used across autoslide.
pub type AutoslideResult<T> = Result<T, AutoslideError>;

/// Top-level error taxonomy for the slide-to-video pipeline.
///
/// None of these are recoverable: every stage propagates them straight to the caller.
#[derive(thiserror::Error, Debug)]
pub enum AutoslideError {
    /// Missing or unreadable input document.
    #[error("input error: {0}")]
    Input(String),

    /// An external tool could not be spawned or exited non-zero.
    #[error("tool error: {0}")]
    Tool(String),

    /// Unreadable or malformed narration audio.
    #[error("audio error: {0}")]
    Audio(String),

    /// Invalid configuration or a broken pipeline invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing the timeline manifest.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AutoslideError {
    /// Build an [`AutoslideError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build an [`AutoslideError::Tool`] value.
    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }

    /// Build an [`AutoslideError::Audio`] value.
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build an [`AutoslideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AutoslideError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
