/// Convenience result type used across Fresco.
pub type FrescoResult<T> = Result<T, FrescoError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FrescoError {
    /// Invalid user-provided or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure acquiring or addressing a drawing surface.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors while executing a repaint.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrescoError {
    /// Build a [`FrescoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrescoError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`FrescoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
