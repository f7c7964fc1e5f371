/// Convenience result type used across glyphtrail.
pub type GlyphTrailResult<T> = Result<T, GlyphTrailError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlyphTrailError {
    /// Invalid configuration, roster or caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Glyph source files that are missing, malformed or carry no drawable path.
    #[error("asset error: {0}")]
    Asset(String),

    /// Failures inside a scene or raster backend.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphTrailError {
    /// Build a [`GlyphTrailError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphTrailError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`GlyphTrailError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
