pub type GlintResult<T> = Result<T, GlintError>;

#[derive(thiserror::Error, Debug)]
pub enum GlintError {
    /// Input asset (icon image, text-block raster) missing or undecodable.
    #[error("asset error: {0}")]
    Asset(String),

    /// Layers or masks participating in one composite disagree on size.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// Timeline configuration is degenerate (non-positive duration, zero fps,
    /// empty effect window).
    #[error("timeline error: {0}")]
    Timeline(String),

    /// The encoder sink could not be started or failed mid-stream.
    #[error("sink error: {0}")]
    Sink(String),

    /// Any other precondition violation.
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlintError {
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn dimension(msg: impl Into<String>) -> Self {
        Self::Dimension(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
