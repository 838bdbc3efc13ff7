use std::path::PathBuf;

use crate::config::project::ConfigError;

/// Result alias used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Fatal errors. Advisory text findings are never reported through this type; see
/// [`crate::FitmentReport`].
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid runtime parameter (zero fps, zero canvas, malformed color, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// The project config failed validation. Raised before any rendering starts.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested slide durations cannot fit the audio track.
    #[error(
        "duration limit exceeded: slides before the last need {requested:.3}s but the audio is {limit:.3}s"
    )]
    DurationLimitExceeded {
        /// Sum of every requested duration except the last.
        requested: f64,
        /// Audio track duration in seconds.
        limit: f64,
    },

    /// An image or audio file was not found when it was about to be used.
    #[error("missing asset: '{}'", .0.display())]
    MissingAsset(PathBuf),

    /// Neither the configured font nor any system fallback could be loaded.
    #[error("font error: {0}")]
    Font(String),

    /// An external step (ffmpeg, ffprobe, image IO) failed.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error(transparent)]
    /// Context-wrapped errors from IO helpers.
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ReelError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::MissingAsset`].
    pub fn missing_asset(path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset(path.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
