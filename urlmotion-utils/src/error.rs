// URL Motion: Error Types
//
// Playback itself has no failure modes (starting an empty sequence or
// stopping an idle controller are no-ops). Errors only come from building a
// controller or a frame sequence out of untrusted input.

use thiserror::Error;

/// Errors raised while configuring an animation
#[derive(Debug, Error)]
pub enum MotionError {
    /// Tick period must be longer than zero
    #[error("Invalid period: {millis}ms (must be greater than zero)")]
    InvalidPeriod { millis: u128 },

    /// Name does not match any predefined animation
    #[error("Unknown preset: '{0}'")]
    UnknownPreset(String),

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for configuration operations
pub type MotionResult<T> = Result<T, MotionError>;
