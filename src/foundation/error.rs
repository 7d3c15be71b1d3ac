/// Convenience result type used across Kinema.
pub type KinemaResult<T> = Result<T, KinemaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Interpolation itself is total and never returns an error; every fallible
/// path is configuration-time validation of session inputs.
#[derive(thiserror::Error, Debug)]
pub enum KinemaError {
    /// Invalid user-provided session data (parent size, duration).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating keyframe sets.
    #[error("keyframe error: {0}")]
    Keyframe(String),

    /// Errors while evaluating motion state.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinemaError {
    /// Build a [`KinemaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinemaError::Keyframe`] value.
    pub fn keyframe(msg: impl Into<String>) -> Self {
        Self::Keyframe(msg.into())
    }

    /// Build a [`KinemaError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
