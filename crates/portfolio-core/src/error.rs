use thiserror::Error;

/// Failures inside the optional page enhancements. None of these are fatal;
/// callers log them and skip the enhancement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("model not yet available")]
    ModelNotLoaded,
    #[error("material `{material}` rejected factor update: {reason}")]
    MaterialMutation { material: String, reason: String },
    #[error("js error: {0}")]
    Js(String),
}

pub type FxResult<T> = Result<T, FxError>;
