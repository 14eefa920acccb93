use thiserror::Error;

// Error for a required report field that is absent or has the wrong shape.
// Optional fields never produce this; they fall back to their defaults.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required field: {path}")]
pub struct MissingFieldError {
    pub path: String,
}

impl MissingFieldError {
    pub fn new(path: impl Into<String>) -> Self {
        MissingFieldError { path: path.into() }
    }
}
