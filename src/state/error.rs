//! Errors raised by form submissions.

use records::{RemoteError, ValidationError};

/// Why a form submit did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Caught locally; no remote call was made.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl FormError {
    /// Toast text: validation messages as is, remote ones after `context`.
    #[must_use]
    pub fn describe(&self, context: &str) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Remote(err) => format!("{context}{err}"),
        }
    }
}
