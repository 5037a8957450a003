//! Error types shared by transports, the typed adapter and form validation.
//!
//! Display strings are shown to the user verbatim in the notification toast,
//! so they stay short and in the application's language.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a remote call, whichever transport carried it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The network request or bridge invocation itself failed.
    #[error("{0}")]
    Transport(String),
    /// The HTTP endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The backend answered but reported a logical failure.
    #[error("{0}")]
    Backend(String),
    /// The reply could not be read as the expected shape.
    #[error("Respons server tidak valid: {0}")]
    Decode(String),
    /// The host bridge was not present when the call was made.
    #[error("google.script.run tidak tersedia")]
    BridgeUnavailable,
}

impl RemoteError {
    /// Replace the generic backend failure text with `fallback`.
    ///
    /// Other errors, and backend errors that carry their own text, are kept.
    #[must_use]
    pub fn or_backend_message(self, fallback: &str) -> Self {
        match self {
            Self::Backend(message) if message == crate::envelope::DEFAULT_FAILURE_MESSAGE => {
                Self::Backend(fallback.to_owned())
            }
            other => other,
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Client-side validation failure, raised before any remote call is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required surat field is blank. Carries the column label.
    #[error("Kolom \"{0}\" wajib diisi.")]
    MissingField(&'static str),
    /// The profile form has no name.
    #[error("Nama tidak boleh kosong.")]
    MissingName,
    /// The login form is missing the email or the password.
    #[error("Email dan password harus diisi.")]
    MissingCredentials,
}
