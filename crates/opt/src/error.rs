use thiserror::Error;

/// Error raised when `unwrap` or `expect` hits an empty `Opt`.
///
/// `unwrap` carries the fixed default message; `expect` carries the message
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmptyValueAccess {
    message: &'static str,
}

impl EmptyValueAccess {
    pub(crate) const UNWRAP: Self = Self {
        message: "called `unwrap` on an empty value",
    };

    pub(crate) fn with_message(message: &'static str) -> Self {
        Self { message }
    }

    /// The diagnostic message carried by this error.
    pub fn message(&self) -> &'static str {
        self.message
    }
}
