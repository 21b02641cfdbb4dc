use thiserror::Error;

/// Error raised when extraction is called on the wrong `Res` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WrongVariantAccess {
    message: &'static str,
}

impl WrongVariantAccess {
    pub(crate) const UNWRAP: Self = Self {
        message: "called `unwrap` on an `Err` value",
    };

    pub(crate) const UNWRAP_ERR: Self = Self {
        message: "called `unwrap_err` on an `Ok` value",
    };

    /// The diagnostic message carried by this error.
    pub fn message(&self) -> &'static str {
        self.message
    }
}
