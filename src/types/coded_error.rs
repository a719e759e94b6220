//! Error half of an [`Optional`](crate::Optional) once converted into a `Result`.

use core::fmt;
use std::error::Error;

use super::ErrorObject;

/// An error object together with its numeric code.
///
/// Produced by [`Optional::into_result`](crate::Optional::into_result).
#[derive(Debug, Clone)]
pub struct CodedError {
    pub(crate) error: Option<ErrorObject>,
    pub(crate) code: u32,
}

impl CodedError {
    /// Creates a coded error from its parts.
    #[inline]
    pub fn new(code: u32, error: Option<ErrorObject>) -> Self {
        Self { error, code }
    }

    /// Returns the error code, `0` for an uncoded error.
    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Returns the wrapped error object, if any.
    #[inline]
    pub fn error(&self) -> Option<&ErrorObject> {
        self.error.as_ref()
    }

    /// Consumes the coded error, returning `(code, error)`.
    #[inline]
    pub fn into_parts(self) -> (u32, Option<ErrorObject>) {
        (self.code, self.error)
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, self.code) {
            (Some(error), 0) => fmt::Display::fmt(error, f),
            (Some(error), code) => write!(f, "{} (code: {})", error, code),
            (None, code) => write!(f, "error code {}", code),
        }
    }
}

impl Error for CodedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.as_ref().map(|error| &**error as &(dyn Error + 'static))
    }
}
