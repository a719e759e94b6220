//! Conversions between [`Optional`] and `Result`.
//!
//! These adapters let code that already speaks `Result` exchange values with
//! code that returns [`Optional`], without losing the error code.
//!
//! # Examples
//!
//! ```
//! use optional_rail::{coded_err, CodedError, Optional};
//!
//! let parsed: Optional<i32> = "42".parse::<i32>().into();
//! assert_eq!(parsed.unwrap(), 42);
//!
//! let failed: Optional<i32> = coded_err(400, "bad request");
//! let result: Result<i32, CodedError> = failed.into();
//! assert_eq!(result.unwrap_err().to_string(), "bad request (code: 400)");
//! ```

use std::error::Error;

use crate::constructors;
use crate::types::{CodedError, ErrorValue, Optional};

impl<T> Optional<T> {
    /// Converts into a `Result`, keeping the code in the [`CodedError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_rail::{err, ok, Optional};
    ///
    /// assert_eq!(ok(5).into_result().unwrap(), 5);
    ///
    /// let failed: Optional<i32> = err("nope");
    /// let error = failed.into_result().unwrap_err();
    /// assert_eq!(error.code(), 0);
    /// assert_eq!(error.to_string(), "nope");
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, CodedError> {
        if self.is_error() {
            return Err(CodedError::new(self.error_code, self.error));
        }
        Ok(self.value)
    }
}

impl<T, E> From<Result<T, E>> for Optional<T>
where
    T: Default,
    E: Error + Send + Sync + 'static,
{
    /// `Ok` becomes a success; `Err` is routed through [`err`](crate::err)
    /// and therefore through the global error hook.
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => constructors::ok(value),
            Err(error) => constructors::err(ErrorValue::error(error)),
        }
    }
}

impl<T> From<Optional<T>> for Result<T, CodedError> {
    #[inline]
    fn from(opt: Optional<T>) -> Self {
        opt.into_result()
    }
}

impl From<CodedError> for ErrorValue {
    #[inline]
    fn from(error: CodedError) -> Self {
        ErrorValue::error(error)
    }
}
