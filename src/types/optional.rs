//! The value/error/code container.
//!
//! [`Optional`] replaces the `(value, error)` pair idiom with one value that
//! also carries a numeric error code:
//! - **Success**: no error object and code `0`
//! - **Error**: an error object, a nonzero code, or both
//! - **Empty**: field-identical to a success holding `T::default()`
//!
//! Failure must be detected with [`Optional::is_error`]. [`Optional::is_some`]
//! only compares the value against `T::default()` and cannot tell a
//! legitimate zero from an empty container.

use core::fmt;

use super::ErrorObject;

/// Tri-state holder of a value, an optional error object, and an error code.
#[must_use]
#[derive(Debug, Clone)]
pub struct Optional<T> {
    pub(crate) value: T,
    pub(crate) error: Option<ErrorObject>,
    pub(crate) error_code: u32,
}

impl<T> Optional<T> {
    #[inline]
    pub(crate) fn from_parts(value: T, error: Option<ErrorObject>, error_code: u32) -> Self {
        Self { value, error, error_code }
    }

    /// Returns `true` if an error object is set or the error code is nonzero.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.error_code != 0
    }

    /// Returns `true` if the error code is nonzero.
    #[inline]
    pub fn has_error_code(&self) -> bool {
        self.error_code != 0
    }

    /// Returns `true` if the stored value differs from `T::default()`.
    ///
    /// This is a syntactic check: `ok(0)` reports `false` even though it is
    /// a success. Use [`is_error`](Self::is_error) to detect failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_rail::ok;
    ///
    /// assert!(ok(42).is_some());
    /// assert!(!ok(0).is_some());
    /// assert!(!ok(0).is_error());
    /// ```
    #[inline]
    pub fn is_some(&self) -> bool
    where
        T: Default + PartialEq,
    {
        self.value != T::default()
    }

    /// Returns the error code, `0` when none is set.
    #[inline]
    pub fn error_code(&self) -> u32 {
        self.error_code
    }

    /// Returns the stored error object, if any.
    #[inline]
    pub fn error(&self) -> Option<&ErrorObject> {
        self.error.as_ref()
    }

    /// Borrows the stored value without checking for an error.
    ///
    /// On error paths this is `T::default()`, or the partial value kept by
    /// [`from_pair`](crate::from_pair).
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the container and returns the stored value without checking
    /// for an error.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the container into `(value, error, code)`.
    #[inline]
    pub fn into_parts(self) -> (T, Option<ErrorObject>, u32) {
        (self.value, self.error, self.error_code)
    }

    /// Returns the value, panicking if the container is erroneous.
    ///
    /// # Panics
    ///
    /// Panics with the error message when [`is_error`](Self::is_error) is true.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_rail::ok;
    ///
    /// assert_eq!(ok("ready").unwrap(), "ready");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        if self.is_error() {
            unwrap_failed("called `Optional::unwrap()` on an error value", &self.error_message());
        }
        self.value
    }

    /// Returns the value, panicking with `msg` if the container is erroneous.
    ///
    /// # Panics
    ///
    /// Panics when [`is_error`](Self::is_error) is true.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        if self.is_error() {
            unwrap_failed(msg, &self.error_message());
        }
        self.value
    }

    /// Projects the container onto the plain `(value, error)` pair.
    ///
    /// The error code is not part of the pair. A code-only error yields
    /// `(value, None)`.
    #[inline]
    pub fn into_pair(self) -> (T, Option<ErrorObject>) {
        (self.value, self.error)
    }

    /// Renders the error message when erroneous, otherwise the value.
    ///
    /// Same output as the [`Display`](fmt::Display) implementation.
    pub fn textualize(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Transforms the success value, forwarding error and code unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_rail::{coded_err, ok, Optional};
    ///
    /// assert_eq!(ok(21).map(|v| v * 2).unwrap(), 42);
    ///
    /// let failed: Optional<i32> = coded_err(7, "bad input");
    /// let mapped = failed.map(|v| v.to_string());
    /// assert_eq!(mapped.error_code(), 7);
    /// ```
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.is_error() {
            return Optional::from_parts(U::default(), self.error, self.error_code);
        }
        Optional::from_parts(f(self.value), None, 0)
    }

    /// Chains a fallible step on the success value, forwarding errors unchanged.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        U: Default,
        F: FnOnce(T) -> Optional<U>,
    {
        if self.is_error() {
            return Optional::from_parts(U::default(), self.error, self.error_code);
        }
        f(self.value)
    }

    /// Returns the error message, or `error code N` for a code-only error.
    pub(crate) fn error_message(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => format!("error code {}", self.error_code),
        }
    }
}

impl<T: Default> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::from_parts(T::default(), None, 0)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error() {
            return f.write_str(&self.error_message());
        }
        fmt::Display::fmt(&self.value, f)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, error: &str) -> ! {
    panic!("{}: {}", msg, error)
}
