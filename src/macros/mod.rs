//! Propagation macros.
//!
//! - [`macro@crate::try_opt`] - unwraps a successful container or returns its
//!   error from the enclosing function, re-typed with [`cast`](crate::cast).
//! - [`macro@crate::bail_opt`] - returns a formatted coded error from the
//!   enclosing function.
//!
//! # Examples
//!
//! ```
//! use optional_rail::{bail_opt, ok, try_opt, Optional};
//!
//! fn read_len(raw: &str) -> Optional<usize> {
//!     if raw.is_empty() {
//!         bail_opt!(11, "empty input");
//!     }
//!     ok(raw.len())
//! }
//!
//! fn describe(raw: &str) -> Optional<String> {
//!     let len = try_opt!(read_len(raw));
//!     ok(format!("{} bytes", len))
//! }
//!
//! assert_eq!(describe("abc").unwrap(), "3 bytes");
//! assert_eq!(describe("").error_code(), 11);
//! ```

/// Evaluates to the value of a successful [`Optional`](crate::Optional), or
/// returns its error from the enclosing function.
///
/// The enclosing function must return `Optional<R>` for some
/// `R: Default + 'static`.
/// Error and code are forwarded unchanged.
///
/// # Examples
///
/// ```
/// use optional_rail::{err, ok, try_opt, Optional};
///
/// fn double(input: Optional<i32>) -> Optional<i64> {
///     let v = try_opt!(input);
///     ok(i64::from(v) * 2)
/// }
///
/// assert_eq!(double(ok(4)).unwrap(), 8);
/// assert!(double(err("bad")).is_error());
/// ```
#[macro_export]
macro_rules! try_opt {
    ($expr:expr $(,)?) => {
        match $expr {
            opt if opt.is_error() => return $crate::cast(opt),
            opt => opt.into_value(),
        }
    };
}

/// Returns a coded error built from a format string.
///
/// `bail_opt!(code, "fmt", args..)` expands to
/// `return coded_err(code, format!("fmt", args..))`.
#[macro_export]
macro_rules! bail_opt {
    ($code:expr, $($arg:tt)+) => {
        return $crate::coded_err($code, ::std::format!($($arg)+))
    };
}
