//! Free constructors for [`Optional`].
//!
//! The error constructors run through the process-wide
//! [`HookRegistry::global`]. Use the methods on a [`HookRegistry`] to build
//! containers against an injected registry instead.
//!
//! # Examples
//!
//! ```
//! use optional_rail::{cast, coded_err, err, none, ok, Optional, Void};
//!
//! fn parse_port(raw: &str) -> Optional<u16> {
//!     match raw.parse() {
//!         Ok(port) => ok(port),
//!         Err(_) => coded_err(22, format!("invalid port `{}`", raw)),
//!     }
//! }
//!
//! fn check(raw: &str) -> Optional<Void> {
//!     let port = parse_port(raw);
//!     if port.is_error() {
//!         return cast(port);
//!     }
//!     none()
//! }
//!
//! assert!(!check("8080").is_error());
//! assert_eq!(check("http").error_code(), 22);
//! assert!(err::<u16>("boom").is_error());
//! ```

use crate::hooks::HookRegistry;
use crate::types::{ErrorObject, ErrorValue, Optional};

/// Wraps a success value.
#[inline]
pub fn ok<T>(value: T) -> Optional<T> {
    Optional::from_parts(value, None, 0)
}

/// Builds an uncoded error container. Same as `coded_err(0, payload)`.
///
/// # Panics
///
/// See [`coded_err`].
#[inline]
#[track_caller]
pub fn err<T: Default>(payload: impl Into<ErrorValue>) -> Optional<T> {
    HookRegistry::global().err(payload)
}

/// Builds a coded error container through the global hooks.
///
/// # Panics
///
/// Panics when the (possibly rewritten) code is [`ESCALATE`](crate::ESCALATE),
/// or when the payload is neither text nor an error and the unknown-type hook
/// does not resolve it.
#[inline]
#[track_caller]
pub fn coded_err<T: Default>(code: u32, payload: impl Into<ErrorValue>) -> Optional<T> {
    HookRegistry::global().coded_err(code, payload)
}

/// Forwards `source` as an `Optional<T>`.
///
/// Errors keep their object and code. A success value must already be a `T`.
///
/// # Panics
///
/// When a successful source holds a value of a type other than `T`.
#[inline]
#[track_caller]
pub fn cast<T, U>(source: Optional<U>) -> Optional<T>
where
    T: Default + 'static,
    U: 'static,
{
    HookRegistry::global().cast(source)
}

/// Bridges a `(value, error)` pair into a container.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use optional_rail::{from_pair, ErrorObject, MessageError};
///
/// let error: ErrorObject = Arc::new(MessageError::new("short read"));
/// let opt = from_pair(vec![1_u8, 2], Some(error));
/// assert!(opt.is_error());
/// assert_eq!(opt.value(), &vec![1, 2]);
/// ```
#[inline]
#[track_caller]
pub fn from_pair<T: Default>(value: T, error: Option<ErrorObject>) -> Optional<T> {
    HookRegistry::global().from_pair(value, error)
}

/// Returns the empty container: no value asserted, no error.
#[inline]
pub fn none<T: Default>() -> Optional<T> {
    Optional::default()
}
