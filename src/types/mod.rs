//! Container and payload types.
//!
//! # Examples
//!
//! ```
//! use optional_rail::{coded_err, ok, Optional};
//!
//! let found: Optional<u32> = ok(7);
//! assert!(!found.is_error());
//!
//! let missing: Optional<u32> = coded_err(404, "user not found");
//! assert_eq!(missing.error_code(), 404);
//! assert_eq!(missing.to_string(), "user not found");
//! ```
use std::error::Error;
use std::sync::Arc;

pub mod coded_error;
pub mod error_value;
pub mod optional;

pub use coded_error::*;
pub use error_value::*;
pub use optional::*;

/// Shared, type-erased error object stored inside an [`Optional`].
pub type ErrorObject = Arc<dyn Error + Send + Sync + 'static>;

/// Result type of operations that only report failure.
///
/// `Optional<Void>` carries an error or nothing at all.
pub type Void = ();

/// Reserved error code that turns construction of an error into a panic.
///
/// A container holding this code is never returned to the caller.
pub const ESCALATE: u32 = u32::MAX;
