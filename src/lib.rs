//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `optional_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Values, Errors, and Codes
//!
//! ```
//! use optional_rail::{coded_err, ok, Optional};
//!
//! fn lookup(id: u32) -> Optional<&'static str> {
//!     match id {
//!         1 => ok("alice"),
//!         _ => coded_err(404, format!("user {} not found", id)),
//!     }
//! }
//!
//! assert_eq!(lookup(1).unwrap(), "alice");
//!
//! let missing = lookup(7);
//! assert!(missing.is_error());
//! assert_eq!(missing.error_code(), 404);
//! assert_eq!(missing.to_string(), "user 7 not found");
//! ```
//!
//! ## Forwarding Across Types
//!
//! ```
//! use optional_rail::{cast, coded_err, ok, Optional, Void};
//!
//! fn load() -> Optional<Vec<u8>> {
//!     coded_err(5, "storage offline")
//! }
//!
//! fn run() -> Optional<Void> {
//!     let data = load();
//!     if data.is_error() {
//!         return cast(data);
//!     }
//!     ok(())
//! }
//!
//! assert_eq!(run().error_code(), 5);
//! ```
//!
//! ## Normalization Hooks
//!
//! ```
//! use optional_rail::{ErrorValue, HookRegistry, Optional};
//!
//! let registry = HookRegistry::new()
//!     .with_error_hook(|code, payload| (code, ErrorValue::message(format!("svc: {}", payload))));
//!
//! let opt: Optional<i32> = registry.coded_err(9, "timeout");
//! assert_eq!(opt.to_string(), "svc: timeout");
//! ```

macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

/// Free constructors for `Optional`
pub mod constructors;
/// Conversions between `Optional` and `Result`
pub mod convert;
/// Type anchor for early-return sites
pub mod factory;
/// Process-wide and injectable error-normalization hooks
pub mod hooks;
/// Propagation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// `Optional` container, payloads, and constants
pub mod types;

pub use constructors::*;
pub use factory::Opt;
pub use hooks::{
    clear_error_hook, clear_unknown_hook, set_error_hook, set_unknown_hook, ErrorHook,
    HookRegistry, UnknownHook,
};
pub use types::{
    CodedError, ErrorObject, ErrorValue, MessageError, Optional, Void, ESCALATE,
};
