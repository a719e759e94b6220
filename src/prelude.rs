//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use optional_rail::prelude::*;
//!
//! fn first_word(text: &str) -> Optional<String> {
//!     match text.split_whitespace().next() {
//!         Some(word) => ok(word.to_string()),
//!         None => coded_err(1, "no words"),
//!     }
//! }
//!
//! fn shout(text: &str) -> Optional<String> {
//!     let word = try_opt!(first_word(text));
//!     ok(word.to_uppercase())
//! }
//!
//! assert_eq!(shout("hello world").unwrap(), "HELLO");
//! assert_eq!(shout("   ").error_code(), 1);
//! ```

// Macros
pub use crate::{bail_opt, try_opt};

// Constructors
pub use crate::constructors::{cast, coded_err, err, from_pair, none, ok};

// Core types
pub use crate::factory::Opt;
pub use crate::types::{CodedError, ErrorObject, ErrorValue, Optional, Void, ESCALATE};
