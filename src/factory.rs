//! Type anchor for early-return sites.
//!
//! Functions with a long result type and several error exits can bind
//! [`Opt<T>`] once and skip restating `T`:
//!
//! ```
//! use std::collections::BTreeMap;
//! use optional_rail::{ok, Opt, Optional};
//!
//! fn index(words: &[&str]) -> Optional<BTreeMap<String, Vec<usize>>> {
//!     const O: Opt<BTreeMap<String, Vec<usize>>> = Opt::new();
//!     if words.is_empty() {
//!         return O.none();
//!     }
//!     if words.iter().any(|w| w.is_empty()) {
//!         return O.coded_err(3, "empty word");
//!     }
//!     let mut map = BTreeMap::new();
//!     for (i, w) in words.iter().enumerate() {
//!         map.entry(w.to_string()).or_insert_with(Vec::new).push(i);
//!     }
//!     ok(map)
//! }
//!
//! assert_eq!(index(&["a", ""]).error_code(), 3);
//! ```
//!
//! Success values never need the anchor: [`ok`](crate::ok) infers `T` from
//! its argument.

use core::fmt;
use core::marker::PhantomData;

use crate::constructors;
use crate::types::{ErrorValue, Optional};

/// Zero-size helper fixing `T` for the error and empty constructors.
pub struct Opt<T>(PhantomData<fn() -> T>);

impl<T> Opt<T> {
    /// Creates the anchor.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Default> Opt<T> {
    /// See [`err`](crate::err).
    #[inline]
    #[track_caller]
    pub fn err(self, payload: impl Into<ErrorValue>) -> Optional<T> {
        constructors::err(payload)
    }

    /// See [`coded_err`](crate::coded_err).
    #[inline]
    #[track_caller]
    pub fn coded_err(self, code: u32, payload: impl Into<ErrorValue>) -> Optional<T> {
        constructors::coded_err(code, payload)
    }

    /// See [`none`](crate::none).
    #[inline]
    pub fn none(self) -> Optional<T> {
        constructors::none()
    }
}

impl<T> Clone for Opt<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Opt<T> {}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opt<{}>", core::any::type_name::<T>())
    }
}
