//! Error-normalization hooks.
//!
//! A [`HookRegistry`] holds two optional function slots:
//!
//! - the **error hook** sees every `(code, payload)` handed to
//!   [`coded_err`](crate::coded_err) and returns a possibly rewritten pair.
//!   Returning `(0, ErrorValue::Absent)` swallows the error, returning
//!   [`ESCALATE`](crate::ESCALATE) forces a panic.
//! - the **unknown-type hook** is consulted only for payloads that are neither
//!   text nor a structured error. It receives `ESCALATE` as the code and must
//!   either return a usable `(code, error)` pair or `ESCALATE` again.
//!
//! Installing a hook replaces the previous one. Readers clone the hook out of
//! its slot before calling it, so every call observes either the old or the
//! new hook in full.
//!
//! The free constructors use the process-wide [`HookRegistry::global`]
//! registry; the free setters in this module configure it. Tests and
//! embedded components can build their own registry instead.
//!
//! # Examples
//!
//! ```
//! use optional_rail::{ErrorValue, HookRegistry, Optional};
//!
//! let registry = HookRegistry::new().with_error_hook(|code, payload| match code {
//!     404 => (0, ErrorValue::Absent),
//!     _ => (code, payload),
//! });
//!
//! let swallowed: Optional<u32> = registry.coded_err(404, "not found");
//! assert!(!swallowed.is_error());
//!
//! let kept: Optional<u32> = registry.coded_err(500, "internal");
//! assert_eq!(kept.error_code(), 500);
//! ```

use core::fmt;
use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};

use crate::types::{ErrorObject, ErrorValue};

mod dispatch;

/// Hook invoked by every coded-error construction.
pub type ErrorHook = Arc<dyn Fn(u32, ErrorValue) -> (u32, ErrorValue) + Send + Sync + 'static>;

/// Hook invoked for error payloads of unrecognized shape.
pub type UnknownHook =
    Arc<dyn Fn(u32, ErrorValue) -> (u32, Option<ErrorObject>) + Send + Sync + 'static>;

static GLOBAL: HookRegistry = HookRegistry::new();

/// Set of error-normalization hooks consulted by the error constructors.
pub struct HookRegistry {
    error_hook: RwLock<Option<ErrorHook>>,
    unknown_hook: RwLock<Option<UnknownHook>>,
}

impl HookRegistry {
    /// Creates a registry with no hooks installed.
    #[inline]
    pub const fn new() -> Self {
        Self { error_hook: const_rwlock(None), unknown_hook: const_rwlock(None) }
    }

    /// Returns the process-wide registry used by the free constructors.
    #[inline]
    pub fn global() -> &'static HookRegistry {
        &GLOBAL
    }

    /// Installs the error hook while building a registry.
    #[must_use]
    pub fn with_error_hook<F>(self, hook: F) -> Self
    where
        F: Fn(u32, ErrorValue) -> (u32, ErrorValue) + Send + Sync + 'static,
    {
        self.set_error_hook(hook);
        self
    }

    /// Installs the unknown-type hook while building a registry.
    #[must_use]
    pub fn with_unknown_hook<F>(self, hook: F) -> Self
    where
        F: Fn(u32, ErrorValue) -> (u32, Option<ErrorObject>) + Send + Sync + 'static,
    {
        self.set_unknown_hook(hook);
        self
    }

    /// Replaces the error hook, returning the previous one.
    pub fn set_error_hook<F>(&self, hook: F) -> Option<ErrorHook>
    where
        F: Fn(u32, ErrorValue) -> (u32, ErrorValue) + Send + Sync + 'static,
    {
        self.replace_error_hook(Some(Arc::new(hook)))
    }

    /// Replaces the unknown-type hook, returning the previous one.
    pub fn set_unknown_hook<F>(&self, hook: F) -> Option<UnknownHook>
    where
        F: Fn(u32, ErrorValue) -> (u32, Option<ErrorObject>) + Send + Sync + 'static,
    {
        self.replace_unknown_hook(Some(Arc::new(hook)))
    }

    /// Puts `hook` into the error slot as-is. `None` empties the slot.
    ///
    /// Useful for restoring a hook previously returned by a setter.
    pub fn replace_error_hook(&self, hook: Option<ErrorHook>) -> Option<ErrorHook> {
        let mut slot = self.error_hook.write();
        log_event!(
            debug,
            installed = hook.is_some(),
            replaced = slot.is_some(),
            "error hook updated"
        );
        core::mem::replace(&mut *slot, hook)
    }

    /// Puts `hook` into the unknown-type slot as-is. `None` empties the slot.
    pub fn replace_unknown_hook(&self, hook: Option<UnknownHook>) -> Option<UnknownHook> {
        let mut slot = self.unknown_hook.write();
        log_event!(
            debug,
            installed = hook.is_some(),
            replaced = slot.is_some(),
            "unknown-type hook updated"
        );
        core::mem::replace(&mut *slot, hook)
    }

    /// Removes the error hook, returning it.
    #[inline]
    pub fn clear_error_hook(&self) -> Option<ErrorHook> {
        self.replace_error_hook(None)
    }

    /// Removes the unknown-type hook, returning it.
    #[inline]
    pub fn clear_unknown_hook(&self) -> Option<UnknownHook> {
        self.replace_unknown_hook(None)
    }

    /// Returns `true` if an error hook is installed.
    #[inline]
    pub fn has_error_hook(&self) -> bool {
        self.error_hook.read().is_some()
    }

    /// Returns `true` if an unknown-type hook is installed.
    #[inline]
    pub fn has_unknown_hook(&self) -> bool {
        self.unknown_hook.read().is_some()
    }

    #[inline]
    pub(crate) fn error_hook(&self) -> Option<ErrorHook> {
        self.error_hook.read().clone()
    }

    #[inline]
    pub(crate) fn unknown_hook(&self) -> Option<UnknownHook> {
        self.unknown_hook.read().clone()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("error_hook", &self.has_error_hook())
            .field("unknown_hook", &self.has_unknown_hook())
            .finish()
    }
}

/// Replaces the process-wide error hook, returning the previous one.
///
/// Meant to be called once during start-up, before containers are built
/// concurrently.
pub fn set_error_hook<F>(hook: F) -> Option<ErrorHook>
where
    F: Fn(u32, ErrorValue) -> (u32, ErrorValue) + Send + Sync + 'static,
{
    GLOBAL.set_error_hook(hook)
}

/// Replaces the process-wide unknown-type hook, returning the previous one.
pub fn set_unknown_hook<F>(hook: F) -> Option<UnknownHook>
where
    F: Fn(u32, ErrorValue) -> (u32, Option<ErrorObject>) + Send + Sync + 'static,
{
    GLOBAL.set_unknown_hook(hook)
}

/// Removes the process-wide error hook.
pub fn clear_error_hook() -> Option<ErrorHook> {
    GLOBAL.clear_error_hook()
}

/// Removes the process-wide unknown-type hook.
pub fn clear_unknown_hook() -> Option<UnknownHook> {
    GLOBAL.clear_unknown_hook()
}
