use core::any::{type_name, Any};
use core::fmt::Display;

use super::HookRegistry;
use crate::types::{ErrorObject, ErrorValue, Optional, ESCALATE};

impl HookRegistry {
    /// Builds an uncoded error container. Same as `coded_err(0, payload)`.
    #[inline]
    #[track_caller]
    pub fn err<T: Default>(&self, payload: impl Into<ErrorValue>) -> Optional<T> {
        self.coded_err(0, payload)
    }

    /// Builds a coded error container, running the installed hooks.
    ///
    /// 1. The error hook, if any, rewrites `(code, payload)`.
    /// 2. `(0, Absent)` means the error was handled: the empty container is
    ///    returned.
    /// 3. [`ESCALATE`] panics with the payload as message.
    /// 4. Text and structured payloads are stored with the code. Any other
    ///    shape goes to the unknown-type hook, and panics if that hook is
    ///    missing or answers with `ESCALATE`.
    ///
    /// # Panics
    ///
    /// On escalation and on unresolved unknown payload shapes.
    #[track_caller]
    pub fn coded_err<T: Default>(&self, code: u32, payload: impl Into<ErrorValue>) -> Optional<T> {
        let (code, payload) = match self.error_hook() {
            Some(hook) => hook(code, payload.into()),
            None => (code, payload.into()),
        };

        if code == 0 && payload.is_absent() {
            log_event!(trace, "error handled by hook");
            return Optional::default();
        }
        if code == ESCALATE {
            escalate(&payload);
        }

        match payload.into_error_object() {
            Ok(error) => Optional::from_parts(T::default(), Some(error), code),
            Err(unknown) => self.resolve_unknown(unknown),
        }
    }

    /// Re-types `source` as `Optional<T>`.
    ///
    /// An erroneous source has its error and code copied verbatim, without
    /// consulting the hooks. A successful source must hold a value whose type
    /// is exactly `T`; anything else is a programming error and is escalated
    /// through [`coded_err`](Self::coded_err).
    ///
    /// # Panics
    ///
    /// When the source value is not a `T`, unless the error hook rewrites the
    /// escalation.
    #[track_caller]
    pub fn cast<T, U>(&self, source: Optional<U>) -> Optional<T>
    where
        T: Default + 'static,
        U: 'static,
    {
        if source.is_error() {
            return Optional::from_parts(T::default(), source.error, source.error_code);
        }

        let mut slot = Some(source.value);
        match (&mut slot as &mut dyn Any).downcast_mut::<Option<T>>().and_then(Option::take) {
            Some(value) => Optional::from_parts(value, None, 0),
            None => self.coded_err(
                ESCALATE,
                format!(
                    "cast from `{}` to `{}` failed: types are not compatible",
                    type_name::<U>(),
                    type_name::<T>()
                ),
            ),
        }
    }

    /// Builds a container from a `(value, error)` pair.
    ///
    /// With an error, the result is `err(error)` carrying `value` alongside,
    /// so a partially valid value survives. Without one it is `ok(value)`.
    #[track_caller]
    pub fn from_pair<T: Default>(&self, value: T, error: Option<ErrorObject>) -> Optional<T> {
        match error {
            Some(error) => {
                let mut opt = self.err::<T>(error);
                opt.value = value;
                opt
            },
            None => Optional::from_parts(value, None, 0),
        }
    }

    #[track_caller]
    fn resolve_unknown<T: Default>(&self, payload: ErrorValue) -> Optional<T> {
        let type_name = match &payload {
            ErrorValue::Unknown { type_name, .. } => *type_name,
            _ => "<absent>",
        };

        if let Some(hook) = self.unknown_hook() {
            let (code, error) = hook(ESCALATE, payload);
            if code != ESCALATE {
                log_event!(warn, code, type_name, "unknown error payload resolved by hook");
                return Optional::from_parts(T::default(), error, code);
            }
        }

        log_event!(error, type_name, "unknown error payload shape");
        fault(format_args!("coded_err called with unknown error type `{}`", type_name))
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn escalate(payload: &ErrorValue) -> ! {
    log_event!(error, code = ESCALATE, error = %payload, "escalating error");
    fault(format_args!("escalated error (code {}): {}", ESCALATE, payload))
}

#[cold]
#[inline(never)]
#[track_caller]
fn fault(reason: impl Display) -> ! {
    panic!("{}", reason)
}
