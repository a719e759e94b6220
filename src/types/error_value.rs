//! Error payloads accepted by the error constructors.
//!
//! Constructors such as [`coded_err`](crate::coded_err) take any payload that
//! converts into [`ErrorValue`]. The payload is later classified by shape:
//! text becomes a [`MessageError`], structured errors are kept as-is, and
//! everything else is handed to the unknown-type hook.
//!
//! # Examples
//!
//! ```
//! use optional_rail::ErrorValue;
//!
//! assert!(matches!(ErrorValue::from("disk full"), ErrorValue::Message(_)));
//! assert!(matches!(ErrorValue::from(404_u16), ErrorValue::Unknown { .. }));
//! assert!(ErrorValue::Absent.is_absent());
//! ```

use core::any::Any;
use core::fmt;
use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use super::ErrorObject;

/// Plain text error produced when a constructor receives a message payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError(Cow<'static, str>);

impl MessageError {
    /// Creates a message error from any string-like value.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for MessageError {}

/// An error payload of any shape, as handed to [`coded_err`](crate::coded_err)
/// and to the installed hooks.
pub enum ErrorValue {
    /// No error at all. Together with code `0` this means "handled".
    Absent,
    /// Plain text.
    Message(Cow<'static, str>),
    /// A structured error object.
    Error(ErrorObject),
    /// Any other value. Only the unknown-type hook can make sense of it.
    Unknown {
        /// `core::any::type_name` of the original value.
        type_name: &'static str,
        /// The original value.
        value: Box<dyn Any + Send + Sync>,
    },
}

impl ErrorValue {
    /// Wraps a structured error.
    #[inline]
    pub fn error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Wraps a text message.
    #[inline]
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps a value of an arbitrary type that is neither text nor an error.
    #[inline]
    pub fn unknown<V>(value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        Self::Unknown { type_name: core::any::type_name::<V>(), value: Box::new(value) }
    }

    /// Returns `true` for [`ErrorValue::Absent`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload of an [`ErrorValue::Unknown`] as `V`.
    ///
    /// Returns `None` for other shapes or when the stored value is not a `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        match self {
            Self::Unknown { value, .. } => value.downcast_ref::<V>(),
            _ => None,
        }
    }

    /// Converts text and structured payloads into an [`ErrorObject`].
    ///
    /// `Absent` and `Unknown` payloads have no error object representation
    /// and yield `Err(self)` unchanged.
    pub fn into_error_object(self) -> Result<ErrorObject, Self> {
        match self {
            Self::Message(message) => Ok(Arc::new(MessageError(message))),
            Self::Error(error) => Ok(error),
            other => Err(other),
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<no error>"),
            Self::Message(message) => f.write_str(message),
            Self::Error(error) => fmt::Display::fmt(error, f),
            Self::Unknown { type_name, .. } => write!(f, "<value of type `{}`>", type_name),
        }
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Unknown { type_name, .. } => {
                f.debug_struct("Unknown").field("type_name", type_name).finish_non_exhaustive()
            },
        }
    }
}

impl From<&'static str> for ErrorValue {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for ErrorValue {
    #[inline]
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

impl From<Cow<'static, str>> for ErrorValue {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::Message(message)
    }
}

impl From<ErrorObject> for ErrorValue {
    #[inline]
    fn from(error: ErrorObject) -> Self {
        Self::Error(error)
    }
}

impl From<Box<dyn Error + Send + Sync>> for ErrorValue {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::Error(Arc::from(error))
    }
}

impl From<Option<ErrorObject>> for ErrorValue {
    #[inline]
    fn from(error: Option<ErrorObject>) -> Self {
        error.map_or(Self::Absent, Self::Error)
    }
}

impl From<MessageError> for ErrorValue {
    #[inline]
    fn from(error: MessageError) -> Self {
        Self::error(error)
    }
}

impl From<std::io::Error> for ErrorValue {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::error(error)
    }
}

impl From<core::fmt::Error> for ErrorValue {
    #[inline]
    fn from(error: core::fmt::Error) -> Self {
        Self::error(error)
    }
}

macro_rules! impl_unknown_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ErrorValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::unknown(value)
                }
            }
        )*
    };
}

impl_unknown_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
