//! Error types for hooked list operations.

use core::fmt;
use std::error::Error as StdError;

/// Boxed error type carried by [`HookError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias for hooked list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors produced by [`HookedList`](crate::HookedList) operations.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Indexed access or mutation outside the current bounds.
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index as supplied by the caller (possibly negative).
        index: isize,
        /// The live length at the time of the check.
        len: usize,
    },

    /// Value-based removal or lookup found no equal element.
    #[error("value not found in list")]
    ValueNotFound,

    /// An extended slice was assigned a sequence of a different size.
    #[error("attempt to assign sequence of size {actual} to extended slice of size {expected}")]
    ExtendedSliceMismatch {
        /// Number of positions addressed by the slice.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A slice was constructed with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    /// A hook callback failed. The original error is carried unchanged.
    #[error("{0}")]
    Hook(HookError),
}

impl ListError {
    /// Returns the hook failure, if this error came from a callback.
    #[must_use]
    pub fn hook_error(&self) -> Option<&HookError> {
        match self {
            ListError::Hook(err) => Some(err),
            _ => None,
        }
    }

    /// Consumes the error and returns the hook failure, if any.
    pub fn into_hook_error(self) -> Result<HookError, Self> {
        match self {
            ListError::Hook(err) => Ok(err),
            other => Err(other),
        }
    }
}

impl From<HookError> for ListError {
    fn from(err: HookError) -> Self {
        ListError::Hook(err)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookError
// ─────────────────────────────────────────────────────────────────────────────

/// Failure raised by a hook callback.
///
/// `HookError` wraps any `Error + Send + Sync` value so that callbacks can use
/// `?` freely, including on nested [`ListError`]s from operations on other
/// lists. It deliberately does not implement [`std::error::Error`] itself so
/// that the blanket `From` conversion stays coherent; use
/// [`downcast_ref`](Self::downcast_ref) or [`into_inner`](Self::into_inner) to
/// get the original error back.
pub struct HookError {
    inner: BoxError,
}

impl HookError {
    /// Wraps an arbitrary error.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self { inner: err.into() }
    }

    /// Creates a hook error from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self {
            inner: message.to_string().into(),
        }
    }

    /// Attempts to borrow the original error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.inner
    }

    /// Borrows the wrapped error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl<E> From<E> for HookError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self {
            inner: Box::new(err),
        }
    }
}

impl fmt::Debug for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
