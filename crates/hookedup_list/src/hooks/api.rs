//! Hook registration and invocation for hooked lists.
//!
//! [`Hooks`] holds up to six callbacks, one per [`HookEvent`]. A list receives
//! its hooks at construction time and never changes them afterwards.
//!
//! # Guards vs Observers
//!
//! - **Guards** (`pre-*` slots): run before a step mutates storage and return a
//!   [`Verdict`]. [`Verdict::Cancel`] skips that one step.
//! - **Observers** (`post-*` slots): run after the step was applied. They
//!   cannot undo it.
//!
//! Both may fail with a [`HookError`], which propagates out of the list
//! operation unchanged.
//!
//! # Typed registration
//!
//! ```
//! use hookedup_list::{HookedList, Hooks, Verdict};
//!
//! let hooks = Hooks::new()
//!     .pre_add(|list: &mut HookedList<i32>, _value: &i32| Ok(Verdict::proceed_if(list.len() < 2)));
//!
//! let mut list = HookedList::with_hooks(hooks);
//! list.extend([1, 2, 3]).unwrap();
//! assert_eq!(list, [1, 2]);
//! ```
//!
//! # Name-based registration
//!
//! ```
//! use hookedup_list::hooks::{HookFn, HookRegistrationError, Hooks};
//! use hookedup_list::Verdict;
//!
//! let hooks = Hooks::<u8>::new()
//!     .register("pre_remove", HookFn::element_guard(|_, _| Ok(Verdict::Cancel)))
//!     .unwrap();
//!
//! let err = hooks
//!     .clone()
//!     .register("pre-move", HookFn::element_guard(|_, _| Ok(Verdict::Proceed)))
//!     .unwrap_err();
//! assert!(matches!(err, HookRegistrationError::UnknownEvent { .. }));
//! ```

use core::fmt;
use std::sync::Arc;

use super::events::HookEvent;
use crate::error::HookError;
use crate::list::HookedList;

// ─────────────────────────────────────────────────────────────────────────────
// Verdict
// ─────────────────────────────────────────────────────────────────────────────

/// Decision returned by a guard for the step it was invoked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Let the step mutate storage.
    #[default]
    Proceed,
    /// Skip this step only. The rest of the compound operation continues.
    Cancel,
}

impl Verdict {
    /// `Proceed` when `condition` holds, `Cancel` otherwise.
    #[must_use]
    pub fn proceed_if(condition: bool) -> Self {
        if condition {
            Verdict::Proceed
        } else {
            Verdict::Cancel
        }
    }

    /// `Cancel` when `condition` holds, `Proceed` otherwise.
    #[must_use]
    pub fn cancel_if(condition: bool) -> Self {
        Self::proceed_if(!condition)
    }

    /// Returns `true` for [`Verdict::Cancel`].
    #[must_use]
    pub fn is_cancel(self) -> bool {
        self == Verdict::Cancel
    }
}

/// Return type of guard callbacks.
pub type GuardResult = Result<Verdict, HookError>;

/// Return type of observer callbacks.
pub type ObserverResult = Result<(), HookError>;

/// Guard over a single value (`pre-add`, `pre-remove`).
pub type ElementGuard<T> = dyn Fn(&mut HookedList<T>, &T) -> GuardResult + Send + Sync;

/// Observer of a single value (`post-add`, `post-remove`).
pub type ElementObserver<T> = dyn Fn(&mut HookedList<T>, &T) -> ObserverResult + Send + Sync;

/// Guard over an old/new pair (`pre-replace`).
pub type ReplaceGuard<T> = dyn Fn(&mut HookedList<T>, &T, &T) -> GuardResult + Send + Sync;

/// Observer of an old/new pair (`post-replace`).
pub type ReplaceObserver<T> = dyn Fn(&mut HookedList<T>, &T, &T) -> ObserverResult + Send + Sync;

// ─────────────────────────────────────────────────────────────────────────────
// HookFn
// ─────────────────────────────────────────────────────────────────────────────

/// A type-erased callback for name-based registration.
///
/// The variant encodes the callback's shape, which
/// [`Hooks::register`] checks against the target event.
pub enum HookFn<T> {
    /// Shape of `pre-add` and `pre-remove`.
    ElementGuard(Arc<ElementGuard<T>>),
    /// Shape of `post-add` and `post-remove`.
    ElementObserver(Arc<ElementObserver<T>>),
    /// Shape of `pre-replace`.
    ReplaceGuard(Arc<ReplaceGuard<T>>),
    /// Shape of `post-replace`.
    ReplaceObserver(Arc<ReplaceObserver<T>>),
}

impl<T> HookFn<T> {
    /// Wraps a single-value guard.
    pub fn element_guard(
        hook: impl Fn(&mut HookedList<T>, &T) -> GuardResult + Send + Sync + 'static,
    ) -> Self {
        HookFn::ElementGuard(Arc::new(hook))
    }

    /// Wraps a single-value observer.
    pub fn element_observer(
        hook: impl Fn(&mut HookedList<T>, &T) -> ObserverResult + Send + Sync + 'static,
    ) -> Self {
        HookFn::ElementObserver(Arc::new(hook))
    }

    /// Wraps an old/new guard.
    pub fn replace_guard(
        hook: impl Fn(&mut HookedList<T>, &T, &T) -> GuardResult + Send + Sync + 'static,
    ) -> Self {
        HookFn::ReplaceGuard(Arc::new(hook))
    }

    /// Wraps an old/new observer.
    pub fn replace_observer(
        hook: impl Fn(&mut HookedList<T>, &T, &T) -> ObserverResult + Send + Sync + 'static,
    ) -> Self {
        HookFn::ReplaceObserver(Arc::new(hook))
    }

    /// Human-readable name of the callback shape.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            HookFn::ElementGuard(_) => "element guard",
            HookFn::ElementObserver(_) => "element observer",
            HookFn::ReplaceGuard(_) => "replace guard",
            HookFn::ReplaceObserver(_) => "replace observer",
        }
    }
}

impl<T> fmt::Debug for HookFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HookFn").field(&self.shape()).finish()
    }
}

/// Returns the callback shape a slot expects.
fn expected_shape(event: HookEvent) -> &'static str {
    match event {
        HookEvent::PreAdd | HookEvent::PreRemove => "element guard",
        HookEvent::PostAdd | HookEvent::PostRemove => "element observer",
        HookEvent::PreReplace => "replace guard",
        HookEvent::PostReplace => "replace observer",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookRegistrationError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during name-based hook registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookRegistrationError {
    /// The name does not match any of the six hook events.
    #[error("unknown hook event '{name}'")]
    UnknownEvent {
        /// The rejected name.
        name: String,
    },

    /// The callback shape does not fit the event.
    #[error("hook for '{event}' must be a {expected}, got a {found}")]
    SignatureMismatch {
        /// The target event.
        event: HookEvent,
        /// The shape the event requires.
        expected: &'static str,
        /// The shape that was supplied.
        found: &'static str,
    },

    /// A callback is already registered for the event.
    #[error("hook '{event}' is already registered")]
    Duplicate {
        /// The event whose slot is taken.
        event: HookEvent,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Hooks
// ─────────────────────────────────────────────────────────────────────────────

/// The six hook slots of a [`HookedList`].
///
/// Missing slots are no-ops: the step always proceeds. Cloning a `Hooks`
/// shares the callbacks, so several lists can run the same hook set.
pub struct Hooks<T> {
    pre_add: Option<Arc<ElementGuard<T>>>,
    post_add: Option<Arc<ElementObserver<T>>>,
    pre_remove: Option<Arc<ElementGuard<T>>>,
    post_remove: Option<Arc<ElementObserver<T>>>,
    pre_replace: Option<Arc<ReplaceGuard<T>>>,
    post_replace: Option<Arc<ReplaceObserver<T>>>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            pre_add: None,
            post_add: None,
            pre_remove: None,
            post_remove: None,
            pre_replace: None,
            post_replace: None,
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            pre_add: self.pre_add.clone(),
            post_add: self.post_add.clone(),
            pre_remove: self.pre_remove.clone(),
            post_remove: self.post_remove.clone(),
            pre_replace: self.pre_replace.clone(),
            post_replace: self.post_replace.clone(),
        }
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.registered().into_iter().map(HookEvent::name).collect();
        f.debug_struct("Hooks").field("registered", &names).finish()
    }
}

impl<T> Hooks<T> {
    /// Creates an empty hook set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `pre-add` guard.
    #[must_use]
    pub fn pre_add<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T) -> GuardResult + Send + Sync + 'static,
    {
        self.pre_add = Some(Arc::new(hook));
        self
    }

    /// Sets the `post-add` observer.
    #[must_use]
    pub fn post_add<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T) -> ObserverResult + Send + Sync + 'static,
    {
        self.post_add = Some(Arc::new(hook));
        self
    }

    /// Sets the `pre-remove` guard.
    #[must_use]
    pub fn pre_remove<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T) -> GuardResult + Send + Sync + 'static,
    {
        self.pre_remove = Some(Arc::new(hook));
        self
    }

    /// Sets the `post-remove` observer.
    #[must_use]
    pub fn post_remove<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T) -> ObserverResult + Send + Sync + 'static,
    {
        self.post_remove = Some(Arc::new(hook));
        self
    }

    /// Sets the `pre-replace` guard. Receives the old value, then the new one.
    #[must_use]
    pub fn pre_replace<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T, &T) -> GuardResult + Send + Sync + 'static,
    {
        self.pre_replace = Some(Arc::new(hook));
        self
    }

    /// Sets the `post-replace` observer. Receives the old value, then the new one.
    #[must_use]
    pub fn post_replace<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HookedList<T>, &T, &T) -> ObserverResult + Send + Sync + 'static,
    {
        self.post_replace = Some(Arc::new(hook));
        self
    }

    /// Registers a callback by event name.
    ///
    /// Accepts `pre-add`, `post-add`, `pre-remove`, `post-remove`,
    /// `pre-replace` and `post-replace` (or their underscore spellings).
    /// Unlike the typed builder methods, this refuses to overwrite a filled
    /// slot.
    pub fn register(mut self, name: &str, hook: HookFn<T>) -> Result<Self, HookRegistrationError> {
        let event: HookEvent = name.parse()?;

        if self.is_registered(event) {
            return Err(HookRegistrationError::Duplicate { event });
        }

        match (event, hook) {
            (HookEvent::PreAdd, HookFn::ElementGuard(hook)) => self.pre_add = Some(hook),
            (HookEvent::PreRemove, HookFn::ElementGuard(hook)) => self.pre_remove = Some(hook),
            (HookEvent::PostAdd, HookFn::ElementObserver(hook)) => self.post_add = Some(hook),
            (HookEvent::PostRemove, HookFn::ElementObserver(hook)) => {
                self.post_remove = Some(hook);
            }
            (HookEvent::PreReplace, HookFn::ReplaceGuard(hook)) => self.pre_replace = Some(hook),
            (HookEvent::PostReplace, HookFn::ReplaceObserver(hook)) => {
                self.post_replace = Some(hook);
            }
            (event, hook) => {
                return Err(HookRegistrationError::SignatureMismatch {
                    event,
                    expected: expected_shape(event),
                    found: hook.shape(),
                });
            }
        }

        Ok(self)
    }

    /// Registers several callbacks by name, stopping at the first error.
    pub fn register_all<'a>(
        self,
        entries: impl IntoIterator<Item = (&'a str, HookFn<T>)>,
    ) -> Result<Self, HookRegistrationError> {
        entries
            .into_iter()
            .try_fold(self, |hooks, (name, hook)| hooks.register(name, hook))
    }

    /// Checks whether a callback is registered for `event`.
    #[must_use]
    pub fn is_registered(&self, event: HookEvent) -> bool {
        match event {
            HookEvent::PreAdd => self.pre_add.is_some(),
            HookEvent::PostAdd => self.post_add.is_some(),
            HookEvent::PreRemove => self.pre_remove.is_some(),
            HookEvent::PostRemove => self.post_remove.is_some(),
            HookEvent::PreReplace => self.pre_replace.is_some(),
            HookEvent::PostReplace => self.post_replace.is_some(),
        }
    }

    /// Returns the registered events in slot order.
    #[must_use]
    pub fn registered(&self) -> Vec<HookEvent> {
        HookEvent::ALL
            .into_iter()
            .filter(|event| self.is_registered(*event))
            .collect()
    }

    /// Returns `true` when no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered().is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Slot accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn element_guard(&self, event: HookEvent) -> Option<Arc<ElementGuard<T>>> {
        match event {
            HookEvent::PreAdd => self.pre_add.clone(),
            HookEvent::PreRemove => self.pre_remove.clone(),
            _ => None,
        }
    }

    pub(crate) fn element_observer(&self, event: HookEvent) -> Option<Arc<ElementObserver<T>>> {
        match event {
            HookEvent::PostAdd => self.post_add.clone(),
            HookEvent::PostRemove => self.post_remove.clone(),
            _ => None,
        }
    }

    pub(crate) fn replace_guard(&self) -> Option<Arc<ReplaceGuard<T>>> {
        self.pre_replace.clone()
    }

    pub(crate) fn replace_observer(&self) -> Option<Arc<ReplaceObserver<T>>> {
        self.post_replace.clone()
    }
}
