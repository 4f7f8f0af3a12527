//! Development tools for observing hook traffic.
//!
//! [`StepRecorder`] captures every hook invocation a list makes, in order, as
//! [`Notification`]s. It is meant for debugging and for tests that assert on
//! how an operation was decomposed.
//!
//! # Example
//!
//! ```
//! use hookedup_list::dev::StepRecorder;
//! use hookedup_list::hooks::Notification;
//! use hookedup_list::HookedList;
//!
//! let recorder = StepRecorder::new();
//! let mut list = HookedList::with_hooks(recorder.hooks());
//! list.append(1).unwrap();
//! list.set(0, 2).unwrap();
//!
//! assert_eq!(
//!     recorder.take(),
//!     vec![
//!         Notification::PreAdd(1),
//!         Notification::PostAdd(1),
//!         Notification::PreReplace { old: 1, new: 2 },
//!         Notification::PostReplace { old: 1, new: 2 },
//!     ]
//! );
//! ```
//!
//! # Wrapping existing hooks
//!
//! [`StepRecorder::observe`] layers recording over a hook set you already
//! have. Pre-notifications are recorded before the wrapped guard decides, so
//! a vetoed step shows up as a `Pre*` entry with no matching `Post*` entry.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::hooks::{HookEvent, Hooks, Notification, Verdict};
use crate::list::HookedList;

/// Records hook notifications in invocation order.
///
/// Clones share the same log.
pub struct StepRecorder<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> Clone for StepRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<T> Default for StepRecorder<T> {
    fn default() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> StepRecorder<T> {
    /// Creates a recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    /// Drains and returns the log.
    #[must_use]
    pub fn take(&self) -> Vec<Notification<T>> {
        core::mem::take(&mut *self.log.lock())
    }

    /// Returns the events recorded so far, without values.
    #[must_use]
    pub fn events(&self) -> Vec<HookEvent> {
        self.log.lock().iter().map(Notification::event).collect()
    }

    /// Counts the recorded notifications for `event`.
    #[must_use]
    pub fn count(&self, event: HookEvent) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|notification| notification.event() == event)
            .count()
    }

    fn push(&self, notification: Notification<T>) {
        self.log.lock().push(notification);
    }
}

impl<T> StepRecorder<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Returns a hook set that records every notification and never vetoes.
    #[must_use]
    pub fn hooks(&self) -> Hooks<T> {
        self.observe(Hooks::new())
    }

    /// Wraps `inner`, recording each notification and then delegating to the
    /// wrapped callback when there is one.
    #[must_use]
    pub fn observe(&self, inner: Hooks<T>) -> Hooks<T> {
        let pre_add = (self.clone(), inner.clone());
        let post_add = (self.clone(), inner.clone());
        let pre_remove = (self.clone(), inner.clone());
        let post_remove = (self.clone(), inner.clone());
        let pre_replace = (self.clone(), inner.clone());
        let post_replace = (self.clone(), inner);

        Hooks::new()
            .pre_add(move |list: &mut HookedList<T>, value: &T| {
                let (recorder, inner) = &pre_add;
                recorder.push(Notification::PreAdd(value.clone()));
                match inner.element_guard(HookEvent::PreAdd) {
                    Some(guard) => guard(list, value),
                    None => Ok(Verdict::Proceed),
                }
            })
            .post_add(move |list: &mut HookedList<T>, value: &T| {
                let (recorder, inner) = &post_add;
                recorder.push(Notification::PostAdd(value.clone()));
                match inner.element_observer(HookEvent::PostAdd) {
                    Some(observer) => observer(list, value),
                    None => Ok(()),
                }
            })
            .pre_remove(move |list: &mut HookedList<T>, value: &T| {
                let (recorder, inner) = &pre_remove;
                recorder.push(Notification::PreRemove(value.clone()));
                match inner.element_guard(HookEvent::PreRemove) {
                    Some(guard) => guard(list, value),
                    None => Ok(Verdict::Proceed),
                }
            })
            .post_remove(move |list: &mut HookedList<T>, value: &T| {
                let (recorder, inner) = &post_remove;
                recorder.push(Notification::PostRemove(value.clone()));
                match inner.element_observer(HookEvent::PostRemove) {
                    Some(observer) => observer(list, value),
                    None => Ok(()),
                }
            })
            .pre_replace(move |list: &mut HookedList<T>, old: &T, new: &T| {
                let (recorder, inner) = &pre_replace;
                recorder.push(Notification::PreReplace {
                    old: old.clone(),
                    new: new.clone(),
                });
                match inner.replace_guard() {
                    Some(guard) => guard(list, old, new),
                    None => Ok(Verdict::Proceed),
                }
            })
            .post_replace(move |list: &mut HookedList<T>, old: &T, new: &T| {
                let (recorder, inner) = &post_replace;
                recorder.push(Notification::PostReplace {
                    old: old.clone(),
                    new: new.clone(),
                });
                match inner.replace_observer() {
                    Some(observer) => observer(list, old, new),
                    None => Ok(()),
                }
            })
    }
}
