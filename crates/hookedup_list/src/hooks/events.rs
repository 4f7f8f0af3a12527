//! Hook event names, step kinds and recorded notifications.
//!
//! Every elementary step is one of three [`StepKind`]s, and each kind has a
//! pre- and a post- [`HookEvent`]. Observers such as
//! [`StepRecorder`](crate::dev::StepRecorder) describe what they saw with a
//! [`Notification`].
//!
//! # Example
//!
//! ```
//! use hookedup_list::hooks::{HookEvent, StepKind};
//!
//! let event: HookEvent = "pre-add".parse().unwrap();
//! assert_eq!(event, HookEvent::PreAdd);
//! assert_eq!(event.kind(), StepKind::Add);
//! assert!(event.is_pre());
//! ```

use core::fmt;
use core::str::FromStr;

use super::api::HookRegistrationError;

// ─────────────────────────────────────────────────────────────────────────────
// StepKind
// ─────────────────────────────────────────────────────────────────────────────

/// The three kinds of elementary step a compound operation decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// A value enters the list.
    Add,
    /// A value leaves the list.
    Remove,
    /// A value at a position is overwritten by another.
    Replace,
}

impl StepKind {
    /// Returns the lowercase name of the step kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Add => "add",
            StepKind::Remove => "remove",
            StepKind::Replace => "replace",
        }
    }

    /// Returns the event fired before a step of this kind.
    #[must_use]
    pub fn pre_event(self) -> HookEvent {
        match self {
            StepKind::Add => HookEvent::PreAdd,
            StepKind::Remove => HookEvent::PreRemove,
            StepKind::Replace => HookEvent::PreReplace,
        }
    }

    /// Returns the event fired after a step of this kind.
    #[must_use]
    pub fn post_event(self) -> HookEvent {
        match self {
            StepKind::Add => HookEvent::PostAdd,
            StepKind::Remove => HookEvent::PostRemove,
            StepKind::Replace => HookEvent::PostReplace,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Names of the six hook slots.
///
/// The canonical spelling is hyphenated (`pre-add`); parsing also accepts the
/// underscore form (`pre_add`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Before a value is added. May cancel.
    PreAdd,
    /// After a value was added.
    PostAdd,
    /// Before a value is removed. May cancel.
    PreRemove,
    /// After a value was removed.
    PostRemove,
    /// Before a value is replaced. May cancel.
    PreReplace,
    /// After a value was replaced.
    PostReplace,
}

impl HookEvent {
    /// All events, in slot order.
    pub const ALL: [HookEvent; 6] = [
        HookEvent::PreAdd,
        HookEvent::PostAdd,
        HookEvent::PreRemove,
        HookEvent::PostRemove,
        HookEvent::PreReplace,
        HookEvent::PostReplace,
    ];

    /// Returns the canonical name of the event.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HookEvent::PreAdd => "pre-add",
            HookEvent::PostAdd => "post-add",
            HookEvent::PreRemove => "pre-remove",
            HookEvent::PostRemove => "post-remove",
            HookEvent::PreReplace => "pre-replace",
            HookEvent::PostReplace => "post-replace",
        }
    }

    /// Returns `true` for the three events that may cancel a step.
    #[must_use]
    pub fn is_pre(self) -> bool {
        matches!(
            self,
            HookEvent::PreAdd | HookEvent::PreRemove | HookEvent::PreReplace
        )
    }

    /// Returns the step kind this event belongs to.
    #[must_use]
    pub fn kind(self) -> StepKind {
        match self {
            HookEvent::PreAdd | HookEvent::PostAdd => StepKind::Add,
            HookEvent::PreRemove | HookEvent::PostRemove => StepKind::Remove,
            HookEvent::PreReplace | HookEvent::PostReplace => StepKind::Replace,
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookEvent {
    type Err = HookRegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        HookEvent::ALL
            .into_iter()
            .find(|event| event.name() == normalized)
            .ok_or_else(|| HookRegistrationError::UnknownEvent {
                name: s.to_owned(),
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notification
// ─────────────────────────────────────────────────────────────────────────────

/// A single hook invocation as seen by an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T> {
    /// `pre-add` was invoked with the candidate value.
    PreAdd(T),
    /// `post-add` was invoked with the added value.
    PostAdd(T),
    /// `pre-remove` was invoked with the value about to leave.
    PreRemove(T),
    /// `post-remove` was invoked with the removed value.
    PostRemove(T),
    /// `pre-replace` was invoked.
    PreReplace {
        /// The value currently at the position.
        old: T,
        /// The incoming value.
        new: T,
    },
    /// `post-replace` was invoked.
    PostReplace {
        /// The value that was overwritten.
        old: T,
        /// The value now at the position.
        new: T,
    },
}

impl<T> Notification<T> {
    /// Returns the event this notification was recorded for.
    #[must_use]
    pub fn event(&self) -> HookEvent {
        match self {
            Notification::PreAdd(_) => HookEvent::PreAdd,
            Notification::PostAdd(_) => HookEvent::PostAdd,
            Notification::PreRemove(_) => HookEvent::PreRemove,
            Notification::PostRemove(_) => HookEvent::PostRemove,
            Notification::PreReplace { .. } => HookEvent::PreReplace,
            Notification::PostReplace { .. } => HookEvent::PostReplace,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Notification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::PreAdd(value)
            | Notification::PostAdd(value)
            | Notification::PreRemove(value)
            | Notification::PostRemove(value) => write!(f, "{}({:?})", self.event(), value),
            Notification::PreReplace { old, new } | Notification::PostReplace { old, new } => {
                write!(f, "{}({:?} -> {:?})", self.event(), old, new)
            }
        }
    }
}
