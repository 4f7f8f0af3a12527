//! Hooks around list mutation.
//!
//! Every structural change to a [`HookedList`](crate::HookedList) is one of
//! three elementary steps (add, remove, replace), and each step has a pre- and
//! a post- hook slot.
//!
//! # Design Principles
//!
//! - One callback per slot, fixed when the list is constructed
//! - Guards (`pre-*`) may veto the single step they were invoked for
//! - Observers (`post-*`) run strictly after storage reflects the step
//! - Any other hook failure propagates out of the operation unchanged
//!
//! # Architecture
//!
//! - **Events** ([`events`]): `HookEvent` slot names, `StepKind`, `Notification`
//! - **API** ([`api`]): `Hooks` registry, `Verdict`, callback shapes
//!
//! # Example
//!
//! ```
//! use hookedup_list::{HookedList, Hooks, Verdict};
//!
//! let hooks = Hooks::new()
//!     .pre_remove(|_: &mut HookedList<&str>, value: &&str| Ok(Verdict::cancel_if(*value == "root")))
//!     .post_remove(|list: &mut HookedList<&str>, value: &&str| {
//!         tracing::info!(removed = *value, remaining = list.len(), "entry removed");
//!         Ok(())
//!     });
//!
//! let mut list = HookedList::with_items(["root", "tmp"], hooks).unwrap();
//! list.clear().unwrap();
//! assert_eq!(list, ["root"]);
//! ```

pub mod api;
pub mod events;

pub use api::{
    ElementGuard, ElementObserver, GuardResult, HookFn, HookRegistrationError, Hooks,
    ObserverResult, ReplaceGuard, ReplaceObserver, Verdict,
};
pub use events::{HookEvent, Notification, StepKind};
