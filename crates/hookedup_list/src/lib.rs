//! Ordered sequences with interceptable mutation.
//!
//! `hookedup_list` provides [`HookedList`], a sequence container whose every
//! structural change (adding, removing or replacing an element) runs through
//! user-supplied [`Hooks`] before and after it takes effect. A pre-hook may
//! veto the single elementary change it was asked about; the rest of a larger
//! operation still proceeds.
//!
//! # Core Concepts
//!
//! - [`HookedList`] - The container and its operation decomposition
//! - [`Hooks`] - Six callback slots fixed at construction
//! - [`Verdict`] - `Proceed` or `Cancel`, returned by pre-hooks
//! - [`SliceSpec`] - Start/stop/step addressing for slice reads and writes
//! - [`StepRecorder`](dev::StepRecorder) - Records hook traffic for debugging
//!
//! # Example
//!
//! ```
//! use hookedup_list::{HookedList, Hooks, Verdict};
//!
//! let hooks = Hooks::new()
//!     .pre_add(|list: &mut HookedList<i32>, _: &i32| Ok(Verdict::proceed_if(list.len() < 4)));
//!
//! let mut list = HookedList::with_hooks(hooks);
//! list.extend(0..7).unwrap();
//! assert_eq!(list, [0, 1, 2, 3]);
//!
//! list.set_slice(1..3, [10, 20]).unwrap();
//! assert_eq!(list, [0, 10, 20, 3]);
//! ```

/// Hook registry, events and verdicts.
pub mod hooks;

/// The intercepted sequence.
pub mod list;

/// Slice addressing.
pub mod slice;

/// Error types.
pub mod error;

/// Recording tools for hook traffic.
pub mod dev;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::{HookError, ListError, ListResult};
    pub use crate::hooks::{HookEvent, HookFn, Hooks, Notification, StepKind, Verdict};
    pub use crate::list::HookedList;
    pub use crate::slice::SliceSpec;
}

// Re-export key types at crate root for convenience
pub use error::{HookError, ListError, ListResult};
pub use hooks::{Hooks, Verdict};
pub use list::HookedList;
pub use slice::SliceSpec;
