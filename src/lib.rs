//! Ordered sequences whose every mutation can be observed or vetoed.
//!

pub use hookedup_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use hookedup_internal::prelude::*;
}
