//! # Hookedup Internal Library
//!
//! Re-exports the hookedup crates for convenience.

/// Intercepted sequences and their hook registry.
pub use hookedup_list;

/// Subscriber configuration for the events the list emits.
pub use hookedup_tracing;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use hookedup_list::prelude::*;
    pub use hookedup_tracing::{TracingConfig, TracingFormat};
}
