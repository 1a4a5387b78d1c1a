//! Run a cleanup action exactly once when a scope exits.
//!
//! The core type is [`ScopedAction`]: it wraps a closure and fires it when
//! the guard is dropped, whether the scope ends by normal return, an early
//! `?` return, or panic unwinding. The guard can be dismissed (the action
//! never runs) or invoked early (the action runs now, not again at drop).
//!
//! ```
//! use holdfast::ScopedAction;
//!
//! let mut released = false;
//! {
//!     let _guard = ScopedAction::new(|| released = true);
//!     // work that may bail out early
//! }
//! assert!(released);
//! ```
//!
//! The rest of the crate applies the pattern: [`read_ext::read_bin`] reads a
//! file through a [`handle_table::HandleTable`] with the release obligation
//! pinned to a guard, and [`rc_list`] holds the shared-ownership list
//! operations.

pub mod errors;
pub mod guard;
pub mod handle_table;
pub mod rc_list;
pub mod read_ext;

pub use errors::{AcquisitionError, CleanupError, ProcessingError, ReadBinError};
pub use guard::ScopedAction;
pub use handle_table::{HandleTable, RawHandle};
