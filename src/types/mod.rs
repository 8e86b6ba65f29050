//! Error variants and formatter argument types.
//!
//! [`ComposedError`] is what [`build_error`](crate::build_error) hands back:
//! a [`SimpleError`] leaf when no cause was detected, a [`WrappedError`]
//! when the template's trailing placeholder matched an error argument.
//!
//! # Examples
//!
//! ```
//! use error_loom::errorf;
//!
//! let leaf = errorf!("quota exceeded");
//! let err = errorf!("upload %s: %v", "backup.tar", leaf);
//!
//! assert_eq!(err.message(), "upload backup.tar");
//! assert!(err.cause().is_some());
//! ```
use smallvec::SmallVec;

pub mod arg;
pub mod composed_error;

pub use arg::*;
pub use composed_error::*;

/// SmallVec-backed argument list for the template formatter.
///
/// Uses inline storage for up to 4 elements so typical construction sites
/// avoid a heap allocation.
pub type ArgVec = SmallVec<[Arg; 4]>;
