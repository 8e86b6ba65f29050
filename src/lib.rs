//! Chain-aware error construction and formatting.
//!
//! error-loom builds errors from printf-style templates, automatically
//! chaining a trailing cause, and renders the resulting causal chain under a
//! small set of verbs: default, detail (one segment per level), raw, quoted
//! and hex.
//!
//! # Examples
//!
//! ## Building and Rendering a Chain
//!
//! ```
//! use error_loom::errorf;
//!
//! let cause = errorf!("permission denied");
//! let err = errorf!("open %s: %v", "/etc/passwd", cause);
//!
//! // Default verb: one line, levels joined by ": ".
//! assert_eq!(err.to_string(), "open /etc/passwd: permission denied");
//!
//! // Detail verb: one segment per level, each with its capture site.
//! let detail = format!("{:+}", err);
//! assert!(detail.contains("\n--- "));
//! ```
//!
//! ## Custom Chain-Aware Errors
//!
//! Any type can participate in chain rendering by implementing
//! [`ChainError`](traits::ChainError) and overriding the capability probe
//! for the protocol it speaks:
//!
//! ```
//! use core::fmt;
//! use error_loom::traits::{ChainError, ChainFormat};
//! use error_loom::format::Printer;
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "deadline exceeded")
//!     }
//! }
//!
//! impl core::error::Error for Timeout {}
//!
//! impl ChainError for Timeout {
//!     fn as_chain(&self) -> Option<&dyn ChainFormat> {
//!         Some(self)
//!     }
//! }
//!
//! impl ChainFormat for Timeout {
//!     fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
//!         p.print("deadline exceeded");
//!         None
//!     }
//! }
//!
//! let err = error_loom::render_to_string(&Timeout);
//! assert_eq!(err, "deadline exceeded");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error construction from templates and argument lists
pub mod construct;
/// Verb dispatch, chain walking and the printer facades
pub mod format;
/// Call-site capture attached to constructed errors
pub mod frame;
/// The `errorf!` construction macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits checked during chain rendering
pub mod traits;
/// Error variants and formatter argument types
pub mod types;

// Re-export the common surface at the root; focused imports can still go
// through the individual modules.
pub use construct::build_error;
pub use format::{
    render_detailed, render_error, render_to_string, Detailed, FormatFlags, FormatState,
    GenericState, Printer, Verb,
};
pub use frame::Frame;
pub use traits::{ChainError, ChainFormat, GenericFormat, LegacyChainFormat, RawFormat};
pub use types::{Arg, ArgVec, ComposedError, SimpleError, WrappedError};
