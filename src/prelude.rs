//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_loom::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macro**: [`errorf!`]
//! - **Types**: [`ComposedError`], [`SimpleError`], [`WrappedError`],
//!   [`Arg`], [`Frame`]
//! - **Traits**: [`ChainError`], [`ChainFormat`], [`LegacyChainFormat`],
//!   [`GenericFormat`], [`RawFormat`]
//! - **Rendering**: [`render_error`], [`render_to_string`],
//!   [`render_detailed`], [`Detailed`], [`FormatState`], [`FormatFlags`],
//!   [`Verb`]
//!
//! # Examples
//!
//! ```
//! use error_loom::prelude::*;
//!
//! let err = errorf!("sync %s: %v", "replica-2", errorf!("timed out"));
//! assert_eq!(render_to_string(&err), "sync replica-2: timed out");
//! ```

pub use crate::errorf;

pub use crate::construct::build_error;
pub use crate::format::{
    render_detailed, render_error, render_to_string, Detailed, FormatFlags, FormatState,
    GenericState, Printer, Verb,
};
pub use crate::frame::Frame;
pub use crate::traits::{ChainError, ChainFormat, GenericFormat, LegacyChainFormat, RawFormat};
pub use crate::types::{Arg, ArgVec, ComposedError, SimpleError, WrappedError};
