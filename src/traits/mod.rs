//! Capability traits checked during chain rendering.
//!
//! The renderer never relies on a static type hierarchy; it probes each error
//! value for a small set of optional capabilities, in a fixed priority order:
//!
//! - [`RawFormat`]: alternate, debug-oriented text (raw verb only)
//! - [`ChainFormat`]: chain-aware formatting, current protocol
//! - [`LegacyChainFormat`]: chain-aware formatting, compatibility protocol
//! - [`GenericFormat`]: chain-unaware custom formatting that owns the output
//! - fallback: [`ChainError::error_message`]
//!
//! [`ChainError`] is the base trait every participating error implements; its
//! `as_*` probe methods default to `None`, so a minimal implementation is a
//! one-liner over an existing `Error` type.
//!
//! # Examples
//!
//! ```
//! use error_loom::traits::ChainError;
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! impl core::fmt::Display for Offline {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         write!(f, "device offline")
//!     }
//! }
//!
//! impl core::error::Error for Offline {}
//! impl ChainError for Offline {}
//!
//! assert_eq!(Offline.error_message(), "device offline");
//! ```

pub mod chain_error;
pub mod chain_format;
pub mod generic_format;
pub mod raw_format;

pub use chain_error::ChainError;
pub use chain_format::{ChainFormat, LegacyChainFormat};
pub use generic_format::GenericFormat;
pub use raw_format::RawFormat;
