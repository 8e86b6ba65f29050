//! Base trait for errors that participate in chain rendering.

use alloc::string::{String, ToString};

use crate::traits::{ChainFormat, GenericFormat, LegacyChainFormat, RawFormat};

/// An error value the chain renderer can walk.
///
/// The supertrait bound keeps every participant a regular
/// [`core::error::Error`], so chains built here still interoperate with
/// `source()`-based consumers. The renderer itself never follows `source()`;
/// it walks only through the capability probes below, which is what lets a
/// fallback-only error terminate the walk even when it exposes a source.
///
/// All probe methods default to `None`. Override exactly the ones matching
/// the protocols the type speaks; the renderer checks them in the priority
/// order [`as_raw`](Self::as_raw) → [`as_chain`](Self::as_chain) →
/// [`as_legacy_chain`](Self::as_legacy_chain) →
/// [`as_generic`](Self::as_generic) → [`error_message`](Self::error_message).
pub trait ChainError: core::error::Error {
    /// Human-readable message used when no richer capability is present.
    fn error_message(&self) -> String {
        self.to_string()
    }

    /// Raw, debug-oriented representation; consulted only for the raw verb.
    fn as_raw(&self) -> Option<&dyn RawFormat> {
        None
    }

    /// Chain-aware formatting, current protocol.
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        None
    }

    /// Chain-aware formatting, compatibility protocol.
    fn as_legacy_chain(&self) -> Option<&dyn LegacyChainFormat> {
        None
    }

    /// Chain-unaware custom formatting that fully owns the output.
    fn as_generic(&self) -> Option<&dyn GenericFormat> {
        None
    }
}
