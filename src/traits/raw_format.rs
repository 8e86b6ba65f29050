//! Raw representation capability.

use alloc::string::String;

/// Supplies an alternate, debug-oriented string.
///
/// Consulted only when the raw verb is requested, before any other
/// capability; the returned text is emitted verbatim and the chain is not
/// walked. Errors without this capability fall back to their `Debug`
/// representation under the raw verb.
pub trait RawFormat {
    /// The raw text to emit for the raw verb.
    fn raw_form(&self) -> String;
}
