//! Chain-unaware custom formatting.

use crate::format::{GenericState, Verb};

/// Custom formatting with no chain awareness.
///
/// This is the escape hatch for error types that already format themselves
/// against a general-purpose state-and-verb surface. Once the renderer
/// dispatches here it hands over the output completely: the delegate writes
/// whatever it wants and the chain walk terminates. Flags are narrowed to
/// the detail bit before delegation, and the verb is always the default one,
/// which prevents nested quoting when the outer request was `q`, `x` or `X`.
pub trait GenericFormat {
    /// Writes this error under `verb` into `state`.
    fn format(&self, state: &mut GenericState<'_>, verb: Verb);
}
