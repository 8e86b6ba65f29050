//! Verb dispatch and the chain-walking renderer.
//!
//! [`render_error`] is the single entry point: given a [`FormatState`], a
//! [`Verb`] and an error value, it dispatches on the state's flags and the
//! error's capabilities, walks the causal chain, and leaves the rendered
//! text in the state's buffer.
//!
//! The dispatch priority mirrors the value formatter's own precedence, so a
//! raw-form request is never shadowed by a detail request:
//!
//! 1. raw flag + [`RawFormat`](crate::traits::RawFormat): raw text, no walk
//! 2. detail flag: direct walk, `"\n--- "` between levels
//! 3. plain default/string verb: direct walk, `" "` between levels
//! 4. quoted/hex verbs, or default/string with width or precision: walk
//!    into a pooled intermediate buffer, then copy applying the verb
//! 5. anything else: inline invalid-verb diagnostic
//!
//! # Examples
//!
//! ```
//! use error_loom::format::{render_error, FormatState, Verb};
//! use error_loom::errorf;
//!
//! let err = errorf!("checksum mismatch");
//! let mut state = FormatState::new();
//! assert!(render_error(&mut state, Verb::Quote, &err));
//! assert_eq!(state.as_str(), "\"checksum mismatch\"");
//! ```

pub mod printer;
pub mod state;
pub mod template;

mod scratch;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::traits::ChainError;

pub use printer::{GenericState, Printer};
pub use state::{FormatFlags, FormatState, Verb, DETAIL_SEP};
pub use template::render_template;

use scratch::Scratch;

/// Upper bound on chain-walk iterations.
///
/// A chain is expected to be finite; a cycle (an error that is its own
/// eventual cause) is a caller bug. Rather than loop forever, the walk
/// stops after this many levels and appends a `%!(TRUNCATED)` token.
const MAX_CHAIN_DEPTH: usize = 256;

/// Renders `err` under `verb` into `state`.
///
/// Always returns `true`: this renderer claims every error value, including
/// ones requested with a verb that is invalid for errors (those get an
/// inline diagnostic instead of a chain walk). The return value exists so a
/// caller embedding this into a general formatter can fall back only for
/// values that are not errors at all.
///
/// Rendering never fails and never panics; see the module docs for the
/// dispatch order.
pub fn render_error(state: &mut FormatState, verb: Verb, err: &dyn ChainError) -> bool {
    // Raw form wins over every other request.
    if state.flags.sharp {
        let text = match err.as_raw() {
            Some(raw) => raw.raw_form(),
            None => format!("{err:?}"),
        };
        state.pad(&text);
        return true;
    }

    let parent = state.flags;

    if state.flags.plus {
        // Detail mode renders directly, one segment per level. Only the
        // detail bit survives into the walk; width and precision do not
        // apply per level.
        state.flags = FormatFlags {
            plus: true,
            ..FormatFlags::default()
        };
        walk_chain(state, &parent, "\n--- ", err);
        state.flags = parent;
        state.in_detail = false;
        state.indent = false;
        return true;
    }

    let plain = matches!(verb, Verb::Display | Verb::Str)
        && parent.width.is_none_or(|w| w == 0)
        && parent.precision.is_none();

    if plain {
        walk_chain(state, &parent, " ", err);
        state.in_detail = false;
        state.indent = false;
        return true;
    }

    match verb {
        Verb::Display | Verb::Str | Verb::Quote | Verb::LowerHex | Verb::UpperHex => {
            // Quoting, hex and width/precision handling need the finished
            // chain text, so the walk goes through an intermediate buffer.
            let mut scratch = Scratch::checkout();
            walk_chain(&mut scratch, &parent, " ", err);
            state.copy_with_verb(scratch.as_str(), verb);
        }
        Verb::Other(c) => state.write_bad_verb(c, err),
    }
    true
}

/// Walks the causal chain starting at `err`, writing into `w`.
///
/// `parent` carries the flags of the enclosing render call; `w`'s own flags
/// may be narrowed (detail mode) or zeroed (intermediate buffer).
fn walk_chain(w: &mut FormatState, parent: &FormatFlags, sep: &str, mut err: &dyn ChainError) {
    for depth in 0.. {
        w.in_detail = false;

        let next = if let Some(chain) = err.as_chain() {
            chain.format(&mut Printer::new(w))
        } else if let Some(legacy) = err.as_legacy_chain() {
            legacy.format_error(&mut Printer::new(w))
        } else if let Some(generic) = err.as_generic() {
            // The delegate owns the output from here on: narrow the flags
            // to the detail bit, force the default verb (no nested
            // quoting), and ask for newline indentation when detail is
            // active.
            w.flags = FormatFlags {
                plus: parent.plus,
                ..FormatFlags::default()
            };
            w.indent = parent.plus;
            generic.format(&mut GenericState::new(w), Verb::Display);
            return;
        } else {
            let msg = err.error_message();
            w.pad(&msg);
            return;
        };

        let Some(next) = next else { return };

        // Separator bookkeeping between levels: a colon unless we are
        // still inside an unterminated detail section in detail mode,
        // then the inter-level separator with any dangling detail indent
        // trimmed first.
        if !w.in_detail || !parent.plus {
            w.buf.push(':');
        }
        if w.buf.ends_with(DETAIL_SEP) {
            let trimmed = w.buf.len() - DETAIL_SEP.len();
            w.buf.truncate(trimmed);
        }
        w.buf.push_str(sep);
        w.in_detail = false;

        if depth + 1 == MAX_CHAIN_DEPTH {
            w.buf.push_str("%!(TRUNCATED)");
            return;
        }
        err = next;
    }
}

/// Renders `err` under the default verb into a fresh string.
///
/// ```
/// use error_loom::{errorf, render_to_string};
///
/// let err = errorf!("lease expired");
/// assert_eq!(render_to_string(&err), "lease expired");
/// ```
pub fn render_to_string(err: &dyn ChainError) -> String {
    let mut state = FormatState::new();
    render_error(&mut state, Verb::Display, err);
    state.into_string()
}

/// Renders `err` in detail mode into a fresh string.
pub fn render_detailed(err: &dyn ChainError) -> String {
    let mut state = FormatState::with_flags(FormatFlags {
        plus: true,
        ..FormatFlags::default()
    });
    render_error(&mut state, Verb::Display, err);
    state.into_string()
}

/// Display adapter that renders a chain in detail mode.
///
/// Useful when the error is only available as `&dyn ChainError`; concrete
/// error types reach the same output through `format!("{:+}", err)`.
///
/// ```
/// use error_loom::{errorf, Detailed};
///
/// let err = errorf!("load %s: %v", "cfg.toml", errorf!("not found"));
/// let text = format!("{}", Detailed(&err));
/// assert!(text.contains("\n--- "));
/// ```
pub struct Detailed<'a>(pub &'a dyn ChainError);

impl fmt::Display for Detailed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_detailed(self.0))
    }
}
