//! Error construction from templates and argument lists.

use alloc::boxed::Box;

use crate::format::render_template;
use crate::frame::Frame;
use crate::traits::ChainError;
use crate::types::{Arg, ArgVec, ComposedError, SimpleError, WrappedError};

/// The literal suffixes that trigger auto-chaining. Both are four bytes;
/// the constructor truncates by that length when stripping.
const CHAIN_SUFFIXES: [&str; 2] = [": %s", ": %v"];

/// Builds an error from a printf-style template and its arguments.
///
/// When `template` ends with the exact literal `": %s"` or `": %v"` and the
/// last argument is an error value, that argument becomes the cause of a
/// [`WrappedError`]; the suffix is stripped from the template before the
/// message is rendered from the remaining arguments. Otherwise the result
/// is a [`SimpleError`] leaf holding the fully rendered message.
///
/// Construction never fails: malformed templates or mismatched argument
/// lists degrade to a leaf carrying the value formatter's inline
/// diagnostics.
///
/// The suffix test is a byte-exact comparison, not a parse of the template.
/// A template that also references the trailing error argument through
/// other substitutions still chains on the suffix alone; that imprecision
/// is a known, accepted limitation of the heuristic.
///
/// Prefer the [`errorf!`](crate::errorf) macro, which packs the argument
/// list:
///
/// ```
/// use error_loom::errorf;
///
/// let inner = errorf!("connection refused");
/// let err = errorf!("dial %s: %v", "10.0.0.7:5432", inner);
///
/// assert!(err.is_wrapped());
/// assert_eq!(err.to_string(), "dial 10.0.0.7:5432: connection refused");
/// ```
#[track_caller]
pub fn build_error(template: &str, mut args: ArgVec) -> ComposedError {
    let frame = Frame::capture();
    match detect_cause(template, &mut args) {
        Some(cause) => {
            let template = &template[..template.len() - ": %s".len()];
            let msg = render_template(template, &args);
            ComposedError::Wrapped(WrappedError::with_frame(msg, cause, frame))
        }
        None => {
            let msg = render_template(template, &args);
            ComposedError::Simple(SimpleError::with_frame(msg, frame))
        }
    }
}

/// Pops and returns the trailing cause iff the template asks for one:
/// the chain suffix is present, the argument list is non-empty, and its
/// last element is an error value.
fn detect_cause(template: &str, args: &mut ArgVec) -> Option<Box<dyn ChainError>> {
    if !CHAIN_SUFFIXES.iter().any(|s| template.ends_with(s)) {
        return None;
    }
    if !matches!(args.last(), Some(Arg::Error(_))) {
        return None;
    }
    match args.pop() {
        Some(Arg::Error(cause)) => Some(cause),
        _ => None,
    }
}
