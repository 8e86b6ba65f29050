//! The `errorf!` construction macro.

/// Builds a [`ComposedError`](crate::types::ComposedError) from a
/// printf-style template.
///
/// Each argument is converted through [`Arg::from`](crate::types::Arg);
/// when the template ends with the literal `": %s"` or `": %v"` and the
/// last argument is an error value, that argument is chained as the cause
/// and the suffix is stripped from the message. Arbitrary chain-capable
/// error types go through [`Arg::error`](crate::types::Arg::error).
///
/// # Examples
///
/// ```
/// use error_loom::errorf;
///
/// // A leaf error.
/// let leaf = errorf!("no route to %s", "10.1.2.3");
/// assert_eq!(leaf.to_string(), "no route to 10.1.2.3");
///
/// // A wrapping error; the trailing argument becomes the cause.
/// let err = errorf!("read %s: %v", "state.json", leaf);
/// assert_eq!(err.to_string(), "read state.json: no route to 10.1.2.3");
/// ```
#[macro_export]
macro_rules! errorf {
    ($template:expr $(,)?) => {
        $crate::build_error($template, $crate::types::ArgVec::new())
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {{
        let mut args = $crate::types::ArgVec::new();
        $(args.push($crate::types::Arg::from($arg));)+
        $crate::build_error($template, args)
    }};
}
