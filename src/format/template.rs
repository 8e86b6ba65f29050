//! Printf-subset value formatter used for error message templates.

use alloc::string::String;
use core::fmt::Write as _;

use crate::format::state::{hex, quote};
use crate::types::Arg;

/// Renders `template`, substituting `%`-verbs from `args` in order.
///
/// Supported verbs: `%v` and `%s` (display text), `%d` (integers), `%q`
/// (quoted), `%x`/`%X` (hex), and `%%` (a literal percent). Mismatches
/// never fail: an exhausted argument list yields a `%!s(MISSING)` token, a
/// verb that does not apply to its argument echoes the value as
/// `%!c(<value>)`, and leftover arguments are appended as a trailing
/// `%!(EXTRA ...)` diagnostic.
///
/// ```
/// use error_loom::format::render_template;
/// use error_loom::types::Arg;
///
/// let text = render_template("slot %d holds %q", &[Arg::from(7), Arg::from("a\tb")]);
/// assert_eq!(text, "slot 7 holds \"a\\tb\"");
/// ```
pub fn render_template(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(i) = rest.find('%') {
        out.push_str(&rest[..i]);
        rest = &rest[i + 1..];
        let Some(verb) = rest.chars().next() else {
            // Trailing lone percent.
            out.push('%');
            break;
        };
        rest = &rest[verb.len_utf8()..];
        if verb == '%' {
            out.push('%');
            continue;
        }
        match args.next() {
            Some(arg) => write_arg(&mut out, arg, verb),
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }
    out.push_str(rest);

    if args.len() > 0 {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&arg.display_text());
        }
        out.push(')');
    }
    out
}

fn write_arg(out: &mut String, arg: &Arg, verb: char) {
    match verb {
        'v' | 's' => out.push_str(&arg.display_text()),
        'd' => match arg {
            Arg::Int(v) => {
                let _ = write!(out, "{v}");
            }
            Arg::Uint(v) => {
                let _ = write!(out, "{v}");
            }
            _ => bad_arg(out, verb, arg),
        },
        'q' => out.push_str(&quote(&arg.display_text())),
        'x' => match arg {
            Arg::Int(v) => {
                let _ = write!(out, "{v:x}");
            }
            Arg::Uint(v) => {
                let _ = write!(out, "{v:x}");
            }
            _ => out.push_str(&hex(&arg.display_text(), false)),
        },
        'X' => match arg {
            Arg::Int(v) => {
                let _ = write!(out, "{v:X}");
            }
            Arg::Uint(v) => {
                let _ = write!(out, "{v:X}");
            }
            _ => out.push_str(&hex(&arg.display_text(), true)),
        },
        _ => bad_arg(out, verb, arg),
    }
}

fn bad_arg(out: &mut String, verb: char, arg: &Arg) {
    let _ = write!(out, "%!{verb}({})", arg.display_text());
}
