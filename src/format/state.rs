//! Render state: verbs, flags, and the owned output buffer.

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::ChainError;

/// The detail-indent marker: continuation lines inside a detail section are
/// indented by replacing each newline with this sequence.
pub const DETAIL_SEP: &str = "\n    ";

/// A requested rendering mode.
///
/// Mirrors the single-character verbs of the value formatter; anything
/// outside the supported set travels as [`Verb::Other`] and produces an
/// inline diagnostic when applied to an error value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `v`: default human-readable form.
    Display,
    /// `s`: plain string form.
    Str,
    /// `q`: double-quoted, escaped string form.
    Quote,
    /// `x`: lowercase hex of the UTF-8 bytes.
    LowerHex,
    /// `X`: uppercase hex of the UTF-8 bytes.
    UpperHex,
    /// Any other verb character; invalid for error values.
    Other(char),
}

impl Verb {
    /// Maps a verb character to its mode.
    pub fn from_char(c: char) -> Self {
        match c {
            'v' => Self::Display,
            's' => Self::Str,
            'q' => Self::Quote,
            'x' => Self::LowerHex,
            'X' => Self::UpperHex,
            other => Self::Other(other),
        }
    }

    /// The verb character this mode was requested as.
    pub fn as_char(self) -> char {
        match self {
            Self::Display => 'v',
            Self::Str => 's',
            Self::Quote => 'q',
            Self::LowerHex => 'x',
            Self::UpperHex => 'X',
            Self::Other(c) => c,
        }
    }
}

/// Flag bits and sizing requests, fixed for one top-level render call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags {
    /// Detail request (`+`): walk the chain one segment per level.
    pub plus: bool,
    /// Raw-form request (`#`): emit the alternate representation.
    pub sharp: bool,
    /// Minimum field width, in characters.
    pub width: Option<usize>,
    /// Maximum input length, in characters.
    pub precision: Option<usize>,
}

impl FormatFlags {
    /// Lifts the relevant flag bits out of a `core::fmt::Formatter`, so
    /// `{:+}`, `{:#}`, width and precision requests reach the renderer.
    pub fn from_formatter(f: &core::fmt::Formatter<'_>) -> Self {
        Self {
            plus: f.sign_plus(),
            sharp: f.alternate(),
            width: f.width(),
            precision: f.precision(),
        }
    }
}

/// The state threaded through one top-level render call: the output buffer,
/// the fixed flags, and the transient detail bits.
///
/// `in_detail` and `indent` are reset at the start of every chain-walk
/// iteration; everything else stays put for the duration of the call.
#[derive(Debug, Default)]
pub struct FormatState {
    pub(crate) buf: String,
    pub(crate) flags: FormatFlags,
    pub(crate) in_detail: bool,
    pub(crate) indent: bool,
}

impl FormatState {
    /// A fresh state with default flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh state carrying `flags`.
    pub fn with_flags(flags: FormatFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// The flags this state was created with.
    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// Everything rendered so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the state, returning the rendered text.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Routed write used by the printer facades: suppressed inside an
    /// unrequested detail section, newline-indented while indentation is
    /// active.
    pub(crate) fn write_text(&mut self, s: &str) {
        if self.in_detail && !self.flags.plus {
            return;
        }
        if self.indent {
            let mut rest = s;
            while let Some(i) = rest.find('\n') {
                self.buf.push_str(&rest[..i]);
                self.buf.push_str(DETAIL_SEP);
                rest = &rest[i + 1..];
            }
            self.buf.push_str(rest);
        } else {
            self.buf.push_str(s);
        }
    }

    /// Plain string write honoring precision (truncation) then width
    /// (space padding, right-justified).
    pub(crate) fn pad(&mut self, s: &str) {
        let clipped = clip(s, self.flags.precision);
        self.pad_clipped(clipped);
    }

    fn pad_clipped(&mut self, s: &str) {
        if let Some(width) = self.flags.width {
            for _ in s.chars().count()..width {
                self.buf.push(' ');
            }
        }
        self.buf.push_str(s);
    }

    /// Copies buffered chain text into this state, applying the originally
    /// requested verb's transformation. Precision clips the input before
    /// quoting or hex encoding; width pads the transformed result.
    pub(crate) fn copy_with_verb(&mut self, text: &str, verb: Verb) {
        match verb {
            // Invalid verbs are rejected before the walk and never reach
            // the copy step; treat them as a plain copy to stay total.
            Verb::Display | Verb::Str | Verb::Other(_) => self.pad(text),
            Verb::Quote => {
                let quoted = quote(clip(text, self.flags.precision));
                self.pad_clipped(&quoted);
            }
            Verb::LowerHex => {
                let encoded = hex(clip(text, self.flags.precision), false);
                self.pad_clipped(&encoded);
            }
            Verb::UpperHex => {
                let encoded = hex(clip(text, self.flags.precision), true);
                self.pad_clipped(&encoded);
            }
        }
    }

    /// Inline diagnostic for a verb that is meaningless for error values.
    pub(crate) fn write_bad_verb(&mut self, verb: char, err: &dyn ChainError) {
        let _ = write!(self.buf, "%!{}(error={})", verb, err.error_message());
    }

    /// Full field reset; mandatory before a pooled state is reused.
    pub(crate) fn reset(&mut self) {
        self.buf.clear();
        self.flags = FormatFlags::default();
        self.in_detail = false;
        self.indent = false;
    }
}

/// Clips `s` to at most `precision` characters.
pub(crate) fn clip(s: &str, precision: Option<usize>) -> &str {
    match precision {
        Some(p) => match s.char_indices().nth(p) {
            Some((i, _)) => &s[..i],
            None => s,
        },
        None => s,
    }
}

/// Double-quoted, escaped form of `s`.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let _ = write!(out, "{s:?}");
    out
}

/// Hex encoding of the UTF-8 bytes of `s`.
pub(crate) fn hex(s: &str, upper: bool) -> String {
    let digits: &[u8; 16] = if upper {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };
    let mut out = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        out.push(digits[usize::from(byte >> 4)] as char);
        out.push(digits[usize::from(byte & 0xf)] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_is_char_aware() {
        assert_eq!(clip("héllo", Some(2)), "hé");
        assert_eq!(clip("hi", Some(10)), "hi");
        assert_eq!(clip("hi", None), "hi");
    }

    #[test]
    fn write_text_indents_embedded_newlines() {
        let mut state = FormatState::with_flags(FormatFlags {
            plus: true,
            ..FormatFlags::default()
        });
        state.indent = true;
        state.write_text("a\nb");
        assert_eq!(state.as_str(), "a\n    b");
    }

    #[test]
    fn write_text_discards_unrequested_detail() {
        let mut state = FormatState::new();
        state.in_detail = true;
        state.write_text("hidden");
        assert_eq!(state.as_str(), "");
    }
}
