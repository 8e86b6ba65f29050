//! Restricted printer facades handed to formatting capabilities.
//!
//! Both facades are thin views over the one [`FormatState`] owned by the
//! render call; neither copies the underlying buffer. [`Printer`] is the
//! surface for the chain-aware protocols and adds [`Printer::detail`];
//! [`GenericState`] is the narrower surface for chain-unaware delegates.

use core::fmt;

use crate::format::state::FormatState;

/// The write surface handed to
/// [`ChainFormat`](crate::traits::ChainFormat) and
/// [`LegacyChainFormat`](crate::traits::LegacyChainFormat) implementations.
///
/// Writes are unconditional except inside a detail section that was not
/// requested: there the text is computed but discarded. While indentation is
/// active, newlines in written text are replaced by the detail-indent
/// marker. `write!` works directly; [`print`](Self::print) and
/// [`printf`](Self::printf) are conveniences over it.
pub struct Printer<'a> {
    state: &'a mut FormatState,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(state: &'a mut FormatState) -> Self {
        Self { state }
    }

    /// Writes one displayable value.
    pub fn print(&mut self, value: impl fmt::Display) {
        let _ = fmt::Write::write_fmt(self, format_args!("{value}"));
    }

    /// Writes preformatted arguments, `format_args!` style.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Marks the start of a detail section.
    ///
    /// Enables indentation when detail is active, and the first call while
    /// detail is active terminates the headline with `":\n"`. Returns
    /// whether detail was requested; when it returns `false`, subsequent
    /// writes are discarded, so callers can skip producing expensive detail
    /// text entirely.
    pub fn detail(&mut self) -> bool {
        let was_in_detail = self.state.in_detail;
        self.state.in_detail = true;
        self.state.indent = self.state.flags.plus;
        if self.state.flags.plus && !was_in_detail {
            self.state.write_text(":\n");
        }
        self.state.flags.plus
    }

    /// Requested minimum field width, if any.
    pub fn width(&self) -> Option<usize> {
        self.state.flags.width
    }

    /// Requested precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.state.flags.precision
    }

    /// Whether the detail flag is set.
    pub fn sign_plus(&self) -> bool {
        self.state.flags.plus
    }

    /// Whether the raw-form flag is set.
    pub fn alternate(&self) -> bool {
        self.state.flags.sharp
    }
}

impl fmt::Write for Printer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.state.write_text(s);
        Ok(())
    }
}

/// The state surface handed to
/// [`GenericFormat`](crate::traits::GenericFormat) implementations.
///
/// Same suppression and indentation behavior as [`Printer`], without the
/// detail-section control: a chain-unaware delegate owns the output but not
/// the chain bookkeeping.
pub struct GenericState<'a> {
    state: &'a mut FormatState,
}

impl<'a> GenericState<'a> {
    pub(crate) fn new(state: &'a mut FormatState) -> Self {
        Self { state }
    }

    /// Requested minimum field width, if any.
    pub fn width(&self) -> Option<usize> {
        self.state.flags.width
    }

    /// Requested precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.state.flags.precision
    }

    /// Whether the detail flag is set.
    pub fn sign_plus(&self) -> bool {
        self.state.flags.plus
    }

    /// Whether the raw-form flag is set.
    pub fn alternate(&self) -> bool {
        self.state.flags.sharp
    }
}

impl fmt::Write for GenericState<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.state.write_text(s);
        Ok(())
    }
}
